use shakmaty::{Color, Piece, Position, Role, Square, attacks};
use std::collections::BTreeMap;
use std::fmt;

/// A piece attacking some square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attacker {
    pub color: Color,
    pub role: Role,
    pub origin: Square,
    /// Number of squares this piece attacks in the position.
    pub mobility: usize,
}

impl Attacker {
    pub fn piece(&self) -> Piece {
        Piece {
            color: self.color,
            role: self.role,
        }
    }
}

impl fmt::Display for Attacker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", self.piece().char(), self.origin, self.mobility)
    }
}

pub type InfluenceMap = BTreeMap<Square, Vec<Attacker>>;

/// Maps every attacked square to the pieces of either color attacking it.
///
/// Attack sets use the current occupancy, so sliders stop at the first
/// piece in each direction and squares holding friendly pieces count as
/// attacked (defended). Unattacked squares are absent.
pub fn square_influence<P: Position>(pos: &P) -> InfluenceMap {
    let board = pos.board();
    let occupied = board.occupied();
    let mut map = InfluenceMap::new();

    for origin in occupied {
        let Some(piece) = board.piece_at(origin) else {
            continue;
        };
        let targets = attacks::attacks(origin, piece, occupied);
        let attacker = Attacker {
            color: piece.color,
            role: piece.role,
            origin,
            mobility: targets.count(),
        };

        for target in targets {
            map.entry(target).or_default().push(attacker);
        }
    }

    map
}

/// Number of attackers of `color` on `square`.
pub fn attacker_count(map: &InfluenceMap, square: Square, color: Color) -> usize {
    map.get(&square)
        .map(|attackers| attackers.iter().filter(|a| a.color == color).count())
        .unwrap_or(0)
}
