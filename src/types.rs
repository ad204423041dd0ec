use serde::Serialize;
use shakmaty::uci::UciMove;
use smallvec::SmallVec;
use std::fmt;

pub type MoveList = SmallVec<[UciMove; 128]>;

/// Movetext of one game, as accumulated by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBlock {
    /// 1-based position of the game within its source.
    pub index: usize,
    pub movetext: String,
}

impl GameBlock {
    pub fn new(index: usize, first_line: &str) -> Self {
        let mut movetext = String::with_capacity(256);
        movetext.push(' ');
        movetext.push_str(first_line);
        Self { index, movetext }
    }

    pub fn push_line(&mut self, line: &str) {
        self.movetext.push(' ');
        self.movetext.push_str(line);
    }
}

/// One output record: the UCI moves of a game.
///
/// `Display` renders the moves separated by single spaces, without the
/// trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciLine {
    pub moves: MoveList,
}

impl UciLine {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.moves.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for UciLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.moves {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// A game that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFailure {
    pub source: String,
    pub game_index: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub games_found: usize,
    pub games_converted: usize,
    pub failures: Vec<GameFailure>,
}
