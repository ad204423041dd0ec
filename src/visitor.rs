use crate::error::{ConvertError, Result};
use crate::types::{MoveList, UciLine};
use pgn_reader::{Nag, RawComment, Reader, SanPlus, Skip, Visitor};
use shakmaty::{CastlingMode, Chess, Position};
use std::io;
use std::ops::ControlFlow;

/// Mainline-only handling: comments and NAGs are ignored, variations
/// are skipped.
macro_rules! pgn_visitor_skip_variations {
    () => {
        fn nag(&mut self, _: &mut Self::Movetext, _: Nag) -> ControlFlow<Self::Output> {
            ControlFlow::Continue(())
        }

        fn comment(
            &mut self,
            _: &mut Self::Movetext,
            _: RawComment<'_>,
        ) -> ControlFlow<Self::Output> {
            ControlFlow::Continue(())
        }

        fn partial_comment(
            &mut self,
            _: &mut Self::Movetext,
            _: RawComment<'_>,
        ) -> ControlFlow<Self::Output> {
            ControlFlow::Continue(())
        }

        fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
            ControlFlow::Continue(Skip(true))
        }
    };
}

/// Streaming PGN visitor (pgn-reader) that replays the mainline from the
/// standard start position and collects every move in UCI notation.
///
/// Stops at the first SAN that is not legal in the current position.
pub struct UciVisitor {
    pos: Chess,
}

impl UciVisitor {
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
        }
    }
}

impl Default for UciVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for UciVisitor {
    type Tags = ();
    type Movetext = MoveList;
    type Output = Result<UciLine>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.pos = Chess::default();
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(MoveList::new())
    }

    fn san(
        &mut self,
        moves: &mut Self::Movetext,
        san_plus: SanPlus,
    ) -> ControlFlow<Self::Output> {
        match san_plus.san.to_move(&self.pos) {
            Ok(m) => {
                moves.push(m.to_uci(CastlingMode::Standard));
                self.pos.play_unchecked(m);
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(Err(ConvertError::IllegalMove {
                ply: moves.len() + 1,
                san: san_plus.to_string(),
                reason: err.to_string(),
            })),
        }
    }

    pgn_visitor_skip_variations!();

    fn end_game(&mut self, moves: Self::Movetext) -> Self::Output {
        Ok(UciLine { moves })
    }
}

/// Parses one game's movetext and returns its moves in UCI notation.
///
/// Move numbers, result markers, comments and NAGs are accepted; variations
/// are ignored. Empty movetext converts to an empty line.
pub fn convert_movetext(movetext: &str) -> Result<UciLine> {
    if movetext.trim().is_empty() {
        return Ok(UciLine::default());
    }

    let mut reader = Reader::new(io::Cursor::new(movetext.as_bytes()));
    let mut visitor = UciVisitor::new();

    match reader.read_game(&mut visitor) {
        Ok(Some(line)) => line,
        Ok(None) => Ok(UciLine::default()),
        Err(err) => Err(ConvertError::MalformedMovetext(err.to_string())),
    }
}
