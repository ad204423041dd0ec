use crate::types::GameBlock;

const FIRST_MOVE_MARKER: &str = "1. ";
const SECOND_MOVE_MARKER: &str = " 2. ";

/// Heuristic start-of-game detector: moves 1 and 2 on the same line.
///
/// Games wrapped so that move 2 lands on a later line are not detected and
/// merge into the preceding block.
pub fn is_game_start(line: &str) -> bool {
    line.contains(FIRST_MOVE_MARKER) && line.contains(SECOND_MOVE_MARKER)
}

/// Line-driven accumulator that cuts a stream of movetext lines into
/// [`GameBlock`]s.
#[derive(Debug, Default)]
pub struct BlockSplitter {
    current: Option<GameBlock>,
    started: usize,
    orphan_lines: usize,
}

impl BlockSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one filtered line. Returns the previous block when `line`
    /// opens a new game.
    pub fn push_line(&mut self, line: &str) -> Option<GameBlock> {
        if is_game_start(line) {
            self.started += 1;
            return self.current.replace(GameBlock::new(self.started, line));
        }

        match &mut self.current {
            Some(block) => block.push_line(line),
            None => {
                if !line.is_empty() {
                    self.orphan_lines += 1;
                }
            }
        }
        None
    }

    /// Closes the block still open at end of input, if any.
    pub fn finish(mut self) -> Option<GameBlock> {
        if self.orphan_lines > 0 {
            log::debug!(
                "Discarded {} non-empty line(s) preceding the first game",
                self.orphan_lines
            );
        }
        self.current.take()
    }
}

/// Splits filtered movetext lines into one block per game.
pub fn split_games<'a, I>(lines: I) -> Vec<GameBlock>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut splitter = BlockSplitter::new();
    let mut blocks = Vec::new();

    for line in lines {
        if let Some(block) = splitter.push_line(line) {
            blocks.push(block);
        }
    }
    blocks.extend(splitter.finish());
    blocks
}
