use crate::error::ConvertError;
use regex::Regex;
use std::sync::LazyLock;


/// Marker closing a hotkey block
pub const END_MARKER: &str = "EndHotKeyOne";

/// `HotKeyOne StartHotKeyOne`, with any amount of whitespace (or none) between the words.
static START_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HotKeyOne\s*StartHotKeyOne").expect("start marker pattern"));

/// Raw text of one delimited hotkey block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text strictly between the start and end markers
    pub text: &'a str,
    /// 1-based line of the start marker in the source text
    pub line: usize,
}

/// Lazy iterator over the blocks of a hotkey file
pub struct Blocks<'a> {
    text: &'a str,
    pos: usize,
    /// Line number at byte offset `counted`
    line: usize,
    counted: usize,
    unterminated: Option<usize>,
}

impl<'a> Blocks<'a> {
    /// Line of a start marker that had no matching end marker, once iteration reached it
    pub fn unterminated_line(&self) -> Option<usize> {
        self.unterminated
    }

    /// Advance the running line count to `offset`, which never moves backwards
    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.text[self.counted..offset].matches('\n').count();
        self.counted = offset;
        self.line
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = START_MARKER.find_at(self.text, self.pos)?;
        let line = self.line_at(start.start());
        let body = &self.text[start.end()..];

        match body.find(END_MARKER) {
            Some(len) => {
                self.pos = start.end() + len + END_MARKER.len();
                Some(Block {
                    text: &body[..len],
                    line,
                })
            }
            None => {
                // No end marker anywhere after this start, so nothing later can close either
                self.unterminated = Some(line);
                self.pos = self.text.len();
                None
            }
        }
    }
}

/// Yield every block in `text`.
///
/// A start marker without an end marker yields nothing; text without markers
/// yields an empty sequence.
pub fn extract_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        text,
        pos: 0,
        line: 1,
        counted: 0,
        unterminated: None,
    }
}

/// Like [`extract_blocks`], but an unterminated start marker is an error
pub fn extract_blocks_strict(text: &str) -> Result<Vec<Block<'_>>, ConvertError> {
    let mut blocks = extract_blocks(text);
    let collected: Vec<Block<'_>> = blocks.by_ref().collect();

    match blocks.unterminated_line() {
        Some(line) => Err(ConvertError::UnterminatedBlock { line }),
        None => Ok(collected),
    }
}
