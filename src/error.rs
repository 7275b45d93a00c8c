use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Unterminated hotkey block starting at line {line}")]
    UnterminatedBlock { line: usize },

    #[error("Malformed line {line} in hotkey block: {text:?}")]
    MalformedLine { line: usize, text: String },
}
