// Public API exports
pub mod config;
pub mod dispatch;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod mapper;

// Re-export main types for convenience
pub use config::{ConvertOptions, FailurePolicy};
pub use error::ConvertError;

pub use extractor::{extract_blocks, extract_blocks_strict, Block, Blocks};

pub use mapper::{parse_block, parse_block_with_mode, ParseMode, Record, Schema, Variant};

pub use emitter::{render_document, shortcut_value, write_document, Document, VERSION};

pub use dispatch::{
    category_name, classify, convert_directory, convert_directory_with, convert_file, convert_text,
    discover, BatchReport, Conversion, FileFailure, HotkeyFile, HotkeyKind,
};
