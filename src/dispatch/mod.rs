mod batch;
mod naming;


pub use batch::{
    convert_directory, convert_directory_with, convert_file, convert_text, discover, BatchReport,
    Conversion, FileFailure,
};
pub use naming::{category_name, classify, HotkeyFile, HotkeyKind, INPUT_PREFIX, LOCAL_CATEGORY};
