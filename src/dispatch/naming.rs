use crate::mapper::Variant;

/// Prefix shared by every legacy hotkey file
pub const INPUT_PREFIX: &str = "current.";

/// Category whose button file uses [`Variant::LocalButton`]
pub const LOCAL_CATEGORY: &str = "local";

/// Legacy category names that changed in the shortcuts format
const CATEGORY_RENAMES: &[(&str, &str)] = &[("paintnode", "paint_batch"), ("paint", "paint_tools")];

/// Function or button hotkeys, in the order a batch processes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HotkeyKind {
    Function,
    Button,
}

impl HotkeyKind {
    /// Filename suffix after the category token
    pub fn input_suffix(self) -> &'static str {
        match self {
            HotkeyKind::Function => ".func.hotkey.user",
            HotkeyKind::Button => ".butt.hotkey.user",
        }
    }

    pub fn output_name(self, category: &str) -> String {
        match self {
            HotkeyKind::Function => format!("user.shortcuts.{}.json", category),
            HotkeyKind::Button => format!("user.shortcuts.{}.buttons.json", category),
        }
    }

    pub fn variant(self, category: &str) -> Variant {
        match self {
            HotkeyKind::Function => Variant::Function,
            HotkeyKind::Button if category == LOCAL_CATEGORY => Variant::LocalButton,
            HotkeyKind::Button => Variant::Button,
        }
    }
}

/// A recognized legacy hotkey file and where its conversion goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyFile {
    pub kind: HotkeyKind,
    /// Category as written in the input filename
    pub token: String,
    /// Category used for the output filename and array key
    pub category: String,
    pub output_name: String,
    pub variant: Variant,
}

/// Map a legacy category token to its shortcuts category
pub fn category_name(token: &str) -> String {
    let lower = token.to_lowercase();
    CATEGORY_RENAMES
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| to.to_string())
        .unwrap_or(lower)
}

/// Recognize `current.<Category>.func.hotkey.user` and `current.<Category>.butt.hotkey.user`.
///
/// The category is the last dot-separated token before the suffix. Returns
/// `None` for any other name.
pub fn classify(file_name: &str) -> Option<HotkeyFile> {
    let rest = file_name.strip_prefix(INPUT_PREFIX)?;

    [HotkeyKind::Function, HotkeyKind::Button]
        .into_iter()
        .find_map(|kind| {
            let stem = rest.strip_suffix(kind.input_suffix())?;
            let token = stem.rsplit('.').next().filter(|t| !t.is_empty())?;
            let category = category_name(token);

            Some(HotkeyFile {
                kind,
                token: token.to_string(),
                output_name: kind.output_name(&category),
                variant: kind.variant(&category),
                category,
            })
        })
}
