/// Field layout of one family of legacy hotkey files
#[derive(Debug)]
pub struct Schema {
    /// Legacy field name -> canonical field name
    pub mapping: &'static [(&'static str, &'static str)],
    /// Canonical field names in output order
    pub order: &'static [&'static str],
}

/// Which schema a hotkey file follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `*.func.hotkey.user` files
    Function,
    /// `*.butt.hotkey.user` files
    Button,
    /// The `Local` button file, which also carries value stepping fields
    LocalButton,
}

static FUNCTION: Schema = Schema {
    mapping: &[
        ("Description", "Description"),
        ("Category", "Category"),
        ("FuncIndex", "FunctionName"),
        ("Key1", "Key1"),
        ("Key2", "Key2"),
        ("Key3", "Key3"),
        ("Key4", "Key4"),
    ],
    order: &[
        "Description",
        "Category",
        "FunctionName",
        "Key1",
        "Key2",
        "Key3",
        "Key4",
    ],
};

static BUTTON: Schema = Schema {
    mapping: &[
        ("Description", "Description"),
        ("Category", "Category"),
        ("ItemIndex", "ButtonName"),
        ("ItemFuncParam", "ItemFuncParam"),
        ("Key1", "Key1"),
        ("Key2", "Key2"),
        ("Key3", "Key3"),
        ("Key4", "Key4"),
    ],
    order: &[
        "Description",
        "Category",
        "ButtonName",
        "ItemFuncParam",
        "Key1",
        "Key2",
        "Key3",
        "Key4",
    ],
};

static LOCAL_BUTTON: Schema = Schema {
    mapping: &[
        ("Description", "Description"),
        ("Category", "Category"),
        ("ItemIndex", "ButtonName"),
        ("ValueType", "ValueType"),
        ("ValueIncrement", "ValueIncrement"),
        ("ItemFuncParam", "ItemFuncParam"),
        ("Key1", "Key1"),
        ("Key2", "Key2"),
        ("Key3", "Key3"),
        ("Key4", "Key4"),
    ],
    order: &[
        "Description",
        "Category",
        "ButtonName",
        "ValueType",
        "ValueIncrement",
        "ItemFuncParam",
        "Key1",
        "Key2",
        "Key3",
        "Key4",
    ],
};

impl Variant {
    pub fn schema(self) -> &'static Schema {
        match self {
            Variant::Function => &FUNCTION,
            Variant::Button => &BUTTON,
            Variant::LocalButton => &LOCAL_BUTTON,
        }
    }

    /// Canonical name for a legacy field, if this variant keeps it
    pub fn canonical_name(self, legacy: &str) -> Option<&'static str> {
        self.schema()
            .mapping
            .iter()
            .find(|(from, _)| *from == legacy)
            .map(|(_, to)| *to)
    }

    pub fn field_order(self) -> &'static [&'static str] {
        self.schema().order
    }
}
