/// Ordered fields converted from one hotkey block
///
/// Values are kept exactly as read; sentinel rewriting happens on emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub(crate) fn from_fields(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    /// Raw value of a canonical field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Fields in output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
