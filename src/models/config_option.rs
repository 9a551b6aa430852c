use serde::Serialize;

/// One row of the `config` table. Values are plain text and parsed by the
/// consumer (numbers for targets, patterns for display formats).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigOption {
    pub option: String,
    pub value: String,
}

impl ConfigOption {
    pub fn new(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            value: value.into(),
        }
    }
}
