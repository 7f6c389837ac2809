pub mod reader;

pub use reader::{read_table, TableReader};

/// One `(code, description)` pair pulled out of a table body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub code: String,
    pub description: String,
}

impl Row {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
