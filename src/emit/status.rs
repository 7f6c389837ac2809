/// One operational-status code as it appears in column 22 of a SATCAT record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode {
    pub name: &'static str,
    pub code: char,
    pub label: &'static str,
}

/// Status codes are not published as a table, so they are fixed here.
pub static STATUS_TABLE: &[StatusCode] = &[
    StatusCode { name: "OPERATIONAL", code: '+', label: "Operational" },
    StatusCode { name: "NONOPERATIONAL", code: '-', label: "Nonoperational" },
    StatusCode { name: "PARTIALLY_OPERATIONAL", code: 'P', label: "Partially Operational" },
    StatusCode { name: "BACKUP", code: 'B', label: "Backup/Standby" },
    StatusCode { name: "SPARE", code: 'S', label: "Spare" },
    StatusCode { name: "EXTENDED_MISSION", code: 'X', label: "Extended Mission" },
    StatusCode { name: "DECAYED", code: 'D', label: "Decayed" },
    StatusCode { name: "UNKNOWN", code: '?', label: "Unknown" },
];

pub const STATUS_PREFIX: &str = "SCSTAT";

impl StatusCode {
    pub fn macro_name(&self) -> String {
        format!("{}_{}", STATUS_PREFIX, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_status_table_is_unique() {
        assert_eq!(STATUS_TABLE.len(), 8);
        let codes: HashSet<char> = STATUS_TABLE.iter().map(|s| s.code).collect();
        let names: HashSet<&str> = STATUS_TABLE.iter().map(|s| s.name).collect();
        assert_eq!(codes.len(), STATUS_TABLE.len());
        assert_eq!(names.len(), STATUS_TABLE.len());
    }

    #[test]
    fn test_macro_name() {
        assert_eq!(STATUS_TABLE[2].macro_name(), "SCSTAT_PARTIALLY_OPERATIONAL");
    }
}
