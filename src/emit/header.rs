// src/emit/header.rs

use tracing::debug;

use super::{StatusCode, TableSpec, BANNER, INCLUDE_GUARD};
use crate::code::{pack_code, pad_code};
use crate::table::Row;

const CODE_TYPEDEF: &str = "\
#ifdef _ISOC99_SOURCE
#include <stdint.h>
typedef uint64_t sc_code_t;
#else
#include <limits.h>
#if (UINT_MAX >= 0xFFFFFFFFFFUL)
typedef unsigned sc_code_t;
#elif (ULONG_MAX >= 0xFFFFFFFFFFUL)
typedef unsigned long sc_code_t;
#else
typedef unsigned long long sc_code_t;
#endif
#endif
";

// Same byte layout as `code::str5_to_code`.
const PACK_MACRO: &str = "\
#define SC_STR5_TO_CODE(s)\\
\t(sc_code_t)((sc_code_t)(s)[0]\\
\t| (sc_code_t)(s)[1] << 8\\
\t| (sc_code_t)(s)[2] << 16\\
\t| (sc_code_t)(s)[3] << 24\\
\t| (sc_code_t)(s)[4] << 32)
";

/// Builds `satcat_code.h`: typedef, packing macro, prototypes and one
/// constant per status code and table row.
#[derive(Debug, Default)]
pub struct HeaderBuilder {
    prototypes: Vec<String>,
    sections: String,
    constants: usize,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&mut self, table: &[StatusCode]) -> &mut Self {
        self.prototypes
            .push("const char *sc_status_str(char code);".to_owned());
        self.sections.push_str("/* Status */\n");
        for s in table {
            self.sections
                .push_str(&format!("#define {} '{}'\n", s.macro_name(), s.code));
        }
        self.sections.push('\n');
        self.constants += table.len();
        self
    }

    pub fn table(&mut self, spec: &TableSpec, rows: &[Row]) -> &mut Self {
        self.prototypes.push(format!(
            "const char *{}(sc_code_t code);",
            spec.function_name()
        ));
        self.sections.push_str(&format!("/* {} */\n", spec.name));
        for row in rows {
            let padded = pad_code(&row.code);
            self.sections.push_str(&format!(
                "#define {} (sc_code_t){}UL\n",
                spec.macro_name(&padded),
                pack_code(&padded)
            ));
        }
        self.sections.push('\n');
        self.constants += rows.len();
        debug!(table = %spec.name, rows = rows.len(), "header section");
        self
    }

    /// Number of code constants emitted so far.
    pub fn constants(&self) -> usize {
        self.constants
    }

    pub fn finish(&self) -> String {
        let mut out = String::from(BANNER);
        out.push_str(&format!(
            "#ifndef {guard}\n#define {guard}\n\n",
            guard = INCLUDE_GUARD
        ));
        out.push_str(CODE_TYPEDEF);
        out.push('\n');
        out.push_str(PACK_MACRO);
        out.push('\n');
        out.push_str("/* Functions */\n");
        for p in &self.prototypes {
            out.push_str(p);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.sections);
        out.push_str(&format!("#endif /* {} */\n", INCLUDE_GUARD));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::STATUS_TABLE;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("AFETR", "Air Force Eastern Test Range"),
            Row::new("KYMSC", "Kapustin Yar"),
            Row::new("WSC", "Wenchang"),
        ]
    }

    fn build() -> String {
        let spec = TableSpec::new("Launch Site", "SCSITE", "launch_site");
        let mut h = HeaderBuilder::new();
        h.status(STATUS_TABLE).table(&spec, &rows());
        assert_eq!(h.constants(), 3 + 8);
        h.finish()
    }

    #[test]
    fn test_guard_balanced() {
        let text = build();
        let count = |p: &str| text.lines().filter(|l| l.starts_with(p)).count();
        assert_eq!(count("#ifndef SATCAT_CODE_H"), 1);
        assert_eq!(count("#define SATCAT_CODE_H"), 1);
        assert_eq!(count("#endif /* SATCAT_CODE_H */"), 1);
        assert!(text.starts_with("/*\n"));
        assert!(text.trim_end().ends_with("#endif /* SATCAT_CODE_H */"));
    }

    #[test]
    fn test_one_constant_per_row_and_status() {
        let text = build();
        let defines = text
            .lines()
            .filter(|l| l.starts_with("#define SCSTAT_") || l.starts_with("#define SCSITE_"))
            .count();
        assert_eq!(defines, rows().len() + STATUS_TABLE.len());
    }

    #[test]
    fn test_constant_values() {
        let text = build();
        let expected = format!("#define SCSITE_WSC   (sc_code_t){}UL", pack_code("WSC  "));
        assert!(text.lines().any(|l| l == expected), "missing {:?}", expected);
        assert!(text.contains("#define SCSTAT_UNKNOWN '?'\n"));
        assert!(text.contains("#define SCSTAT_OPERATIONAL '+'\n"));
    }

    #[test]
    fn test_prototypes_in_order() {
        let text = build();
        let status = text.find("const char *sc_status_str(char code);").unwrap();
        let site = text
            .find("const char *sc_launch_site_str(sc_code_t code);")
            .unwrap();
        let first_define = text.find("#define SCSTAT_").unwrap();
        assert!(status < site && site < first_define);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let text = build();
        let afetr = text.find("SCSITE_AFETR").unwrap();
        let kymsc = text.find("SCSITE_KYMSC").unwrap();
        let wsc = text.find("SCSITE_WSC").unwrap();
        assert!(afetr < kymsc && kymsc < wsc);
    }
}
