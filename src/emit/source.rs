// src/emit/source.rs

use tracing::debug;

use super::{c_string_literal, StatusCode, TableSpec, BANNER, HEADER_FILE};
use crate::table::Row;

/// Builds `satcat_code.c`: one switch-based lookup function per table.
#[derive(Debug, Default)]
pub struct SourceBuilder {
    functions: String,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&mut self, table: &[StatusCode]) -> &mut Self {
        let cases = table
            .iter()
            .map(|s| (s.macro_name(), c_string_literal(s.label)));
        self.push_function("const char *sc_status_str(const char code)", cases);
        self
    }

    pub fn table(&mut self, spec: &TableSpec, rows: &[Row]) -> &mut Self {
        let signature = format!("const char *{}(const sc_code_t code)", spec.function_name());
        let cases = rows
            .iter()
            .map(|r| (spec.macro_name(&r.code), c_string_literal(&r.description)));
        self.push_function(&signature, cases);
        debug!(table = %spec.name, cases = rows.len(), "lookup function");
        self
    }

    fn push_function(&mut self, signature: &str, cases: impl Iterator<Item = (String, String)>) {
        let f = &mut self.functions;
        f.push_str(signature);
        f.push_str("\n{\n\tswitch (code) {\n");
        for (label, literal) in cases {
            f.push_str(&format!("\tcase {}:\n\t\treturn {};\n", label, literal));
        }
        f.push_str("\tdefault:\n\t\treturn NULL;\n\t}\n}\n\n");
    }

    pub fn finish(&self) -> String {
        let mut out = String::from(BANNER);
        out.push_str(&format!("#include \"{}\"\n\n#include <stddef.h>\n\n", HEADER_FILE));
        out.push_str(&self.functions);
        out
    }
}
