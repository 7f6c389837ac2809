// src/emit/mod.rs

pub mod header;
pub mod source;
pub mod status;

pub use header::HeaderBuilder;
pub use source::SourceBuilder;
pub use status::{StatusCode, STATUS_TABLE};

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

use crate::table::Row;

pub const HEADER_FILE: &str = "satcat_code.h";
pub const SOURCE_FILE: &str = "satcat_code.c";
pub const INCLUDE_GUARD: &str = "SATCAT_CODE_H";

pub(crate) const BANNER: &str = concat!(
    "/*\n",
    " * Generated by satcat-codegen from the CelesTrak SATCAT reference tables.\n",
    " * Do not edit by hand; rerun the generator instead.\n",
    " **/\n",
    "\n",
);

static IDENT_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+ *$").expect("identifier regex should compile"));

/// How one fetched table is named in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Section comment in the header, e.g. `Launch Site`.
    pub name: String,
    /// Macro prefix, e.g. `SCSITE`.
    pub prefix: String,
    /// Lookup function infix, e.g. `launch_site` for `sc_launch_site_str`.
    pub fname: String,
}

impl TableSpec {
    pub fn new(name: &str, prefix: &str, fname: &str) -> Self {
        Self {
            name: name.to_owned(),
            prefix: prefix.to_owned(),
            fname: fname.to_owned(),
        }
    }

    pub fn function_name(&self) -> String {
        format!("sc_{}_str", self.fname)
    }

    pub fn macro_name(&self, code: &str) -> String {
        format!("{}_{}", self.prefix, code)
    }
}

/// The generated header and source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub source: String,
}

/// Quote `s` as a C string literal.
pub fn c_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Warn about rows that will not compile cleanly. Nothing is dropped.
pub fn check_rows(spec: &TableSpec, rows: &[Row]) -> usize {
    let mut seen = HashSet::new();
    let mut problems = 0;
    for row in rows {
        if !IDENT_FRAGMENT.is_match(&row.code) {
            warn!(table = %spec.name, code = %row.code, "code is not a valid C identifier fragment");
            problems += 1;
        }
        if !seen.insert(crate::code::pad_code(&row.code)) {
            warn!(table = %spec.name, code = %row.code, "duplicate code, case label will repeat");
            problems += 1;
        }
    }
    problems
}
