// src/code.rs

/// Width in bytes of a catalog code once padded.
pub const CODE_LEN: usize = 5;

/// Pack five bytes into the low 40 bits of a `u64`, first byte least significant.
///
/// Mirrors the `SC_STR5_TO_CODE` macro emitted into the generated header.
pub fn str5_to_code(s: &[u8; CODE_LEN]) -> u64 {
    s.iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

/// Right-pad `code` with spaces to at least `CODE_LEN` characters.
///
/// Longer codes come back unchanged.
pub fn pad_code(code: &str) -> String {
    format!("{:<width$}", code, width = CODE_LEN)
}

/// Pad `code` and pack its first five bytes.
pub fn pack_code(code: &str) -> u64 {
    let padded = pad_code(code);
    let mut buf = [b' '; CODE_LEN];
    buf.copy_from_slice(&padded.as_bytes()[..CODE_LEN]);
    str5_to_code(&buf)
}
