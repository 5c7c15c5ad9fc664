use thiserror::Error;

/// Highest codepoint addressable by a single UTF-16 code unit.
pub const BMP_MAX: u32 = 0xFFFF;

/// A validated Unicode scalar value parsed from catalog hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(char);

impl Codepoint {
    /// Parses bare hex digits (`f0001`, `F01C9`). Prefixes, signs, whitespace
    /// and separators are rejected, as are surrogates and values past U+10FFFF.
    pub fn parse_hex(raw: &str) -> Result<Self, CodepointError> {
        if raw.is_empty() {
            return Err(CodepointError::invalid(raw, "empty codepoint"));
        }
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodepointError::invalid(raw, "expected bare hex digits"));
        }
        let value = u32::from_str_radix(raw, 16)
            .map_err(|_| CodepointError::invalid(raw, "value does not fit in 32 bits"))?;
        let scalar = char::from_u32(value)
            .ok_or_else(|| CodepointError::invalid(raw, "not a Unicode scalar value"))?;
        Ok(Self(scalar))
    }

    pub fn value(self) -> u32 {
        self.0 as u32
    }

    pub fn is_bmp(self) -> bool {
        self.value() <= BMP_MAX
    }

    /// UTF-8 bytes rendered as the body of a double-quoted C string literal.
    pub fn c_literal(self) -> String {
        let mut buf = [0u8; 4];
        escape_c_bytes(self.0.encode_utf8(&mut buf).as_bytes())
    }
}

/// Errors raised for catalog codepoints that cannot be emitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid codepoint {raw:?}: {reason}")]
pub struct CodepointError {
    pub raw: String,
    pub reason: &'static str,
}

impl CodepointError {
    fn invalid(raw: &str, reason: &'static str) -> Self {
        Self {
            raw: raw.to_string(),
            reason,
        }
    }
}

/// `account-outline` -> `ACCOUNT_OUTLINE`.
pub fn constant_identifier(name: &str) -> String {
    name.replace('-', "_").to_uppercase()
}

/// Escapes raw bytes so they can sit between double quotes in C source.
fn escape_c_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out
}

/// Formats a bound the way the header expects (`0x` + at least four lowercase digits).
pub fn hex_bound(value: u32) -> String {
    format!("0x{value:04x}")
}
