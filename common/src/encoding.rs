//! Textual encoding of embedded payloads.

use std::{fmt, str::FromStr};

/// Describes how (possibly compressed) file bytes are stored inside the
/// generated source. Chosen once per generation run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Encoding {
    /// Every byte rendered as `\xNN` inside a byte string literal. The
    /// compiler turns the literal back into raw bytes, so no decoding is
    /// needed at runtime, but the source is ~4x larger than the payload.
    Escaped,
    /// Standard base64 alphabet with padding and no line wrapping, stored in
    /// a string literal. ~33% overhead, decoded on every call.
    #[default]
    Base64,
}
impl Encoding {
    /// All available encodings.
    pub const ALL: [Encoding; 2] = [Encoding::Escaped, Encoding::Base64];

    /// Stable lowercase name, as accepted by [FromStr].
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Escaped => "escaped",
            Encoding::Base64 => "base64",
        }
    }
}
impl fmt::Display for Encoding {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing unknown encoding name.
#[derive(PartialEq, Eq, Debug)]
pub struct EncodingParseError(pub String);
impl fmt::Display for EncodingParseError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "unknown encoding {:?}, expected one of: escaped, base64",
            self.0
        )
    }
}
impl std::error::Error for EncodingParseError {}

impl FromStr for Encoding {
    type Err = EncodingParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|encoding| encoding.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| EncodingParseError(value.to_owned()))
    }
}
