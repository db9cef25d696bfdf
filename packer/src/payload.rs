//! Payload helpers. Contains [build_from_path] and [encode] functions turning
//! file content into a [Payload], a literal ready to be embedded in generated
//! source.
//!
//! [encode] is the inverse of `embedgen::decode`, called by generated code at
//! runtime.

use crate::common::encoding::Encoding;
use anyhow::{Context, Error, anyhow, ensure};
use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{Compression, write::DeflateEncoder};
use std::{borrow::Cow, fmt, fs, io::Write, path::Path, str::FromStr};

/// DEFLATE compression level.
///
/// Parsed from `default` (or `-1`), `none`, `fastest`, `best` or a single
/// digit `0` (no compression) to `9` (best compression).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum CompressionLevel {
    /// Balanced speed and ratio, currently equal to level 6.
    #[default]
    Default,
    /// Store only, equal to level 0.
    None,
    /// Fastest compression, equal to level 1.
    Fastest,
    /// Best compression, equal to level 9.
    Best,
    /// Explicit level, `0..=9`.
    Level(u32),
}
impl CompressionLevel {
    /// Highest accepted explicit level.
    pub const LEVEL_MAX: u32 = 9;

    /// Converts into [flate2] representation. Fails for explicit level above
    /// [Self::LEVEL_MAX].
    pub fn to_compression(self) -> Result<Compression, Error> {
        let compression = match self {
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::None => Compression::none(),
            CompressionLevel::Fastest => Compression::fast(),
            CompressionLevel::Best => Compression::best(),
            CompressionLevel::Level(level) => {
                ensure!(
                    level <= Self::LEVEL_MAX,
                    "compression level {} out of range 0..={}",
                    level,
                    Self::LEVEL_MAX
                );
                Compression::new(level)
            }
        };
        Ok(compression)
    }
}
impl FromStr for CompressionLevel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = match value {
            "default" | "-1" => CompressionLevel::Default,
            "none" => CompressionLevel::None,
            "fastest" => CompressionLevel::Fastest,
            "best" => CompressionLevel::Best,
            value => {
                let level = value.parse::<u32>().map_err(|_| {
                    anyhow!(
                        "invalid compression level {:?}, expected default, none, fastest, best or 0..={}",
                        value,
                        Self::LEVEL_MAX
                    )
                })?;
                ensure!(
                    level <= Self::LEVEL_MAX,
                    "compression level {} out of range 0..={}",
                    level,
                    Self::LEVEL_MAX
                );
                CompressionLevel::Level(level)
            }
        };
        Ok(level)
    }
}
impl fmt::Display for CompressionLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CompressionLevel::Default => f.write_str("default"),
            CompressionLevel::None => f.write_str("none"),
            CompressionLevel::Fastest => f.write_str("fastest"),
            CompressionLevel::Best => f.write_str("best"),
            CompressionLevel::Level(level) => write!(f, "{level}"),
        }
    }
}

/// Options for [encode] and [build_from_path]. Shared by all inputs of a
/// single run.
///
/// If not sure what to set here, use [Default] (compressed with default level,
/// base64 encoded).
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Deflate content with given level before encoding, `None` stores content
    /// as is.
    pub compression: Option<CompressionLevel>,
    /// Textual form of the literal.
    pub encoding: Encoding,
}
impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compression: Some(CompressionLevel::Default),
            encoding: Encoding::default(),
        }
    }
}

/// Encoded file content, as embedded into generated function.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Payload {
    /// Textual form used for [Self::literal].
    pub encoding: Encoding,
    /// Whether content was deflated before encoding.
    pub compressed: bool,
    /// Complete Rust literal source, eg. `b"\x1f\x8b"` for [Encoding::Escaped]
    /// or `"H4s="` for [Encoding::Base64].
    pub literal: String,
}

/// Creates a [Payload] by reading file from fs, specified by `path`, and
/// passing its content to [encode].
///
/// Read errors carry `path` as context.
pub fn build_from_path(
    path: &Path,
    options: &EncodeOptions,
) -> Result<Payload, Error> {
    let content = fs::read(path).with_context(|| path.to_string_lossy().into_owned())?;

    let payload = encode(&content, options).with_context(|| path.to_string_lossy().into_owned())?;

    Ok(payload)
}

/// Creates a [Payload] from raw `content`.
///
/// Content is deflated (if [EncodeOptions::compression] is set), then written
/// as literal according to [EncodeOptions::encoding].
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use embedgen_packer::{
/// #     common::encoding::Encoding,
/// #     payload::{encode, EncodeOptions},
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let payload = encode(
///     b"\x00\xffA",
///     &EncodeOptions {
///         compression: None,
///         encoding: Encoding::Escaped,
///     },
/// )?;
/// assert_eq!(payload.literal, r#"b"\x00\xff\x41""#);
///
/// let payload = encode(
///     b"\x00\xffA",
///     &EncodeOptions {
///         compression: None,
///         encoding: Encoding::Base64,
///     },
/// )?;
/// assert_eq!(payload.literal, r#""AP9B""#);
/// #
/// # Ok(())
/// # }
/// ```
pub fn encode(
    content: &[u8],
    options: &EncodeOptions,
) -> Result<Payload, Error> {
    let data = match options.compression {
        Some(level) => Cow::Owned(deflate(content, level).context("deflate content")?),
        None => Cow::Borrowed(content),
    };

    let literal = match options.encoding {
        Encoding::Escaped => literal_escaped(&data),
        Encoding::Base64 => literal_base64(&data),
    };

    log::debug!(
        "encoded {} bytes into {} byte {} literal ({} bytes after compression)",
        content.len(),
        literal.len(),
        options.encoding,
        data.len(),
    );

    Ok(Payload {
        encoding: options.encoding,
        compressed: options.compression.is_some(),
        literal,
    })
}

/// Compresses `content` into raw DEFLATE stream (no zlib / gzip header).
fn deflate(
    content: &[u8],
    level: CompressionLevel,
) -> Result<Vec<u8>, Error> {
    let mut encoder = DeflateEncoder::new(Vec::new(), level.to_compression()?);
    encoder.write_all(content)?;
    let data = encoder.finish()?;

    Ok(data)
}

/// Writes `data` as byte string literal, every byte as `\xNN`.
fn literal_escaped(data: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut literal = String::with_capacity(data.len() * 4 + 3);
    literal.push_str("b\"");
    for byte in data {
        literal.push_str("\\x");
        literal.push(HEX[(byte >> 4) as usize] as char);
        literal.push(HEX[(byte & 0x0f) as usize] as char);
    }
    literal.push('"');
    literal
}

/// Writes `data` as string literal containing standard, padded base64.
fn literal_base64(data: &[u8]) -> String {
    // base64 alphabet needs no escaping inside a string literal
    format!("\"{}\"", STANDARD.encode(data))
}
