//! # Text Codecs
//!
//! Paired encode/decode transforms on text. Encoding never fails; decoding
//! reports input the encoder could not have produced as
//! [`DecodeError::Malformed`].
//!
//! | Kind     | Encoding                                             |
//! |----------|------------------------------------------------------|
//! | `base64` | Standard alphabet with padding over the UTF-8 bytes  |
//! | `uri`    | Percent-encoding, keeps unreserved characters and `/`|
//! | `url`    | Like `uri`, also keeps `; , ? : @ & = + $ #`         |
//! | `html`   | `& < > " '` as named/numeric entities                |
//! | `hex`    | Code point per character, 2+ hex digits, spaced      |
//! | `binary` | Code point per character, 8+ binary digits, spaced   |
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::codec::{decode, encode, CodecKind};
//!
//! assert_eq!(encode(CodecKind::Base64, "A"), "QQ==");
//! assert_eq!(decode(CodecKind::Base64, "QQ==").unwrap(), "A");
//! assert_eq!(encode(CodecKind::Hex, "Hi"), "48 69");
//! ```

use std::fmt;
use std::str::FromStr;

use base64::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::DecodeError;

/// Identifies one of the codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    Base64,
    Uri,
    Html,
    Url,
    Hex,
    Binary,
}

impl CodecKind {
    /// Every codec, in display order
    pub const ALL: [CodecKind; 6] = [
        CodecKind::Base64,
        CodecKind::Uri,
        CodecKind::Html,
        CodecKind::Url,
        CodecKind::Hex,
        CodecKind::Binary,
    ];

    /// Identifier used in requests (e.g., "base64")
    pub fn id(self) -> &'static str {
        match self {
            CodecKind::Base64 => "base64",
            CodecKind::Uri => "uri",
            CodecKind::Html => "html",
            CodecKind::Url => "url",
            CodecKind::Hex => "hex",
            CodecKind::Binary => "binary",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CodecKind::ALL
            .into_iter()
            .find(|kind| kind.id() == lower)
            .ok_or_else(|| {
                let known: Vec<_> = CodecKind::ALL.iter().map(|k| k.id()).collect();
                format!("unknown codec '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// A reversible text transform.
pub trait Codec: Send + Sync {
    fn kind(&self) -> CodecKind;

    /// Encode arbitrary text. Total.
    fn encode(&self, text: &str) -> String;

    /// Reverse [`Codec::encode`].
    fn decode(&self, text: &str) -> Result<String, DecodeError>;

    fn name(&self) -> &'static str {
        self.kind().id()
    }
}

/// Look up the codec implementation for a kind.
pub fn codec(kind: CodecKind) -> &'static dyn Codec {
    match kind {
        CodecKind::Base64 => &Base64Codec,
        CodecKind::Uri => &PercentCodec::URI,
        CodecKind::Url => &PercentCodec::URL,
        CodecKind::Html => &HtmlEntityCodec,
        CodecKind::Hex => &ByteDumpCodec::HEX,
        CodecKind::Binary => &ByteDumpCodec::BINARY,
    }
}

/// Encode `text` with the codec for `kind`.
pub fn encode(kind: CodecKind, text: &str) -> String {
    let encoded = codec(kind).encode(text);
    debug!(codec = kind.id(), input_len = text.len(), output_len = encoded.len(), "encode");
    encoded
}

/// Decode `text` with the codec for `kind`.
pub fn decode(kind: CodecKind, text: &str) -> Result<String, DecodeError> {
    let result = codec(kind).decode(text);
    match &result {
        Ok(decoded) => debug!(codec = kind.id(), output_len = decoded.len(), "decode"),
        Err(e) => warn!(codec = kind.id(), error = %e, "decode rejected input"),
    }
    result
}

// ============================================================================
// Base64
// ============================================================================

/// Base64 over the UTF-8 bytes of the text
pub struct Base64Codec;

impl Codec for Base64Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Base64
    }

    fn encode(&self, text: &str) -> String {
        BASE64_STANDARD.encode(text.as_bytes())
    }

    fn decode(&self, text: &str) -> Result<String, DecodeError> {
        let bytes = BASE64_STANDARD
            .decode(text.trim().as_bytes())
            .map_err(|e| DecodeError::malformed(self.name(), format!("invalid base64: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| DecodeError::malformed(self.name(), format!("payload is not UTF-8: {}", e)))
    }
}

// ============================================================================
// Percent-encoding (URI / URL)
// ============================================================================

/// Characters never escaped by either percent codec
const UNRESERVED_MARKS: &[u8] = b"-_.~!*'()";

/// Percent-encoding with a per-codec set of characters left as-is
pub struct PercentCodec {
    kind: CodecKind,
    /// Kept verbatim in addition to ASCII alphanumerics and [`UNRESERVED_MARKS`]
    preserved: &'static [u8],
}

impl PercentCodec {
    /// Path-safe encoding: keeps `/`
    pub const URI: PercentCodec = PercentCodec {
        kind: CodecKind::Uri,
        preserved: b"/",
    };

    /// Whole-URL encoding: keeps `/` plus scheme, query and fragment delimiters
    pub const URL: PercentCodec = PercentCodec {
        kind: CodecKind::Url,
        preserved: b"/;,?:@&=+$#",
    };

    fn keeps(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&byte) || self.preserved.contains(&byte)
    }
}

impl Codec for PercentCodec {
    fn kind(&self) -> CodecKind {
        self.kind
    }

    fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for &byte in text.as_bytes() {
            if self.keeps(byte) {
                out.push(char::from(byte));
            } else {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
        out
    }

    fn decode(&self, text: &str) -> Result<String, DecodeError> {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'%' {
                out.push(bytes[i]);
                i += 1;
                continue;
            }

            let escape = bytes.get(i + 1..i + 3).ok_or_else(|| {
                DecodeError::malformed(self.name(), format!("truncated escape at offset {}", i))
            })?;
            let high = hex_value(escape[0]);
            let low = hex_value(escape[1]);
            match (high, low) {
                (Some(h), Some(l)) => out.push((h << 4) | l),
                _ => {
                    return Err(DecodeError::malformed(
                        self.name(),
                        format!("invalid escape at offset {}", i),
                    ))
                }
            }
            i += 3;
        }

        String::from_utf8(out).map_err(|_| {
            DecodeError::malformed(self.name(), "escapes do not form valid UTF-8")
        })
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|d| d as u8)
}

// ============================================================================
// HTML entities
// ============================================================================

/// Replacement order matters: `&` goes first so later entities are not re-escaped
const HTML_ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Escapes the five HTML-significant characters
pub struct HtmlEntityCodec;

impl Codec for HtmlEntityCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Html
    }

    fn encode(&self, text: &str) -> String {
        HTML_ENTITIES
            .iter()
            .fold(text.to_string(), |acc, (ch, entity)| acc.replace(*ch, entity))
    }

    fn decode(&self, text: &str) -> Result<String, DecodeError> {
        // Single pass: "&amp;lt;" must come back as "&lt;", not "<".
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(pos) = rest.find('&') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            match HTML_ENTITIES
                .iter()
                .find(|(_, entity)| rest.starts_with(entity))
            {
                Some((ch, entity)) => {
                    out.push(*ch);
                    rest = &rest[entity.len()..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

// ============================================================================
// Hex / binary byte dumps
// ============================================================================

/// Largest code point the byte dumps can decode
const MAX_BYTE_CODE_POINT: u32 = 0xFF;

/// One space-separated token per character code point
pub struct ByteDumpCodec {
    kind: CodecKind,
    radix: u32,
    width: usize,
}

impl ByteDumpCodec {
    pub const HEX: ByteDumpCodec = ByteDumpCodec {
        kind: CodecKind::Hex,
        radix: 16,
        width: 2,
    };

    pub const BINARY: ByteDumpCodec = ByteDumpCodec {
        kind: CodecKind::Binary,
        radix: 2,
        width: 8,
    };

    fn token(&self, ch: char) -> String {
        let code = u32::from(ch);
        match self.radix {
            16 => format!("{:0width$x}", code, width = self.width),
            _ => format!("{:0width$b}", code, width = self.width),
        }
    }
}

impl Codec for ByteDumpCodec {
    fn kind(&self) -> CodecKind {
        self.kind
    }

    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.token(ch))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn decode(&self, text: &str) -> Result<String, DecodeError> {
        text.split_whitespace()
            .map(|token| {
                if !token.chars().all(|c| c.is_digit(self.radix)) {
                    return Err(DecodeError::malformed(
                        self.name(),
                        format!("'{}' is not a base-{} token", token, self.radix),
                    ));
                }
                u32::from_str_radix(token, self.radix)
                    .ok()
                    .filter(|&code| code <= MAX_BYTE_CODE_POINT)
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        DecodeError::malformed(
                            self.name(),
                            format!("'{}' is outside the single-byte range", token),
                        )
                    })
            })
            .collect()
    }
}
