//! Domain-name wire codec.
//!
//! On the wire a name is a run of labels, each a length octet (1-63)
//! followed by that many bytes, ended by a zero octet. A length octet with
//! both high bits set is not a length but the first half of a two-octet
//! compression pointer: the remaining 14 bits are an absolute offset into
//! the message where the rest of the name lives. Decoding follows such
//! jumps, then resumes at the byte after the first pointer pair.

use std::fmt;

use bytes::BufMut;

use crate::error::{DecodeError, EncodeError};
use crate::wire::{read_slice, read_u8, WireDecode, WireEncode};

const MAX_LABEL_LEN: usize = 63;
const POINTER_MASK: u8 = 0xC0;

/// A domain name as an ordered label sequence: `example.com` is
/// `["example", "com"]`, the root is the empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Name {
    labels: Vec<String>,
}

impl Name {
    pub fn root() -> Self {
        Name { labels: Vec::new() }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<&str> for Name {
    /// Splits dotted text into labels. Empty segments are dropped, so a
    /// trailing dot is accepted and `"."` is the root.
    fn from(text: &str) -> Self {
        Name {
            labels: text
                .split('.')
                .filter(|label| !label.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        write!(f, "{}", self.labels.join("."))
    }
}

impl WireEncode for Name {
    fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), EncodeError> {
        for label in &self.labels {
            let bytes = label.as_bytes();
            if bytes.is_empty() {
                // Unrepresentable: a zero length octet would terminate the
                // name early.
                continue;
            }
            if bytes.len() > MAX_LABEL_LEN {
                return Err(EncodeError::LabelTooLong {
                    label: label.clone(),
                    length: bytes.len(),
                });
            }
            if bytes.contains(&0) {
                return Err(EncodeError::MalformedLabel {
                    label: label.clone(),
                });
            }
            out.put_u8(bytes.len() as u8);
            out.put_slice(bytes);
        }
        out.put_u8(0);
        Ok(())
    }
}

impl WireDecode for Name {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let mut labels = Vec::new();
        let mut pos = offset;
        // Where the caller resumes: set when the first pointer is followed,
        // otherwise the byte after the terminator.
        let mut resume_at = None;
        // Pointer targets already followed while resolving this name.
        let mut visited: Vec<usize> = Vec::new();

        loop {
            let len = read_u8(buf, pos)?;

            if len & POINTER_MASK == POINTER_MASK {
                let low = read_u8(buf, pos + 1)?;
                let target = usize::from(u16::from_be_bytes([len & !POINTER_MASK, low]));
                if visited.contains(&target) {
                    return Err(DecodeError::PointerLoop { offset: pos });
                }
                visited.push(target);
                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                pos = target;
            } else if len & POINTER_MASK != 0 {
                // 0b01/0b10 prefixes are reserved label types; read as a
                // plain length they exceed the 63-octet limit anyway.
                return Err(DecodeError::LabelTooLong {
                    offset: pos,
                    length: usize::from(len),
                });
            } else if len == 0 {
                pos += 1;
                break;
            } else {
                let start = pos + 1;
                let bytes = read_slice(buf, start, usize::from(len))?;
                let label = std::str::from_utf8(bytes)
                    .map_err(|_| DecodeError::MalformedLabel { offset: start })?;
                labels.push(label.to_owned());
                pos = start + usize::from(len);
            }
        }

        Ok((Name { labels }, resume_at.unwrap_or(pos)))
    }
}
