//! Shared binary-layout plumbing.
//!
//! Everything on the wire is network byte order. Decoders get the whole
//! message buffer plus an offset instead of a consuming reader, because name
//! compression lets any entity reach backwards into bytes that were already
//! consumed.

use bytes::BufMut;

use crate::error::{DecodeError, EncodeError};

/// Serializes an entity into its wire form.
pub trait WireEncode {
    fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), EncodeError>;
}

/// Parses an entity out of a message buffer.
///
/// Returns the entity and the offset of the first byte after it. For a name
/// that ends in a compression pointer, that is the byte after the two-octet
/// pointer, not after the jump target.
pub trait WireDecode: Sized {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeError>;
}

pub(crate) fn read_u8(buf: &[u8], offset: usize) -> Result<u8, DecodeError> {
    buf.get(offset)
        .copied()
        .ok_or(DecodeError::Truncated { offset })
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    match buf.get(offset..offset + 2) {
        Some(b) => Ok(u16::from_be_bytes([b[0], b[1]])),
        None => Err(DecodeError::Truncated { offset }),
    }
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    match buf.get(offset..offset + 4) {
        Some(b) => Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        None => Err(DecodeError::Truncated { offset }),
    }
}

pub(crate) fn read_slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DecodeError> {
    buf.get(offset..offset + len)
        .ok_or(DecodeError::Truncated { offset })
}
