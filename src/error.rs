//! Typed errors for the wire codec.
//!
//! Decoding is fed by untrusted datagrams, so every decode variant records
//! the buffer offset where parsing stopped; the transport layer decides what
//! to do with the failure (drop, FORMERR, log). Encoding fails only on
//! values the wire format cannot represent.

use thiserror::Error;

use crate::dns_types::{RecordClass, RecordType};

/// Failure while decoding a message from wire bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("label length {length} at offset {offset} exceeds 63 octets")]
    LabelTooLong { offset: usize, length: usize },

    #[error("compression pointer loop detected at offset {offset}")]
    PointerLoop { offset: usize },

    #[error("label at offset {offset} is not valid UTF-8")]
    MalformedLabel { offset: usize },

    #[error("no data codec for {record_class} {record_type} record at offset {offset}")]
    UnsupportedRecordType {
        offset: usize,
        record_type: RecordType,
        record_class: RecordClass,
    },

    #[error("A record data at offset {offset} is {length} octets, expected 4")]
    InvalidRData { offset: usize, length: usize },
}

/// Failure while encoding a message to wire bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("label {label:?} is {length} octets, maximum is 63")]
    LabelTooLong { label: String, length: usize },

    #[error("label {label:?} contains a NUL octet")]
    MalformedLabel { label: String },

    #[error("{address:?} is not a dotted-decimal IPv4 address")]
    MalformedAddress { address: String },

    #[error("no data codec for {record_class} {record_type} records")]
    UnsupportedRecordType {
        record_type: RecordType,
        record_class: RecordClass,
    },

    #[error("{count} entries in the {section} section exceed the 16-bit count field")]
    SectionOverflow {
        section: &'static str,
        count: usize,
    },
}
