//! Canonical wire-level enumerations, shared by the header, question and
//! record codecs. Each concept is defined exactly once here.
//!
//! Values the protocol leaves open carry an `Unrecognized` arm holding the
//! raw number, so unknown codes survive a decode/encode round-trip instead
//! of being rejected or silently coerced.

use std::fmt;

/// Whether a message is a query or a response (the QR header bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Query,
    Response,
}

impl MessageType {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            MessageType::Response
        } else {
            MessageType::Query
        }
    }

    pub fn bit(self) -> bool {
        self == MessageType::Response
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Query => write!(f, "query"),
            MessageType::Response => write!(f, "response"),
        }
    }
}

/// Kind of operation requested, from the 4-bit OPCODE header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opcode {
    #[default]
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    /// A reserved opcode value; kept as-is so it re-encodes unchanged.
    Unrecognized(u8),
}

impl Opcode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unrecognized(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Unrecognized(v) => v,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Query => write!(f, "QUERY"),
            Opcode::IQuery => write!(f, "IQUERY"),
            Opcode::Status => write!(f, "STATUS"),
            Opcode::Notify => write!(f, "NOTIFY"),
            Opcode::Update => write!(f, "UPDATE"),
            Opcode::Unrecognized(v) => write!(f, "OPCODE{}", v),
        }
    }
}

/// Response status, from the 4-bit RCODE header field.
///
/// Only the codes a plain 12-byte header can carry are named; extended codes
/// (BADVERS and friends) need an OPT record and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    YxDomain,
    YxRrSet,
    NxRrSet,
    NotAuth,
    NotZone,
    /// An unassigned rcode value (11-15); kept as-is.
    Unrecognized(u8),
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YxDomain,
            7 => ResponseCode::YxRrSet,
            8 => ResponseCode::NxRrSet,
            9 => ResponseCode::NotAuth,
            10 => ResponseCode::NotZone,
            other => ResponseCode::Unrecognized(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YxDomain => 6,
            ResponseCode::YxRrSet => 7,
            ResponseCode::NxRrSet => 8,
            ResponseCode::NotAuth => 9,
            ResponseCode::NotZone => 10,
            ResponseCode::Unrecognized(v) => v,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => write!(f, "NOERROR"),
            ResponseCode::FormErr => write!(f, "FORMERR"),
            ResponseCode::ServFail => write!(f, "SERVFAIL"),
            ResponseCode::NxDomain => write!(f, "NXDOMAIN"),
            ResponseCode::NotImp => write!(f, "NOTIMP"),
            ResponseCode::Refused => write!(f, "REFUSED"),
            ResponseCode::YxDomain => write!(f, "YXDOMAIN"),
            ResponseCode::YxRrSet => write!(f, "YXRRSET"),
            ResponseCode::NxRrSet => write!(f, "NXRRSET"),
            ResponseCode::NotAuth => write!(f, "NOTAUTH"),
            ResponseCode::NotZone => write!(f, "NOTZONE"),
            ResponseCode::Unrecognized(v) => write!(f, "RCODE{}", v),
        }
    }
}

/// Resource record type (the 16-bit TYPE/QTYPE field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    AAAA,
    SRV,
    OPT,
    AXFR,
    MAILB,
    MAILA,
    ANY,
    /// Any other assigned or private type code; kept as-is.
    Unrecognized(u16),
}

impl RecordType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            3 => RecordType::MD,
            4 => RecordType::MF,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            7 => RecordType::MB,
            8 => RecordType::MG,
            9 => RecordType::MR,
            10 => RecordType::NULL,
            11 => RecordType::WKS,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            14 => RecordType::MINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            41 => RecordType::OPT,
            252 => RecordType::AXFR,
            253 => RecordType::MAILB,
            254 => RecordType::MAILA,
            255 => RecordType::ANY,
            other => RecordType::Unrecognized(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::OPT => 41,
            RecordType::AXFR => 252,
            RecordType::MAILB => 253,
            RecordType::MAILA => 254,
            RecordType::ANY => 255,
            RecordType::Unrecognized(v) => v,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::NS => write!(f, "NS"),
            RecordType::MD => write!(f, "MD"),
            RecordType::MF => write!(f, "MF"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::SOA => write!(f, "SOA"),
            RecordType::MB => write!(f, "MB"),
            RecordType::MG => write!(f, "MG"),
            RecordType::MR => write!(f, "MR"),
            RecordType::NULL => write!(f, "NULL"),
            RecordType::WKS => write!(f, "WKS"),
            RecordType::PTR => write!(f, "PTR"),
            RecordType::HINFO => write!(f, "HINFO"),
            RecordType::MINFO => write!(f, "MINFO"),
            RecordType::MX => write!(f, "MX"),
            RecordType::TXT => write!(f, "TXT"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::SRV => write!(f, "SRV"),
            RecordType::OPT => write!(f, "OPT"),
            RecordType::AXFR => write!(f, "AXFR"),
            RecordType::MAILB => write!(f, "MAILB"),
            RecordType::MAILA => write!(f, "MAILA"),
            RecordType::ANY => write!(f, "ANY"),
            RecordType::Unrecognized(v) => write!(f, "TYPE{}", v),
        }
    }
}

/// Resource record class (the 16-bit CLASS/QCLASS field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordClass {
    IN,
    CS,
    CH,
    HS,
    NONE,
    ANY,
    /// Any other class code; kept as-is.
    Unrecognized(u16),
}

impl RecordClass {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordClass::IN,
            2 => RecordClass::CS,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            254 => RecordClass::NONE,
            255 => RecordClass::ANY,
            other => RecordClass::Unrecognized(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
            RecordClass::Unrecognized(v) => v,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::IN => write!(f, "IN"),
            RecordClass::CS => write!(f, "CS"),
            RecordClass::CH => write!(f, "CH"),
            RecordClass::HS => write!(f, "HS"),
            RecordClass::NONE => write!(f, "NONE"),
            RecordClass::ANY => write!(f, "ANY"),
            RecordClass::Unrecognized(v) => write!(f, "CLASS{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_roundtrip() {
        for value in [1u16, 2, 5, 6, 12, 15, 16, 28, 33, 41, 252, 255] {
            assert_eq!(RecordType::from_u16(value).to_u16(), value);
        }
    }

    #[test]
    fn record_type_unrecognized_passthrough() {
        let rt = RecordType::from_u16(999);
        assert_eq!(rt, RecordType::Unrecognized(999));
        assert_eq!(rt.to_u16(), 999);
        assert_eq!(format!("{}", rt), "TYPE999");
    }

    #[test]
    fn record_class_roundtrip() {
        for value in [1u16, 2, 3, 4, 254, 255, 4096] {
            assert_eq!(RecordClass::from_u16(value).to_u16(), value);
        }
        assert_eq!(RecordClass::from_u16(1), RecordClass::IN);
        assert_eq!(RecordClass::from_u16(4096), RecordClass::Unrecognized(4096));
    }

    #[test]
    fn opcode_roundtrip() {
        for value in 0u8..16 {
            assert_eq!(Opcode::from_u8(value).to_u8(), value);
        }
        assert_eq!(Opcode::from_u8(3), Opcode::Unrecognized(3));
        assert_eq!(Opcode::from_u8(4), Opcode::Notify);
    }

    #[test]
    fn response_code_roundtrip() {
        for value in 0u8..16 {
            assert_eq!(ResponseCode::from_u8(value).to_u8(), value);
        }
        assert_eq!(ResponseCode::from_u8(12), ResponseCode::Unrecognized(12));
    }

    #[test]
    fn message_type_bit() {
        assert_eq!(MessageType::from_bit(false), MessageType::Query);
        assert_eq!(MessageType::from_bit(true), MessageType::Response);
        assert!(MessageType::Response.bit());
        assert!(!MessageType::Query.bit());
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", RecordType::A), "A");
        assert_eq!(format!("{}", RecordClass::IN), "IN");
        assert_eq!(format!("{}", Opcode::Unrecognized(3)), "OPCODE3");
        assert_eq!(format!("{}", ResponseCode::FormErr), "FORMERR");
    }
}
