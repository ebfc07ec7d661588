//! The fixed 12-byte message header.
//!
//! Layout, MSB first within each 16-bit word:
//! `ID(16) | QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4) |
//! QDCOUNT(16) | ANCOUNT(16) | NSCOUNT(16) | ARCOUNT(16)`.

use bytes::BufMut;

use crate::dns_types::{MessageType, Opcode, ResponseCode};
use crate::error::{DecodeError, EncodeError};
use crate::wire::{read_u16, WireDecode, WireEncode};

pub const HEADER_LEN: usize = 12;

const QR_BIT: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RD_BIT: u16 = 1 << 8;
const RA_BIT: u16 = 1 << 7;
const Z_SHIFT: u16 = 4;

/// The sixteen flag bits of the second header word, unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub message_type: MessageType,
    pub opcode: Opcode,
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// The three reserved Z bits. Never interpreted, but they round-trip.
    pub reserved: u8,
    pub response_code: ResponseCode,
}

impl Flags {
    pub fn to_u16(self) -> u16 {
        let mut word = 0u16;
        if self.message_type.bit() {
            word |= QR_BIT;
        }
        word |= u16::from(self.opcode.to_u8() & 0xF) << OPCODE_SHIFT;
        if self.authoritative_answer {
            word |= AA_BIT;
        }
        if self.truncated {
            word |= TC_BIT;
        }
        if self.recursion_desired {
            word |= RD_BIT;
        }
        if self.recursion_available {
            word |= RA_BIT;
        }
        word |= u16::from(self.reserved & 0x7) << Z_SHIFT;
        word |= u16::from(self.response_code.to_u8() & 0xF);
        word
    }

    pub fn from_u16(word: u16) -> Self {
        Flags {
            message_type: MessageType::from_bit(word & QR_BIT != 0),
            opcode: Opcode::from_u8(((word >> OPCODE_SHIFT) & 0xF) as u8),
            authoritative_answer: word & AA_BIT != 0,
            truncated: word & TC_BIT != 0,
            recursion_desired: word & RD_BIT != 0,
            recursion_available: word & RA_BIT != 0,
            reserved: ((word >> Z_SHIFT) & 0x7) as u8,
            response_code: ResponseCode::from_u8((word & 0xF) as u8),
        }
    }
}

/// Message header: id, flags, and the four section counts.
///
/// The counts are write-only from the caller's point of view: the message
/// encoder overwrites them with the actual section lengths, so a `Header`
/// stored inside a `Message` never disagrees with its sections on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl WireEncode for Header {
    fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), EncodeError> {
        out.put_u16(self.id);
        out.put_u16(self.flags.to_u16());
        out.put_u16(self.question_count);
        out.put_u16(self.answer_count);
        out.put_u16(self.authority_count);
        out.put_u16(self.additional_count);
        Ok(())
    }
}

impl WireDecode for Header {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let header = Header {
            id: read_u16(buf, offset)?,
            flags: Flags::from_u16(read_u16(buf, offset + 2)?),
            question_count: read_u16(buf, offset + 4)?,
            answer_count: read_u16(buf, offset + 6)?,
            authority_count: read_u16(buf, offset + 8)?,
            additional_count: read_u16(buf, offset + 10)?,
        };
        Ok((header, offset + HEADER_LEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_vec(header: &Header) -> Vec<u8> {
        let mut out = Vec::new();
        header.encode(&mut out).unwrap();
        out
    }

    #[test]
    fn header_is_twelve_bytes() {
        let encoded = encode_to_vec(&Header::default());
        assert_eq!(encoded.len(), HEADER_LEN);
    }

    #[test]
    fn qr_and_rd_pack_to_0x8100() {
        let flags = Flags {
            message_type: MessageType::Response,
            recursion_desired: true,
            ..Flags::default()
        };
        assert_eq!(flags.to_u16(), 0x8100);
        assert_eq!(Flags::from_u16(0x8100), flags);
    }

    #[test]
    fn qr_and_ra_pack_to_0x8080() {
        let flags = Flags {
            message_type: MessageType::Response,
            recursion_available: true,
            ..Flags::default()
        };
        assert_eq!(flags.to_u16(), 0x8080);
        assert_eq!(Flags::from_u16(0x8080), flags);
    }

    #[test]
    fn every_flag_field_has_its_bit() {
        assert_eq!(
            Flags {
                opcode: Opcode::Update,
                ..Flags::default()
            }
            .to_u16(),
            5 << 11
        );
        assert_eq!(
            Flags {
                authoritative_answer: true,
                ..Flags::default()
            }
            .to_u16(),
            1 << 10
        );
        assert_eq!(
            Flags {
                truncated: true,
                ..Flags::default()
            }
            .to_u16(),
            1 << 9
        );
        assert_eq!(
            Flags {
                response_code: ResponseCode::NotImp,
                ..Flags::default()
            }
            .to_u16(),
            4
        );
    }

    #[test]
    fn reserved_bits_round_trip() {
        let flags = Flags {
            reserved: 0b101,
            ..Flags::default()
        };
        let word = flags.to_u16();
        assert_eq!(word, 0b101 << 4);
        assert_eq!(Flags::from_u16(word).reserved, 0b101);
    }

    #[test]
    fn unrecognized_opcode_and_rcode_round_trip() {
        let word = (3u16 << 11) | 13;
        let flags = Flags::from_u16(word);
        assert_eq!(flags.opcode, Opcode::Unrecognized(3));
        assert_eq!(flags.response_code, ResponseCode::Unrecognized(13));
        assert_eq!(flags.to_u16(), word);
    }

    #[test]
    fn header_round_trip() {
        let header = Header {
            id: 0x1234,
            flags: Flags {
                message_type: MessageType::Response,
                opcode: Opcode::Query,
                recursion_desired: true,
                recursion_available: true,
                response_code: ResponseCode::NxDomain,
                ..Flags::default()
            },
            question_count: 1,
            answer_count: 2,
            authority_count: 3,
            additional_count: 4,
        };
        let encoded = encode_to_vec(&header);
        let (decoded, end) = Header::decode(&encoded, 0).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(end, HEADER_LEN);
    }

    #[test]
    fn decode_known_bytes() {
        let buf = [
            0x86, 0x2a, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
        ];
        let (header, _) = Header::decode(&buf, 0).unwrap();
        assert_eq!(header.id, 0x862a);
        assert_eq!(header.flags.message_type, MessageType::Response);
        assert!(header.flags.recursion_desired);
        assert!(header.flags.recursion_available);
        assert_eq!(header.question_count, 1);
        assert_eq!(header.answer_count, 1);
    }

    #[test]
    fn short_buffer_is_truncated() {
        let buf = [0u8; 11];
        assert_eq!(
            Header::decode(&buf, 0).unwrap_err(),
            DecodeError::Truncated { offset: 10 }
        );
    }
}
