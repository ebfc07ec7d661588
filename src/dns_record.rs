//! Resource records and their type/class-specific RDATA.
//!
//! The only RDATA codec is `(IN, A)`: four octets carrying an IPv4 address.
//! Every other `(class, type)` pair is rejected outright on both encode and
//! decode; a best-effort byte copy would misreport record semantics.

use std::net::Ipv4Addr;

use bytes::BufMut;

use crate::dns_name::Name;
use crate::dns_types::{RecordClass, RecordType};
use crate::error::{DecodeError, EncodeError};
use crate::wire::{read_slice, read_u16, read_u32, WireDecode, WireEncode};

/// Decoded RDATA payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
}

impl RecordData {
    /// Parses a dotted-decimal IPv4 address into A-record data.
    pub fn a_from_str(address: &str) -> Result<Self, EncodeError> {
        address
            .parse::<Ipv4Addr>()
            .map(RecordData::A)
            .map_err(|_| EncodeError::MalformedAddress {
                address: address.to_owned(),
            })
    }
}

/// A resource record from the answer, authority or additional section.
///
/// `record_type` and `record_class` are stored alongside the decoded data so
/// that combinations without an RDATA codec stay representable; they fail at
/// encode time instead of being impossible to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl Record {
    /// Builds an `(IN, A)` record for `name` pointing at `address`.
    pub fn a(name: Name, ttl: u32, address: Ipv4Addr) -> Self {
        Record {
            name,
            record_type: RecordType::A,
            record_class: RecordClass::IN,
            ttl,
            data: RecordData::A(address),
        }
    }
}

impl WireEncode for Record {
    fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), EncodeError> {
        self.name.encode(out)?;
        out.put_u16(self.record_type.to_u16());
        out.put_u16(self.record_class.to_u16());
        out.put_u32(self.ttl);
        match (self.record_class, self.record_type, self.data) {
            (RecordClass::IN, RecordType::A, RecordData::A(address)) => {
                out.put_u16(4);
                out.put_slice(&address.octets());
            }
            _ => {
                return Err(EncodeError::UnsupportedRecordType {
                    record_type: self.record_type,
                    record_class: self.record_class,
                })
            }
        }
        Ok(())
    }
}

impl WireDecode for Record {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let (name, pos) = Name::decode(buf, offset)?;
        let record_type = RecordType::from_u16(read_u16(buf, pos)?);
        let record_class = RecordClass::from_u16(read_u16(buf, pos + 2)?);
        let ttl = read_u32(buf, pos + 4)?;
        let rdlength = usize::from(read_u16(buf, pos + 8)?);
        let data_offset = pos + 10;
        let rdata = read_slice(buf, data_offset, rdlength)?;

        let data = match (record_class, record_type) {
            (RecordClass::IN, RecordType::A) => {
                let octets: [u8; 4] =
                    rdata
                        .try_into()
                        .map_err(|_| DecodeError::InvalidRData {
                            offset: data_offset,
                            length: rdlength,
                        })?;
                RecordData::A(Ipv4Addr::from(octets))
            }
            _ => {
                return Err(DecodeError::UnsupportedRecordType {
                    offset: pos,
                    record_type,
                    record_class,
                })
            }
        };

        Ok((
            Record {
                name,
                record_type,
                record_class,
                ttl,
                data,
            },
            data_offset + rdlength,
        ))
    }
}
