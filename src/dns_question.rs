//! Question section entries: a name followed by 16-bit type and class.

use bytes::BufMut;

use crate::dns_name::Name;
use crate::dns_types::{RecordClass, RecordType};
use crate::error::{DecodeError, EncodeError};
use crate::wire::{read_u16, WireDecode, WireEncode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl Question {
    pub fn new(name: Name, record_type: RecordType, record_class: RecordClass) -> Self {
        Question {
            name,
            record_type,
            record_class,
        }
    }
}

impl WireEncode for Question {
    fn encode<B: BufMut>(&self, out: &mut B) -> Result<(), EncodeError> {
        self.name.encode(out)?;
        out.put_u16(self.record_type.to_u16());
        out.put_u16(self.record_class.to_u16());
        Ok(())
    }
}

impl WireDecode for Question {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let (name, pos) = Name::decode(buf, offset)?;
        let record_type = RecordType::from_u16(read_u16(buf, pos)?);
        let record_class = RecordClass::from_u16(read_u16(buf, pos + 2)?);
        Ok((
            Question {
                name,
                record_type,
                record_class,
            },
            pos + 4,
        ))
    }
}
