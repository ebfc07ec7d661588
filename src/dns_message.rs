//! Whole-message codec.
//!
//! Decode is count-driven: the header says how many entries each section
//! holds and exactly that many are read, in question / answer / authority /
//! additional order. Encode is the inverse, except the four header counts
//! are derived from the actual section lengths; whatever counts the caller
//! left on the header are ignored, so an encoded message can never disagree
//! with itself.

use bytes::{Bytes, BytesMut};

use crate::dns_header::Header;
use crate::dns_question::Question;
use crate::dns_record::Record;
use crate::error::{DecodeError, EncodeError};
use crate::wire::{WireDecode, WireEncode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

fn section_count(section: &'static str, len: usize) -> Result<u16, EncodeError> {
    u16::try_from(len).map_err(|_| EncodeError::SectionOverflow {
        section,
        count: len,
    })
}

impl Message {
    /// Serializes the message, deriving the header counts from the sections.
    pub fn encode(&self) -> Result<Bytes, EncodeError> {
        let header = Header {
            question_count: section_count("question", self.questions.len())?,
            answer_count: section_count("answer", self.answers.len())?,
            authority_count: section_count("authority", self.authorities.len())?,
            additional_count: section_count("additional", self.additionals.len())?,
            ..self.header
        };

        let mut out = BytesMut::with_capacity(512);
        header.encode(&mut out)?;
        for question in &self.questions {
            question.encode(&mut out)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode(&mut out)?;
        }
        Ok(out.freeze())
    }

    /// Parses one message from a datagram. Trailing bytes past the last
    /// counted section are ignored.
    pub fn decode(buf: &[u8]) -> Result<Message, DecodeError> {
        let (header, mut offset) = Header::decode(buf, 0)?;

        // Counts come from the untrusted header; let the vectors grow as
        // entries actually parse instead of preallocating for a claim.
        let mut questions = Vec::new();
        for _ in 0..header.question_count {
            let (question, next) = Question::decode(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        let mut decode_section = |count: u16| -> Result<Vec<Record>, DecodeError> {
            let mut records = Vec::new();
            for _ in 0..count {
                let (record, next) = Record::decode(buf, offset)?;
                records.push(record);
                offset = next;
            }
            Ok(records)
        };

        let answers = decode_section(header.answer_count)?;
        let authorities = decode_section(header.authority_count)?;
        let additionals = decode_section(header.additional_count)?;

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
