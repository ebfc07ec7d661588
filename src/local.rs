//! Local response construction.
//!
//! There is no zone data and no upstream: every `(IN, A)` question gets the
//! one configured address, everything else is echoed unanswered, and
//! non-QUERY opcodes get NOTIMP.

use std::net::Ipv4Addr;

use crate::dns_header::{Flags, Header};
use crate::dns_message::Message;
use crate::dns_record::Record;
use crate::dns_types::{MessageType, Opcode, RecordClass, RecordType, ResponseCode};

/// Flags for a response echoing the query's opcode and RD bit.
fn response_flags(query_flags: Flags, response_code: ResponseCode) -> Flags {
    Flags {
        message_type: MessageType::Response,
        opcode: query_flags.opcode,
        authoritative_answer: false,
        truncated: false,
        recursion_desired: query_flags.recursion_desired,
        recursion_available: false,
        reserved: 0,
        response_code,
    }
}

/// Builds the response to a decoded query.
///
/// QUERY opcodes answer NOERROR with one A record per `(IN, A)` question,
/// pointing at `answer_address` with `ttl`; other question types are echoed
/// without an answer. Any other opcode answers NOTIMP with no answers.
/// Section counts are left for the encoder to derive.
pub fn respond(query: &Message, answer_address: Ipv4Addr, ttl: u32) -> Message {
    let (response_code, answers) = match query.header.flags.opcode {
        Opcode::Query => {
            let answers = query
                .questions
                .iter()
                .filter(|q| q.record_type == RecordType::A && q.record_class == RecordClass::IN)
                .map(|q| Record::a(q.name.clone(), ttl, answer_address))
                .collect();
            (ResponseCode::NoError, answers)
        }
        _ => (ResponseCode::NotImp, Vec::new()),
    };

    Message {
        header: Header {
            id: query.header.id,
            flags: response_flags(query.header.flags, response_code),
            ..Header::default()
        },
        questions: query.questions.clone(),
        answers,
        ..Message::default()
    }
}

/// Builds an empty response carrying `response_code`, for queries whose body
/// could not be decoded. Only the header survives to be echoed.
pub fn error_response(query_header: &Header, response_code: ResponseCode) -> Message {
    Message {
        header: Header {
            id: query_header.id,
            flags: response_flags(query_header.flags, response_code),
            ..Header::default()
        },
        ..Message::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_name::Name;
    use crate::dns_question::Question;
    use crate::dns_record::RecordData;

    const ANSWER: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);

    fn query_with(questions: Vec<Question>) -> Message {
        Message {
            header: Header {
                id: 0x4242,
                flags: Flags {
                    recursion_desired: true,
                    ..Flags::default()
                },
                ..Header::default()
            },
            questions,
            ..Message::default()
        }
    }

    #[test]
    fn a_question_gets_one_answer() {
        let query = query_with(vec![Question::new(
            Name::from("example.com"),
            RecordType::A,
            RecordClass::IN,
        )]);
        let response = respond(&query, ANSWER, 60);

        assert_eq!(response.header.id, 0x4242);
        assert_eq!(response.header.flags.message_type, MessageType::Response);
        assert_eq!(response.header.flags.response_code, ResponseCode::NoError);
        assert!(response.header.flags.recursion_desired);
        assert!(!response.header.flags.recursion_available);
        assert_eq!(response.questions, query.questions);
        assert_eq!(response.answers.len(), 1);
        assert_eq!(response.answers[0].name, Name::from("example.com"));
        assert_eq!(response.answers[0].ttl, 60);
        assert_eq!(response.answers[0].data, RecordData::A(ANSWER));
    }

    #[test]
    fn non_a_questions_are_echoed_unanswered() {
        let query = query_with(vec![
            Question::new(Name::from("example.com"), RecordType::TXT, RecordClass::IN),
            Question::new(Name::from("example.com"), RecordType::A, RecordClass::CH),
        ]);
        let response = respond(&query, ANSWER, 60);

        assert_eq!(response.header.flags.response_code, ResponseCode::NoError);
        assert_eq!(response.questions.len(), 2);
        assert!(response.answers.is_empty());
    }

    #[test]
    fn mixed_questions_answer_only_the_a_ones() {
        let query = query_with(vec![
            Question::new(Name::from("a.example"), RecordType::A, RecordClass::IN),
            Question::new(Name::from("b.example"), RecordType::MX, RecordClass::IN),
            Question::new(Name::from("c.example"), RecordType::A, RecordClass::IN),
        ]);
        let response = respond(&query, ANSWER, 60);

        assert_eq!(response.answers.len(), 2);
        assert_eq!(response.answers[0].name, Name::from("a.example"));
        assert_eq!(response.answers[1].name, Name::from("c.example"));
    }

    #[test]
    fn non_query_opcode_gets_notimp() {
        let mut query = query_with(vec![Question::new(
            Name::from("example.com"),
            RecordType::A,
            RecordClass::IN,
        )]);
        query.header.flags.opcode = Opcode::Status;
        let response = respond(&query, ANSWER, 60);

        assert_eq!(response.header.flags.response_code, ResponseCode::NotImp);
        assert_eq!(response.header.flags.opcode, Opcode::Status);
        assert!(response.answers.is_empty());
        assert_eq!(response.questions, query.questions);
    }

    #[test]
    fn error_response_echoes_header_only() {
        let header = Header {
            id: 0x9999,
            flags: Flags {
                opcode: Opcode::Query,
                recursion_desired: true,
                ..Flags::default()
            },
            question_count: 3, // stale; must not leak into the response
            ..Header::default()
        };
        let response = error_response(&header, ResponseCode::FormErr);

        assert_eq!(response.header.id, 0x9999);
        assert_eq!(response.header.flags.message_type, MessageType::Response);
        assert_eq!(response.header.flags.response_code, ResponseCode::FormErr);
        assert!(response.header.flags.recursion_desired);
        assert!(response.questions.is_empty());
        assert!(response.answers.is_empty());

        let encoded = response.encode().unwrap();
        assert_eq!(&encoded[4..12], &[0u8; 8]);
    }

    #[test]
    fn reserved_bits_are_not_echoed() {
        let mut query = query_with(Vec::new());
        query.header.flags.reserved = 0b111;
        let response = respond(&query, ANSWER, 60);
        assert_eq!(response.header.flags.reserved, 0);
    }
}
