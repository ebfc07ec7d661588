//! Blocking UDP front end.
//!
//! One decode / respond / encode cycle per datagram. All protocol decisions
//! live in the pure `handle_datagram`; the socket loop only moves bytes.

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

use anyhow::Context;
use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::dns_header::Header;
use crate::dns_message::Message;
use crate::dns_types::ResponseCode;
use crate::local;
use crate::wire::WireDecode;

/// UDP payloads larger than this require EDNS0, which we do not speak.
const MAX_DATAGRAM: usize = 512;

pub struct DnsServer {
    socket: UdpSocket,
    answer_address: Ipv4Addr,
    ttl: u32,
}

impl DnsServer {
    pub fn bind(addr: SocketAddr, answer_address: Ipv4Addr, ttl: u32) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(addr).with_context(|| format!("failed to bind {addr}"))?;
        Ok(DnsServer {
            socket,
            answer_address,
            ttl,
        })
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let local = self.socket.local_addr().context("no local address")?;
        info!(%local, answer = %self.answer_address, ttl = self.ttl, "listening");

        let mut buf = [0u8; MAX_DATAGRAM];
        loop {
            let (size, source) = self
                .socket
                .recv_from(&mut buf)
                .context("failed to receive datagram")?;
            debug!(%source, size, "datagram received");

            if let Some(response) = handle_datagram(&buf[..size], self.answer_address, self.ttl) {
                if let Err(err) = self.socket.send_to(&response, source) {
                    warn!(%source, %err, "failed to send response");
                }
            }
        }
    }
}

/// Decides what, if anything, to send back for one datagram.
///
/// A decodable message gets a locally built response. A datagram whose body
/// is malformed but whose header parses gets a FORMERR response echoing the
/// header. A datagram without even a parseable header is dropped.
pub fn handle_datagram(datagram: &[u8], answer_address: Ipv4Addr, ttl: u32) -> Option<Bytes> {
    let response = match Message::decode(datagram) {
        Ok(query) => local::respond(&query, answer_address, ttl),
        Err(err) => {
            let (header, _) = Header::decode(datagram, 0).ok()?;
            warn!(id = header.id, %err, "malformed query body");
            local::error_response(&header, ResponseCode::FormErr)
        }
    };

    match response.encode() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(%err, "failed to encode response");
            None
        }
    }
}
