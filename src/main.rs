mod dns_header;
mod dns_message;
mod dns_name;
mod dns_question;
mod dns_record;
mod dns_types;
mod error;
mod local;
mod server;
mod wire;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::dns_record::RecordData;
use crate::server::DnsServer;

#[derive(Parser, Debug)]
#[command(name = "nanodns", about = "DNS server answering every A query with one address")]
struct Args {
    /// Address and port to listen on
    #[arg(long, default_value = "127.0.0.1:2053")]
    bind: SocketAddr,

    /// IPv4 address returned for every A question
    #[arg(long, default_value = "8.8.8.8")]
    answer: String,

    /// TTL in seconds for the answers
    #[arg(long, default_value_t = 60)]
    ttl: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    // Run the answer address through the codec's own validation so a typo
    // fails here with the codec's error, not at the first query.
    let RecordData::A(answer) = RecordData::a_from_str(&args.answer)
        .with_context(|| format!("invalid --answer address {:?}", args.answer))?;

    let server = DnsServer::bind(args.bind, answer, args.ttl)?;
    server.run()
}
