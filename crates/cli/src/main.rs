use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rtsp::{Codec, CodecConfig, LineEnding, Message, RtspError, RtspMessage};

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Decide from the first line
    Auto,
    Request,
    Response,
}

#[derive(Parser)]
#[command(
    name = "rtsp-inspect",
    about = "Parse one RTSP message and print it in canonical form"
)]
struct Args {
    /// File holding the raw message (stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Kind of message to expect
    #[arg(long, short, value_enum, default_value_t = Kind::Auto)]
    kind: Kind,

    /// Emit bare LF line endings instead of CRLF
    #[arg(long)]
    lf: bool,

    /// Largest Content-Length accepted, in bytes
    #[arg(long, default_value_t = CodecConfig::default().max_body_len)]
    max_body_len: usize,
}

fn read(codec: &Codec, input: &mut impl BufRead, kind: Kind) -> rtsp::Result<RtspMessage> {
    match kind {
        Kind::Auto => codec.read_message(input),
        Kind::Request => codec.read_request(input).map(RtspMessage::Request),
        Kind::Response => codec.read_response(input).map(RtspMessage::Response),
    }
}

fn main() -> ExitCode {
    // stdout carries the message itself.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();

    let codec = Codec::new(CodecConfig {
        line_ending: if args.lf {
            LineEnding::Lf
        } else {
            LineEnding::Crlf
        },
        max_body_len: args.max_body_len,
        ..CodecConfig::default()
    });

    let mut input: Box<dyn BufRead> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Failed to open {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let (message, status) = match read(&codec, &mut input, args.kind) {
        Ok(message) => (message, ExitCode::SUCCESS),
        Err(RtspError::IncompleteBody {
            expected,
            received,
            partial,
        }) => {
            tracing::warn!(expected, received, "response body incomplete, printing what arrived");
            (RtspMessage::Response(*partial), ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("Failed to read message: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        start_line = %message.start_line(),
        headers = message.headers().len(),
        body_len = message.body().len(),
        "parsed message"
    );
    for (name, value) in message.headers().iter() {
        tracing::debug!(name, value, "header");
    }

    let mut stdout = io::stdout().lock();
    let written = match &message {
        RtspMessage::Request(request) => codec.write_request(&mut stdout, request),
        RtspMessage::Response(response) => codec.write_response(&mut stdout, response),
    };
    if let Err(e) = written {
        eprintln!("Failed to write message: {}", e);
        return ExitCode::FAILURE;
    }

    status
}
