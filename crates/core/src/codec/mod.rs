//! Reading and writing RTSP messages over blocking byte streams.
//!
//! The four entry points [`read_request`], [`read_response`],
//! [`write_request`] and [`write_response`] use [`CodecConfig::default`].
//! Build a [`Codec`] to change line endings or size limits.
//!
//! Readers take the caller's [`BufRead`]: the codec never reads past the
//! end of the message it returns, so bytes of the next pipelined message
//! stay buffered in the caller's reader.
//!
//! ## Body policy
//!
//! Inbound requests and inbound responses treat a short body differently:
//!
//! | | request | response |
//! |---|---|---|
//! | `Content-Length` not an integer | read as 0 | [`MalformedContentLength`](crate::error::ParseErrorKind::MalformedContentLength) |
//! | stream ends mid-body | partial body returned | [`IncompleteBody`](crate::error::RtspError::IncompleteBody) |

mod reader;
mod writer;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::{Message, RtspMessage, RtspRequest, RtspResponse};

/// Line terminator emitted by the writer. The reader accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`, as RFC 2326 §4 requires.
    #[default]
    Crlf,
    /// Bare `\n`.
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Codec-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Terminator used for every line the writer emits.
    pub line_ending: LineEnding,
    /// Longest start or header line accepted, excluding the terminator.
    pub max_line_len: usize,
    /// Largest `Content-Length` accepted before any body byte is read.
    pub max_body_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Crlf,
            max_line_len: 8 * 1024,
            max_body_len: 16 * 1024 * 1024,
        }
    }
}

/// Reader and writer bound to a [`CodecConfig`].
///
/// Holds no stream and no state between calls, so one codec can serve any
/// number of connections from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Read one request. Bodies cut short by end of stream are returned as
    /// far as they arrived.
    pub fn read_request<R: BufRead>(&self, reader: &mut R) -> Result<RtspRequest> {
        reader::read_request(reader, &self.config)
    }

    /// Read one response. Bodies cut short by end of stream fail with
    /// [`IncompleteBody`](crate::error::RtspError::IncompleteBody), which
    /// carries the partial response.
    pub fn read_response<R: BufRead>(&self, reader: &mut R) -> Result<RtspResponse> {
        reader::read_response(reader, &self.config)
    }

    /// Read a request or a response, chosen by the start line: a line
    /// beginning with `RTSP/` is a status line.
    pub fn read_message<R: BufRead>(&self, reader: &mut R) -> Result<RtspMessage> {
        reader::read_message(reader, &self.config)
    }

    /// Write a request with one `write_all` call. Returns the bytes written.
    pub fn write_request<W: Write>(&self, writer: &mut W, request: &RtspRequest) -> Result<usize> {
        writer::write_message(writer, request, self.config.line_ending)
    }

    /// Write a response with one `write_all` call. Returns the bytes written.
    pub fn write_response<W: Write>(
        &self,
        writer: &mut W,
        response: &RtspResponse,
    ) -> Result<usize> {
        writer::write_message(writer, response, self.config.line_ending)
    }

    /// Serialize any message into a new buffer.
    pub fn encode<M: Message + ?Sized>(&self, message: &M) -> Vec<u8> {
        writer::encode(message, self.config.line_ending)
    }
}

/// Read one request with the default configuration.
///
/// ```
/// use rtsp::codec::read_request;
/// use rtsp::protocol::Method;
///
/// let mut input: &[u8] = b"OPTIONS rtsp://x RTSP/1.0\r\nContent-Length: 5\r\n\r\nhello";
/// let request = read_request(&mut input).unwrap();
/// assert_eq!(request.method, Method::Options);
/// assert_eq!(request.body, b"hello");
/// assert!(input.is_empty());
/// ```
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<RtspRequest> {
    Codec::default().read_request(reader)
}

/// Read one response with the default configuration.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<RtspResponse> {
    Codec::default().read_response(reader)
}

/// Read a request or a response with the default configuration.
pub fn read_message<R: BufRead>(reader: &mut R) -> Result<RtspMessage> {
    Codec::default().read_message(reader)
}

/// Write one request with the default configuration.
pub fn write_request<W: Write>(writer: &mut W, request: &RtspRequest) -> Result<usize> {
    Codec::default().write_request(writer, request)
}

/// Write one response with the default configuration.
pub fn write_response<W: Write>(writer: &mut W, response: &RtspResponse) -> Result<usize> {
    Codec::default().write_response(writer, response)
}
