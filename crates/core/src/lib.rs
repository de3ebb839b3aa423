//! Reader and writer for RTSP/1.0 messages (RFC 2326).
//!
//! ```
//! use rtsp::codec::{read_response, write_request};
//! use rtsp::protocol::{Message, Method, RtspRequest, StatusCode};
//!
//! let request = RtspRequest::new(Method::Describe, "rtsp://cam/live").add_header("CSeq", "2");
//! let mut wire = Vec::new();
//! write_request(&mut wire, &request).unwrap();
//! assert!(wire.starts_with(b"DESCRIBE rtsp://cam/live RTSP/1.0\r\n"));
//!
//! let mut input: &[u8] = b"RTSP/1.0 200 OK\r\nCSeq: 2\r\n\r\n";
//! let response = read_response(&mut input).unwrap();
//! assert_eq!(response.status, StatusCode::Ok);
//! assert_eq!(response.cseq(), Some("2"));
//! ```

pub mod codec;
pub mod error;
pub mod protocol;

pub use codec::{
    Codec, CodecConfig, LineEnding, read_message, read_request, read_response, write_request,
    write_response,
};
pub use error::{ParseErrorKind, Result, RtspError};
pub use protocol::{Headers, Message, Method, RtspMessage, RtspRequest, RtspResponse, StatusCode};
