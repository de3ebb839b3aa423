//! RTSP message model (RFC 2326).
//!
//! This module holds the types the codec reads and writes: requests,
//! responses, their headers, and the closed method and status vocabularies.
//!
//! ## RTSP message format (RFC 2326 §4)
//!
//! RTSP messages follow HTTP/1.1 syntax with a different method set:
//!
//! ```text
//! DESCRIBE rtsp://server/stream RTSP/1.0\r\n
//! CSeq: 2\r\n
//! Accept: application/sdp\r\n
//! \r\n
//! ```
//!
//! A body follows the blank line only when a `Content-Length` header is
//! present; there is no chunked encoding.
//!
//! ## Methods
//!
//! | Method | RFC section |
//! |--------|-------------|
//! | OPTIONS | §10.1 |
//! | DESCRIBE | §10.2 |
//! | ANNOUNCE | §10.3 |
//! | SETUP | §10.4 |
//! | PLAY | §10.5 |
//! | PAUSE | §10.6 |
//! | TEARDOWN | §10.7 |
//! | GET_PARAMETER | §10.8 |
//! | SET_PARAMETER | §10.9 |
//! | REDIRECT | §10.10 |
//! | RECORD | §10.11 |

pub mod headers;
pub mod message;
pub mod method;
pub mod request;
pub mod response;
pub mod status;

pub use headers::Headers;
pub use message::{Message, RtspMessage};
pub use method::Method;
pub use request::RtspRequest;
pub use response::RtspResponse;
pub use status::StatusCode;

/// Version token used by the request and response constructors.
pub const RTSP_VERSION: &str = "RTSP/1.0";
