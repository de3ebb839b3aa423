use super::RTSP_VERSION;
use super::headers::Headers;
use super::message::Message;
use super::method::Method;

/// An RTSP request (RFC 2326 §6).
///
/// RTSP requests follow HTTP/1.1 syntax:
///
/// ```text
/// Method SP Request-URI SP RTSP-Version CRLF
/// *(Header: Value CRLF)
/// CRLF
/// [body]
/// ```
///
/// Build one with [`new`](Self::new) and the chained
/// [`add_header`](Self::add_header) / [`with_body`](Self::with_body), or read
/// one off a stream with [`read_request`](crate::codec::read_request).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RtspRequest {
    pub method: Method,
    /// Request-URI, kept exactly as received (e.g. `rtsp://host:8554/stream/track1`).
    pub uri: String,
    /// Protocol version, not validated (usually `RTSP/1.0`).
    pub version: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl RtspRequest {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        RtspRequest {
            method,
            uri: uri.into(),
            version: RTSP_VERSION.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Parse a complete request held in memory.
    ///
    /// ```
    /// use rtsp::protocol::{Message, Method, RtspRequest};
    ///
    /// let req = RtspRequest::parse(b"PLAY rtsp://cam/live RTSP/1.0\r\nCSeq: 4\r\n\r\n").unwrap();
    /// assert_eq!(req.method, Method::Play);
    /// assert_eq!(req.cseq(), Some("4"));
    /// ```
    pub fn parse(mut raw: &[u8]) -> crate::error::Result<Self> {
        crate::codec::read_request(&mut raw)
    }

    pub fn add_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Look up a header value by name (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Serialize with the default codec settings.
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::codec::Codec::default().encode(self)
    }
}

impl Message for RtspRequest {
    fn version(&self) -> &str {
        &self.version
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn start_line(&self) -> String {
        format!("{} {} {}", self.method, self.uri, self.version)
    }
}
