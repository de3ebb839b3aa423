use super::RTSP_VERSION;
use super::headers::Headers;
use super::message::Message;
use super::status::StatusCode;

/// An RTSP response (RFC 2326 §7).
///
/// Serializes to the standard text format:
///
/// ```text
/// RTSP/1.0 200 OK\r\n
/// CSeq: 1\r\n
/// Content-Type: application/sdp\r\n
/// Content-Length: 142\r\n
/// \r\n
/// v=0\r\n...
/// ```
///
/// Uses a builder pattern: chain [`add_header`](Self::add_header) and
/// [`with_body`](Self::with_body), then call [`to_bytes`](Self::to_bytes)
/// or hand it to [`write_response`](crate::codec::write_response).
/// `Content-Length` is computed from the body when serializing.
///
/// The reason phrase is always the canonical one for [`status`](Self::status);
/// a phrase received on the wire is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RtspResponse {
    pub status: StatusCode,
    pub version: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl RtspResponse {
    pub fn new(status: StatusCode) -> Self {
        RtspResponse {
            status,
            version: RTSP_VERSION.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// 200 OK: success (RFC 2326 §7.1.1).
    pub fn ok() -> Self {
        Self::new(StatusCode::Ok)
    }

    /// 404 Not Found: the requested resource does not exist.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    /// 400 Bad Request: malformed or missing required header.
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest)
    }

    /// Parse a complete response held in memory.
    pub fn parse(mut raw: &[u8]) -> crate::error::Result<Self> {
        crate::codec::read_response(&mut raw)
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

    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Serialize with the default codec settings.
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::codec::Codec::default().encode(self)
    }
}

impl Message for RtspResponse {
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
        format!(
            "{} {} {}",
            self.version,
            self.status.code(),
            self.status.reason_phrase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_no_body() {
        let resp = RtspResponse::ok()
            .add_header("CSeq", "1")
            .add_header("Public", "OPTIONS");
        let s = String::from_utf8(resp.to_bytes()).unwrap();
        assert!(s.starts_with("RTSP/1.0 200 OK\r\n"));
        assert!(s.contains("CSeq: 1\r\n"));
        assert!(s.contains("Public: OPTIONS\r\n"));
        assert!(!s.contains("Content-Length"));
        assert!(s.ends_with("\r\n\r\n"));
    }

    #[test]
    fn serialize_with_body() {
        let resp = RtspResponse::ok()
            .add_header("CSeq", "2")
            .with_body("v=0\r\n");
        let s = String::from_utf8(resp.to_bytes()).unwrap();
        assert!(s.contains("Content-Length: 5\r\n"));
        assert!(s.ends_with("\r\n\r\nv=0\r\n"));
    }

    #[test]
    fn not_found_response() {
        let resp = RtspResponse::not_found().add_header("CSeq", "5");
        assert_eq!(resp.status.code(), 404);
        assert_eq!(resp.start_line(), "RTSP/1.0 404 Not Found");
        assert_eq!(resp.cseq(), Some("5"));
    }

    #[test]
    fn parse_keeps_version_verbatim() {
        let resp = RtspResponse::parse(b"RTSP/2.0 454 Session Not Found\r\nCSeq: 8\r\n\r\n").unwrap();
        assert_eq!(resp.version, "RTSP/2.0");
        assert_eq!(resp.status, StatusCode::SessionNotFound);
        assert_eq!(resp.get_header("cseq"), Some("8"));
    }
}
