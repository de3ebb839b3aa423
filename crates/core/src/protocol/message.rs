use super::headers::Headers;
use super::request::RtspRequest;
use super::response::RtspResponse;

/// Fields shared by requests and responses (RFC 2326 §4).
///
/// The writer serializes anything implementing this trait: the start line,
/// then [`headers`](Self::headers), then [`body`](Self::body).
pub trait Message {
    /// Protocol version token, e.g. `RTSP/1.0`.
    fn version(&self) -> &str;

    fn headers(&self) -> &Headers;

    fn body(&self) -> &[u8];

    /// Request line or status line, without the line terminator.
    fn start_line(&self) -> String;

    /// The CSeq header value, which numbers and orders RTSP
    /// request/response pairs (RFC 2326 §12.17).
    fn cseq(&self) -> Option<&str> {
        self.headers().get("CSeq")
    }
}

/// Either side of an RTSP exchange, as returned by
/// [`read_message`](crate::codec::read_message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RtspMessage {
    Request(RtspRequest),
    Response(RtspResponse),
}

impl Message for RtspMessage {
    fn version(&self) -> &str {
        match self {
            RtspMessage::Request(request) => request.version(),
            RtspMessage::Response(response) => response.version(),
        }
    }

    fn headers(&self) -> &Headers {
        match self {
            RtspMessage::Request(request) => request.headers(),
            RtspMessage::Response(response) => response.headers(),
        }
    }

    fn body(&self) -> &[u8] {
        match self {
            RtspMessage::Request(request) => request.body(),
            RtspMessage::Response(response) => response.body(),
        }
    }

    fn start_line(&self) -> String {
        match self {
            RtspMessage::Request(request) => request.start_line(),
            RtspMessage::Response(response) => response.start_line(),
        }
    }
}

impl From<RtspRequest> for RtspMessage {
    fn from(request: RtspRequest) -> Self {
        RtspMessage::Request(request)
    }
}

impl From<RtspResponse> for RtspMessage {
    fn from(response: RtspResponse) -> Self {
        RtspMessage::Response(response)
    }
}
