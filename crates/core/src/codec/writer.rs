use std::io::Write;

use super::LineEnding;
use crate::error::{Result, RtspError};
use crate::protocol::Message;

/// Serialize to the RTSP text wire format.
///
/// Header fields are copied as they are; [`write_message`] checks them first.
/// Any `Content-Length` among the message headers is dropped; when the body
/// is non-empty a fresh one is appended after the other headers
/// (RFC 2326 §12.14).
pub(crate) fn encode<M: Message + ?Sized>(message: &M, line_ending: LineEnding) -> Vec<u8> {
    let eol = line_ending.as_str();
    let body = message.body();

    let mut head = format!("{}{eol}", message.start_line());
    for (name, value) in message.headers().iter() {
        if name.eq_ignore_ascii_case("Content-Length") {
            continue;
        }
        head.push_str(&format!("{name}: {value}{eol}"));
    }
    if !body.is_empty() {
        head.push_str(&format!("Content-Length: {}{eol}", body.len()));
    }
    head.push_str(eol);

    let mut buf = head.into_bytes();
    buf.extend_from_slice(body);
    buf
}

/// A CR or LF would end the field line early and inject whatever follows.
fn check_headers<M: Message + ?Sized>(message: &M) -> Result<()> {
    let breaks_line = |text: &str| text.contains(['\r', '\n']);

    for (name, value) in message.headers().iter() {
        if name.is_empty() || name.contains(':') || breaks_line(name) || breaks_line(value) {
            return Err(RtspError::InvalidHeader {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Encode into one buffer and hand it to the sink in a single `write_all`.
/// Nothing reaches the sink if a header fails [`check_headers`].
pub(crate) fn write_message<W: Write, M: Message + ?Sized>(
    writer: &mut W,
    message: &M,
    line_ending: LineEnding,
) -> Result<usize> {
    check_headers(message)?;
    let buf = encode(message, line_ending);
    writer.write_all(&buf)?;
    writer.flush()?;

    tracing::debug!(
        start_line = %message.start_line(),
        bytes = buf.len(),
        body_len = message.body().len(),
        "wrote message"
    );
    Ok(buf.len())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::protocol::{Method, RtspRequest, RtspResponse, StatusCode};

    #[test]
    fn request_layout() {
        let req = RtspRequest::new(Method::Options, "rtsp://cam/live")
            .add_header("CSeq", "1")
            .add_header("User-Agent", "rtsp-inspect");
        let bytes = encode(&req, LineEnding::Crlf);
        assert_eq!(
            bytes,
            b"OPTIONS rtsp://cam/live RTSP/1.0\r\nCSeq: 1\r\nUser-Agent: rtsp-inspect\r\n\r\n"
        );
    }

    #[test]
    fn response_with_lf_endings() {
        let resp = RtspResponse::new(StatusCode::ParameterNotUnderstood)
            .add_header("CSeq", "3")
            .with_body("abc");
        let bytes = encode(&resp, LineEnding::Lf);
        assert_eq!(
            bytes,
            b"RTSP/1.0 451 Parameter Not Understood\nCSeq: 3\nContent-Length: 3\n\nabc"
        );
    }

    #[test]
    fn stale_content_length_is_replaced() {
        let mut resp = RtspResponse::ok().with_body("hello");
        resp.headers.insert("Content-Length", "999");
        resp.headers.insert("CSeq", "2");
        let text = String::from_utf8(encode(&resp, LineEnding::Crlf)).unwrap();
        assert_eq!(text, "RTSP/1.0 200 OK\r\nCSeq: 2\r\nContent-Length: 5\r\n\r\nhello");
    }

    #[test]
    fn empty_body_omits_content_length() {
        let mut req = RtspRequest::new(Method::Teardown, "rtsp://cam/live");
        req.headers.insert("Content-Length", "12");
        let text = String::from_utf8(encode(&req, LineEnding::Crlf)).unwrap();
        assert!(!text.contains("Content-Length"));
    }

    #[test]
    fn reports_bytes_written() {
        let resp = RtspResponse::ok().add_header("CSeq", "1");
        let mut sink = Vec::new();
        let written = write_message(&mut sink, &resp, LineEnding::Crlf).unwrap();
        assert_eq!(written, sink.len());
    }

    #[test]
    fn line_breaks_in_headers_are_rejected() {
        let cases = [
            ("CSeq", "1\r\nSession: injected"),
            ("X-Note", "bare\nfeed"),
            ("Bad\rName", "x"),
            ("Has:Colon", "x"),
            ("", "x"),
        ];
        for (name, value) in cases {
            let mut req = RtspRequest::new(Method::Options, "rtsp://cam/live");
            req.headers.insert(name, value);

            let mut sink = Vec::new();
            let err = write_message(&mut sink, &req, LineEnding::Crlf).unwrap_err();
            assert!(
                matches!(&err, RtspError::InvalidHeader { name: n } if n == name),
                "{err}"
            );
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn spaces_and_colons_in_values_are_fine() {
        let req = RtspRequest::new(Method::Setup, "rtsp://cam/live/track1")
            .add_header("Content-Base", "rtsp://cam:8554/live/")
            .add_header("User-Agent", "LibVLC 3.0 (LIVE555)");
        let mut sink = Vec::new();
        assert!(write_message(&mut sink, &req, LineEnding::Crlf).is_ok());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_surfaces_as_io_error() {
        let err = write_message(&mut FailingSink, &RtspResponse::ok(), LineEnding::Crlf)
            .unwrap_err();
        assert!(matches!(err, RtspError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
