use std::io::{self, BufRead, Read};

use super::CodecConfig;
use crate::error::{ParseErrorKind, Result, RtspError};
use crate::protocol::{
    Headers, Method, RTSP_VERSION, RtspMessage, RtspRequest, RtspResponse, StatusCode,
};

const CONTENT_LENGTH: &str = "Content-Length";

/// One line pulled off the stream.
enum Line {
    /// Terminated by `\n`; the terminator and an optional `\r` are stripped.
    Complete(String),
    /// The stream ended after these bytes, before any `\n`.
    Truncated(String),
    /// The stream ended before any byte.
    End,
}

fn next_line<R: BufRead>(reader: &mut R, limit: usize) -> Result<Line> {
    let mut buf = Vec::new();
    // Room for the line plus "\r\n"; one more byte means the line is too long.
    let cap = limit.saturating_add(2);
    reader.by_ref().take(cap as u64).read_until(b'\n', &mut buf)?;

    if buf.last() != Some(&b'\n') {
        if buf.len() >= cap {
            return Err(RtspError::parse(ParseErrorKind::LineTooLong { limit }));
        }
        if buf.is_empty() {
            return Ok(Line::End);
        }
        return Ok(Line::Truncated(String::from_utf8_lossy(&buf).into_owned()));
    }

    buf.pop();
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    if buf.len() > limit {
        return Err(RtspError::parse(ParseErrorKind::LineTooLong { limit }));
    }

    String::from_utf8(buf)
        .map(Line::Complete)
        .map_err(|_| RtspError::parse(ParseErrorKind::InvalidUtf8))
}

fn start_line(line: Line, malformed: fn(String) -> ParseErrorKind) -> Result<String> {
    match line {
        Line::Complete(line) => Ok(line),
        Line::Truncated(partial) => Err(RtspError::parse(malformed(partial))),
        Line::End => Err(RtspError::parse(ParseErrorKind::EmptyMessage)),
    }
}

/// `Method SP Request-URI SP RTSP-Version`. The URI is everything between
/// the first and the last space.
fn parse_request_line(line: &str) -> Result<(Method, String, String)> {
    let malformed = || RtspError::parse(ParseErrorKind::MalformedRequestLine(line.to_string()));

    let (method, rest) = line.split_once(' ').ok_or_else(malformed)?;
    let (uri, version) = rest.rsplit_once(' ').ok_or_else(malformed)?;
    if method.is_empty() || uri.is_empty() || version.is_empty() {
        return Err(malformed());
    }

    let method = Method::parse(method)?;
    Ok((method, uri.to_string(), version.to_string()))
}

/// `RTSP-Version SP Status-Code SP Reason-Phrase`. The reason phrase is the
/// remainder of the line and may contain spaces; it is not kept.
fn parse_status_line(line: &str) -> Result<(String, StatusCode)> {
    let malformed = || RtspError::parse(ParseErrorKind::MalformedStatusLine(line.to_string()));

    let mut parts = line.splitn(3, ' ');
    let (Some(version), Some(code), Some(_reason)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    if version.is_empty() {
        return Err(malformed());
    }

    // Any integer is a status code; only the table decides whether it is known.
    let code: i64 = code.parse().map_err(|_| malformed())?;
    let status = u16::try_from(code)
        .map_err(|_| RtspError::parse(ParseErrorKind::UnknownStatus(code)))
        .and_then(StatusCode::from_code)?;
    Ok((version.to_string(), status))
}

fn read_headers<R: BufRead>(reader: &mut R, config: &CodecConfig) -> Result<Headers> {
    let mut headers = Headers::new();

    loop {
        let line = match next_line(reader, config.max_line_len)? {
            Line::Complete(line) => line,
            Line::Truncated(_) | Line::End => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended before the end of the header block",
                )
                .into());
            }
        };

        if line.is_empty() {
            break;
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| RtspError::parse(ParseErrorKind::MalformedHeader(line.clone())))?;
        let (name, value) = (name.trim(), value.trim());

        tracing::trace!(name, value, "header");
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Reads up to `len` bytes; fewer only if the stream ends first.
fn read_body<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut body)?;
    Ok(body)
}

fn check_body_limit(declared: usize, config: &CodecConfig) -> Result<()> {
    if declared > config.max_body_len {
        return Err(RtspError::parse(ParseErrorKind::BodyTooLarge {
            declared,
            limit: config.max_body_len,
        }));
    }
    Ok(())
}

fn check_version(version: &str) {
    if version != RTSP_VERSION {
        tracing::warn!(version, "peer sent non-RTSP/1.0 version");
    }
}

pub(crate) fn read_request<R: BufRead>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<RtspRequest> {
    let line = start_line(
        next_line(reader, config.max_line_len)?,
        ParseErrorKind::MalformedRequestLine,
    )?;
    finish_request(&line, reader, config)
}

pub(crate) fn read_response<R: BufRead>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<RtspResponse> {
    let line = start_line(
        next_line(reader, config.max_line_len)?,
        ParseErrorKind::MalformedStatusLine,
    )?;
    finish_response(&line, reader, config)
}

pub(crate) fn read_message<R: BufRead>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<RtspMessage> {
    let line = match next_line(reader, config.max_line_len)? {
        Line::Truncated(partial) if partial.starts_with("RTSP/") => {
            return Err(RtspError::parse(ParseErrorKind::MalformedStatusLine(partial)));
        }
        line => start_line(line, ParseErrorKind::MalformedRequestLine)?,
    };

    if line.starts_with("RTSP/") {
        finish_response(&line, reader, config).map(RtspMessage::Response)
    } else {
        finish_request(&line, reader, config).map(RtspMessage::Request)
    }
}

fn finish_request<R: BufRead>(
    line: &str,
    reader: &mut R,
    config: &CodecConfig,
) -> Result<RtspRequest> {
    let (method, uri, version) = parse_request_line(line)?;
    check_version(&version);

    let headers = read_headers(reader, config)?;
    let mut request = RtspRequest {
        method,
        uri,
        version,
        headers,
        body: Vec::new(),
    };

    if let Some(value) = request.headers.get(CONTENT_LENGTH) {
        // Requests are read leniently: an unparsable length means no body.
        let declared = value.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(value, "ignoring malformed Content-Length on request");
            0
        });
        check_body_limit(declared, config)?;

        request.body = read_body(reader, declared)?;
        if request.body.len() < declared {
            tracing::warn!(
                declared,
                received = request.body.len(),
                "request body truncated by end of stream"
            );
        }
    }

    tracing::debug!(
        method = %request.method,
        uri = %request.uri,
        version = %request.version,
        headers = request.headers.len(),
        body_len = request.body.len(),
        "read request"
    );
    Ok(request)
}

fn finish_response<R: BufRead>(
    line: &str,
    reader: &mut R,
    config: &CodecConfig,
) -> Result<RtspResponse> {
    let (version, status) = parse_status_line(line)?;
    check_version(&version);

    let headers = read_headers(reader, config)?;
    let mut response = RtspResponse {
        status,
        version,
        headers,
        body: Vec::new(),
    };

    if let Some(value) = response.headers.get(CONTENT_LENGTH) {
        let declared = value.parse::<usize>().map_err(|_| {
            RtspError::parse(ParseErrorKind::MalformedContentLength(value.to_string()))
        })?;
        check_body_limit(declared, config)?;

        response.body = read_body(reader, declared)?;
        let received = response.body.len();
        if received < declared {
            return Err(RtspError::IncompleteBody {
                expected: declared,
                received,
                partial: Box::new(response),
            });
        }
    }

    tracing::debug!(
        status = response.status.code(),
        version = %response.version,
        headers = response.headers.len(),
        body_len = response.body.len(),
        "read response"
    );
    Ok(response)
}
