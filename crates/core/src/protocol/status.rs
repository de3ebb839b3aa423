use std::fmt;

use crate::error::{ParseErrorKind, RtspError};

/// RTSP status codes (RFC 2326 §7.1.1), plus 463 from RTSP 2.0.
///
/// The discriminant is the numeric code, so `status as u16` and
/// [`code`](Self::code) agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    Continue = 100,
    Ok = 200,
    Created = 201,
    LowOnStorageSpace = 250,
    MultipleChoices = 300,
    MovedPermanently = 301,
    MovedTemporarily = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    RequestEntityTooLarge = 413,
    RequestUriTooLarge = 414,
    UnsupportedMediaType = 415,
    ParameterNotUnderstood = 451,
    ConferenceNotFound = 452,
    NotEnoughBandwidth = 453,
    SessionNotFound = 454,
    MethodNotValidInThisState = 455,
    HeaderFieldNotValidForResource = 456,
    InvalidRange = 457,
    ParameterIsReadOnly = 458,
    AggregateOperationNotAllowed = 459,
    OnlyAggregateOperationAllowed = 460,
    UnsupportedTransport = 461,
    DestinationUnreachable = 462,
    DestinationProhibited = 463,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    RtspVersionNotSupported = 505,
    OptionNotSupported = 551,
}

impl StatusCode {
    /// Every tabulated status, in ascending code order.
    pub const ALL: [StatusCode; 45] = [
        StatusCode::Continue,
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::LowOnStorageSpace,
        StatusCode::MultipleChoices,
        StatusCode::MovedPermanently,
        StatusCode::MovedTemporarily,
        StatusCode::SeeOther,
        StatusCode::NotModified,
        StatusCode::UseProxy,
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::PaymentRequired,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
        StatusCode::NotAcceptable,
        StatusCode::ProxyAuthenticationRequired,
        StatusCode::RequestTimeout,
        StatusCode::Gone,
        StatusCode::LengthRequired,
        StatusCode::PreconditionFailed,
        StatusCode::RequestEntityTooLarge,
        StatusCode::RequestUriTooLarge,
        StatusCode::UnsupportedMediaType,
        StatusCode::ParameterNotUnderstood,
        StatusCode::ConferenceNotFound,
        StatusCode::NotEnoughBandwidth,
        StatusCode::SessionNotFound,
        StatusCode::MethodNotValidInThisState,
        StatusCode::HeaderFieldNotValidForResource,
        StatusCode::InvalidRange,
        StatusCode::ParameterIsReadOnly,
        StatusCode::AggregateOperationNotAllowed,
        StatusCode::OnlyAggregateOperationAllowed,
        StatusCode::UnsupportedTransport,
        StatusCode::DestinationUnreachable,
        StatusCode::DestinationProhibited,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
        StatusCode::BadGateway,
        StatusCode::ServiceUnavailable,
        StatusCode::GatewayTimeout,
        StatusCode::RtspVersionNotSupported,
        StatusCode::OptionNotSupported,
    ];

    /// Resolve a numeric status code. Codes outside the table are an error;
    /// no generic reason phrase is substituted.
    ///
    /// ```
    /// use rtsp::protocol::StatusCode;
    ///
    /// let status = StatusCode::from_code(454).unwrap();
    /// assert_eq!(status.reason_phrase(), "Session Not Found");
    /// assert!(StatusCode::from_code(999).is_err());
    /// ```
    pub fn from_code(code: u16) -> crate::error::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.code() == code)
            .ok_or_else(|| RtspError::parse(ParseErrorKind::UnknownStatus(i64::from(code))))
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Canonical reason phrase from RFC 2326 §7.1.1.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Continue => "Continue",
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::LowOnStorageSpace => "Low on Storage Space",
            StatusCode::MultipleChoices => "Multiple Choices",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::MovedTemporarily => "Moved Temporarily",
            StatusCode::SeeOther => "See Other",
            StatusCode::NotModified => "Not Modified",
            StatusCode::UseProxy => "Use Proxy",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::PaymentRequired => "Payment Required",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotAcceptable => "Not Acceptable",
            StatusCode::ProxyAuthenticationRequired => "Proxy Authentication Required",
            StatusCode::RequestTimeout => "Request Time-out",
            StatusCode::Gone => "Gone",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::PreconditionFailed => "Precondition Failed",
            StatusCode::RequestEntityTooLarge => "Request Entity Too Large",
            StatusCode::RequestUriTooLarge => "Request-URI Too Large",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
            StatusCode::ParameterNotUnderstood => "Parameter Not Understood",
            StatusCode::ConferenceNotFound => "Conference Not Found",
            StatusCode::NotEnoughBandwidth => "Not Enough Bandwidth",
            StatusCode::SessionNotFound => "Session Not Found",
            StatusCode::MethodNotValidInThisState => "Method Not Valid in This State",
            StatusCode::HeaderFieldNotValidForResource => "Header Field Not Valid for Resource",
            StatusCode::InvalidRange => "Invalid Range",
            StatusCode::ParameterIsReadOnly => "Parameter Is Read-Only",
            StatusCode::AggregateOperationNotAllowed => "Aggregate operation not allowed",
            StatusCode::OnlyAggregateOperationAllowed => "Only aggregate operation allowed",
            StatusCode::UnsupportedTransport => "Unsupported transport",
            StatusCode::DestinationUnreachable => "Destination unreachable",
            StatusCode::DestinationProhibited => "Destination Prohibited",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::BadGateway => "Bad Gateway",
            StatusCode::ServiceUnavailable => "Service Unavailable",
            StatusCode::GatewayTimeout => "Gateway Time-out",
            StatusCode::RtspVersionNotSupported => "RTSP Version not supported",
            StatusCode::OptionNotSupported => "Option not supported",
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code())
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_to_itself() {
        for status in StatusCode::ALL {
            let resolved = StatusCode::from_code(status.code()).unwrap();
            assert_eq!(resolved, status);
            assert_eq!(resolved.reason_phrase(), status.reason_phrase());
        }
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let codes: Vec<u16> = StatusCode::ALL.iter().map(StatusCode::code).collect();
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    const RFC_2326_TABLE: [(u16, &str); 45] = [
        (100, "Continue"),
        (200, "OK"),
        (201, "Created"),
        (250, "Low on Storage Space"),
        (300, "Multiple Choices"),
        (301, "Moved Permanently"),
        (302, "Moved Temporarily"),
        (303, "See Other"),
        (304, "Not Modified"),
        (305, "Use Proxy"),
        (400, "Bad Request"),
        (401, "Unauthorized"),
        (402, "Payment Required"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (405, "Method Not Allowed"),
        (406, "Not Acceptable"),
        (407, "Proxy Authentication Required"),
        (408, "Request Time-out"),
        (410, "Gone"),
        (411, "Length Required"),
        (412, "Precondition Failed"),
        (413, "Request Entity Too Large"),
        (414, "Request-URI Too Large"),
        (415, "Unsupported Media Type"),
        (451, "Parameter Not Understood"),
        (452, "Conference Not Found"),
        (453, "Not Enough Bandwidth"),
        (454, "Session Not Found"),
        (455, "Method Not Valid in This State"),
        (456, "Header Field Not Valid for Resource"),
        (457, "Invalid Range"),
        (458, "Parameter Is Read-Only"),
        (459, "Aggregate operation not allowed"),
        (460, "Only aggregate operation allowed"),
        (461, "Unsupported transport"),
        (462, "Destination unreachable"),
        (463, "Destination Prohibited"),
        (500, "Internal Server Error"),
        (501, "Not Implemented"),
        (502, "Bad Gateway"),
        (503, "Service Unavailable"),
        (504, "Gateway Time-out"),
        (505, "RTSP Version not supported"),
        (551, "Option not supported"),
    ];

    #[test]
    fn phrases_match_rfc_table() {
        for (code, phrase) in RFC_2326_TABLE {
            let status = StatusCode::from_code(code).unwrap();
            assert_eq!(status.code(), code);
            assert_eq!(status.reason_phrase(), phrase, "code {code}");
        }
        let codes: Vec<u16> = StatusCode::ALL.iter().map(StatusCode::code).collect();
        let table: Vec<u16> = RFC_2326_TABLE.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, table);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [0, 199, 409, 464, 999] {
            let err = StatusCode::from_code(code).unwrap_err();
            assert_eq!(
                err.kind(),
                Some(&ParseErrorKind::UnknownStatus(i64::from(code)))
            );
        }
    }

    #[test]
    fn display_and_classes() {
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
        assert!(StatusCode::Ok.is_success());
        assert!(StatusCode::SessionNotFound.is_client_error());
        assert!(StatusCode::OptionNotSupported.is_server_error());
        assert!(!StatusCode::Continue.is_success());
    }
}
