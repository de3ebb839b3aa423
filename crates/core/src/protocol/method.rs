use std::fmt;
use std::str::FromStr;

use crate::error::{ParseErrorKind, RtspError};

/// RTSP request methods (RFC 2326 §10).
///
/// Tokens are matched case-sensitively, exactly as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Options,
    Describe,
    Announce,
    Setup,
    Play,
    Pause,
    Teardown,
    GetParameter,
    SetParameter,
    Redirect,
    Record,
}

impl Method {
    /// Every method, in RFC 2326 §10 order.
    pub const ALL: [Method; 11] = [
        Method::Options,
        Method::Describe,
        Method::Announce,
        Method::Setup,
        Method::Play,
        Method::Pause,
        Method::Teardown,
        Method::GetParameter,
        Method::SetParameter,
        Method::Redirect,
        Method::Record,
    ];

    /// Resolve a wire token.
    ///
    /// ```
    /// use rtsp::protocol::Method;
    ///
    /// assert_eq!(Method::parse("SETUP").unwrap(), Method::Setup);
    /// assert!(Method::parse("setup").is_err());
    /// ```
    pub fn parse(token: &str) -> crate::error::Result<Self> {
        let method = match token {
            "OPTIONS" => Method::Options,
            "DESCRIBE" => Method::Describe,
            "ANNOUNCE" => Method::Announce,
            "SETUP" => Method::Setup,
            "PLAY" => Method::Play,
            "PAUSE" => Method::Pause,
            "TEARDOWN" => Method::Teardown,
            "GET_PARAMETER" => Method::GetParameter,
            "SET_PARAMETER" => Method::SetParameter,
            "REDIRECT" => Method::Redirect,
            "RECORD" => Method::Record,
            _ => {
                return Err(RtspError::parse(ParseErrorKind::UnknownMethod(
                    token.to_string(),
                )));
            }
        };
        Ok(method)
    }

    /// The uppercase wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Options => "OPTIONS",
            Method::Describe => "DESCRIBE",
            Method::Announce => "ANNOUNCE",
            Method::Setup => "SETUP",
            Method::Play => "PLAY",
            Method::Pause => "PAUSE",
            Method::Teardown => "TEARDOWN",
            Method::GetParameter => "GET_PARAMETER",
            Method::SetParameter => "SET_PARAMETER",
            Method::Redirect => "REDIRECT",
            Method::Record => "RECORD",
        }
    }
}

impl FromStr for Method {
    type Err = RtspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::parse(s)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_resolves_from_its_token() {
        for method in Method::ALL {
            assert_eq!(Method::parse(method.as_str()).unwrap(), method);
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = Method::parse("FOO").unwrap_err();
        assert_eq!(
            err.kind(),
            Some(&ParseErrorKind::UnknownMethod("FOO".to_string()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(Method::parse("Options").is_err());
        assert!(Method::parse("get_parameter").is_err());
    }
}
