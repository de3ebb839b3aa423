/// Ordered RTSP header fields.
///
/// Names are stored as received; lookups are case-insensitive per
/// RFC 2326 §4.2. [`insert`](Self::insert) keeps one value per name (the
/// latest one wins, at the position of the first occurrence), while
/// [`append`](Self::append) keeps repeated fields such as
/// `WWW-Authenticate`.
///
/// Names and values are stored unchecked. Writing a message fails with
/// [`RtspError::InvalidHeader`](crate::error::RtspError::InvalidHeader) if a
/// name is empty or contains a colon, or if either contains CR or LF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any existing field with that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        let Some(index) = self
            .entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(&name))
        else {
            self.entries.push((name, value));
            return;
        };

        // Drop any later repeats added through `append`.
        let mut position = 0;
        self.entries.retain(|(key, _)| {
            let keep = position <= index || !key.eq_ignore_ascii_case(&name);
            position += 1;
            keep
        });
        self.entries[index] = (name, value);
    }

    /// Add a field without touching existing fields of the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value for `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Every value for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove every field named `name`, returning the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut removed = None;
        self.entries.retain_mut(|(key, value)| {
            if key.eq_ignore_ascii_case(name) {
                if removed.is_none() {
                    removed = Some(std::mem::take(value));
                }
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("cseq", "42");
        assert_eq!(headers.get("CSeq"), Some("42"));
        assert_eq!(headers.get("CSEQ"), Some("42"));
        assert!(headers.contains("cSeQ"));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut headers = Headers::new();
        headers.insert("CSeq", "1");
        headers.insert("Session", "abc");
        headers.insert("CSeq", "2");

        let fields: Vec<_> = headers.iter().collect();
        assert_eq!(fields, vec![("CSeq", "2"), ("Session", "abc")]);
    }

    #[test]
    fn insert_keeps_latest_spelling() {
        let mut headers = Headers::new();
        headers.insert("content-type", "text/plain");
        headers.insert("Content-Type", "application/sdp");
        assert_eq!(headers.iter().next(), Some(("Content-Type", "application/sdp")));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn append_keeps_repeats() {
        let mut headers = Headers::new();
        headers.append("WWW-Authenticate", "Basic realm=\"a\"");
        headers.append("WWW-Authenticate", "Digest realm=\"b\"");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("www-authenticate"), Some("Basic realm=\"a\""));
        assert_eq!(
            headers.get_all("WWW-Authenticate").collect::<Vec<_>>(),
            vec!["Basic realm=\"a\"", "Digest realm=\"b\""]
        );

        headers.insert("WWW-Authenticate", "None");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("WWW-Authenticate"), Some("None"));
    }

    #[test]
    fn remove_drops_all_matches() {
        let mut headers: Headers = [("CSeq", "1"), ("Session", "x")].into_iter().collect();
        headers.append("session", "y");
        assert_eq!(headers.remove("SESSION"), Some("x".to_string()));
        assert!(!headers.contains("Session"));
        assert_eq!(headers.len(), 1);
    }
}
