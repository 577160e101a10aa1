use std::fmt::{self, Display};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query keys and values, matching what browsers
/// leave unescaped in `application/x-www-form-urlencoded` output
const QUERY_COMPONENT: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'*');

/// Ordered list of query parameters
///
/// Keys may repeat (`interests=ai&interests=web`) and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<K: Into<String>, V: Display>(mut self, key: K, value: V) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends the pair only when a value is present
    pub fn append_opt<K: Into<String>, V: Display>(self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => self.append(key, value),
            None => self,
        }
    }

    /// Appends one `key=value` pair per item, in iteration order
    pub fn append_all<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Display,
    {
        let key = key.into();
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Appends the encoded query to `path`, adding a `?` only when there is something to add
    pub fn to_path(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{self}")
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                utf8_percent_encode(key, QUERY_COMPONENT),
                utf8_percent_encode(value, QUERY_COMPONENT)
            )?;
        }
        Ok(())
    }
}
