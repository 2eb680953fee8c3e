use crate::error::InvalidUrlError;
use std::fmt::Display;
use url::Url;

/// Scheme prepended to inputs that do not carry one.
pub const DEFAULT_SCHEME: &str = "http";

/// A validated, normalized absolute URL that can be shortened.
///
/// Parsing trims surrounding whitespace, prepends [`DEFAULT_SCHEME`] when the
/// input does not start with a `scheme://` prefix, and requires an `http` or
/// `https` scheme with a host.
/// The normalized serialization is what gets hashed and stored, so
/// `example.com/page` and `http://example.com/page` shorten identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(Url);

impl TargetUrl {
    pub fn parse(input: &str) -> Result<Self, InvalidUrlError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidUrlError("URL cannot be empty".to_string()));
        }

        let candidate = if has_scheme(trimmed) {
            trimmed.to_string()
        } else {
            format!("{DEFAULT_SCHEME}://{trimmed}")
        };

        let url = Url::parse(&candidate)
            .map_err(|e| InvalidUrlError(format!("{}: {}", trimmed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(InvalidUrlError(format!(
                "URL scheme must be http or https: {}",
                url.scheme()
            )));
        }

        if !url.has_host() {
            return Err(InvalidUrlError(format!("URL must have a host: {}", trimmed)));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Whether `input` starts with `scheme://`, where the scheme is an ASCII
/// letter followed by letters, digits, `+`, `-` or `.`.
///
/// A `://` later in the input (e.g. inside a query string) does not count.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
