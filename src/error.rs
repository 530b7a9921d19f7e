use std::path::PathBuf;
use thiserror::Error;

/// The site's public base URL (or the file it comes from) is unusable.
///
/// Always fatal: the page must not be built in this state.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("site base URL is not configured (set `EGGY_SITE_URL` or `site_url`)")]
    Missing,

    #[error("site base URL `{value}` is not an absolute URL")]
    Malformed {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("site base URL `{0}` cannot be used to resolve relative paths")]
    NotABase(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` is not valid YAML")]
    Parse(PathBuf, #[source] serde_yaml::Error),
}

/// A navigation entry is missing a field or has an unusable value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("navigation entry #{index} has a bad `{field}`: {reason}")]
pub struct MalformedEntryError {
    pub index: usize,
    pub field: &'static str,
    pub reason: String,
}

impl MalformedEntryError {
    pub fn new(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            index,
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = MalformedEntryError::new(1, "href", "missing");
        assert_eq!(
            err.to_string(),
            "navigation entry #1 has a bad `href`: missing"
        );

        let err = ConfigurationError::NotABase("mailto:team@eggy.dev".into());
        assert!(err.to_string().contains("mailto:team@eggy.dev"));
        assert!(ConfigurationError::Missing
            .to_string()
            .contains("EGGY_SITE_URL"));
    }
}
