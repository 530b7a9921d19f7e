use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigurationError, MalformedEntryError},
    metadata::parse_base_url,
    nav::{entries_from_raw, validate_entries, NavigationEntry, RawEntry, NAV_SECTIONS},
};

/// Environment variable holding the public site URL.
pub const SITE_URL_VAR: &str = "EGGY_SITE_URL";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Config {
    pub site_url: Option<String>,
    pub sections: Option<Vec<RawEntry>>,
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(content)
            .map_err(|err| ConfigurationError::Parse(path.to_owned(), err))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigurationError::Io(path.to_owned(), err))?;

        Self::parse(&content, path)
    }

    /// Let `site_url` from the environment win over the file.
    pub fn with_site_url(mut self, site_url: Option<String>) -> Self {
        if let Some(site_url) = site_url.filter(|url| !url.trim().is_empty()) {
            self.site_url = Some(site_url);
        }
        self
    }

    pub fn with_env(self) -> Self {
        self.with_site_url(std::env::var(SITE_URL_VAR).ok())
    }

    /// The configured base URL, checked to be absolute.
    pub fn site_url(&self) -> Result<&str, ConfigurationError> {
        let site_url = self.site_url.as_deref().ok_or(ConfigurationError::Missing)?;
        parse_base_url(site_url)?;

        Ok(site_url)
    }

    /// Sections from the file, or the built-in ones.
    pub fn sections(&self) -> Result<Vec<NavigationEntry>, MalformedEntryError> {
        let entries = match &self.sections {
            Some(raw) => entries_from_raw(raw.clone())?,
            None => NAV_SECTIONS.to_vec(),
        };
        validate_entries(&entries)?;

        Ok(entries)
    }
}

#[cfg(test)]
mod test {
    use std::{path::Path, sync::Mutex};

    use super::*;

    // Tests that touch the process environment take this first.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn parse(content: &str) -> Config {
        Config::parse(content, Path::new("eggy.yaml")).unwrap()
    }

    #[test]
    fn defaults_to_builtin_sections() {
        let config = parse("site_url: https://docs.example.com\n");

        assert_eq!(config.site_url().unwrap(), "https://docs.example.com");
        assert_eq!(config.sections().unwrap(), NAV_SECTIONS.to_vec());
    }

    #[test]
    fn env_overrides_file() {
        let config = parse("site_url: https://old.example.com\n")
            .with_site_url(Some("https://docs.example.com".into()));
        assert_eq!(config.site_url().unwrap(), "https://docs.example.com");

        let config = parse("site_url: https://old.example.com\n").with_site_url(Some("".into()));
        assert_eq!(config.site_url().unwrap(), "https://old.example.com");
    }

    #[test]
    fn reads_site_url_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());

        std::env::set_var(SITE_URL_VAR, "https://env.example.com");
        let config = parse("site_url: https://old.example.com\n").with_env();
        std::env::remove_var(SITE_URL_VAR);
        assert_eq!(config.site_url().unwrap(), "https://env.example.com");

        let config = parse("site_url: https://old.example.com\n").with_env();
        assert_eq!(config.site_url().unwrap(), "https://old.example.com");
    }

    #[test]
    fn missing_site_url() {
        assert!(matches!(
            Config::default().with_site_url(None).site_url(),
            Err(ConfigurationError::Missing)
        ));
        assert!(matches!(
            parse("site_url: not-a-url\n").site_url(),
            Err(ConfigurationError::Malformed { .. })
        ));
    }

    #[test]
    fn sections_from_file() {
        let config = parse(
            "sections:\n  - title: Runbooks\n    description: On-call procedures.\n    href: /docs/runbooks\n",
        );
        let sections = config.sections().unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Runbooks");
    }

    #[test]
    fn malformed_section_in_file() {
        let config = parse(
            "sections:\n  - {title: A, description: Fine., href: /a}\n  - {title: B, href: /b}\n",
        );

        assert_eq!(
            config.sections(),
            Err(MalformedEntryError::new(1, "description", "missing"))
        );
    }

    #[test]
    fn invalid_yaml() {
        assert!(matches!(
            Config::parse("site_url: [", Path::new("eggy.yaml")),
            Err(ConfigurationError::Parse(..))
        ));
    }
}
