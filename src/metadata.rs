// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use serde::Serialize;
use url::Url;

use crate::error::ConfigurationError;

pub const TITLE: &str = "Eggy Tech Stack Docs";
pub const DESCRIPTION: &str = "Internal documentation for the Eggy engineering stack. Learn how our backend, tooling, and workflows fit together to ship features consistently.";
pub const KEYWORDS: &[&str] = &[
    "Eggy",
    "tech stack",
    "internal docs",
    "NestJS",
    "MongoDB",
    "developer onboarding",
];

const PREVIEW_WIDTH: u32 = 1200;
const PREVIEW_HEIGHT: u32 = 630;

/// Where a preview image is shown.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Open Graph, used by most link unfurlers.
    OpenGraph,
    Twitter,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::OpenGraph, Surface::Twitter];

    fn path(self) -> &'static str {
        match self {
            Surface::OpenGraph => "/opengraph-image.png",
            Surface::Twitter => "/twitter-image.png",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    pub surface: Surface,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Everything the page `<head>` is generated from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub base_url: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub preview_images: Vec<PreviewImage>,
}

impl PageMetadata {
    pub fn image(&self, surface: Surface) -> Option<&PreviewImage> {
        self.preview_images.iter().find(|image| image.surface == surface)
    }
}

/// Parse `value` as the site's public base URL.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigurationError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigurationError::Malformed {
        value: value.to_owned(),
        source,
    })?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(ConfigurationError::NotABase(value.to_owned()));
    }

    Ok(url)
}

/// Build the homepage metadata, resolving preview images against `base_url`.
pub fn build_metadata(base_url: &str) -> Result<PageMetadata, ConfigurationError> {
    let mut base = parse_base_url(base_url)?;

    // Image paths hang off the base's own path, not the host root.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let preview_images = Surface::ALL
        .into_iter()
        .map(|surface| {
            let url = base
                .join(surface.path().trim_start_matches('/'))
                .map_err(|_| ConfigurationError::NotABase(base_url.to_owned()))?;

            Ok(PreviewImage {
                surface,
                url: url.into(),
                width: PREVIEW_WIDTH,
                height: PREVIEW_HEIGHT,
            })
        })
        .collect::<Result<Vec<_>, ConfigurationError>>()?;

    Ok(PageMetadata {
        base_url: base.into(),
        title: TITLE.into(),
        description: DESCRIPTION.into(),
        keywords: KEYWORDS.iter().map(|keyword| keyword.to_string()).collect(),
        preview_images,
    })
}
