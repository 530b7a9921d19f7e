// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use tera::{Context, Tera};

use crate::metadata::{PageMetadata, Surface};

const ROOT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ meta.title }}</title>
    <meta name="description" content="{{ meta.description }}">
    <meta name="keywords" content="{{ keywords }}">
    <link rel="canonical" href="{{ meta.base_url | safe }}">
    <meta property="og:title" content="{{ meta.title }}">
    <meta property="og:description" content="{{ meta.description }}">
{%- if og_image %}
    <meta property="og:image" content="{{ og_image.url | safe }}">
    <meta property="og:image:width" content="{{ og_image.width }}">
    <meta property="og:image:height" content="{{ og_image.height }}">
{%- endif %}
    <meta name="twitter:card" content="summary_large_image">
{%- if twitter_image %}
    <meta name="twitter:image" content="{{ twitter_image.url | safe }}">
    <meta name="twitter:image:width" content="{{ twitter_image.width }}">
    <meta name="twitter:image:height" content="{{ twitter_image.height }}">
{%- endif %}
  </head>
  <body>{{ content | safe }}</body>
</html>
"#;

/// Wraps rendered page bodies in a full HTML document.
#[derive(Clone, Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("root.html", ROOT_TEMPLATE)?;

        Ok(Self { tera })
    }

    /// Render a page. Metadata text is escaped; URLs and `contents` are inserted as-is.
    pub fn render(&self, meta: &PageMetadata, contents: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("content", contents);
        context.insert("meta", meta);
        context.insert("keywords", &meta.keywords.join(", "));
        context.insert("og_image", &meta.image(Surface::OpenGraph));
        context.insert("twitter_image", &meta.image(Surface::Twitter));

        self.tera.render("root.html", &context)
    }
}
