use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    config::Config,
    metadata::{build_metadata, PageMetadata},
    nav::NavigationEntry,
    page::render_content,
    template::Templates,
};

fn writeable(path: &Path) -> std::io::Result<std::fs::File> {
    use std::fs::{create_dir_all, File};

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    File::create(path)
}

/// The homepage with all of its inputs resolved.
///
/// Everything that can fail on bad configuration fails in [`Site::new`].
pub struct Site {
    metadata: PageMetadata,
    sections: Vec<NavigationEntry>,
    templates: Templates,
}

impl Site {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let site_url = config.site_url()?;
        log::debug!("Using site URL `{}`", site_url);

        let metadata = build_metadata(site_url)?;
        let sections = config.sections()?;
        log::debug!("{} navigation section(s)", sections.len());

        Ok(Self {
            metadata,
            sections,
            templates: Templates::new().context("Failed to load page templates")?,
        })
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn sections(&self) -> &[NavigationEntry] {
        &self.sections
    }

    /// Render the full homepage document.
    pub fn render_home(&self) -> anyhow::Result<String> {
        let body = render_content(&self.sections).to_html();

        self.templates
            .render(&self.metadata, &body)
            .context("Failed to render the homepage")
    }

    /// Write `index.html` into `dest`, returning its path.
    pub fn build(&self, dest: &Path) -> anyhow::Result<PathBuf> {
        let out = self.render_home()?;
        let index = dest.join("index.html");

        log::info!("Writing homepage to {:?}", index);
        writeable(&index)
            .and_then(|mut file| file.write_all(out.as_bytes()))
            .with_context(|| format!("Failed to write {:?}", index))?;

        Ok(index)
    }
}
