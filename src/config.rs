use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::render::RenderOptions;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub image: ImageConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// URIs starting with one of these are external links.
    pub external_prefixes: Vec<String>,
    /// Class attribute put on painted links.
    pub class: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            external_prefixes: vec!["http".to_string()],
            class: "u".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub wrapper_class: String,
    pub sizes: String,
    /// Widths offered in `srcset`. Empty disables it.
    pub widths: Vec<u32>,
    pub format: String,
    pub quality_mobile: u8,
    pub quality_desktop: u8,
    /// Requests narrower than this use `quality_mobile`.
    pub mobile_breakpoint: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            wrapper_class: "image-wrapper".to_string(),
            sizes: "50vw".to_string(),
            widths: Vec::new(),
            format: "webp".to_string(),
            quality_mobile: 40,
            quality_desktop: 60,
            mobile_breakpoint: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    pub resolve_asset_hyperlinks: bool,
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        // build.rs checks every key and value type of the bundled file.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the bundled defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            external_prefixes: self.links.external_prefixes.clone(),
            image_sizes: self.image.sizes.clone(),
            resolve_asset_hyperlinks: self.render.resolve_asset_hyperlinks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_file_deserializes() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
        assert_eq!(Config::default().render_options(), RenderOptions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("richdoc.toml");
        fs::write(
            &path,
            "[links]\nexternal_prefixes = [\"http\", \"mailto:\"]\n\n[image]\nwidths = [640, 1080]\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.links.external_prefixes, ["http", "mailto:"]);
        assert_eq!(config.links.class, "u");
        assert_eq!(config.image.widths, [640, 1080]);
        assert_eq!(config.image.quality_desktop, 60);
        assert!(!config.render.resolve_asset_hyperlinks);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[image]\nwidths = \"wide\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Config { .. })));
    }
}
