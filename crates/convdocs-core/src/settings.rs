use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};
use crate::resolver::Resolver;

/// File name looked up in the project directory when no explicit path is given.
pub const SETTINGS_FILE: &str = "convdocs.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Directory holding `<category>/<id>.md` files.
    pub content_root: PathBuf,
    /// Catalog file; the built-in catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub site_title: String,
    pub site_description: String,
    pub sidebar_title: String,
    /// Prefix for every generated link, e.g. "/docs/" when hosted under a subpath.
    pub base_path: String,
    pub out_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("src/data"),
            catalog: None,
            site_title: "Conv.docs".to_string(),
            site_description: "A collection of coding conventions. This project follows them too."
                .to_string(),
            sidebar_title: "Coding Rules".to_string(),
            base_path: "/".to_string(),
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl Settings {
    /// Load an explicit settings file. Relative paths inside it resolve
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let settings: Self = serde_json::from_str(&raw)
            .map_err(|e| CoreError::parse(path.display().to_string(), e))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(settings.anchored_at(base))
    }

    /// Load `<dir>/convdocs.json` if present, otherwise defaults anchored at `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no settings file, using defaults");
            Ok(Self::default().anchored_at(dir))
        }
    }

    fn anchored_at(mut self, base: &Path) -> Self {
        self.content_root = base.join(&self.content_root);
        self.out_dir = base.join(&self.out_dir);
        self.catalog = self.catalog.map(|c| base.join(c));
        if !self.base_path.ends_with('/') {
            self.base_path.push('/');
        }
        self
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn resolver(&self) -> Result<Resolver> {
        Ok(Resolver::new(self.load_catalog()?, &self.content_root))
    }
}
