use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, CatalogEntry};
use crate::Rule;

/// Marker appended to placeholder text when a rule has no content file yet.
pub const PENDING_MARKER: &str = "(content pending)";

/// Marker appended to placeholder text when the content file could not be read.
pub const READ_FAULT_MARKER: &str = "(content could not be loaded)";

/// Why placeholder text was produced instead of file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No file at the rule's content path.
    Missing,
    /// The file exists but reading it failed (permissions, not a file, not UTF-8).
    ReadFault(io::ErrorKind),
}

/// Result of resolving one rule's content. Never an error: every failure
/// degrades to placeholder text, tagged with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOutcome {
    Loaded(String),
    Fallback { reason: FallbackReason, text: String },
}

impl ContentOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Loaded(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Loaded(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Loaded(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Turns rule ids into fully materialized `Rule`s, reading markdown from
/// `<root>/<category>/<id>.md` on every call.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    root: PathBuf,
}

impl Resolver {
    pub fn new(catalog: Catalog, root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            root: root.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// One rule per catalog entry, in catalog order.
    pub fn list_all(&self) -> Vec<Rule> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| self.materialize(entry))
            .collect()
    }

    /// `None` when `id` is not in the catalog.
    pub fn get_by_id(&self, id: &str) -> Option<Rule> {
        self.catalog.get(id).map(|entry| self.materialize(entry))
    }

    /// Path of the entry's markdown file relative to the content root.
    pub fn relative_path(entry: &CatalogEntry) -> PathBuf {
        let file = format!("{}.md", entry.id);
        match &entry.category {
            Some(key) => Path::new(key).join(file),
            None => PathBuf::from(file),
        }
    }

    pub fn content_path(&self, entry: &CatalogEntry) -> PathBuf {
        self.root.join(Self::relative_path(entry))
    }

    /// Read the entry's markdown file, falling back to placeholder text.
    pub fn resolve_content(&self, entry: &CatalogEntry) -> ContentOutcome {
        let path = self.content_path(entry);
        match fs::read_to_string(&path) {
            Ok(text) => ContentOutcome::Loaded(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(rule = %entry.id, path = %path.display(), "no content file, using placeholder");
                ContentOutcome::Fallback {
                    reason: FallbackReason::Missing,
                    text: placeholder(entry, PENDING_MARKER),
                }
            }
            Err(e) => {
                tracing::warn!(
                    rule = %entry.id,
                    path = %path.display(),
                    error = %e,
                    "failed to read rule content"
                );
                ContentOutcome::Fallback {
                    reason: FallbackReason::ReadFault(e.kind()),
                    text: placeholder(entry, READ_FAULT_MARKER),
                }
            }
        }
    }

    fn materialize(&self, entry: &CatalogEntry) -> Rule {
        Rule {
            id: entry.id.clone(),
            title: entry.title().to_string(),
            description: entry.description().to_string(),
            content: self.resolve_content(entry).into_text(),
        }
    }
}

fn placeholder(entry: &CatalogEntry, marker: &str) -> String {
    format!(
        "# {}\n\n{}\n\n{}",
        entry.title(),
        entry.description(),
        marker
    )
}
