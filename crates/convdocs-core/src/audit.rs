use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::resolver::Resolver;

/// Differences between the catalog and the markdown files under the content root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentAudit {
    /// Catalog ids with no content file, in catalog order.
    pub missing: Vec<String>,
    /// Markdown files no catalog id maps to, relative to the content root, sorted.
    pub orphaned: Vec<PathBuf>,
}

impl ContentAudit {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Drop `.` components so `./src/data` and the `src/data/...` paths glob
/// yields for it share a prefix.
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Compare the resolver's catalog with the files on disk.
pub fn audit(resolver: &Resolver) -> Result<ContentAudit> {
    let root = lexical(resolver.root());
    let walk_root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root.as_path()
    };
    let entries = resolver.catalog().entries();

    let missing = entries
        .iter()
        .filter(|e| !resolver.content_path(e).is_file())
        .map(|e| e.id.clone())
        .collect();

    let expected: HashSet<PathBuf> = entries.iter().map(Resolver::relative_path).collect();
    let pattern = format!(
        "{}/**/*.md",
        glob::Pattern::escape(&walk_root.to_string_lossy())
    );
    let mut orphaned = Vec::new();
    for found in glob::glob(&pattern)? {
        let path = match found {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable path during audit");
                continue;
            }
        };
        let path = lexical(&path);
        let Ok(relative) = path.strip_prefix(&root) else {
            tracing::warn!(
                path = %path.display(),
                root = %root.display(),
                "markdown file outside the content root, not audited"
            );
            continue;
        };
        if !expected.contains(relative) {
            orphaned.push(relative.to_path_buf());
        }
    }
    orphaned.sort();

    Ok(ContentAudit { missing, orphaned })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry, Category};
    use std::fs;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Category {
                key: "backend".into(),
                label: "Backend".into(),
            }],
            vec![
                CatalogEntry::new("03-entities", "Entities", "").in_category("backend"),
                CatalogEntry::new("05-services", "Services", "").in_category("backend"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn reports_missing_and_orphaned_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("backend")).unwrap();
        fs::write(dir.path().join("backend/03-entities.md"), "x").unwrap();
        fs::write(dir.path().join("backend/99-stale.md"), "x").unwrap();
        fs::write(dir.path().join("05-services.md"), "x").unwrap();
        fs::write(dir.path().join("backend/notes.txt"), "ignored").unwrap();

        let report = audit(&Resolver::new(catalog(), dir.path())).unwrap();
        assert_eq!(report.missing, vec!["05-services".to_string()]);
        assert_eq!(
            report.orphaned,
            vec![PathBuf::from("05-services.md"), PathBuf::from("backend/99-stale.md")]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn complete_tree_is_clean() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("backend")).unwrap();
        fs::write(dir.path().join("backend/03-entities.md"), "x").unwrap();
        fs::write(dir.path().join("backend/05-services.md"), "x").unwrap();

        let report = audit(&Resolver::new(catalog(), dir.path())).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn relative_root_still_reports_orphans() {
        // Unit tests run from the crate directory, so this root is relative to it.
        let dir = tempfile::tempdir_in(".").unwrap();
        let name = dir.path().file_name().unwrap();
        fs::create_dir_all(dir.path().join("data/backend")).unwrap();
        fs::write(dir.path().join("data/backend/03-entities.md"), "x").unwrap();
        fs::write(dir.path().join("data/backend/99-stale.md"), "x").unwrap();

        let root = Path::new(".").join(name).join("data");
        let report = audit(&Resolver::new(catalog(), root)).unwrap();
        assert_eq!(report.missing, vec!["05-services".to_string()]);
        assert_eq!(report.orphaned, vec![PathBuf::from("backend/99-stale.md")]);
    }

    #[test]
    fn missing_root_reports_everything_missing() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nowhere");

        let report = audit(&Resolver::new(catalog(), root)).unwrap();
        assert_eq!(report.missing.len(), 2);
        assert!(report.orphaned.is_empty());
    }
}
