use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::rules;
use crate::RuleMetadata;

/// A named group of rules. `key` is also the content subdirectory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

/// One catalog row: a rule id, its metadata, and the category it belongs to.
///
/// Carries no content. Resolving content is an explicit call on the
/// `Resolver`, so equality and serialization never depend on disk state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub metadata: RuleMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            metadata: RuleMetadata {
                title: title.into(),
                description: description.into(),
            },
            category: None,
        }
    }

    pub fn in_category(mut self, key: impl Into<String>) -> Self {
        self.category = Some(key.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }
}

/// The immutable, ordered set of known rules.
///
/// Built once at startup and handed to the resolver. Order is significant:
/// listings and navigation follow it exactly.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

/// Ids and category keys become path components, so they must be plain file stems.
fn is_valid_stem(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('.')
        && !s
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace() || c.is_control())
}

impl Catalog {
    /// Build a catalog, validating ids, category keys and category references.
    pub fn new(categories: Vec<Category>, entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut keys = HashSet::new();
        for category in &categories {
            if !is_valid_stem(&category.key) {
                return Err(CoreError::InvalidCategoryKey(category.key.clone()));
            }
            if !keys.insert(category.key.as_str()) {
                return Err(CoreError::DuplicateCategory(category.key.clone()));
            }
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if !is_valid_stem(&entry.id) {
                return Err(CoreError::InvalidRuleId(entry.id.clone()));
            }
            if let Some(category) = &entry.category {
                if !keys.contains(category.as_str()) {
                    return Err(CoreError::UnknownCategory {
                        id: entry.id.clone(),
                        category: category.clone(),
                    });
                }
            }
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CoreError::DuplicateRule(entry.id.clone()));
            }
        }

        Ok(Self {
            categories,
            entries,
            index,
        })
    }

    /// The catalog shipped with convdocs: frontend rules, then backend rules.
    pub fn builtin() -> Self {
        let categories = rules::CATEGORIES
            .iter()
            .map(|(key, label, _)| Category {
                key: key.to_string(),
                label: label.to_string(),
            })
            .collect();
        let entries: Vec<CatalogEntry> = rules::CATEGORIES
            .iter()
            .flat_map(|(key, _, rows)| {
                rows.iter()
                    .map(move |(id, title, description)| {
                        CatalogEntry::new(*id, *title, *description).in_category(*key)
                    })
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self {
            categories,
            entries,
            index,
        }
    }

    /// Parse a catalog file. Categorized rules come first, in file order,
    /// followed by the top-level uncategorized `rules`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(raw).map_err(|e| CoreError::parse("catalog", e))?;

        let mut categories = Vec::with_capacity(file.categories.len());
        let mut entries = Vec::new();
        for cat in file.categories {
            for rule in cat.rules {
                entries.push(rule.into_entry(Some(&cat.key)));
            }
            categories.push(Category {
                label: cat.label.unwrap_or_else(|| cat.key.clone()),
                key: cat.key,
            });
        }
        entries.extend(file.rules.into_iter().map(|r| r.into_entry(None)));

        Self::new(categories, entries)
    }

    /// Read and parse a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), rules = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn metadata(&self, id: &str) -> Option<&RuleMetadata> {
        self.get(id).map(|e| &e.metadata)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn category_of(&self, id: &str) -> Option<&Category> {
        let key = self.get(id)?.category.as_deref()?;
        self.category(key)
    }

    /// Entries of one category, in catalog order.
    pub fn entries_in<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.category.as_deref() == Some(key))
    }

    /// Entries that belong to no category, in catalog order.
    pub fn uncategorized(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.category.is_none())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- File format ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryFile>,
    #[serde(default)]
    rules: Vec<RuleFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryFile {
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    rules: Vec<RuleFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

impl RuleFile {
    fn into_entry(self, category: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            metadata: RuleMetadata {
                title: self.title,
                description: self.description,
            },
            category: category.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming() -> CatalogEntry {
        CatalogEntry::new("naming-convention", "Naming", "Naming rules")
    }

    #[test]
    fn builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.categories().to_vec(), builtin.entries().to_vec())
            .expect("builtin catalog must be valid");
        assert_eq!(rebuilt.len(), 17);
        assert_eq!(rebuilt.ids().collect::<Vec<_>>(), builtin.ids().collect::<Vec<_>>());
    }

    #[test]
    fn builtin_lists_frontend_before_backend() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids.first(), Some(&"01-directory-structure"));
        assert_eq!(ids[6], "07-typescript-usage");
        assert_eq!(ids[7], "01-general-principles");
        assert_eq!(ids.last(), Some(&"10-java-spring-best-practices"));
        assert_eq!(catalog.entries_in("frontend").count(), 7);
        assert_eq!(catalog.entries_in("backend").count(), 10);
        assert_eq!(catalog.uncategorized().count(), 0);
    }

    #[test]
    fn lookup_covers_exactly_the_id_sequence() {
        let catalog = Catalog::builtin();
        for id in catalog.ids() {
            let meta = catalog.metadata(id).unwrap();
            assert!(!meta.title.is_empty());
        }
        assert!(catalog.get("does-not-exist").is_none());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn category_of_resolves_label() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_of("06-dtos").unwrap().label, "Backend");
        assert!(catalog.category_of("nope").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![], vec![naming(), naming()]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateRule(id) if id == "naming-convention"));
    }

    #[test]
    fn rejects_ids_that_are_not_file_stems() {
        for bad in ["", "../etc", "a/b", ".hidden", "has space"] {
            let err = Catalog::new(vec![], vec![CatalogEntry::new(bad, "t", "d")]).unwrap_err();
            assert!(matches!(err, CoreError::InvalidRuleId(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_unknown_and_duplicate_categories() {
        let err = Catalog::new(vec![], vec![naming().in_category("frontend")]).unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory { .. }));

        let cat = Category {
            key: "frontend".into(),
            label: "Frontend".into(),
        };
        let err = Catalog::new(vec![cat.clone(), cat], vec![]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCategory(_)));
    }

    #[test]
    fn from_json_orders_categories_then_uncategorized() {
        let raw = r#"{
            "categories": [
                {"key": "backend", "label": "Backend", "rules": [
                    {"id": "b1", "title": "B1", "description": "first backend"}
                ]},
                {"key": "frontend", "rules": [
                    {"id": "f1", "title": "F1"}
                ]}
            ],
            "rules": [{"id": "loose", "title": "Loose", "description": "no category"}]
        }"#;
        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["b1", "f1", "loose"]);
        assert_eq!(catalog.category("frontend").unwrap().label, "frontend");
        assert_eq!(catalog.get("f1").unwrap().description(), "");
        assert_eq!(catalog.get("loose").unwrap().category, None);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = Catalog::from_json(r#"{"rules": [], "extra": 1}"#).unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
    }

    #[test]
    fn entry_serializes_flat() {
        let json = serde_json::to_value(naming().in_category("frontend")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "naming-convention",
                "title": "Naming",
                "description": "Naming rules",
                "category": "frontend",
            })
        );
    }
}
