pub mod audit;
pub mod catalog;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use audit::{audit, ContentAudit};
pub use catalog::{Catalog, CatalogEntry, Category};
pub use error::{CoreError, Result};
pub use resolver::{ContentOutcome, FallbackReason, Resolver};
pub use settings::Settings;

// --- Types ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub title: String,
    pub description: String,
}

/// A rule with its content resolved. Built fresh by every resolver call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
}
