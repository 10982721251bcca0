use std::collections::HashSet;
use std::fs;

use convdocs_core::{Catalog, CatalogEntry, FallbackReason, Resolver, Rule};
use tempfile::tempdir;

fn seeded_resolver(dir: &std::path::Path) -> Resolver {
    let resolver = Resolver::new(Catalog::builtin(), dir);
    // Give half of the rules real content so both paths are exercised.
    for entry in resolver.catalog().entries().iter().step_by(2) {
        let path = resolver.content_path(entry);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("# {}\n\nreal body for {}\n", entry.title(), entry.id)).unwrap();
    }
    resolver
}

#[test]
fn get_by_id_matches_catalog_metadata_for_every_id() {
    let dir = tempdir().unwrap();
    let resolver = seeded_resolver(dir.path());

    for entry in resolver.catalog().entries() {
        let rule = resolver.get_by_id(&entry.id).unwrap();
        assert_eq!(rule.id, entry.id);
        assert_eq!(rule.title, entry.title());
        assert_eq!(rule.description, entry.description());
    }
}

#[test]
fn unknown_ids_are_absent() {
    let dir = tempdir().unwrap();
    let resolver = seeded_resolver(dir.path());

    for id in [
        "",
        "does-not-exist",
        "01-directory-structure.md",
        "frontend/01-directory-structure",
        "01-DIRECTORY-STRUCTURE",
    ] {
        assert!(resolver.get_by_id(id).is_none(), "{id:?} resolved");
    }
}

#[test]
fn list_all_has_one_rule_per_entry_in_order() {
    let dir = tempdir().unwrap();
    let resolver = seeded_resolver(dir.path());

    let rules = resolver.list_all();
    assert_eq!(rules.len(), resolver.catalog().len());

    let unique: HashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(unique.len(), rules.len());

    for (rule, id) in rules.iter().zip(resolver.catalog().ids()) {
        assert_eq!(rule.id, id);
        assert_eq!(Some(rule), resolver.get_by_id(id).as_ref());
    }
}

#[test]
fn missing_content_contains_title_description_and_marker() {
    let dir = tempdir().unwrap();
    let resolver = seeded_resolver(dir.path());

    for entry in resolver.catalog().entries().iter().skip(1).step_by(2) {
        let outcome = resolver.resolve_content(entry);
        assert_eq!(outcome.fallback_reason(), Some(&FallbackReason::Missing));
        let text = outcome.text();
        assert!(text.contains(entry.title()));
        assert!(text.contains(entry.description()));
        assert!(text.contains("(content pending)"));
    }
}

#[test]
fn repeated_reads_are_byte_identical() {
    let dir = tempdir().unwrap();
    let resolver = seeded_resolver(dir.path());

    for id in resolver.catalog().ids() {
        let a = resolver.get_by_id(id).unwrap().content;
        let b = resolver.get_by_id(id).unwrap().content;
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}

#[test]
fn naming_convention_scenario() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::new(
        vec![],
        vec![CatalogEntry::new("naming-convention", "Naming", "Naming rules")],
    )
    .unwrap();
    let resolver = Resolver::new(catalog, dir.path());

    assert_eq!(
        resolver.get_by_id("naming-convention"),
        Some(Rule {
            id: "naming-convention".to_string(),
            title: "Naming".to_string(),
            description: "Naming rules".to_string(),
            content: "# Naming\n\nNaming rules\n\n(content pending)".to_string(),
        })
    );
    assert_eq!(resolver.get_by_id("does-not-exist"), None);
}

#[test]
fn rule_serializes_with_exactly_four_keys() {
    let rule = Rule {
        id: "a".into(),
        title: "A".into(),
        description: "d".into(),
        content: "c".into(),
    };
    assert_eq!(
        serde_json::to_value(&rule).unwrap(),
        serde_json::json!({"id": "a", "title": "A", "description": "d", "content": "c"})
    );
}
