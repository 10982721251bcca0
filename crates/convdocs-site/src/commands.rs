//! Bodies of the `convdocs` subcommands. Each writes its report to `out`
//! and its complaints to `err`, and says whether the command succeeded.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use convdocs_core::{audit, Settings};

use crate::error::Result;
use crate::generate::generate;
use crate::site::Site;

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn build(settings: Settings, out_dir: &Path, out: &mut impl Write) -> Result<Status> {
    let site = Site::from_settings(settings)?;
    let report = generate(&site, out_dir)?;
    for id in &report.pending {
        tracing::info!(rule = %id, "content pending");
    }
    for id in &report.faulted {
        tracing::warn!(rule = %id, "content could not be loaded");
    }
    writeln!(out, "Wrote {} files to {}", report.pages.len(), out_dir.display())?;
    Ok(Status::Success)
}

/// Print the catalog, optionally limited to one category.
pub fn list(
    settings: &Settings,
    category: Option<&str>,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status> {
    let catalog = settings.load_catalog()?;
    if let Some(key) = category {
        if catalog.category(key).is_none() {
            writeln!(err, "Unknown category '{key}'")?;
            return Ok(Status::Failure);
        }
    }
    let entries: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|e| category.is_none() || e.category.as_deref() == category)
        .collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for entry in entries {
            writeln!(out, "{}\t{}", entry.id, entry.title())?;
        }
    }
    Ok(Status::Success)
}

/// Print one rule's resolved content, placeholder included.
pub fn show(
    settings: &Settings,
    id: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status> {
    let resolver = settings.resolver()?;
    let Some(rule) = resolver.get_by_id(id) else {
        writeln!(err, "Rule '{id}' not found")?;
        return Ok(Status::Failure);
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rule)?)?;
    } else {
        writeln!(out, "{}", rule.content)?;
    }
    Ok(Status::Success)
}

/// Report missing and orphaned content. Fails unless the tree is clean.
pub fn check(settings: &Settings, out: &mut impl Write) -> Result<Status> {
    let resolver = settings.resolver()?;
    let report = audit(&resolver)?;
    for id in &report.missing {
        writeln!(out, "missing   {id}")?;
    }
    for path in &report.orphaned {
        writeln!(out, "orphaned  {}", path.display())?;
    }
    if report.is_clean() {
        writeln!(out, "All {} rules have content.", resolver.catalog().len())?;
        Ok(Status::Success)
    } else {
        Ok(Status::Failure)
    }
}
