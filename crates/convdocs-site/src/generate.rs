use std::fs;
use std::path::{Path, PathBuf};

use convdocs_core::FallbackReason;

use crate::assets::STYLE_CSS;
use crate::components::GENERATOR_META;
use crate::error::{Result, SiteError};
use crate::site::Site;

/// What a build wrote, and which rules fell back to placeholder content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Written files, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Rules rendered with pending placeholder text (no content file).
    pub pending: Vec<String>,
    /// Rules whose content file could not be read.
    pub faulted: Vec<String>,
}

fn write_file(out: &Path, relative: &Path, contents: &str, report: &mut BuildReport) -> Result<()> {
    let path = out.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::write(parent, e))?;
    }
    fs::write(&path, contents).map_err(|e| SiteError::write(&path, e))?;
    report.pages.push(relative.to_path_buf());
    Ok(())
}

/// Remove `rules/<id>/` directories left by an earlier build for ids the
/// catalog no longer has. Only directories whose `index.html` carries the
/// generator tag are touched.
fn prune_stale_rules(site: &Site, rules_dir: &Path) -> Result<()> {
    let entries = match fs::read_dir(rules_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(SiteError::write(rules_dir, e)),
    };
    let catalog = site.resolver().catalog();
    for entry in entries {
        let path = entry.map_err(|e| SiteError::write(rules_dir, e))?.path();
        let is_current = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|id| catalog.contains(id));
        if is_current || !path.is_dir() {
            continue;
        }
        let generated = fs::read_to_string(path.join("index.html"))
            .is_ok_and(|page| page.contains(GENERATOR_META));
        if generated {
            tracing::debug!(path = %path.display(), "removing stale rule page");
            fs::remove_dir_all(&path).map_err(|e| SiteError::write(&path, e))?;
        }
    }
    Ok(())
}

/// Render every page of the site into `out`.
///
/// Pages of rules removed from the catalog since the last build are deleted.
pub fn generate(site: &Site, out: &Path) -> Result<BuildReport> {
    let mut report = BuildReport::default();
    prune_stale_rules(site, &out.join("rules"))?;

    write_file(out, Path::new("index.html"), &site.render_home(), &mut report)?;
    write_file(out, Path::new("404.html"), &site.render_not_found(), &mut report)?;
    write_file(out, Path::new("style.css"), STYLE_CSS, &mut report)?;

    let resolver = site.resolver();
    for entry in resolver.catalog().entries() {
        let outcome = resolver.resolve_content(entry);
        match outcome.fallback_reason() {
            Some(FallbackReason::Missing) => report.pending.push(entry.id.clone()),
            Some(FallbackReason::ReadFault(_)) => report.faulted.push(entry.id.clone()),
            None => {}
        }
        let html = site.render_entry(entry, outcome.text());
        let relative = Path::new("rules").join(&entry.id).join("index.html");
        write_file(out, &relative, &html, &mut report)?;
    }

    tracing::info!(
        out = %out.display(),
        pages = report.pages.len(),
        pending = report.pending.len(),
        faulted = report.faulted.len(),
        "site generated"
    );
    Ok(report)
}
