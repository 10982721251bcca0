use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use convdocs_core::Settings;
use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};

use crate::error::Result;
use crate::generate::{generate, BuildReport};
use crate::site::Site;

/// Quiet period after the last change before rebuilding. Editors often save
/// through a temp file and rename, which arrives as several events.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Whether an event should trigger a rebuild: markdown under the content
/// root, or the catalog file itself.
pub fn is_relevant(event: &Event, catalog: Option<&Path>) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event.paths.iter().any(|path| {
        path.extension().is_some_and(|e| e == "md") || catalog.is_some_and(|c| path == c)
    })
}

/// Rebuild from scratch, reloading the catalog so edits to it are picked up.
pub fn rebuild(settings: &Settings, out: &Path) -> Result<BuildReport> {
    let site = Site::from_settings(settings.clone())?;
    generate(&site, out)
}

/// Build once, then rebuild whenever content changes. Returns when the
/// watcher shuts down.
pub fn watch(settings: &Settings, out: &Path) -> Result<()> {
    rebuild(settings, out)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
        let _ = tx.send(res);
    })?;
    watcher.watch(&settings.content_root, RecursiveMode::Recursive)?;
    if let Some(catalog) = &settings.catalog {
        watcher.watch(catalog, RecursiveMode::NonRecursive)?;
    }
    tracing::info!(root = %settings.content_root.display(), "watching for changes");

    let catalog = settings.catalog.as_deref();
    while let Ok(res) = rx.recv() {
        let mut dirty = match res {
            Ok(event) => is_relevant(&event, catalog),
            Err(e) => {
                tracing::warn!(error = %e, "watch error");
                false
            }
        };
        // Drain the burst before rebuilding once.
        while let Ok(res) = rx.recv_timeout(DEBOUNCE) {
            if let Ok(event) = res {
                dirty |= is_relevant(&event, catalog);
            }
        }
        if !dirty {
            continue;
        }
        if let Err(e) = rebuild(settings, out) {
            tracing::error!(error = %e, "rebuild failed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};
    use std::path::PathBuf;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn markdown_changes_are_relevant() {
        for kind in [
            EventKind::Create(CreateKind::File),
            EventKind::Modify(ModifyKind::Any),
            EventKind::Remove(RemoveKind::File),
        ] {
            assert!(is_relevant(&event(kind, "/c/frontend/a.md"), None));
        }
    }

    #[test]
    fn other_files_and_access_events_are_ignored() {
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Any), "/c/frontend/.a.md.swp"),
            None
        ));
        assert!(!is_relevant(
            &event(EventKind::Access(AccessKind::Any), "/c/frontend/a.md"),
            None
        ));
    }

    #[test]
    fn catalog_file_is_relevant() {
        let catalog = Path::new("/p/catalog.json");
        assert!(is_relevant(
            &event(EventKind::Modify(ModifyKind::Any), "/p/catalog.json"),
            Some(catalog)
        ));
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Any), "/p/other.json"),
            Some(catalog)
        ));
    }
}
