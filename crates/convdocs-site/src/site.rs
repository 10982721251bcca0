use std::fmt::Write as _;

use convdocs_core::{CatalogEntry, Resolver, Settings};

use crate::components::{self, escape, ActivePage, Button, ButtonSize, ButtonVariant};
use crate::error::Result;

/// Renders the pages of the site from settings and a resolver.
#[derive(Debug, Clone)]
pub struct Site {
    settings: Settings,
    resolver: Resolver,
}

impl Site {
    pub fn new(settings: Settings, resolver: Resolver) -> Self {
        Self { settings, resolver }
    }

    /// Build the resolver the settings describe (built-in or file catalog).
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let resolver = settings.resolver()?;
        Ok(Self::new(settings, resolver))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn rule_href(&self, id: &str) -> String {
        components::rule_href(&self.settings.base_path, id)
    }

    fn page(&self, active: ActivePage<'_>, title: &str, body: &str) -> String {
        components::layout(
            &self.settings,
            self.resolver.catalog(),
            active,
            title,
            body,
        )
    }

    /// Home page: intro plus one card per rule, in catalog order.
    pub fn render_home(&self) -> String {
        let mut body = String::new();
        body.push_str("<section class=\"container\">\n");
        let _ = writeln!(
            body,
            "<h1 class=\"page-title\">{}</h1>",
            escape(&self.settings.site_title)
        );
        let _ = writeln!(
            body,
            "<p class=\"lead\">{}</p>",
            escape(&self.settings.site_description)
        );
        body.push_str("<h2 class=\"section-title\">Rules</h2>\n<div class=\"card-grid\">\n");
        for entry in self.resolver.catalog().entries() {
            let href = self.rule_href(&entry.id);
            let button = Button::new("Read more")
                .href(&href)
                .variant(ButtonVariant::Primary)
                .render();
            let _ = writeln!(
                body,
                "<div class=\"card\">\n<h3 class=\"card-title\">{}</h3>\n<p class=\"card-text\">{}</p>\n{}\n</div>",
                escape(entry.title()),
                escape(entry.description()),
                button
            );
        }
        body.push_str("</div>\n</section>");
        self.page(ActivePage::Home, "", &body)
    }

    /// Rule page, or `None` when the id is not in the catalog.
    pub fn render_rule(&self, id: &str) -> Option<String> {
        let rule = self.resolver.get_by_id(id)?;
        let entry = self.resolver.catalog().get(id)?;
        Some(self.render_entry(entry, &rule.content))
    }

    /// Rule page for an entry whose content was already resolved.
    pub fn render_entry(&self, entry: &CatalogEntry, content: &str) -> String {
        let body = format!(
            "<article class=\"container\">\n{}\n</article>",
            components::markdown(content)
        );
        self.page(ActivePage::Rule(&entry.id), entry.title(), &body)
    }

    pub fn render_not_found(&self) -> String {
        let home = Button::new("Back to home")
            .href(&self.settings.base_path)
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Lg)
            .render();
        let body = format!(
            "<div class=\"not-found\">\n<h2 class=\"page-title\">Page not found</h2>\n<p class=\"lead\">The page you requested does not exist or may have moved.</p>\n{home}\n</div>"
        );
        self.page(ActivePage::Other, "Page not found", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convdocs_core::Catalog;
    use tempfile::tempdir;

    fn site(root: &std::path::Path, catalog: Catalog) -> Site {
        let settings = Settings {
            content_root: root.to_path_buf(),
            ..Settings::default()
        };
        let resolver = Resolver::new(catalog, root);
        Site::new(settings, resolver)
    }

    #[test]
    fn home_has_a_card_per_rule() {
        let dir = tempdir().unwrap();
        let site = site(dir.path(), Catalog::builtin());
        let html = site.render_home();
        assert_eq!(html.matches("class=\"card\"").count(), 17);
        assert!(html.contains(r#"href="/rules/10-java-spring-best-practices/">Read more</a>"#));
    }

    #[test]
    fn rule_page_renders_markdown_content() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("backend")).unwrap();
        std::fs::write(dir.path().join("backend/06-dtos.md"), "Use **records**.\n").unwrap();
        let site = site(dir.path(), Catalog::builtin());

        let html = site.render_rule("06-dtos").unwrap();
        assert!(html.contains("<strong>records</strong>"));
        assert!(html.contains("<title>DTOs | Conv.docs</title>"));
        assert!(html.contains(r#"<a class="nav-link active" href="/rules/06-dtos/""#));
    }

    #[test]
    fn unknown_rule_has_no_page() {
        let dir = tempdir().unwrap();
        let site = site(dir.path(), Catalog::builtin());
        assert!(site.render_rule("does-not-exist").is_none());
    }

    #[test]
    fn titles_are_escaped() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::new(
            vec![],
            vec![CatalogEntry::new("xss", "<b>Bold</b>", "a & b")],
        )
        .unwrap();
        let site = site(dir.path(), catalog);

        let home = site.render_home();
        assert!(home.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(home.contains("a &amp; b"));
        assert!(!home.contains("<b>Bold</b>"));
    }

    #[test]
    fn not_found_links_home() {
        let dir = tempdir().unwrap();
        let site = site(dir.path(), Catalog::builtin());
        let html = site.render_not_found();
        assert!(html.contains(r#"<a class="btn btn-primary btn-lg" href="/">Back to home</a>"#));
        assert!(!html.contains("nav-link active"));
    }
}
