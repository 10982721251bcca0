//! HTML building blocks shared by every page: layout, sidebar, button and
//! the markdown viewer. Each returns a `String` fragment; callers pass
//! already-escaped HTML only where a parameter is named `body`.

use std::fmt::Write as _;

use convdocs_core::{Catalog, CatalogEntry, Settings};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// --- Button ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-default",
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
            Self::Link => "btn-link",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

/// A button, rendered as a link when it has an `href`.
#[derive(Debug, Clone, Default)]
pub struct Button<'a> {
    label: &'a str,
    href: Option<&'a str>,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(&self) -> String {
        let mut class = format!("btn {} {}", self.variant.class(), self.size.class());
        if self.full_width {
            class.push_str(" btn-block");
        }
        if self.disabled {
            class.push_str(" is-disabled");
        }
        class
    }

    pub fn render(&self) -> String {
        let label = escape(self.label);
        match (self.href, self.disabled) {
            (Some(href), false) => format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                self.class(),
                escape(href),
                label
            ),
            (Some(_), true) => format!(
                r#"<a class="{}" aria-disabled="true">{}</a>"#,
                self.class(),
                label
            ),
            (None, disabled) => format!(
                r#"<button type="button" class="{}"{}>{}</button>"#,
                self.class(),
                if disabled { " disabled" } else { "" },
                label
            ),
        }
    }
}

// --- Sidebar ---

/// Which page the navigation should highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage<'a> {
    Home,
    Rule(&'a str),
    Other,
}

pub fn rule_href(base_path: &str, id: &str) -> String {
    format!("{base_path}rules/{id}/")
}

fn nav_link(out: &mut String, href: &str, label: &str, active: bool) {
    let class = if active { "nav-link active" } else { "nav-link" };
    let current = if active { r#" aria-current="page""# } else { "" };
    let _ = writeln!(
        out,
        r#"      <a class="{class}" href="{}"{current}>{}</a>"#,
        escape(href),
        escape(label)
    );
}

fn nav_group<'a>(
    out: &mut String,
    heading: &str,
    entries: impl Iterator<Item = &'a CatalogEntry>,
    base_path: &str,
    active: ActivePage<'_>,
) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }
    let _ = writeln!(out, r#"      <h2 class="nav-heading">{}</h2>"#, escape(heading));
    for entry in entries {
        nav_link(
            out,
            &rule_href(base_path, &entry.id),
            entry.title(),
            active == ActivePage::Rule(&entry.id),
        );
    }
}

/// Navigation: a home link, then rule links grouped by category.
pub fn sidebar(title: &str, base_path: &str, catalog: &Catalog, active: ActivePage<'_>) -> String {
    let mut out = String::new();
    out.push_str("<nav id=\"sidebar\" class=\"sidebar\">\n");
    out.push_str("  <div class=\"sidebar-inner\">\n");
    let _ = writeln!(out, r#"    <h1 class="sidebar-title">{}</h1>"#, escape(title));
    out.push_str("    <div class=\"nav\">\n");
    nav_link(&mut out, base_path, "Home", active == ActivePage::Home);
    for category in catalog.categories() {
        nav_group(
            &mut out,
            &category.label,
            catalog.entries_in(&category.key),
            base_path,
            active,
        );
    }
    nav_group(&mut out, "Rules", catalog.uncategorized(), base_path, active);
    out.push_str("    </div>\n  </div>\n</nav>\n");
    out
}

// --- Layout ---

/// Marks pages this crate wrote, so a rebuild only prunes its own output.
pub const GENERATOR_META: &str = r#"<meta name="generator" content="convdocs">"#;

const TOGGLE_SCRIPT: &str = "document.querySelectorAll('[data-sidebar-toggle]').forEach(function (el) {\n  el.addEventListener('click', function () {\n    document.body.classList.toggle('sidebar-open');\n  });\n});";

/// Full HTML document: sidebar, mobile header with menu toggle, and `body`.
pub fn layout(
    settings: &Settings,
    catalog: &Catalog,
    active: ActivePage<'_>,
    page_title: &str,
    body: &str,
) -> String {
    let base = &settings.base_path;
    let title = if page_title.is_empty() {
        escape(&settings.site_title)
    } else {
        format!("{} | {}", escape(page_title), escape(&settings.site_title))
    };
    let sidebar = sidebar(&settings.sidebar_title, base, catalog, active);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{generator}
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="{base}style.css">
</head>
<body>
<div class="app">
<div class="sidebar-overlay" data-sidebar-toggle aria-hidden="true"></div>
{sidebar}<main class="main">
<div class="mobile-header">
  <button type="button" class="menu-toggle" data-sidebar-toggle aria-label="Open menu">&#9776;</button>
  <span class="mobile-title">{sidebar_title}</span>
</div>
<div class="content">
{body}
</div>
</main>
</div>
<script>
{script}
</script>
</body>
</html>
"#,
        description = escape(&settings.site_description),
        base = escape(base),
        sidebar_title = escape(&settings.sidebar_title),
        generator = GENERATOR_META,
        script = TOGGLE_SCRIPT,
    )
}

// --- Markdown ---

/// Render rule markdown (GitHub flavored) into the viewer container.
/// Raw HTML in the source is omitted.
pub fn markdown(content: &str) -> String {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());

    format!(
        "<div class=\"markdown-viewer\">\n{}</div>",
        comrak::markdown_to_html(content, &options)
    )
}
