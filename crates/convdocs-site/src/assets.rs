/// Stylesheet written next to the generated pages.
pub const STYLE_CSS: &str = r#":root {
  --bg-light: #FAF9FB;
  --gray-light: #727272;
  --gray-dark: #2E2E2E;
  --primary: #DB8B8A;
  --border: #E5E7EB;
}

* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--gray-dark); background: #fff; letter-spacing: -0.01em; }
a { color: inherit; text-decoration: none; }

.app { display: flex; min-height: 100vh; }

.sidebar { position: fixed; inset: 0 auto 0 0; z-index: 50; width: 16rem; background: #fff; border-right: 1px solid var(--border); overflow-y: auto; transform: translateX(-100%); transition: transform 0.3s ease-in-out; }
.sidebar-open .sidebar { transform: translateX(0); }
.sidebar-overlay { display: none; position: fixed; inset: 0; z-index: 40; background: rgba(0, 0, 0, 0.2); }
.sidebar-open .sidebar-overlay { display: block; }
.sidebar-inner { padding: 1.5rem 1rem; }
.sidebar-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 2rem; }
.nav-heading { font-size: 0.75rem; font-weight: 600; color: var(--gray-light); text-transform: uppercase; letter-spacing: 0.05em; margin: 1.5rem 0 0.5rem; padding: 0 0.75rem; }
.nav-link { display: block; padding: 0.5rem 0.75rem; border-radius: 0.375rem; font-weight: 500; }
.nav-link:hover { background: var(--bg-light); }
.nav-link.active { background: var(--primary); color: #fff; }

.main { flex: 1; overflow: auto; }
.mobile-header { position: sticky; top: 0; z-index: 30; display: flex; align-items: center; height: 3.5rem; padding: 0 1rem; background: #fff; border-bottom: 1px solid var(--border); }
.menu-toggle { font-size: 1.5rem; background: none; border: 0; color: #6B7280; cursor: pointer; }
.mobile-title { margin-left: 1rem; font-size: 1.125rem; font-weight: 500; }
.content { padding: 1.5rem; }
.container { max-width: 56rem; margin: 0 auto; }

.page-title { font-size: 2.25rem; font-weight: 700; margin: 0 0 1.5rem; }
.lead { font-size: 1.125rem; color: var(--gray-light); margin-bottom: 2rem; }
.section-title { font-size: 1.5rem; font-weight: 700; margin: 3rem 0 1rem; }
.card-grid { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-bottom: 2.5rem; }
.card { border: 1px solid var(--border); border-radius: 0.5rem; padding: 1rem; transition: border-color 0.15s; }
.card:hover { border-color: var(--primary); }
.card-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.card-text { color: var(--gray-light); margin: 0 0 1rem; }
.not-found { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; text-align: center; }

.btn { display: inline-block; border-radius: 0.375rem; font-weight: 500; border: 1px solid transparent; cursor: pointer; transition: background-color 0.15s; }
.btn-default { background: var(--bg-light); border-color: #D1D5DB; }
.btn-default:hover { background: #E5E7EB; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover { opacity: 0.9; }
.btn-secondary { background: var(--gray-dark); color: #fff; }
.btn-outline { background: transparent; border-color: var(--primary); color: var(--primary); }
.btn-link { background: transparent; color: var(--primary); padding: 0; }
.btn-link:hover { text-decoration: underline; }
.btn-sm { font-size: 0.875rem; padding: 0.25rem 0.5rem; }
.btn-md { font-size: 1rem; padding: 0.5rem 1rem; }
.btn-lg { font-size: 1.125rem; padding: 0.75rem 1.5rem; }
.btn-block { display: block; width: 100%; }
.btn.is-disabled { opacity: 0.6; cursor: not-allowed; }

.markdown-viewer h1 { font-size: 1.875rem; font-weight: 700; margin: 2rem 0 1rem; }
.markdown-viewer h2 { font-size: 1.5rem; font-weight: 700; margin: 1.5rem 0 0.75rem; padding-bottom: 0.25rem; border-bottom: 1px solid var(--border); }
.markdown-viewer h3 { font-size: 1.25rem; font-weight: 700; margin: 1.25rem 0 0.5rem; }
.markdown-viewer h4 { font-size: 1.125rem; font-weight: 700; margin: 1rem 0 0.5rem; }
.markdown-viewer p { margin: 1rem 0; }
.markdown-viewer a { color: var(--primary); }
.markdown-viewer a:hover { text-decoration: underline; }
.markdown-viewer ul { list-style: disc; padding-left: 1.5rem; margin: 1rem 0; }
.markdown-viewer ol { list-style: decimal; padding-left: 1.5rem; margin: 1rem 0; }
.markdown-viewer li { margin-bottom: 0.25rem; }
.markdown-viewer blockquote { border-left: 4px solid var(--primary); padding-left: 1rem; font-style: italic; margin: 1rem 0; color: var(--gray-light); }
.markdown-viewer code { background: var(--bg-light); padding: 0.125rem 0.25rem; border-radius: 0.25rem; color: var(--primary); }
.markdown-viewer pre { background: var(--bg-light); border-radius: 0.375rem; margin: 1rem 0; padding: 1rem; overflow-x: auto; }
.markdown-viewer pre code { padding: 0; color: var(--gray-dark); }
.markdown-viewer table { width: 100%; border-collapse: collapse; margin: 1rem 0; }
.markdown-viewer thead { background: var(--bg-light); }
.markdown-viewer tr { border-bottom: 1px solid var(--border); }
.markdown-viewer th { padding: 0.5rem 1rem; text-align: left; font-weight: 700; }
.markdown-viewer td { padding: 0.5rem 1rem; }
.markdown-viewer img { max-width: 100%; height: auto; margin: 1rem 0; }
.markdown-viewer hr { margin: 1.5rem 0; border: 0; border-top: 1px solid var(--border); }

@media (min-width: 768px) {
  .card-grid { grid-template-columns: 1fr 1fr; }
}

@media (min-width: 1024px) {
  .sidebar { position: static; transform: none; }
  .sidebar-overlay, .sidebar-open .sidebar-overlay { display: none; }
  .mobile-header { display: none; }
  .content { padding: 2.5rem 2rem; }
}
"#;
