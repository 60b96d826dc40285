//! Page template: fixed document skeleton around a rendered fragment.

use crate::{
    config::BlogConfig,
    utils::{date::current_year, html::escape},
};
use std::fmt::Write;

/// Prism theme + runtime, matching the language classes emitted by the
/// markdown converter.
const PRISM_CSS: &str =
    "https://cdn.jsdelivr.net/npm/prismjs@1.29.0/themes/prism-okaidia.min.css";
const PRISM_CORE: &str = "https://cdn.jsdelivr.net/npm/prismjs@1.29.0/components/prism-core.min.js";
const PRISM_AUTOLOADER: &str =
    "https://cdn.jsdelivr.net/npm/prismjs@1.29.0/plugins/autoloader/prism-autoloader.min.js";

/// Wrap a rendered fragment into a complete HTML document.
///
/// Pure given its inputs: page metadata and navigation come from the config,
/// the stylesheet comes from the caller (memoized aggregate), the footer
/// year from the clock.
pub fn page(config: &BlogConfig, css: &str, content: &str) -> String {
    let site = &config.site;
    let keywords = site.meta.keywords.join(",");
    let description = site.meta.description.as_deref().unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="keywords" content="{keywords}">
    <meta name="description" content="{description}">
    <link rel="stylesheet" href="{PRISM_CSS}">
    <link rel="shortcut icon" href="/favicon.ico" type="image/x-icon">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <nav>
        <ul>
            <li class="logo"><a href="/" class="nav-link">{logo}</a></li>
{nav_items}        </ul>
        <hr />
    </nav>
    <main>
        <section>
{content}
        </section>
    </main>
    <footer>
        <p class="footp">{year} @ {logo}</p>
    </footer>
    <script src="{PRISM_CORE}"></script>
    <script src="{PRISM_AUTOLOADER}"></script>
</body>
</html>
"#,
        keywords = escape(&keywords),
        description = escape(description),
        title = escape(site.page_title()),
        logo = escape(site.title()),
        nav_items = nav_items(config),
        year = current_year(),
    )
}

/// Render the ordered navigation entries.
fn nav_items(config: &BlogConfig) -> String {
    let mut out = String::new();
    for entry in &config.site.navbar {
        writeln!(
            out,
            r#"            <li class="float-right"><a href="{}" class="nav-link">{}</a></li>"#,
            escape(&entry.href),
            escape(&entry.name),
        )
        .ok();
    }
    out
}
