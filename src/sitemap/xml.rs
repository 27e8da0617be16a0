//! Sitemap XML rendering.

use std::borrow::Cow;

use crate::sitemap::routes::SitemapRoute;

const PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const URLSET_OPEN: &str = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";
const URLSET_CLOSE: &str = "</urlset>\n";

/// Render a complete sitemap document.
///
/// Each `<url>` holds `<loc>`, `<priority>` and `<changefreq>` in that order.
pub fn build_xml(base_url: &str, routes: &[SitemapRoute]) -> String {
    let items: Vec<String> = routes
        .iter()
        .map(|route| {
            let loc = format!("{base_url}{}", route.path);
            format!(
                "  <url>\n    <loc>{}</loc>\n    <priority>{}</priority>\n    <changefreq>{}</changefreq>\n  </url>",
                escape(&loc),
                escape(route.priority.as_str()),
                route.changefreq,
            )
        })
        .collect();

    let mut xml = String::with_capacity(PROLOG.len() + URLSET_OPEN.len() + items.len() * 128);
    xml.push_str(PROLOG);
    xml.push_str(URLSET_OPEN);
    xml.push_str(&items.join("\n"));
    xml.push('\n');
    xml.push_str(URLSET_CLOSE);
    xml
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
