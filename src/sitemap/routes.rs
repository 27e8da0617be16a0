//! The site's route table.

use std::fmt;

/// Origin prepended to every route path.
pub const BASE_URL: &str = "https://kenetg.com";

/// Public pages, in output order.
pub const DEFAULT_ROUTES: &[SitemapRoute] = &[
    SitemapRoute::new("/", ChangeFrequency::Weekly, Priority::new("1.0")),
    SitemapRoute::new("/redes/", ChangeFrequency::Weekly, Priority::new("0.9")),
    SitemapRoute::new("/contacto/", ChangeFrequency::Weekly, Priority::new("0.85")),
    SitemapRoute::new("/tienda/", ChangeFrequency::Weekly, Priority::new("0.8")),
];

/// `<changefreq>` values defined by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<priority>` kept as its literal decimal text, so `0.85` stays `0.85`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Priority(&'static str);

impl Priority {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One `<url>` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SitemapRoute {
    pub path: &'static str,
    pub changefreq: ChangeFrequency,
    pub priority: Priority,
}

impl SitemapRoute {
    pub const fn new(path: &'static str, changefreq: ChangeFrequency, priority: Priority) -> Self {
        Self {
            path,
            changefreq,
            priority,
        }
    }
}
