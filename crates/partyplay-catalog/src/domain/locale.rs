//! Supported locales and request locale negotiation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cookie that pins a visitor's preferred locale.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Path prefixes that are never locale-routed.
const UNROUTED_PREFIXES: [&str; 4] = ["_next", "api", "health", "favicon.ico"];

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Locale used when nothing better is known.
    pub const DEFAULT: Locale = Locale::Es;

    /// Parses an exact locale code (`"en"`, `"es"`).
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// The locale code used in paths and file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Native display name for a language switcher.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Picks a locale from a POSIX-style `LANG` value such as `en_US.UTF-8`.
    #[must_use]
    pub fn from_lang_env(lang: &str) -> Option<Self> {
        lang.get(..2).and_then(Self::parse)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What to do with an incoming request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRoute {
    /// Serve the path as is.
    Pass,
    /// Redirect to the locale-prefixed location.
    Redirect(String),
}

/// Decides whether `path` needs a locale prefix and, if so, which one.
///
/// The cookie wins over `Accept-Language`; within `Accept-Language` the first
/// entry whose two-letter prefix is supported wins. `query` is the raw query
/// string without the leading `?`.
#[must_use]
pub fn negotiate_locale(
    path: &str,
    query: Option<&str>,
    cookie: Option<&str>,
    accept_language: Option<&str>,
) -> LocaleRoute {
    if !is_routed(path) || locale_of_path(path).is_some() {
        return LocaleRoute::Pass;
    }

    let locale = cookie
        .and_then(Locale::parse)
        .or_else(|| accept_language.and_then(preferred_locale))
        .unwrap_or(Locale::DEFAULT);

    let mut target = format!("/{locale}{path}");
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    LocaleRoute::Redirect(target)
}

/// Extracts the leading locale segment of `path`, if it names a supported locale.
#[must_use]
pub fn locale_of_path(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    Locale::parse(segment)
}

fn is_routed(path: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    let first = trimmed.split('/').next().unwrap_or_default();
    if UNROUTED_PREFIXES.contains(&first) {
        return false;
    }
    !trimmed.contains('.')
}

fn preferred_locale(header: &str) -> Option<Locale> {
    header
        .split(',')
        .map(|entry| entry.split(';').next().unwrap_or_default().trim())
        .filter_map(|tag| tag.get(..2))
        .find_map(Locale::parse)
}
