//! Page configuration as supplied by hosts, and its resolved form.

use crate::constants::{
    DEFAULT_ABOUT, DEFAULT_BUG_URL, DEFAULT_HELP_URL, DEFAULT_PAGE_ICON, DEFAULT_PAGE_TITLE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Initial sidebar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

/// Content width of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Centered => "centered",
        }
    }
}

/// Entries of the page menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Help,
    Bug,
    About,
}

impl MenuItem {
    pub const ALL: [Self; 3] = [Self::Help, Self::Bug, Self::About];

    /// Accepts the short keys (`help`, `bug`, `about`) and the long labels
    /// (`Get help`, `Report a bug`), case-insensitively, with `_` or spaces.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace('_', " ");
        match normalized.as_str() {
            "help" | "get help" => Some(Self::Help),
            "bug" | "report a bug" | "report bug" => Some(Self::Bug),
            "about" => Some(Self::About),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Bug => "bug",
            Self::About => "about",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Help => "Get help",
            Self::Bug => "Report a bug",
            Self::About => "About",
        }
    }

    /// Help and bug entries are links; about is markdown text.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Help | Self::Bug)
    }
}

/// A page icon in one of the symbolic forms hosts understand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PageIcon {
    /// `:red_circle:`
    Shortcode(String),
    /// `:material/thumb_up:`
    Material(String),
    /// A literal emoji such as `🔴`.
    Glyph(String),
}

impl PageIcon {
    /// Parses a symbolic icon identifier. Returns `None` for anything that is
    /// neither a well-formed shortcode nor a single Unicode emoji.
    ///
    /// A bare name without colons is accepted only when it is a known emoji
    /// shortcode. Names inside colons are only checked for shape here; whether
    /// they are known is up to the display surface.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_prefix(':').and_then(|s| s.strip_suffix(':')) {
            if let Some(name) = inner.strip_prefix("material/") {
                return is_symbol_name(name).then(|| Self::Material(name.to_owned()));
            }
            return is_symbol_name(inner).then(|| Self::Shortcode(inner.to_owned()));
        }

        if emojis::get_by_shortcode(raw).is_some() {
            return Some(Self::Shortcode(raw.to_owned()));
        }
        emojis::get(raw).map(|emoji| Self::Glyph(emoji.as_str().to_owned()))
    }
}

fn is_symbol_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_+-".contains(c))
}

impl fmt::Display for PageIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortcode(name) => write!(f, ":{name}:"),
            Self::Material(name) => write!(f, ":material/{name}:"),
            Self::Glyph(glyph) => f.write_str(glyph),
        }
    }
}

/// Page configuration as written in the config file or passed by a host.
///
/// Menu keys and the icon stay raw here; the bootstrapper validates them when
/// the page is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub icon: String,
    pub sidebar_state: SidebarState,
    pub layout: Layout,
    pub menu_links: BTreeMap<String, String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_owned(),
            icon: DEFAULT_PAGE_ICON.to_owned(),
            sidebar_state: SidebarState::Expanded,
            layout: Layout::Wide,
            menu_links: BTreeMap::from([
                (MenuItem::Help.key().to_owned(), DEFAULT_HELP_URL.to_owned()),
                (MenuItem::Bug.key().to_owned(), DEFAULT_BUG_URL.to_owned()),
                (MenuItem::About.key().to_owned(), DEFAULT_ABOUT.to_owned()),
            ]),
        }
    }
}

/// A validated page configuration, as delivered to display surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPage {
    pub title: String,
    pub icon: PageIcon,
    pub sidebar_state: SidebarState,
    pub layout: Layout,
    pub menu: BTreeMap<MenuItem, String>,
}

impl ResolvedPage {
    #[must_use]
    pub fn menu_entry(&self, item: MenuItem) -> Option<&str> {
        self.menu.get(&item).map(String::as_str)
    }
}
