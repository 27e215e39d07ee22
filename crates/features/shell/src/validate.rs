use crate::error::ShellError;
use crate::surface::DisplaySurface;
use mmrag_domain::page::{MenuItem, PageConfig, PageIcon, ResolvedPage};
use std::collections::BTreeMap;

const LINK_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Checks a [`PageConfig`] against the rules of the given surface and returns
/// its resolved form.
///
/// # Errors
/// Returns [`ShellError::Configuration`] naming the first violated field.
pub fn resolve_page<S>(page: &PageConfig, surface: &S) -> Result<ResolvedPage, ShellError>
where
    S: DisplaySurface + ?Sized,
{
    let title = page.title.trim();
    if title.is_empty() {
        return Err(field_error("title", "page title must not be empty"));
    }

    let icon = PageIcon::parse(&page.icon).ok_or_else(|| {
        field_error("icon", format!("'{}' is not a symbolic icon identifier", page.icon))
    })?;
    if !surface.recognizes_icon(&icon) {
        return Err(field_error(
            "icon",
            format!("icon '{icon}' is not recognized by the display surface"),
        ));
    }

    Ok(ResolvedPage {
        title: title.to_owned(),
        icon,
        sidebar_state: page.sidebar_state,
        layout: page.layout,
        menu: resolve_menu(&page.menu_links)?,
    })
}

fn resolve_menu(links: &BTreeMap<String, String>) -> Result<BTreeMap<MenuItem, String>, ShellError> {
    let mut menu = BTreeMap::new();

    for (key, value) in links {
        let item = MenuItem::from_key(key).ok_or_else(|| {
            field_error("menu_links", format!("unknown menu item '{key}' (expected help, bug or about)"))
        })?;

        let value = value.trim();
        if value.is_empty() {
            return Err(field_error("menu_links", format!("menu item '{key}' has an empty value")));
        }
        if item.is_link() && !LINK_SCHEMES.iter().any(|scheme| value.starts_with(scheme)) {
            return Err(field_error(
                "menu_links",
                format!("menu item '{key}' must be an http(s) or mailto link, got '{value}'"),
            ));
        }
        if menu.insert(item, value.to_owned()).is_some() {
            return Err(field_error(
                "menu_links",
                format!("menu item '{}' is given more than once", item.key()),
            ));
        }
    }

    Ok(menu)
}

fn field_error(field: &'static str, message: impl Into<std::borrow::Cow<'static, str>>) -> ShellError {
    ShellError::Configuration { message: message.into(), context: Some(field.into()) }
}
