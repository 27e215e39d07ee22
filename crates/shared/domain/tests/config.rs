use mmrag_domain::config::{AppConfig, LogConfig, ServerConfig};
use mmrag_domain::constants::{DEFAULT_HEADING, DEFAULT_PAGE_ICON, DEFAULT_PAGE_TITLE};
use mmrag_domain::page::{Layout, SidebarState};
use serde_json::json;

#[test]
fn config_defaults_match_the_multi_modal_page() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.page.title, DEFAULT_PAGE_TITLE);
    assert_eq!(cfg.page.icon, DEFAULT_PAGE_ICON);
    assert_eq!(cfg.page.sidebar_state, SidebarState::Expanded);
    assert_eq!(cfg.page.layout, Layout::Wide);
    assert_eq!(cfg.page.menu_links.len(), 3);
    assert_eq!(cfg.heading, DEFAULT_HEADING);
    assert!(cfg.content_path.is_none());

    let server = ServerConfig::default();
    assert_eq!(server.port, 8501);
    assert!(server.ssl.is_none());

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(!log.json);
}

#[test]
fn app_config_deserializes_partial_documents() {
    let raw = json!({
        "server": { "address": "0.0.0.0", "port": 8080 },
        "page": {
            "title": "Docs QA",
            "sidebar_state": "collapsed",
            "layout": "centered",
            "menu_links": { "Get help": "https://example.com/help" }
        },
        "content_path": "/srv/mmrag/overview.md"
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.page.title, "Docs QA");
    assert_eq!(cfg.page.icon, DEFAULT_PAGE_ICON);
    assert_eq!(cfg.page.sidebar_state, SidebarState::Collapsed);
    assert_eq!(cfg.page.layout, Layout::Centered);
    assert_eq!(cfg.page.menu_links.get("Get help").map(String::as_str), Some("https://example.com/help"));
    assert_eq!(cfg.heading, DEFAULT_HEADING);
    assert_eq!(cfg.content_path.as_deref(), Some(std::path::Path::new("/srv/mmrag/overview.md")));
}

#[test]
fn unknown_layout_is_rejected() {
    let raw = json!({ "page": { "layout": "narrow" } });
    assert!(serde_json::from_value::<AppConfig>(raw).is_err());
}

#[test]
fn config_mutation_does_not_leak_into_clones() {
    let original = AppConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 8501);
    assert_eq!(changed.server.port, 9000);
}
