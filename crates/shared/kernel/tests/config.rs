use mmrag_kernel::config::{ConfigError, load_app_config, load_content};
use mmrag_kernel::domain::page::{Layout, SidebarState};
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn missing_default_file_yields_builtin_defaults() {
    let cfg = load_app_config(None::<&str>).unwrap();
    assert_eq!(cfg.page.title, "Multi-Modal RAG");
    assert_eq!(cfg.heading, "Multi-Modal Retrieval-Augmented Generation (RAG)");
    assert_eq!(cfg.server.port, 8501);
    assert!(cfg.content_path.is_none());
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let err = load_app_config(Some("/definitely/not/here/mmrag.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let file = write_config(
        r#"
heading = "Ask your files"

[page]
title = "Docs QA"
layout = "centered"
sidebar_state = "collapsed"

[page.menu_links]
help = "https://example.com/help"

[server]
port = 9000
"#,
    );

    let cfg = load_app_config(Some(file.path())).unwrap();
    assert_eq!(cfg.heading, "Ask your files");
    assert_eq!(cfg.page.title, "Docs QA");
    assert_eq!(cfg.page.layout, Layout::Centered);
    assert_eq!(cfg.page.sidebar_state, SidebarState::Collapsed);
    assert_eq!(cfg.page.icon, ":red_circle:");
    assert_eq!(cfg.page.menu_links.len(), 1);
    assert_eq!(cfg.server.port, 9000);
}

#[test]
#[serial]
fn content_comes_from_file_or_builtin_overview() {
    let mut cfg = load_app_config(None::<&str>).unwrap();
    assert!(load_content(&cfg).unwrap().as_str().contains("Image Question Answering"));

    let mut content = tempfile::NamedTempFile::new().unwrap();
    content.write_all(b"    Custom *overview*\n").unwrap();
    cfg.content_path = Some(content.path().to_path_buf());
    assert_eq!(load_content(&cfg).unwrap().as_str(), "Custom *overview*");

    cfg.content_path = Some("/no/such/content.md".into());
    assert!(matches!(load_content(&cfg), Err(ConfigError::Content { .. })));
}
