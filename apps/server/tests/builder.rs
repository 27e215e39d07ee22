use mmrag::domain::config::{AppConfig, SslConfig};
use mmrag::domain::content::StaticContent;
use mmrag_server::Server;

#[test]
fn build_uses_builtin_content_by_default() {
    let server = Server::builder().port(0).build().unwrap();
    assert!(server.state().content.as_str().contains("Document Question Answering"));
    assert_eq!(server.state().config.server.port, 0);
}

#[test]
fn explicit_content_wins() {
    let server = Server::builder().content(StaticContent::new("Only this")).build().unwrap();
    assert_eq!(server.state().content.as_str(), "Only this");
}

#[test]
fn invalid_page_fails_at_startup() {
    let mut cfg = AppConfig::default();
    cfg.page.menu_links.insert("bug".into(), "not a link".into());

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("Invalid page configuration"));
}

#[test]
fn missing_certificate_fails_at_startup() {
    let mut cfg = AppConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: "/no/such/cert.pem".into(), key: "/no/such/key.pem".into() });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn missing_content_file_fails_at_startup() {
    let mut cfg = AppConfig::default();
    cfg.content_path = Some("/no/such/overview.md".into());

    assert!(Server::builder().config(cfg).build().is_err());
}
