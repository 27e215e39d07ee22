use anyhow::Context;
use mmrag::kernel::config::load_app_config;
use mmrag_server::{Server, init_logger};
use std::path::PathBuf;

#[mmrag_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = load_app_config(path.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(env!("CARGO_PKG_NAME"), &cfg.log)?;

    Server::builder().config(cfg).build()?.run().await
}
