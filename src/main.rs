use anyhow::Context as _;
use dnslookup::config::LookupConfig;
use dnslookup::console::IoConsole;
use dnslookup::menu::Menu;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the interactive protocol, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = LookupConfig::from_env().context("invalid lookup configuration")?;
    let resolver = config.build_resolver();

    let mut menu = Menu::new(IoConsole::stdio(), resolver);
    let reason = menu.run().await.context("console I/O failed")?;
    tracing::debug!(?reason, "exiting");

    Ok(())
}
