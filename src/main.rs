use ember::config::Config;
use ember::server;
use ember::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let store = FileStore::new(&cfg.files_root);

    tokio::select! {
        res = server::listener::run(&cfg, store) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
