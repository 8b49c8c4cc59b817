use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::store::FileStore;

/// Binds the listen address and dispatches each accepted connection to a
/// bounded pool of workers.
///
/// Each worker owns one connection end-to-end: parse, route, write, close.
/// The pool is bounded by a semaphore sized `max_connections`; when it is
/// exhausted, accepting pauses until a worker finishes.
pub async fn run(cfg: &Config, store: FileStore) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr)?;
    info!("Listening on {}", cfg.listen_addr);

    let workers = Arc::new(Semaphore::new(cfg.max_connections));

    loop {
        let permit = workers.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let store = store.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}

/// Binds with SO_REUSEADDR so quick restarts don't hit "address already in
/// use".
fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = addr.parse()?;
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    Ok(socket.listen(1024)?)
}
