use std::net::SocketAddr;

use tokio::net::TcpSocket;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket and services connections one at a time.
///
/// Connections are handled strictly in sequence: the next accept does not
/// happen until the current connection has closed. Per-connection errors
/// are logged and never tear down the loop.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.listen_addr.parse()?;
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    let listener = socket.listen(cfg.backlog)?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(stream, peer, cfg.clone());
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
