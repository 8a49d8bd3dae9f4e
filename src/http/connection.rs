use std::net::SocketAddr;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::message::HttpMessage;
use crate::http::parser::parse_request;
use crate::http::response;
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    read_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(HttpMessage),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, cfg: Config) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(cfg.read_buffer_size),
            read_timeout: cfg.read_timeout(),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection state machine to completion.
    ///
    /// Returns `Ok(())` on any clean close (explicit `close` directive,
    /// idle timeout, EOF, or a rejected request). I/O failures bubble up to
    /// the accept loop, which logs them; nothing here is fatal to the
    /// process.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(msg) => {
                            self.state = ConnectionState::Processing(msg);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(msg) => {
                    let keep_alive = msg.keep_alive();
                    let payload = response::generate(msg, self.peer);

                    let writer = ResponseWriter::new(&payload);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    self.stream.shutdown().await.ok();
                    info!("Closed connection from {}", self.peer);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Waits for one request within the idle window and parses it.
    ///
    /// Returns `Ok(None)` when the connection should close without a
    /// response: idle timeout, EOF, or a buffer that does not parse. One
    /// read is one request; there is no accumulation across reads.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<HttpMessage>> {
        self.buffer.clear();

        let read = tokio::time::timeout(
            self.read_timeout,
            self.stream.read_buf(&mut self.buffer),
        )
        .await;

        let n = match read {
            Ok(res) => res?,
            Err(_) => {
                info!("Idle timeout on connection from {}", self.peer);
                return Ok(None);
            }
        };

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        let Ok(raw) = std::str::from_utf8(&self.buffer) else {
            warn!("Non-text request from {}, closing", self.peer);
            return Ok(None);
        };
        debug!("Received request from {}:\n{}", self.peer, raw);

        match parse_request(raw) {
            Ok(msg) => Ok(Some(msg)),
            Err(e) => {
                warn!("Malformed request from {}: {:?}", self.peer, e);
                Ok(None)
            }
        }
    }
}
