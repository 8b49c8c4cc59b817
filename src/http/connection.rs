use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::encoding;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routes;
use crate::store::FileStore;

/// Drives one client connection through a single request-response exchange.
///
/// Generic over the stream type so the state machine can be exercised with
/// in-memory duplex pipes in tests.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    store: FileStore,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, store: FileStore) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            store,
        }
    }

    /// Runs the connection to completion: read and parse the request, route
    /// it, write the response, close.
    ///
    /// Parse and handler failures close the connection without writing any
    /// response; the error is surfaced to the caller for logging. A peer
    /// that closes before sending anything is not an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            // Empty request: peer closed before sending
                            // anything. Close silently.
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let encoding = encoding::negotiate(req.header("accept-encoding"));

                    let mut response = routes::dispatch(req, &self.store)
                        .await
                        .map_err(|e| anyhow::anyhow!("request failed: {}", e))?;
                    response.finalize(encoding)?;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One exchange per connection, no keep-alive.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads and parses one request from the stream.
    ///
    /// Returns `Ok(None)` when the peer closed the connection before sending
    /// any bytes. EOF with a partially buffered request is a truncation
    /// error.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {}", e));
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("stream truncated mid-request"));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
