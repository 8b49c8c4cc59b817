//! Response content-encoding negotiation and transforms.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Content encodings the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gzip,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
        }
    }

    fn from_token(s: &str) -> Option<Self> {
        match s {
            "gzip" => Some(Encoding::Gzip),
            _ => None,
        }
    }

    /// Compresses `body` with this encoding.
    pub fn encode(&self, body: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            Encoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}

/// Selects a response encoding from the client's `accept-encoding` list.
///
/// The header value is a comma-separated list. The first entry the server
/// supports wins, preserving the client's preference order. Returns `None`
/// when the header is absent or nothing overlaps the supported set.
///
/// The selection is advisory metadata; the actual transform happens in
/// [`Response::finalize`](crate::http::response::Response::finalize).
pub fn negotiate(accept_encoding: Option<&str>) -> Option<Encoding> {
    accept_encoding?
        .split(',')
        .map(str::trim)
        .find_map(Encoding::from_token)
}
