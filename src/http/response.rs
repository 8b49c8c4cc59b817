use std::io;

use crate::http::encoding::Encoding;
use crate::http::headers::HeaderMap;

/// HTTP status codes emitted by the server.
///
/// Malformed input never maps to a status code; it closes the connection.
/// 404 is a successful routing outcome, not an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ember::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents a complete HTTP response ready to be finalized and sent.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Response headers, serialized in insertion order
    pub headers: HeaderMap,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use ember::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("content-type", "text/plain")
///     .body(b"hello".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the Response. The content-length header is deliberately not
    /// set here; [`Response::finalize`] computes it from the final body
    /// after any encoding transform.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with an empty body.
    pub fn ok_empty() -> Self {
        ResponseBuilder::new(StatusCode::Ok).build()
    }

    /// Creates a 404 Not Found response with an empty body and no
    /// content-type header.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    /// Seals the response for the wire.
    ///
    /// Applies the negotiated content encoding to the body, if any, and sets
    /// the content-encoding header to match. The content-length header is
    /// always (re)computed from the final body, after the transform, so it
    /// reflects the encoded length.
    pub fn finalize(&mut self, encoding: Option<Encoding>) -> io::Result<()> {
        if let Some(enc) = encoding {
            self.body = enc.encode(&self.body)?;
            self.headers.insert("content-encoding", enc.as_str());
        }
        self.headers
            .insert("content-length", self.body.len().to_string());
        Ok(())
    }
}
