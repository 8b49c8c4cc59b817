use crate::http::headers::HeaderMap;

/// HTTP request methods.
///
/// The server routes GET and POST. Any other token in the request line
/// parses as `Unsupported` and is carried through routing, where it falls
/// out to 404 unless a route accepts all methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    Unsupported,
}

impl Method {
    /// Maps a request-line token to a method. Unknown tokens are not a parse
    /// failure; they become [`Method::Unsupported`].
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Unsupported,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Created once per connection by the parser and immutable afterward.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or a catch-all)
    pub method: Method,
    /// The raw request target (e.g., "/echo/abc"), not percent-decoded
    pub path: String,
    /// Protocol version token from the request line (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, names folded to lowercase
    pub headers: HeaderMap,
    /// Request body, present only when declared via `content-length` on a
    /// POST. `Some(vec![])` (declared length 0) is distinct from `None`
    /// (no body was declared).
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Retrieves the content-length header parsed as a usize, if present
    /// and well-formed.
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length").and_then(|v| v.parse().ok())
    }
}

/// Builder for constructing Request values directly, mainly for tests.
pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            version: "HTTP/1.1".to_string(),
            headers: self.headers,
            body: self.body,
        }
    }
}
