use std::fmt;

use crate::http::headers::HeaderMap;
use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// Not enough buffered bytes yet; the caller should read more.
    Incomplete,
    MalformedRequestLine,
    MalformedHeader,
    MissingContentLength,
    InvalidContentLength,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Incomplete => write!(f, "request incomplete"),
            ParseError::MalformedRequestLine => write!(f, "malformed request line"),
            ParseError::MalformedHeader => write!(f, "malformed header line"),
            ParseError::MissingContentLength => {
                write!(f, "POST request without content-length")
            }
            ParseError::InvalidContentLength => {
                write!(f, "content-length is not a valid integer")
            }
        }
    }
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed, or
/// [`ParseError::Incomplete`] when more data is needed. The request line
/// must split on single spaces into exactly three tokens. Header lines
/// split on the first `": "`; values are kept raw. A POST must declare
/// `content-length` and exactly that many body bytes are consumed, raw,
/// so embedded newlines are fine. Non-POST requests never consume a body
/// even if a `content-length` header is present.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let head_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = &buf[..head_end];

    let mut lines = head
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line));

    // Request line: METHOD SP PATH SP VERSION
    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let request_line =
        std::str::from_utf8(request_line).map_err(|_| ParseError::MalformedRequestLine)?;
    let tokens: Vec<&str> = request_line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ParseError::MalformedRequestLine);
    }

    let method = Method::from_token(tokens[0]);
    let path = tokens[1].to_string();
    let version = tokens[2].to_string();

    // Header lines until the blank line. The first ": " splits name from
    // value; names fold to lowercase in the map, values stay raw.
    let mut headers = HeaderMap::new();
    for line in lines {
        let line = std::str::from_utf8(line).map_err(|_| ParseError::MalformedHeader)?;
        let (name, value) = line.split_once(": ").ok_or(ParseError::MalformedHeader)?;
        headers.insert(name, value);
    }

    let mut consumed = head_end + 4;

    let body = if method == Method::POST {
        let declared = headers
            .get("content-length")
            .ok_or(ParseError::MissingContentLength)?
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidContentLength)?;

        let available = &buf[consumed..];
        if available.len() < declared {
            return Err(ParseError::Incomplete);
        }
        consumed += declared;
        Some(available[..declared].to_vec())
    } else {
        None
    };

    let request = Request {
        method,
        path,
        version,
        headers,
        body,
    };

    Ok((request, consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
