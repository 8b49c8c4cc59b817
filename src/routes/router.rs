use std::fmt;
use std::io;

use crate::http::request::Method;

/// A resolved route: which handler owns the request, plus the path segment
/// the handler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo(String),
    UserAgent,
    FileRead(String),
    FileWrite(String),
    NotFound,
}

/// Routing and handler failures. All of these are fatal to the connection:
/// logged, then the socket is closed without a response.
#[derive(Debug)]
pub enum RouteError {
    /// A routing prefix matched but the trailing segment was empty.
    MalformedPath,
    /// A handler required a request header that was not sent.
    MissingHeader(&'static str),
    /// The file store collaborator failed.
    Store(io::Error),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MalformedPath => {
                write!(f, "empty path segment after routing prefix")
            }
            RouteError::MissingHeader(name) => {
                write!(f, "required header {} not sent", name)
            }
            RouteError::Store(e) => write!(f, "file store failure: {}", e),
        }
    }
}

type Matcher = fn(&Method, &str) -> Option<Result<Route, RouteError>>;

/// Route matchers in priority order. Prefixes are disjoint by construction,
/// so the first match wins.
const ROUTES: &[Matcher] = &[
    match_root,
    match_echo,
    match_user_agent,
    match_file_read,
    match_file_write,
];

/// Resolves `(method, path)` to a route.
///
/// Unmatched requests resolve to [`Route::NotFound`], which is a successful
/// outcome (404 response), not an error.
pub fn resolve(method: &Method, path: &str) -> Result<Route, RouteError> {
    for matcher in ROUTES {
        if let Some(outcome) = matcher(method, path) {
            return outcome;
        }
    }
    Ok(Route::NotFound)
}

fn match_root(_method: &Method, path: &str) -> Option<Result<Route, RouteError>> {
    (path == "/").then(|| Ok(Route::Root))
}

fn match_echo(method: &Method, path: &str) -> Option<Result<Route, RouteError>> {
    let text = path.strip_prefix("/echo/")?;
    if *method != Method::GET {
        return None;
    }
    if text.is_empty() {
        return Some(Err(RouteError::MalformedPath));
    }
    Some(Ok(Route::Echo(text.to_string())))
}

fn match_user_agent(_method: &Method, path: &str) -> Option<Result<Route, RouteError>> {
    (path == "/user-agent").then(|| Ok(Route::UserAgent))
}

fn match_file_read(method: &Method, path: &str) -> Option<Result<Route, RouteError>> {
    let name = path.strip_prefix("/files/")?;
    if *method != Method::GET {
        return None;
    }
    if name.is_empty() {
        return Some(Err(RouteError::MalformedPath));
    }
    Some(Ok(Route::FileRead(name.to_string())))
}

fn match_file_write(method: &Method, path: &str) -> Option<Result<Route, RouteError>> {
    let name = path.strip_prefix("/files/")?;
    if *method != Method::POST {
        return None;
    }
    if name.is_empty() {
        return Some(Err(RouteError::MalformedPath));
    }
    Some(Ok(Route::FileWrite(name.to_string())))
}
