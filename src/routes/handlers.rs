use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::router::{self, Route, RouteError};
use crate::store::FileStore;

/// Resolves the request's route and runs the matching handler.
///
/// Handlers produce un-finalized responses; encoding and content-length are
/// applied afterward by the connection.
pub async fn dispatch(req: &Request, store: &FileStore) -> Result<Response, RouteError> {
    let route = router::resolve(&req.method, &req.path)?;
    tracing::debug!(method = ?req.method, path = %req.path, route = ?route, "Dispatching request");

    match route {
        Route::Root => Ok(Response::ok_empty()),
        Route::Echo(text) => Ok(echo(&text)),
        Route::UserAgent => user_agent(req),
        Route::FileRead(name) => file_read(&name, store).await,
        Route::FileWrite(name) => file_write(&name, req, store).await,
        Route::NotFound => Ok(Response::not_found()),
    }
}

/// Returns the path remainder after `/echo/` verbatim as a text body.
fn echo(text: &str) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(text.as_bytes().to_vec())
        .build()
}

/// Returns the request's user-agent header value as the body. A missing
/// header is a connection-fatal error, not a 4xx.
fn user_agent(req: &Request) -> Result<Response, RouteError> {
    let value = req
        .header("user-agent")
        .ok_or(RouteError::MissingHeader("user-agent"))?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(value.as_bytes().to_vec())
        .build())
}

async fn file_read(name: &str, store: &FileStore) -> Result<Response, RouteError> {
    match store.read(name).await.map_err(RouteError::Store)? {
        Some(bytes) => Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("content-type", "application/octet-stream")
            .body(bytes)
            .build()),
        None => Ok(Response::not_found()),
    }
}

async fn file_write(name: &str, req: &Request, store: &FileStore) -> Result<Response, RouteError> {
    // The parser guarantees POST requests carry a body, possibly empty.
    let body = req.body.as_deref().unwrap_or(&[]);
    store.write(name, body).await.map_err(RouteError::Store)?;

    Ok(ResponseBuilder::new(StatusCode::Created).build())
}
