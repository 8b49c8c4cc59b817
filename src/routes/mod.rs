//! Route resolution and the fixed set of request handlers.

pub mod handlers;
pub mod router;

pub use handlers::dispatch;
pub use router::{Route, RouteError, resolve};
