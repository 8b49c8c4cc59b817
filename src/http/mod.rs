//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 request-response engine: one request
//! parsed per connection, one response written back, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`headers`**: Ordered, case-insensitive header map shared by requests and responses
//! - **`request`**: HTTP request representation and helpers
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: Content-encoding negotiation and gzip transform
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route the request, generate a response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close → Closed
//! ```
//!
//! A parse or handler failure transitions directly to Closed after logging;
//! no best-effort error response is written to the client.

pub mod connection;
pub mod encoding;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
