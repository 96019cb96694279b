//! Infrastructure Layer
//!
//! Adapters exposing the metrics engine to the outside world:
//!
//! - `http/`: REST API over axum

pub mod http;
