//! HTTP transport layer
//!
//! Route handlers registered by [`crate::build_app`].

pub mod handlers;
