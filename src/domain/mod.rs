//! Domain logic served over HTTP
//!
//! Holds the greeting formatting behind the `/echo` endpoint

pub mod greeting;
