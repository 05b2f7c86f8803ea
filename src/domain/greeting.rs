//! Greeting template used by the `/echo` endpoint

use serde::Serialize;

pub const DEFAULT_NAME: &str = "World";
pub const TEMPLATE_PREFIX: &str = "Hello, ";
pub const TEMPLATE_SUFFIX: &str = "!";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EchoReply {
    reply: String,
}

impl EchoReply {
    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// Substitutes `name` into `Hello, %s!`, falling back to [`DEFAULT_NAME`].
///
/// The name is inserted verbatim: no trimming, escaping or length checks.
pub fn greeting(name: Option<&str>) -> EchoReply {
    let name = name.unwrap_or(DEFAULT_NAME);
    EchoReply {
        reply: format!("{TEMPLATE_PREFIX}{name}{TEMPLATE_SUFFIX}"),
    }
}
