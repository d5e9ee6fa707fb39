//! Collector wire envelope.
//!
//! Events are not sent as-is: each one is serialized to JSON and carried as
//! a string (`source_extension_json`) inside a [`LogEvent`], and a batch of
//! those travels in a [`LogRequest`]. The collector answers with a
//! [`LogResponse`] telling the client when to send next and what to do with
//! the request it just sent.

mod request;
mod response;

pub use request::{ClientInfo, LogEvent, LogRequest};
pub use response::{LogResponse, LogResponseDetails, ResponseAction};
