//! Review API module.
//!
//! - [`client`] - HTTP client for the homework status endpoint
//! - [`response`] - shape checks on the raw reply
//! - [`status`] - review states and the chat text for each

pub mod client;
pub mod response;
pub mod status;

pub use client::{ApiClient, StatusSource};
pub use response::{check_response, response_cursor};
pub use status::{parse_status, HomeworkStatus};
