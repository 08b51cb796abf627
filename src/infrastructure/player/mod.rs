//! Upstream player-statistics API client

pub mod http;

pub use http::{HttpPlayerApi, UpstreamConfig};
