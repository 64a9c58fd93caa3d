//! I/O layer: decoding sources from disk or memory, fetching remote bytes over HTTP,
//! and `writers` for PNG outputs and the JSON run report.
pub mod fetch;
pub mod reader;
pub mod writers;

pub use fetch::{FetchResponse, Fetcher};
#[cfg(feature = "remote")]
pub use fetch::HttpFetcher;
