pub mod client;

pub use client::{build_request_url, FetchedBody, SheetClient, SheetFetch};
