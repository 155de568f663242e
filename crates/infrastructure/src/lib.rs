//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_reference_fetcher;
mod in_memory_profile_store;
mod json_file_profile_store;

pub use http_reference_fetcher::{HttpReferenceFetcher, parse_attributes, parse_locations};
pub use in_memory_profile_store::InMemoryProfileStore;
pub use json_file_profile_store::JsonFileProfileStore;
