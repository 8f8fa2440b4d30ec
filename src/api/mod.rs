pub mod client;

pub use client::{BackendClient, DEFAULT_BASE_URL};
