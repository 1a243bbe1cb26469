pub mod client;

pub use client::{DEFAULT_ENDPOINT, RemoteDataSource, SheetsClient, decode_records};
