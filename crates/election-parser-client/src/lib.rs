pub mod client;
pub mod error;

pub use client::ParseClient;
pub use error::ClientError;
