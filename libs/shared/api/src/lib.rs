pub mod client;
pub mod error;

pub use client::ClinicApiClient;
pub use error::ApiError;
