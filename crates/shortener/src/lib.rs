mod client;
mod error;

pub use client::{ShortenerClient, Strategy};
pub use error::ShortenError;

pub type Result<T> = std::result::Result<T, ShortenError>;
