mod client;
mod error;
pub mod models;
pub mod select;

pub use client::VkrClient;
pub use error::VkrError;
pub use models::{PostDownload, PostInfo};
pub use select::select_variant;

pub type Result<T> = std::result::Result<T, VkrError>;
