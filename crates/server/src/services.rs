pub mod cache;
pub mod canonical;
pub mod document;
pub mod embed;

pub use cache::ResponseCache;
pub use embed::{EmbedService, DEFAULT_DESCRIPTION};
