pub mod config;
pub mod error;
pub mod feed;
pub mod leaderboard;
pub mod normalize;
pub mod query;
pub mod render;
pub mod router;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use error::FeedError;
pub use feed::FeedItem;
pub use query::{GallerySection, GallerySort, GalleryWindow, QueryMode, RequestParams};
pub use router::route;
pub use traits::JsonFetcher;
