pub mod collections;
pub mod notices;

pub use collections::{use_collections, Collection, CollectionsProvider};
pub use notices::{use_notices, NoticesProvider};
