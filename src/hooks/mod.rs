pub mod fetch;
pub mod pagination;

pub use fetch::{use_remote, FetchState};
pub use pagination::{PageAction, PageCursor};
