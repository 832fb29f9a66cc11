//! The engagement feed engine: content store, pure reducer, write-through
//! persistence, and the derived filter/sort view.
//!
//! The UI layer never mutates posts directly; it dispatches a `FeedAction`
//! through [`crate::app::App::dispatch`], which applies the reducer,
//! swaps the store's collection, and mirrors it to disk.

pub mod persist;
pub mod reducer;
pub mod store;
pub mod view;

pub use persist::FeedStorage;
pub use reducer::FeedAction;
pub use store::ContentStore;
pub use view::{visible_posts, FeedQuery, SortKey};
