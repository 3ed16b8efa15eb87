//! Background services
//!
//! - store: runs the Top Sites store on its own task behind the dispatch boundary

pub mod store;

pub use store::{spawn_store_service, StoreDispatcher, StoreSnapshot};
