//! State Management
//!
//! The route store: the single tab-wide observable behind the hash router.

pub mod route;

pub use route::{init_hash_listener, provide_route_store, Route, RouteStore};
