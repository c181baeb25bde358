//! Catalog core for a vehicle rental browsing app.
//!
//! Two bundled JSON payloads are decoded once at startup into an immutable
//! [`models::Catalog`], published through a [`store::CatalogStore`] and
//! narrowed for display by the pure [`filter::visible_listings`] according to
//! the [`selection::CategorySelector`] state. Rendering is left to the
//! consumer; this crate owns the data and the state transitions only.

pub mod constants;
pub mod datasource;
pub mod filter;
pub mod models;
mod ordered_map;
pub mod prelude;
pub mod repository;
pub mod selection;
pub mod settings;
pub mod store;

pub use self::ordered_map::OrderedMap;
