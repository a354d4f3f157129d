//! In-memory movie catalog with named collections, plus the interactive shell that drives it.

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::catalog::{Catalog, CatalogError, EntryKind};
pub use models::Movie;
