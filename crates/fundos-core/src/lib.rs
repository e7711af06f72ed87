//! Fundos Core - Domain models, catalog, repository and configuration
//!
//! This crate contains the place catalog, the text and collation helpers the
//! filtering engine relies on, and the layered configuration.

pub mod catalog;
pub mod collation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod text;

pub use collation::CatalogCollator;
pub use error::{FundosError, Result};
pub use repository::PlaceRepository;
