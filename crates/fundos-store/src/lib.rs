//! Fundos Store - Persistence and sync ports and adapters
//!
//! This crate defines the storage and remote-feed ports the application
//! controller talks to, and provides in-memory, file-backed and channel
//! adapters for them.

pub mod feed;
pub mod json_dir;
pub mod memory;
pub mod ports;
pub mod records;
pub mod state;

pub use feed::{ChannelFeed, JsonSnapshotFeed};
pub use json_dir::JsonDirStore;
pub use memory::MemoryStateStore;
pub use ports::{PlaceFeed, StateStore};
pub use records::{places_from_records, records_from_value, PlaceRecord};
pub use state::PersistedState;
