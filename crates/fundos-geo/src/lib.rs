//! Fundos Geo - Distance, travel time and map-link helpers
//!
//! Everything here is a pure function over coordinates and places.

pub mod distance;
pub mod drive_time;
pub mod export;
pub mod format;
pub mod links;

pub use distance::{distance_km, distance_between, EARTH_RADIUS_KM};
pub use drive_time::{estimate_drive_time_range_minutes, DriveTimeRange};
pub use export::{feature_collection, place_feature};
pub use format::{format_distance_km, format_drive_range, format_minutes};
pub use links::{navigation_links, parse_coordinates_from_url, LinkContext, NavigationLinks};
