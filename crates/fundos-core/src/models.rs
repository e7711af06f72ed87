pub mod filter;
pub mod place;
pub mod position;
pub mod visited;

pub use filter::{FilterState, SortKey};
pub use place::{Place, PlaceDraft, PlaceId, PlaceType};
pub use position::{is_valid_lat_lon, Coordinates, UserPosition};
pub use visited::{Progress, VisitedSet};
