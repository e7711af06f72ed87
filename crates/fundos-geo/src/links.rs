//! Coordinate extraction from pasted map links, and navigation deep links

use fundos_core::models::{is_valid_lat_lon, Coordinates, Place};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const NUMBER: &str = r"(-?\d+(?:\.\d+)?)";

/// "@-12.12,-77.03" anywhere in the link
static AT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"@{NUMBER},\s*{NUMBER}")).unwrap());

/// "?q=-12.12,-77.03", "&query=..." or "&destination=...", comma optionally escaped
static QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)[?&](?:q|query|destination)={NUMBER}(?:,|%2C)\s*{NUMBER}")).unwrap()
});

/// "/@-12.12,-77.03" path segment
static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"/@{NUMBER},\s*{NUMBER}")).unwrap());

/// Bare "number,number" anywhere
static BARE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{NUMBER}\s*,\s*{NUMBER}")).unwrap());

/// Extract coordinates from a map-service link.
///
/// Patterns are tried in order: `@lat,lon`, a `q=`/`query=`/`destination=`
/// parameter, a `/@lat,lon` path segment, then any bare `number,number`.
/// A match whose values fall outside the valid latitude/longitude ranges does
/// not count, and the next pattern is tried.
pub fn parse_coordinates_from_url(url: &str) -> Option<Coordinates> {
    [&AT_PATTERN, &QUERY_PATTERN, &PATH_PATTERN]
        .into_iter()
        .find_map(|pattern| first_valid_match(pattern, url))
        .or_else(|| {
            BARE_PATTERN.captures_iter(url).find_map(|caps| coordinates_from(&caps))
        })
}

fn first_valid_match(pattern: &Regex, url: &str) -> Option<Coordinates> {
    coordinates_from(&pattern.captures(url)?)
}

fn coordinates_from(caps: &regex::Captures<'_>) -> Option<Coordinates> {
    let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lon: f64 = caps.get(2)?.as_str().parse().ok()?;
    is_valid_lat_lon(lat, lon).then_some(Coordinates { lat, lon })
}

/// Locality appended to text queries when a place has no coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkContext {
    pub city: String,
    pub country: String,
}

impl Default for LinkContext {
    fn default() -> Self {
        Self { city: "Lima".to_string(), country: "Perú".to_string() }
    }
}

/// Turn-by-turn links for the two supported navigation apps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    pub waze: String,
    pub google_maps: String,
}

/// Build navigation links for a place.
///
/// Coordinates are preferred; without them the destination is a
/// "name, district, city, country" text query. The origin is only honoured
/// by Google Maps, Waze always starts from the device location.
pub fn navigation_links(
    place: &Place,
    origin: Option<&Coordinates>,
    context: &LinkContext,
) -> NavigationLinks {
    let (waze_target, gmaps_destination) = match &place.coordinates {
        Some(c) => (format!("ll={},{}", c.lat, c.lon), format!("{},{}", c.lat, c.lon)),
        None => {
            let query = urlencoding::encode(&format!(
                "{}, {}, {}, {}",
                place.name, place.district, context.city, context.country
            ))
            .into_owned();
            (format!("q={}", query), query)
        }
    };

    let mut google_maps = format!(
        "https://www.google.com/maps/dir/?api=1&destination={}&travelmode=driving",
        gmaps_destination
    );
    if let Some(o) = origin {
        google_maps.push_str(&format!("&origin={},{}", o.lat, o.lon));
    }

    NavigationLinks {
        waze: format!("https://waze.com/ul?{}&navigate=yes", waze_target),
        google_maps,
    }
}
