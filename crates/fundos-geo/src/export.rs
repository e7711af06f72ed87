//! GeoJSON export of places

use fundos_core::models::Place;
use geo::{BoundingRect, MultiPoint};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::distance::to_point;

/// Build a feature for a place; `extra` is merged into its properties.
///
/// Places without coordinates become features without geometry.
pub fn place_feature(place: &Place, extra: JsonObject) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), place.name.clone().into());
    properties.insert("district".to_string(), place.district.clone().into());
    properties.insert("type".to_string(), place.place_type.label().into());
    properties.extend(extra);

    Feature {
        bbox: None,
        geometry: place
            .coordinates
            .map(|c| Geometry::new(Value::Point(vec![c.lon, c.lat]))),
        id: Some(geojson::feature::Id::String(place.id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Collect features, with a bounding box over every located place
pub fn feature_collection<'a>(
    places: impl IntoIterator<Item = (&'a Place, JsonObject)>,
) -> FeatureCollection {
    let mut points = Vec::new();
    let features: Vec<Feature> = places
        .into_iter()
        .map(|(place, extra)| {
            if let Some(c) = &place.coordinates {
                points.push(to_point(c));
            }
            place_feature(place, extra)
        })
        .collect();

    let bbox = MultiPoint::new(points)
        .bounding_rect()
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

    FeatureCollection { bbox, features, foreign_members: None }
}
