//! The fixed base catalog of parks and estates around Lima
//!
//! Coordinates are approximate and only used for straight-line distance.

use crate::models::{Place, PlaceType};

/// (type, name, district, lat, lon)
const BASE: &[(PlaceType, &str, &str, f64, f64)] = &[
    // Parks
    (PlaceType::Park, "Parque de la Amistad", "Surco", -12.1495, -76.998),
    (PlaceType::Park, "Parque Voces por el Clima", "Surco", -12.1668, -76.9756),
    (PlaceType::Park, "Parque Miguel Grau", "Miraflores", -12.1228, -77.0312),
    (PlaceType::Park, "Parque El Principito", "Miraflores", -12.1298, -77.0225),
    (PlaceType::Park, "Parque Salazar", "Miraflores", -12.1296, -77.03),
    (PlaceType::Park, "Parque Antonio Raimondi", "Miraflores", -12.1371, -77.0369),
    (PlaceType::Park, "Parque Domossola", "Miraflores", -12.13, -77.0377),
    (PlaceType::Park, "Parque Casuarinas", "Surco", -12.1185, -76.9855),
    (PlaceType::Park, "Parque de la Felicidad", "San Borja", -12.1006, -77.0028),
    (PlaceType::Park, "Parque de la Imaginación", "San Miguel", -12.0775, -77.0868),
    (PlaceType::Park, "Parque Bicentenario", "San Isidro", -12.0999, -77.0368),
    (PlaceType::Park, "Circuito Mágico del Agua", "Cercado de Lima", -12.0705, -77.0334),
    (PlaceType::Park, "Parque Reducto N°2", "Miraflores", -12.1218, -77.022),
    (PlaceType::Park, "Loma Amarilla", "Surco", -12.1529, -76.9832),
    (PlaceType::Park, "Parque del Aire", "Surco", -12.1053, -77.0005),
    (PlaceType::Park, "Parque El Olivar", "San Isidro", -12.1023, -77.0365),
    (PlaceType::Park, "Parque San Martín", "San Borja", -12.1067, -77.0009),
    (PlaceType::Park, "Planetario José Castro Mendivil", "Chorrillos", -12.1795, -77.0226),
    (PlaceType::Park, "Parque de los Niños", "La Molina", -12.0929, -76.9478),
    (PlaceType::Park, "Parque de las Leyendas", "San Miguel", -12.0879, -77.068),
    // Estates
    (PlaceType::Estate, "San Vicente", "Lurín", -12.2653, -76.877),
    (PlaceType::Estate, "Rumipama", "Cieneguilla", -12.1125, -76.8355),
    (PlaceType::Estate, "Mamacona", "Lurín", -12.264, -76.8906),
    (PlaceType::Estate, "La Perla", "Huaral", -11.4956, -77.2075),
    (PlaceType::Estate, "Viera", "Chosica", -11.9435, -76.6966),
    (PlaceType::Estate, "La Fogata", "Cieneguilla", -12.1005, -76.836),
];

/// Build the base catalog in its canonical order
pub fn base_catalog() -> Vec<Place> {
    BASE.iter()
        .map(|&(place_type, name, district, lat, lon)| {
            Place::new(place_type, name, district).with_coordinates(lat, lon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = base_catalog();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 26);
    }

    #[test]
    fn test_every_entry_has_valid_coordinates() {
        for place in base_catalog() {
            let coords = place.coordinates.expect("base places carry coordinates");
            assert!(coords.is_valid(), "{} has invalid coordinates", place.id);
        }
    }

    #[test]
    fn test_order_starts_with_parks() {
        let catalog = base_catalog();
        assert_eq!(catalog[0].name, "Parque de la Amistad");
        assert_eq!(catalog[20].place_type, PlaceType::Estate);
    }
}
