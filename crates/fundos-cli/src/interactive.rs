use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use fundos_core::models::{is_valid_lat_lon, Coordinates, PlaceDraft, PlaceType};
use fundos_geo::parse_coordinates_from_url;

/// Prompt for every field of a new place
pub fn interactive_add() -> Result<PlaceDraft> {
    println!("\n📍 New place\n");

    let name: String = Input::new()
        .with_prompt("Name")
        .validate_with(|s: &String| non_blank(s))
        .interact_text()?;

    let district: String = Input::new()
        .with_prompt("District")
        .validate_with(|s: &String| non_blank(s))
        .interact_text()?;

    let type_labels: Vec<&str> = PlaceType::ALL.iter().map(|t| t.label()).collect();
    let type_idx = Select::new()
        .with_prompt("Type")
        .items(&type_labels)
        .default(0)
        .interact()?;

    let location_options = vec![
        "Paste a Google Maps or Waze link",
        "Enter latitude and longitude",
        "Skip (no distance for this place)",
    ];
    let location_idx = Select::new()
        .with_prompt("Location")
        .items(&location_options)
        .default(0)
        .interact()?;

    let coordinates = match location_idx {
        0 => {
            let url: String = Input::new().with_prompt("Link").interact_text()?;
            let parsed = parse_coordinates_from_url(&url);
            if parsed.is_none() {
                println!(
                    "{} No coordinates found in that link; saving without location",
                    style("⚠").yellow().bold()
                );
            }
            parsed
        }
        1 => {
            let lat: f64 = Input::new()
                .with_prompt("Latitude")
                .validate_with(|v: &f64| in_range(*v, 90.0))
                .interact_text()?;
            let lon: f64 = Input::new()
                .with_prompt("Longitude")
                .validate_with(|v: &f64| in_range(*v, 180.0))
                .interact_text()?;
            Some(Coordinates { lat, lon })
        }
        _ => None,
    };

    Ok(PlaceDraft {
        name,
        district,
        place_type: type_labels[type_idx].to_string(),
        coordinates: coordinates.filter(|c| is_valid_lat_lon(c.lat, c.lon)),
    })
}

fn non_blank(s: &str) -> Result<(), &'static str> {
    if s.trim().is_empty() {
        Err("This field is required")
    } else {
        Ok(())
    }
}

fn in_range(value: f64, limit: f64) -> Result<(), String> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(format!("Must be between -{} and {}", limit, limit))
    }
}
