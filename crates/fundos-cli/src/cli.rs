use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fundos - Checklist of parks and estates around Lima
#[derive(Parser, Debug)]
#[command(name = "fundos")]
#[command(about = "Checklist of parks and estates around Lima", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved state and config.toml
    /// (defaults to $FUNDOS_DATA_DIR, then ./.fundos)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Collation locale for sorting (e.g. "es")
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the places that pass the active filters
    List(ListArgs),

    /// Show type and district chips with their counts
    Facets(FacetsArgs),

    /// Change the saved type and district selections
    Filter(FilterArgs),

    /// Mark a place as visited
    Visit(VisitArgs),

    /// Mark a place as pending again
    Unvisit(VisitArgs),

    /// Show progress, position and configuration
    Status,

    /// Add a custom place
    Add(AddArgs),

    /// Set your current position
    Locate(LocateArgs),

    /// Extract coordinates from a map link
    ParseLink(ParseLinkArgs),

    /// Print navigation links for a place
    Links(LinksArgs),

    /// Replace custom places with a snapshot file
    Sync(SyncArgs),

    /// Export visible places as GeoJSON
    Export(ExportArgs),
}

/// Transient view options; these are never saved
#[derive(Parser, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Case and accent insensitive text search over name, district and type
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only show places not yet visited
    #[arg(long)]
    pub only_pending: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Sort by type, name, district or distance
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    #[command(subcommand)]
    pub action: FilterAction,
}

#[derive(Subcommand, Debug)]
pub enum FilterAction {
    /// Toggle a type (Parque or Fundo)
    Type {
        /// Type name
        name: String,
    },

    /// Toggle a district
    District {
        /// District name as shown by `fundos facets`
        name: String,
    },

    /// Select every available district, or clear them if all are selected
    AllDistricts,

    /// Clear type and district selections
    Clear,
}

#[derive(Parser, Debug)]
pub struct VisitArgs {
    /// Place id (see `fundos list`)
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Place name
    #[arg(long, required_unless_present = "interactive")]
    pub name: Option<String>,

    /// District
    #[arg(long, required_unless_present = "interactive")]
    pub district: Option<String>,

    /// Parque or Fundo
    #[arg(long = "type", value_name = "TYPE", required_unless_present = "interactive")]
    pub place_type: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Map link to take the coordinates from
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub link: Option<String>,

    /// Interactive mode - prompt for every field
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true, required_unless_present = "link")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Map link pointing at your position
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub link: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ParseLinkArgs {
    /// Google Maps, Waze or any link containing "lat,lon"
    pub url: String,
}

#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Place id
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// JSON file with a list of place records
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
