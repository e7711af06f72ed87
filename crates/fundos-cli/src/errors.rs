use console::style;
use std::fmt;

/// Error with remediation suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn place_not_found(id: &str) -> CliError {
    CliError::new("Place not found")
        .with_context(format!("No place has the id '{}'.", id))
        .with_suggestion("List places with their ids: fundos list")
        .with_suggestion("Search by name: fundos list --search <text>")
        .with_help("Run: fundos list --help")
}

pub fn invalid_place(reason: impl fmt::Display) -> CliError {
    CliError::new("Place rejected")
        .with_context(reason.to_string())
        .with_suggestion("Give a non-empty --name and --district")
        .with_suggestion("Use --type Parque or --type Fundo")
        .with_suggestion("Latitude must be within [-90, 90] and longitude within [-180, 180]")
        .with_help("Run: fundos add --help")
}

pub fn link_without_coordinates(url: &str) -> CliError {
    CliError::new("No coordinates found in link")
        .with_context(format!("Could not find a latitude/longitude pair in:\n  {}", url))
        .with_suggestion("Open the place in Google Maps and copy the URL from the address bar")
        .with_suggestion("Or pass the coordinates directly with --lat and --lon")
        .with_help("Run: fundos parse-link --help")
}

pub fn unknown_type(name: &str) -> CliError {
    CliError::new("Unknown place type")
        .with_context(format!("'{}' is not a place type.", name))
        .with_suggestion("Use Parque (or park) and Fundo (or estate)")
        .with_help("Run: fundos facets")
}

pub fn invalid_locale(locale: &str, reason: impl fmt::Display) -> CliError {
    CliError::new("Unsupported locale")
        .with_context(format!("Could not set up sorting for locale '{}': {}", locale, reason))
        .with_suggestion("Use a BCP 47 tag such as es, es-PE or en")
        .with_suggestion("Or unset FUNDOS_LOCALE and the locale key in config.toml")
        .with_help("Run: fundos status")
}

pub fn snapshot_unreadable(path: &str, reason: impl fmt::Display) -> CliError {
    CliError::new("Cannot read snapshot")
        .with_context(format!("Path: {}\n\nError: {}", path, reason))
        .with_suggestion("The file must hold a JSON list of place records")
        .with_help("Run: fundos sync --help")
}
