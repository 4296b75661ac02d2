//! Command-line interface definition and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the catalog server.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// API keys allowed to view and create products, on top of those in the
    /// configuration. May be repeated or given as a comma-separated list.
    #[arg(short = 'k', long = "api-key", env = "APP_API_KEYS", value_delimiter = ',')]
    pub api_keys: Vec<String>,

    /// Write the OpenAPI document to this path and exit.
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_may_be_repeated_or_comma_separated() {
        let cli = Cli::try_parse_from(["catalogd", "-k", "a,b", "--api-key", "c"]).unwrap();
        assert_eq!(cli.api_keys, ["a", "b", "c"]);
        assert!(cli.schema.is_none());
    }

    #[test]
    fn schema_path_is_optional() {
        let cli = Cli::try_parse_from(["catalogd", "--schema", "openapi.json"]).unwrap();
        assert_eq!(cli.schema, Some(PathBuf::from("openapi.json")));
    }
}
