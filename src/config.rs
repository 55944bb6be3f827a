//! Command-line configuration for the `scales` binary
//!
//! Plain `std::env::args()` matching; the flag set is small.

use std::path::PathBuf;

pub const USAGE: &str = "Usage: scales [-v|--verbose] [--json] [--quiet] [--catalog FILE] [QUERY...]

  QUERY           a scale such as 'F Sharp Harmonic Minor'; without one an
                  interactive prompt is started
  --catalog FILE  load modes from a YAML file instead of the built-in catalog
  --json          print scales as JSON
  --quiet         do not print the instructions banner at the prompt
  -v, --verbose   debug logging (RUST_LOG overrides)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub verbose: bool,
    pub json: bool,
    pub quiet: bool,
    pub help: bool,
    pub catalog_path: Option<PathBuf>,
    /// Words of a one-shot query, joined with spaces
    pub query: Option<String>,
}

impl CliConfig {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<CliConfig, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = CliConfig::default();
        let mut words: Vec<String> = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => config.verbose = true,
                "--json" => config.json = true,
                "--quiet" => config.quiet = true,
                "-h" | "--help" => config.help = true,
                "--catalog" => {
                    let path = args
                        .next()
                        .ok_or_else(|| "--catalog requires a file path".to_string())?;
                    config.catalog_path = Some(PathBuf::from(path));
                }
                // "-1" is a query word, not a flag
                flag if flag.starts_with("--") || (flag.starts_with('-') && flag != "-1") => {
                    return Err(format!("Unknown option: '{}'", flag));
                }
                _ => words.push(arg),
            }
        }

        if !words.is_empty() {
            config.query = Some(words.join(" "));
        }
        Ok(config)
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
