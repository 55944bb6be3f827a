use std::io;
use std::process::ExitCode;

use scale_builder::config::{CliConfig, USAGE};
use scale_builder::parse::{parse_query, Query};
use scale_builder::renderers::{json, text};
use scale_builder::repl::{self, ReplOptions};
use scale_builder::{build_named, CatalogError, ModeCatalog};

fn init_logging(config: &CliConfig) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.default_log_filter()))
        .format_timestamp(None)
        .init();
}

fn load_catalog(config: &CliConfig) -> Result<ModeCatalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => ModeCatalog::from_path(path),
        None => ModeCatalog::builtin().cloned(),
    }
}

/// Answer a query given on the command line
fn one_shot(catalog: &ModeCatalog, query: &str, config: &CliConfig) -> ExitCode {
    let result = parse_query(query).and_then(|parsed| match parsed {
        Query::Scale { root, mode } => build_named(catalog, root, &mode).map(Some),
        Query::ShowModes => {
            println!("{}", repl::mode_listing(catalog));
            Ok(None)
        }
        Query::Help => {
            println!("{}", repl::instructions());
            Ok(None)
        }
        Query::Exit => Ok(None),
    });

    match result {
        Ok(Some(scale)) if config.json => match json::to_json_pretty(&scale) {
            Ok(rendered) => {
                println!("{}", rendered);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        },
        Ok(Some(scale)) => {
            println!("{}", text::render_scale(&scale));
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging(&config);
    log::info!("scales starting");

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(query) = &config.query {
        return one_shot(&catalog, query, &config);
    }

    let options = ReplOptions {
        json: config.json,
        quiet: config.quiet,
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match repl::run(&catalog, stdin.lock(), &mut stdout, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
