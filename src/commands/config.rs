use std::path::PathBuf;

use clap::ArgMatches;
use colored::*;

use crate::clock::parse_hhmm;
use crate::config::{load_config, resolve_store_path, save_config};

pub fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(path) = matches.get_one::<String>("store-path") {
        config.store_path = Some(PathBuf::from(path));
        changed = true;
    }
    if let Some(start) = matches.get_one::<String>("default-start") {
        parse_hhmm(start)?;
        config.default_start = Some(start.clone());
        changed = true;
    }
    if let Some(end) = matches.get_one::<String>("default-end") {
        parse_hhmm(end)?;
        config.default_end = Some(end.clone());
        changed = true;
    }

    if changed {
        save_config(&config)?;
        println!("{} Configuration saved.", "✅".green());
    }

    if matches.get_flag("show") || !changed {
        println!("{}: {}", "Store".bold(), resolve_store_path(&config).display());
        println!(
            "{}: {} - {}",
            "Default hours".bold(),
            config.default_start(),
            config.default_end()
        );
    }

    Ok(())
}
