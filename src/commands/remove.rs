use clap::ArgMatches;
use colored::*;

use crate::config::{load_config, resolve_store_path};
use crate::error::DashboardError;
use crate::store::TeamStore;

pub fn handle_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id: i64 = matches
        .get_one::<String>("id")
        .ok_or_else(|| DashboardError::Validation("Member ID is required".to_string()))?
        .parse()
        .map_err(|_| DashboardError::Validation("Member ID must be a number".to_string()))?;

    let config = load_config();
    let mut store = TeamStore::load(resolve_store_path(&config))?;

    let removed = store.remove_member(id)?;
    if removed > 0 {
        println!("{} Removed member {}", "✅".green(), id.to_string().bright_blue());
    } else {
        println!("No member with id {}.", id);
    }

    Ok(())
}
