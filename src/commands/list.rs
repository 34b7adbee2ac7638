use clap::ArgMatches;

use crate::clock::SystemClock;
use crate::config::{load_config, resolve_store_path};
use crate::formatting::members::print_members;
use crate::grouping::group_by_zone;
use crate::store::TeamStore;

pub fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");

    let config = load_config();
    let store = TeamStore::load(resolve_store_path(&config))?;

    if store.is_empty() {
        println!("No team members yet. Add one with 'teamzone add'.");
        return Ok(());
    }

    if format != "json" {
        let zones = group_by_zone(store.members()).len();
        println!("Team of {} across {} time zone(s):", store.len(), zones);
    }
    print_members(store.members(), format, &SystemClock);

    Ok(())
}
