use std::path::Path;

use chrono::Utc;
use clap::ArgMatches;
use colored::*;

use crate::avatar;
use crate::clock::{parse_hhmm, parse_zone};
use crate::config::{load_config, resolve_store_path};
use crate::error::DashboardError;
use crate::models::TeamMember;
use crate::store::TeamStore;

pub fn handle_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| DashboardError::Validation("Name is required".to_string()))?;
    let zone = matches
        .get_one::<String>("zone")
        .ok_or_else(|| DashboardError::Validation("Time zone is required".to_string()))?;

    if name.trim().is_empty() {
        return Err(DashboardError::Validation("Name must not be empty".to_string()).into());
    }
    if zone.trim().is_empty() {
        return Err(DashboardError::Validation("Time zone must not be empty".to_string()).into());
    }

    // Unknown zones never reach the store.
    parse_zone(zone)?;

    let config = load_config();
    let start = matches
        .get_one::<String>("start")
        .map(|s| s.as_str())
        .unwrap_or_else(|| config.default_start());
    let end = matches
        .get_one::<String>("end")
        .map(|s| s.as_str())
        .unwrap_or_else(|| config.default_end());
    parse_hhmm(start)?;
    parse_hhmm(end)?;

    let avatar = matches
        .get_one::<String>("avatar")
        .map(|path| avatar::encode_file(Path::new(path)))
        .transpose()?;

    // Creation-timestamp id, the caller-guaranteed uniqueness scheme.
    let id = Utc::now().timestamp_millis();
    let member = TeamMember::new(id, name, zone, start, end).with_avatar(avatar);

    let mut store = TeamStore::load(resolve_store_path(&config))?;
    store.add_member(member)?;

    println!("{} {}", "✅".green(), "Member added!".green().bold());
    println!("{}: {}", "ID".bold(), id.to_string().bright_blue());
    println!("{}: {}", "Name".bold(), name);
    println!("{}: {}", "Zone".bold(), zone);
    println!("{}: {} - {}", "Hours".bold(), start, end);

    Ok(())
}
