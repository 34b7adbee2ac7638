use clap::ArgMatches;
use colored::*;

use crate::clock::zone_names;

pub fn handle_zones(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let search = matches
        .get_one::<String>("search")
        .map(|s| s.to_lowercase());

    let matching: Vec<&str> = zone_names()
        .filter(|name| match &search {
            Some(query) => name.to_lowercase().contains(query),
            None => true,
        })
        .collect();

    if matching.is_empty() {
        println!("No zones matching your search.");
        return Ok(());
    }

    println!("{} zone(s):", matching.len());
    for name in matching {
        println!("  {}", name.cyan());
    }

    Ok(())
}
