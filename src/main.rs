use std::process;

use clap::{Arg, Command};
use colored::*;

use teamzone::commands::{handle_add, handle_config, handle_list, handle_remove, handle_zones};
use teamzone::interactive::handlers::run_interactive_mode;
use teamzone::logging::init_logging;

fn main() {
    let app = Command::new("teamzone")
        .about("Team time zone dashboard - see who is working right now")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(
            Command::new("add")
                .about("Add a team member")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Member name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("zone")
                        .long("zone")
                        .short('z')
                        .value_name("ZONE")
                        .help("IANA time zone identifier (e.g., America/New_York)")
                        .required(true),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("HH:MM")
                        .help("Start of working hours (default 09:00)"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_name("HH:MM")
                        .help("End of working hours (default 17:00)"),
                )
                .arg(
                    Arg::new("avatar")
                        .long("avatar")
                        .value_name("FILE")
                        .help("Image file to embed as the member's avatar"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a team member by id")
                .arg(
                    Arg::new("id")
                        .value_name("ID")
                        .help("Member id (shown by 'teamzone list')")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Show the team grouped by time zone")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("zones")
                .about("List IANA time zone identifiers")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("QUERY")
                        .help("Filter zones by substring"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("View or change configuration")
                .arg(
                    Arg::new("store-path")
                        .long("store-path")
                        .value_name("PATH")
                        .help("Where to keep the member snapshot"),
                )
                .arg(
                    Arg::new("default-start")
                        .long("default-start")
                        .value_name("HH:MM")
                        .help("Default start of working hours for new members"),
                )
                .arg(
                    Arg::new("default-end")
                        .long("default-end")
                        .value_name("HH:MM")
                        .help("Default end of working hours for new members"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current configuration")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("interactive").about("Open the interactive dashboard"));

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("add", sub_matches)) => handle_add(sub_matches),
        Some(("remove", sub_matches)) => handle_remove(sub_matches),
        Some(("list", sub_matches)) => handle_list(sub_matches),
        Some(("zones", sub_matches)) => handle_zones(sub_matches),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        Some(("interactive", _)) | None => {
            let _ = init_logging();
            run_interactive_mode()
        }
        _ => {
            eprintln!("Unknown command. Use 'teamzone --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
