use colored::*;

use crate::clock::ZoneClock;
use crate::formatting::theme::helpers::{status_color, status_symbol};
use crate::formatting::theme::ThemedColorize;
use crate::formatting::utils::{format_hours, format_local_time, render_bar, truncate};
use crate::grouping::group_by_zone;
use crate::models::TeamMember;
use crate::schedule::{member_status, overlap_bar};

const BAR_WIDTH: usize = 48;

pub fn print_members(members: &[TeamMember], format: &str, clock: &impl ZoneClock) {
    match format {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(members).unwrap_or_else(|_| "[]".to_string())
            );
        }
        "table" => print_table(members, clock),
        _ => print_grouped(members, clock),
    }
}

fn print_grouped(members: &[TeamMember], clock: &impl ZoneClock) {
    for group in group_by_zone(members) {
        println!(
            "\n{} {} {}",
            "━".repeat(16).bright_black(),
            format!(" {} ({}) ", group.zone, group.members.len()).bold(),
            "━".repeat(16).bright_black()
        );

        for member in group.members {
            print_member_card(member, clock);
        }
    }
}

fn print_member_card(member: &TeamMember, clock: &impl ZoneClock) {
    match member_status(member, clock) {
        Ok(status) => {
            let symbol = status_symbol(status.working).with_theme(status_color(status.working));
            let state = if status.working {
                "working".with_theme(status_color(true))
            } else {
                "off shift".with_theme(status_color(false))
            };

            let avatar_marker = if member.avatar.is_some() {
                " [avatar]".bright_black()
            } else {
                "".normal()
            };

            println!(
                "{} {}{}  {} local  {}  ({})",
                symbol,
                member.name.bold(),
                avatar_marker,
                format_local_time(&status.local_time).yellow(),
                format_hours(&member.working_hours.start, &member.working_hours.end),
                state
            );
        }
        Err(e) => {
            println!("{} {}  {}", "!".red().bold(), member.name.bold(), e.to_string().red());
            return;
        }
    }

    // 24-hour overlap track under each card, midnight to midnight.
    if let Ok(bar) = overlap_bar(&member.working_hours) {
        println!("  {}", render_bar(BAR_WIDTH, bar.offset_pct, bar.width_pct).green());
        let half = BAR_WIDTH / 2;
        println!(
            "  {}{}{}",
            format!("{:<width$}", "12 AM", width = half).bright_black(),
            format!("{:<width$}", "12 PM", width = half.saturating_sub(5)).bright_black(),
            "12 AM".bright_black()
        );
    }
}

fn print_table(members: &[TeamMember], clock: &impl ZoneClock) {
    println!(
        "{:<15} {:<20} {:<24} {:<10} {:<14} {:<10}",
        "ID".bold(),
        "Name".bold(),
        "Zone".bold(),
        "Local".bold(),
        "Hours".bold(),
        "Working".bold()
    );
    println!("{}", "-".repeat(97));

    for member in members {
        let (local, working) = match member_status(member, clock) {
            Ok(status) => (
                format_local_time(&status.local_time),
                if status.working { "yes".green() } else { "no".normal() },
            ),
            Err(_) => ("??:??".to_string(), "?".red()),
        };

        println!(
            "{:<15} {:<20} {:<24} {:<10} {:<14} {:<10}",
            member.id,
            truncate(&member.name, 18),
            truncate(&member.time_zone, 22),
            local,
            format_hours(&member.working_hours.start, &member.working_hours.end),
            working
        );
    }
}
