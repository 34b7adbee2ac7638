use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use chrono::Utc;

use super::app::{AppMode, DashboardApp, FormField};
use super::layout::{app_layout, centered_popup};
use crate::clock::SystemClock;
use crate::formatting::utils::{format_hours, format_local_time, render_bar, truncate};
use crate::grouping::group_by_zone;
use crate::models::TeamMember;
use crate::schedule::{member_status, overlap_bar};

const SELECTION_BG: Color = Color::Rgb(30, 35, 50);

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let layout = app_layout(frame.size());

    draw_header(frame, layout.header, app);
    draw_members(frame, layout.main, app);
    draw_footer(frame, layout.footer, app);

    if app.mode == AppMode::AddForm {
        draw_add_form(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let width = area.width as usize;

    let left = vec![
        Span::styled(
            " teamzone ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} member(s)", app.store.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let clock = format!("{} UTC ", Utc::now().format("%H:%M:%S"));
    let left_len: usize = left.iter().map(|s| s.content.len()).sum();
    let pad = width.saturating_sub(left_len + clock.len());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(clock, Style::default().fg(Color::Yellow)));

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}

fn draw_members(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team by time zone ")
        .border_style(Style::default().fg(Color::DarkGray));

    if app.store.is_empty() {
        let empty = Paragraph::new("No team members yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected_id = app.visible.get(app.selected_index).copied();
    let bar_width = (area.width.saturating_sub(8) as usize).min(48);

    // Flatten groups into list items; remember which item holds the selection
    // so we can scroll it into view.
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_item = 0usize;

    for group in group_by_zone(app.store.members()) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({})", group.zone, group.members.len()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))));

        for member in group.members {
            let selected = selected_id == Some(member.id);
            if selected {
                selected_item = items.len();
            }
            items.push(member_item(member, selected, bar_width));
        }
    }

    // Each member item spans two rows; approximate scrolling by item index.
    let inner_height = area.height.saturating_sub(2) as usize;
    let visible_items = (inner_height / 2).max(1);
    let skip = selected_item.saturating_sub(visible_items.saturating_sub(1));

    let list = List::new(items.into_iter().skip(skip).collect::<Vec<_>>()).block(block);
    frame.render_widget(list, area);
}

fn member_item(member: &TeamMember, selected: bool, bar_width: usize) -> ListItem<'static> {
    let base = if selected {
        Style::default().bg(SELECTION_BG)
    } else {
        Style::default()
    };

    let mut info_spans: Vec<Span> = Vec::new();

    match member_status(member, &SystemClock) {
        Ok(status) => {
            let (symbol, symbol_style) = if status.working {
                ("●", Style::default().fg(Color::Green))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            info_spans.push(Span::styled(format!("  {} ", symbol), base.patch(symbol_style)));
            info_spans.push(Span::styled(
                format!("{:<18}", truncate(&member.name, 18)),
                base.fg(Color::White).add_modifier(if selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
            ));
            info_spans.push(Span::styled(
                format!("{} local  ", format_local_time(&status.local_time)),
                base.fg(Color::Yellow),
            ));
            info_spans.push(Span::styled(
                format_hours(&member.working_hours.start, &member.working_hours.end),
                base.fg(Color::Gray),
            ));
            if member.avatar.is_some() {
                info_spans.push(Span::styled("  [avatar]", base.fg(Color::DarkGray)));
            }
        }
        Err(e) => {
            info_spans.push(Span::styled(
                format!("  ! {}  {}", truncate(&member.name, 18), e),
                base.fg(Color::Red),
            ));
        }
    }

    let bar_line = match overlap_bar(&member.working_hours) {
        Ok(bar) => Line::from(Span::styled(
            format!("      {}", render_bar(bar_width, bar.offset_pct, bar.width_pct)),
            base.fg(Color::Green),
        )),
        Err(_) => Line::from(Span::styled(
            "      (invalid hours)".to_string(),
            base.fg(Color::Red),
        )),
    };

    ListItem::new(vec![Line::from(info_spans), bar_line])
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let line = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Green),
        ))
    } else {
        let hint = match app.mode {
            AppMode::Normal => " a add  d remove  r reload  j/k navigate  q quit",
            AppMode::AddForm => " Tab next field  Enter submit  Esc cancel",
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_add_form(frame: &mut Frame, app: &DashboardApp) {
    let area = centered_popup(52, 14, frame.size());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add member ")
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        form_line("Name", &app.form.field_name, app.form.active == FormField::Name),
        form_line("Zone", &app.form.zone, app.form.active == FormField::Zone),
        form_line("Start", &app.form.start, app.form.active == FormField::Start),
        form_line("End", &app.form.end, app.form.active == FormField::End),
        form_line("Avatar", &app.form.avatar_path, app.form.active == FormField::Avatar),
    ];

    if app.form.avatar_loading {
        lines.push(Line::from(Span::styled(
            "  encoding avatar...",
            Style::default().fg(Color::Yellow),
        )));
    } else if app.form.avatar.is_some() {
        lines.push(Line::from(Span::styled(
            "  avatar ready",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    // Zone completion hints while the zone field has focus.
    if app.form.active == FormField::Zone {
        for suggestion in app.zone_suggestions(3) {
            lines.push(Line::from(Span::styled(
                format!("    {}", suggestion),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let form = Paragraph::new(lines).block(block);
    frame.render_widget(form, area);
}

fn form_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if active { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!(" {:<7}", label), label_style),
        Span::styled(
            format!("{}{}", value, cursor),
            Style::default().fg(Color::White),
        ),
    ])
}
