use chrono::DateTime;
use chrono_tz::Tz;

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// 12-hour clock display, e.g. "03:42 PM".
pub fn format_local_time(time: &DateTime<Tz>) -> String {
    time.format("%I:%M %p").to_string()
}

/// "09:00 - 17:00" style label for a shift window.
pub fn format_hours(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}

/// Render a shift window on a fixed-width 24-hour track using block glyphs.
/// `offset_pct` and `width_pct` are percentages of the full day.
pub fn render_bar(width: usize, offset_pct: f64, width_pct: f64) -> String {
    if width == 0 {
        return String::new();
    }

    let start = ((offset_pct / 100.0) * width as f64).round() as usize;
    let len = ((width_pct / 100.0) * width as f64).round() as usize;
    let start = start.min(width);
    let len = len.min(width - start);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..start {
        bar.push('░');
    }
    for _ in 0..len {
        bar.push('█');
    }
    for _ in start + len..width {
        bar.push('░');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_strings_untouched() {
        assert_eq!(truncate("Ada", 10), "Ada");
    }

    #[test]
    fn test_truncate_long_strings_get_ellipsis() {
        assert_eq!(truncate("Australia/Lord_Howe", 10), "Austral...");
    }

    #[test]
    fn test_render_bar_covers_expected_cells() {
        // 09:00-17:00 on a 24-cell track: 9 leading cells, 8 filled.
        let bar = render_bar(24, 37.5, 480.0 / 1440.0 * 100.0);
        let filled: usize = bar.chars().filter(|c| *c == '█').count();
        let leading: usize = bar.chars().take_while(|c| *c == '░').count();
        assert_eq!(filled, 8);
        assert_eq!(leading, 9);
        assert_eq!(bar.chars().count(), 24);
    }

    #[test]
    fn test_render_bar_zero_width_window() {
        let bar = render_bar(24, 91.7, 0.0);
        assert!(bar.chars().all(|c| c == '░'));
    }
}
