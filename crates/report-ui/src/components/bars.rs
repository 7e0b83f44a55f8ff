use crate::themes::Theme;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Width in terminal columns of the bar portion (excluding labels).
const BAR_WIDTH: u16 = 40;

/// Width reserved for the worker-name column in front of each bar.
const NAME_WIDTH: usize = 14;

/// Pad or truncate `name` to [`NAME_WIDTH`] display columns.
fn fit_name(name: &str) -> String {
    let mut out = String::new();
    let mut width = 0usize;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > NAME_WIDTH {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str(&" ".repeat(NAME_WIDTH.saturating_sub(width)));
    out
}

// ── CountBars ─────────────────────────────────────────────────────────────────

/// Paired horizontal bars comparing a worker's total and resolved ticket
/// counts against the chart-wide maximum.
pub struct CountBars<'a> {
    /// Worker the bars belong to.
    pub worker: &'a str,
    /// Ticket count across all categories.
    pub total: u64,
    /// Resolved ticket count.
    pub resolved: u64,
    /// Largest total in the chart; all bars scale against it.
    pub max: u64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
}

impl<'a> CountBars<'a> {
    /// Render the pair as two [`Line`]s: total on top, resolved below.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let total_line = Line::from(vec![
            Span::styled(fit_name(self.worker), self.theme.label),
            Span::styled(scaled_bar(self.total, self.max), self.theme.bar_total),
            Span::styled(format!(" {}", self.total), self.theme.value),
        ]);
        let resolved_line = Line::from(vec![
            Span::raw(" ".repeat(NAME_WIDTH)),
            Span::styled(scaled_bar(self.resolved, self.max), self.theme.bar_resolved),
            Span::styled(format!(" {}", self.resolved), self.theme.dim),
        ]);
        vec![total_line, resolved_line]
    }
}

/// A bar of `█` characters proportional to `value / max`.
///
/// A non-zero value always renders at least one block so small counts stay
/// visible next to large ones.
fn scaled_bar(value: u64, max: u64) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let chars = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(chars.max(1))
}

// ── SplitBar ──────────────────────────────────────────────────────────────────

/// A proportional two-segment bar showing how a worker's average resolution
/// time splits between the assigned and reported roles.
///
/// Each segment's width is proportional to its share of the combined figure;
/// short textual labels follow the bar.
pub struct SplitBar<'a> {
    /// Worker the split belongs to.
    pub worker: &'a str,
    /// Average work days per resolved assigned ticket.
    pub assigned_days: f64,
    /// Average work days per resolved reported ticket.
    pub reported_days: f64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
}

impl<'a> SplitBar<'a> {
    /// Render the split as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = vec![Span::styled(fit_name(self.worker), self.theme.label)];

        let combined = self.assigned_days + self.reported_days;
        if combined <= 0.0 {
            spans.push(Span::styled("no resolved tickets", self.theme.dim));
            return Line::from(spans);
        }

        let assigned_share = self.assigned_days / combined;
        let assigned_chars = (assigned_share * BAR_WIDTH as f64).round() as usize;
        let reported_chars = (BAR_WIDTH as usize).saturating_sub(assigned_chars);

        if assigned_chars > 0 {
            spans.push(Span::styled(
                "█".repeat(assigned_chars),
                self.theme.bar_total,
            ));
        }
        if reported_chars > 0 {
            spans.push(Span::styled(
                "█".repeat(reported_chars),
                self.theme.bar_resolved,
            ));
        }

        spans.push(Span::styled(
            format!(
                " assigned {} / reported {}",
                report_core::formatting::format_days(self.assigned_days),
                report_core::formatting::format_days(self.reported_days),
            ),
            self.theme.dim,
        ));

        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    // ── CountBars ────────────────────────────────────────────────────────────

    #[test]
    fn test_count_bars_full_width_at_max() {
        let theme = Theme::dark();
        let bars = CountBars {
            worker: "alice",
            total: 10,
            resolved: 5,
            max: 10,
            theme: &theme,
        };
        let lines = bars.to_lines();
        assert_eq!(lines.len(), 2);

        // Total bar fills the full chart width; resolved bar is half.
        let total_bar = &lines[0].spans[1].content;
        let resolved_bar = &lines[1].spans[1].content;
        assert_eq!(total_bar.chars().count(), BAR_WIDTH as usize);
        assert_eq!(resolved_bar.chars().count(), BAR_WIDTH as usize / 2);
    }

    #[test]
    fn test_count_bars_zero_counts() {
        let theme = Theme::dark();
        let bars = CountBars {
            worker: "bob",
            total: 0,
            resolved: 0,
            max: 10,
            theme: &theme,
        };
        let lines = bars.to_lines();
        assert!(lines[0].spans[1].content.is_empty());
        assert!(lines[1].spans[1].content.is_empty());
    }

    #[test]
    fn test_count_bars_small_value_still_visible() {
        let theme = Theme::dark();
        let bars = CountBars {
            worker: "carol",
            total: 1,
            resolved: 1,
            max: 1000,
            theme: &theme,
        };
        let lines = bars.to_lines();
        // 1/1000 rounds to zero columns but must still show one block.
        assert_eq!(lines[0].spans[1].content.chars().count(), 1);
    }

    #[test]
    fn test_count_bars_label_contains_counts() {
        let theme = Theme::dark();
        let bars = CountBars {
            worker: "alice",
            total: 7,
            resolved: 3,
            max: 7,
            theme: &theme,
        };
        let lines = bars.to_lines();
        assert!(lines[0].spans[2].content.contains('7'));
        assert!(lines[1].spans[2].content.contains('3'));
    }

    // ── fit_name ─────────────────────────────────────────────────────────────

    #[test]
    fn test_fit_name_pads_short_names() {
        let fitted = fit_name("bob");
        assert_eq!(fitted.len(), NAME_WIDTH);
        assert!(fitted.starts_with("bob"));
    }

    #[test]
    fn test_fit_name_truncates_long_names() {
        let fitted = fit_name("a-very-long-worker-name");
        assert_eq!(fitted.chars().count(), NAME_WIDTH);
    }

    // ── SplitBar ─────────────────────────────────────────────────────────────

    #[test]
    fn test_split_bar_proportions() {
        let theme = Theme::dark();
        let bar = SplitBar {
            worker: "alice",
            assigned_days: 3.0,
            reported_days: 1.0,
            theme: &theme,
        };
        let line = bar.to_line();

        // name + assigned segment + reported segment + label.
        assert_eq!(line.spans.len(), 4);
        let assigned = line.spans[1].content.chars().count();
        let reported = line.spans[2].content.chars().count();
        assert_eq!(assigned + reported, BAR_WIDTH as usize);
        assert_eq!(assigned, 30);
    }

    #[test]
    fn test_split_bar_no_resolved_tickets() {
        let theme = Theme::dark();
        let bar = SplitBar {
            worker: "bob",
            assigned_days: 0.0,
            reported_days: 0.0,
            theme: &theme,
        };
        let line = bar.to_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("no resolved tickets"));
    }

    #[test]
    fn test_split_bar_label_shows_both_averages() {
        let theme = Theme::dark();
        let bar = SplitBar {
            worker: "alice",
            assigned_days: 2.5,
            reported_days: 5.0,
            theme: &theme,
        };
        let line = bar.to_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("2.50"));
        assert!(text.contains("5.00"));
    }
}
