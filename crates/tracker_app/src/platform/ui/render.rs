use tracker_core::{sanitize_terminal, AppViewModel, ChipView, JobCardView, StatsView};

use super::constants::RULE_WIDTH;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push(stats_line(view.stats.as_ref()));
    lines.push(format!("Search: \"{}\"", sanitize_terminal(&view.search)));
    lines.push(format!("Source: {}", chip_row(&view.source_chips)));
    lines.push(format!("Status: {}", chip_row(&view.status_chips)));
    lines.push(rule.clone());

    if view.loading {
        lines.push("Loading jobs…".to_string());
    }

    if view.show_empty_state {
        lines.push("No jobs found. Try another search or filter.".to_string());
    } else {
        lines.push(view.jobs_count_label.clone());
        for card in &view.cards {
            lines.extend(card_lines(card));
        }
    }

    if let Some(pagination) = &view.pagination {
        let prev = if pagination.prev_enabled { "[prev]" } else { " prev " };
        let next = if pagination.next_enabled { "[next]" } else { " next " };
        lines.push(format!("{prev}  {}  {next}", pagination.label));
    }
    lines.push(rule);
    lines
}

/// Framed blocking alert.
pub fn render_notification(message: &str) -> Vec<String> {
    let text = format!("!! {} !!", sanitize_terminal(message));
    let frame = "!".repeat(text.chars().count());
    vec![frame.clone(), text, frame]
}

pub fn print_open_url(url: &str) {
    println!("Opening application page: {}", sanitize_terminal(url));
}

fn stats_line(stats: Option<&StatsView>) -> String {
    match stats {
        Some(stats) => format!(
            "Total {} | Applied {} | Pending {} | Failed {}",
            stats.total, stats.applied, stats.pending, stats.failed
        ),
        None => "Total - | Applied - | Pending - | Failed -".to_string(),
    }
}

fn chip_row(chips: &[ChipView]) -> String {
    chips
        .iter()
        .map(|chip| {
            let label = sanitize_terminal(&chip.label);
            if chip.active {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn card_lines(card: &JobCardView) -> Vec<String> {
    vec![
        format!(
            "#{id:<6} {badge:<6} {title}",
            id = card.job_id,
            badge = card.badge.label(),
            title = sanitize_terminal(&card.title)
        ),
        format!(
            "        {} · {} · {}",
            sanitize_terminal(&card.company),
            sanitize_terminal(&card.location),
            sanitize_terminal(&card.source)
        ),
        format!(
            "        Posted: {}   Added: {}",
            sanitize_terminal(&card.posted),
            sanitize_terminal(&card.added)
        ),
        format!("        {}", sanitize_terminal(&card.url)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracker_core::{Badge, PaginationView};

    fn card() -> JobCardView {
        JobCardView {
            job_id: 5,
            badge: Badge::Old,
            title: "Evil\u{1b}[2J title".to_string(),
            company: "Acme".to_string(),
            location: "Not specified".to_string(),
            source: "Startups".to_string(),
            url: "https://acme.example.com/5".to_string(),
            posted: "Today".to_string(),
            added: "Yesterday".to_string(),
        }
    }

    #[test]
    fn active_chips_are_bracketed() {
        let chips = vec![
            ChipView {
                value: "all".to_string(),
                label: "All".to_string(),
                active: false,
            },
            ChipView {
                value: "applied".to_string(),
                label: "Applied".to_string(),
                active: true,
            },
        ];
        assert_eq!(chip_row(&chips), "All  [Applied]");
    }

    #[test]
    fn cards_are_sanitized() {
        let lines = card_lines(&card());
        assert_eq!(lines[0], "#5      OLD    Evil[2J title");
        assert!(lines.iter().all(|line| !line.contains('\u{1b}')));
    }

    #[test]
    fn pagination_row_marks_disabled_buttons() {
        let view = AppViewModel {
            cards: vec![card()],
            jobs_count_label: "120 jobs".to_string(),
            pagination: Some(PaginationView {
                page: 1,
                total_pages: 3,
                prev_enabled: false,
                next_enabled: true,
                label: "Page 1 of 3".to_string(),
            }),
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert!(lines.contains(&" prev   Page 1 of 3  [next]".to_string()));
        assert!(lines.contains(&"120 jobs".to_string()));
    }

    #[test]
    fn empty_state_replaces_card_list() {
        let view = AppViewModel {
            show_empty_state: true,
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert!(lines
            .iter()
            .any(|line| line.starts_with("No jobs found")));
    }
}
