//! Terminal rendering for events.
//!
//! Extension trait that adds colored output to eventdesk-core types
//! using owo_colors.

use eventdesk_core::Event;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// Detail view: every field, one per line.
    fn render(&self) -> String {
        let f = &self.fields;
        let mut lines = vec![
            f.title.bold().to_string(),
            format!("  {} {} {}", "When:".dimmed(), f.date.format("%a %b %-d, %Y"), f.time),
            format!("  {} {}", "Where:".dimmed(), f.location),
            format!("  {} {}", "Organizer:".dimmed(), f.organizer),
            String::new(),
        ];
        lines.extend(f.description.lines().map(|l| format!("  {l}")));
        lines.push(String::new());
        lines.push(format!("  {}", format!("id: {}", self.id).dimmed()));

        lines.join("\n")
    }
}

/// One line per event for the list view.
pub fn render_list_row(event: &Event) -> String {
    let f = &event.fields;
    format!(
        "{} {:>5}  {}  {} {}",
        f.date.format("%Y-%m-%d"),
        f.time,
        f.title.bold(),
        format!("@ {}", f.location).dimmed(),
        format!("[{}]", event.id).dimmed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventdesk_core::{EventFields, EventId};

    fn event() -> Event {
        Event::new(
            EventId::from("e1"),
            EventFields {
                title: "Launch".to_string(),
                description: "Doors open at 9.\nBring a badge.".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                time: "10:00".to_string(),
                location: "HQ".to_string(),
                organizer: "Alice".to_string(),
            },
        )
    }

    /// Drop `ESC [ ... m` color sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_detail_view_includes_every_field() {
        let rendered = strip_ansi(&event().render());

        assert!(rendered.starts_with("Launch\n"));
        assert!(rendered.contains("When: Sun Jun 1, 2025 10:00"));
        assert!(rendered.contains("Where: HQ"));
        assert!(rendered.contains("Organizer: Alice"));
        assert!(rendered.contains("  Doors open at 9.\n  Bring a badge."));
        assert!(rendered.ends_with("id: e1"));
    }

    #[test]
    fn test_list_row() {
        assert_eq!(
            strip_ansi(&render_list_row(&event())),
            "2025-06-01 10:00  Launch  @ HQ [e1]"
        );
    }
}
