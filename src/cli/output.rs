use anyhow::Result;
use reel::ShowcaseReport;
use reel::tui::theme::ThemeDefinition;
use serde_json::json;

fn theme_line(definition: &ThemeDefinition) -> String {
    if definition.aliases.is_empty() {
        definition.name.to_string()
    } else {
        format!("{} (aliases: {})", definition.name, definition.aliases.join(", "))
    }
}

/// Print every bundled theme with its aliases, default first.
pub(crate) fn print_themes(definitions: &[ThemeDefinition]) {
    for definition in definitions {
        println!("{}", theme_line(definition));
    }
}

/// Print one line per carousel session.
pub(crate) fn print_plain(report: &ShowcaseReport) {
    if report.is_empty() {
        println!("No stories watched");
        return;
    }

    for session in &report.sessions {
        println!(
            "{} at {}/{} ({})",
            session.reason.as_str(),
            session.last_index + 1,
            session.slides,
            session.last_title
        );
    }
}

pub(crate) fn format_report_json(report: &ShowcaseReport) -> Result<String> {
    let sessions: Vec<_> = report
        .sessions
        .iter()
        .map(|session| {
            json!({
                "reason": session.reason.as_str(),
                "last_index": session.last_index,
                "last_title": session.last_title,
                "slides": session.slides,
            })
        })
        .collect();

    let payload = json!({ "sessions": sessions });
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(report: &ShowcaseReport) -> Result<()> {
    println!("{}", format_report_json(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use reel::SessionSummary;
    use reel_core::DismissReason;
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_lists_every_session() {
        let report = ShowcaseReport {
            sessions: vec![
                SessionSummary {
                    reason: DismissReason::Completed,
                    last_index: 3,
                    last_title: "A-Train".into(),
                    slides: 4,
                },
                SessionSummary {
                    reason: DismissReason::SwipedDown,
                    last_index: 1,
                    last_title: "Maeve".into(),
                    slides: 4,
                },
            ],
        };

        let json = format_report_json(&report).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["sessions"][0]["reason"], "completed");
        assert_eq!(value["sessions"][1]["reason"], "swiped-down");
        assert_eq!(value["sessions"][1]["last_title"], "Maeve");
    }

    #[test]
    fn theme_listing_shows_aliases() {
        let lines: Vec<_> = reel::tui::theme::definitions()
            .iter()
            .map(theme_line)
            .collect();
        assert_eq!(lines[0], "slate (aliases: default, dark)");
        assert!(lines.iter().any(|line| line.starts_with("light")));
    }

    #[test]
    fn empty_report_is_an_empty_list() {
        let json = format_report_json(&ShowcaseReport::default()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["sessions"].as_array().map(Vec::len), Some(0));
    }
}
