//! Text rendering of monitor snapshots.

use std::fmt::Write;

use alert_monitor::MonitorSnapshot;

/// History rows printed under the active alert.
const HISTORY_ROWS: usize = 5;

/// Render a snapshot as a block of text.
///
/// The last-update time is left out so that an unchanged state renders to
/// the same text on every poll.
pub fn snapshot(s: &MonitorSnapshot) -> String {
    let mut out = String::new();

    let _ = write!(out, "[{}] {}", s.status_text, s.region.region().label);
    if s.demo_active {
        out.push_str(" | הדגמה");
    }
    if !s.sound_on {
        out.push_str(" | 🔇");
    }
    out.push('\n');

    match &s.active {
        Some(active) => {
            let tag = if active.is_demo { " (הדגמה)" } else { "" };
            let _ = writeln!(out, "{} {}{} [{}]", active.icon, active.title, tag, s.active_count);
            if let Some(description) = &active.description {
                let _ = writeln!(out, "   {}", description);
            }
            match active.empty_reason() {
                Some(reason) => {
                    let _ = writeln!(out, "   {}", reason);
                }
                None => {
                    let _ = writeln!(out, "   {}", active.locations.join(" · "));
                    if active.hidden_count > 0 {
                        let _ = writeln!(out, "   +{} מחוץ לאזור", active.hidden_count);
                    }
                }
            }
        }
        None => out.push_str("✅ אין התרעות פעילות\n"),
    }

    for entry in s.history.iter().take(HISTORY_ROWS) {
        let tag = if entry.is_demo { " (הדגמה)" } else { "" };
        let _ = writeln!(
            out,
            "  {} {}{} - {} {}",
            entry.icon, entry.title, tag, entry.locations_summary, entry.time
        );
    }
    out
}
