use upcoming_events::UpcomingEvent;

/// One `<when>  <what>` line per event, `when` padded to the widest label.
pub fn render_text(digest: &[UpcomingEvent]) -> String {
    if digest.is_empty() {
        return "No upcoming events.\n".to_string();
    }

    let whens: Vec<String> = digest.iter().map(|e| e.when.to_string()).collect();
    let width = whens.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (when, event) in whens.iter().zip(digest) {
        out.push_str(&format!("{:<width$}  {}\n", when, event.what, width = width));
    }
    out
}

pub fn render_json(digest: &[UpcomingEvent], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(digest)
    } else {
        serde_json::to_string(digest)
    }
}
