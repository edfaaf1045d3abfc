//! Text rendering for the command-line front end

use std::fmt::Write;

use crate::model::Announcement;

const RULE_WIDTH: usize = 60;

/// Full detail block for one announcement
pub fn detail(announcement: &Announcement) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "ID: {}", announcement.id);
    let _ = writeln!(out, "Title: {}", announcement.title);
    let _ = writeln!(out, "Priority: {}", announcement.priority);
    let _ = writeln!(out, "Created: {}", timestamp(&announcement.created_at));
    let _ = writeln!(out, "Updated: {}", timestamp(&announcement.updated_at));
    let _ = writeln!(out, "\nContent:");
    let _ = writeln!(out, "{}", announcement.content);
    let _ = writeln!(out, "{}", rule);
    out
}

/// Two-line listing entry: `[id] [PRIORITY] title` plus creation time
pub fn summary(announcement: &Announcement) -> String {
    format!(
        "[{}] [{}] {}\n    Created: {}",
        announcement.id,
        announcement.priority.as_str().to_uppercase(),
        announcement.title,
        timestamp(&announcement.created_at)
    )
}

/// Listing header for `count` results
pub fn list_header(count: usize) -> String {
    format!("Found {} announcement(s):", count)
}

/// Output of `list`
///
/// An empty collection prints a single notice. Once the collection has
/// records, a filter that matches nothing still prints a zero-count header.
pub fn listing(total: usize, matches: &[&Announcement]) -> String {
    if total == 0 {
        return "No announcements found.".to_string();
    }

    let mut out = format!("\n{}\n", list_header(matches.len()));
    for announcement in matches {
        out.push('\n');
        out.push_str(&summary(announcement));
    }
    out
}

fn timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
