use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracker_core::model::MessageRecord;

pub fn print_records(records: &[&MessageRecord]) {
    if records.is_empty() {
        println!("No client messages match your current filters.");
        return;
    }

    for (i, msg) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let name = if msg.name.is_empty() {
            "Unnamed Lead"
        } else {
            msg.name.as_str()
        };
        println!(
            "[{}] {}  ({} / {})",
            msg.id,
            name,
            msg.status_label,
            msg.category.label()
        );

        let mut contact: Vec<&str> = Vec::new();
        if !msg.email.is_empty() {
            contact.push(msg.email.as_str());
        }
        if !msg.phone.is_empty() {
            contact.push(msg.phone.as_str());
        }
        if !contact.is_empty() {
            println!("    {}", contact.join("  "));
        }
        if !msg.date_time.is_empty() {
            println!("    {}", format_date_time(&msg.date_time));
        }

        let body = if msg.message.is_empty() {
            "No message content available."
        } else {
            &msg.message
        };
        for line in body.lines() {
            println!("    {line}");
        }

        if !msg.source.is_empty() || !msg.assigned_to.is_empty() {
            let mut meta: Vec<String> = Vec::new();
            if !msg.source.is_empty() {
                meta.push(format!("source: {}", msg.source));
            }
            if !msg.assigned_to.is_empty() {
                meta.push(format!("assigned: {}", msg.assigned_to));
            }
            println!("    {}", meta.join("  "));
        }
        if !msg.notes.is_empty() {
            println!("    notes: {}", msg.notes);
        }
    }

    println!("\n{} message(s)", records.len());
}

/// Format a raw date/time string for display. The sources never promise
/// a format, so a handful of common shapes are tried; anything else is
/// shown as-is.
pub fn format_date_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return dt.format("%b %-d, %Y %H:%M").to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}
