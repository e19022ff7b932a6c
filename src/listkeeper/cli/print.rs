use chrono::{DateTime, Local, NaiveDate, Utc};
use colored::Colorize;
use listkeeper::commands::list::status_of;
use listkeeper::commands::{CmdMessage, MessageLevel};
use listkeeper::filter::StatusLabel;
use listkeeper::model::{Note, User};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::swatch;

const LINE_WIDTH: usize = 100;
const DUE_WIDTH: usize = 18;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_user(user: Option<&User>) {
    match user {
        Some(user) => {
            println!("Logged in as {} <{}>", user.display_name().bold(), user.email);
        }
        None => println!("{}", "Not logged in.".dimmed()),
    }
}

pub fn print_full_notes(notes: &[Note], date_format: &str) {
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let marker = if note.is_completed { "[x]" } else { "[ ]" };
        println!(
            "{} {} {} {}",
            format!("#{}", note.id).yellow(),
            swatch(note.color),
            marker,
            note.title.bold()
        );
        println!(
            "Due: {} ({})",
            note.due_date
                .with_timezone(&Local)
                .format(date_format),
            format_relative_due(note.due_date, Utc::now())
        );
        println!("--------------------------------");
        println!("{}", note.content);
    }
}

pub fn print_notes(notes: &[Note], today: NaiveDate, date_format: &str) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in notes {
        let status = status_of(note, today);

        let marker = if note.is_completed { "[x] " } else { "[ ] " };
        let id_str = format!("{}. ", note.id);
        let left_prefix = format!("  {} ", swatch(note.color));
        // The swatch renders as one cell regardless of the ANSI codes around it
        let left_prefix_width = 4;

        let due_str = note
            .due_date
            .with_timezone(&Local)
            .format(date_format)
            .to_string();

        let content_preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if content_preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, content_preview)
        };

        let fixed_width = left_prefix_width + id_str.width() + marker.width() + DUE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let title_colored = if note.is_completed {
            title_display.dimmed()
        } else {
            title_display.normal()
        };
        let due_aligned = format!("{:>width$}", due_str, width = DUE_WIDTH);
        let due_colored = if status == StatusLabel::PastDue {
            due_aligned.red()
        } else {
            due_aligned.dimmed()
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            id_str.yellow(),
            marker.normal(),
            title_colored,
            " ".repeat(padding),
            due_colored
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Human-readable distance to the due date: timeago for the past, a plain
/// "in N days/hours" for the future.
pub fn format_relative_due(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if due <= now {
        let formatter = Formatter::new();
        formatter.convert((now - due).to_std().unwrap_or_default())
    } else {
        let remaining = due - now;
        if remaining.num_days() >= 1 {
            plural(remaining.num_days(), "day")
        } else if remaining.num_hours() >= 1 {
            plural(remaining.num_hours(), "hour")
        } else {
            plural(remaining.num_minutes().max(1), "minute")
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("in 1 {}", unit)
    } else {
        format!("in {} {}s", n, unit)
    }
}
