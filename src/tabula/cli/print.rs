use super::viewport::Layout;
use colored::Colorize;
use tabula::api::{CmdMessage, MessageLevel, Page, Query, SortOrder};
use tabula::model::Field;
use tabula::session::EditSession;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_page(page: &Page, query: &Query, layout: Layout) {
    let header = [
        header_cell("#", None, query, layout.id_width),
        header_cell("Name", Some(Field::Name), query, layout.name_width),
        header_cell("Date", Some(Field::Date), query, layout.date_width),
        header_cell("Value", Some(Field::Value), query, layout.value_width),
    ];
    println!("{}", header.join(" ").bold());

    if page.records.is_empty() {
        println!("{}", "No records found.".dimmed());
    }

    for record in &page.records {
        println!(
            "{} {} {} {}",
            pad_left(&record.id.to_string(), layout.id_width),
            pad_right(&truncate_to_width(&record.name, layout.name_width), layout.name_width),
            pad_right(&record.display_date(), layout.date_width),
            pad_left(&record.display_value(), layout.value_width),
        );
    }

    let mut footer = format!(
        "Page {}/{} · {} records",
        page.page_index + 1,
        page.page_count,
        page.total
    );
    if !query.text.is_empty() && !layout.compact {
        footer.push_str(&format!(" matching \"{}\"", query.text));
    }
    println!("{}", footer.dimmed());
}

fn header_cell(label: &str, field: Option<Field>, query: &Query, width: usize) -> String {
    let marker = match (field, query.sort) {
        (Some(f), Some(key)) if key.field == f => match key.order {
            SortOrder::Ascending => " ▲",
            SortOrder::Descending => " ▼",
        },
        _ => "",
    };
    pad_right(&format!("{}{}", label, marker), width)
}

pub(super) fn print_form(session: &EditSession) {
    let Some(title) = session.title() else {
        return;
    };
    println!("{}", title.bold());
    let draft = session.draft();
    for field in Field::ALL {
        let label = match field {
            Field::Name => "Name",
            Field::Date => "Date",
            Field::Value => "Value",
        };
        let value = draft.get(field);
        let shown = if value.is_empty() {
            "—".dimmed().to_string()
        } else {
            value.to_string()
        };
        match session.errors().get(field) {
            Some(error) => println!("  {:<6} {}  {}", label, shown, error.red()),
            None => println!("  {:<6} {}", label, shown),
        }
    }
    if let Some(submit) = session.submit_label() {
        println!(
            "{}",
            format!("  `save` to {}, `cancel` to close", submit.to_lowercase()).dimmed()
        );
    }
}

pub(super) fn print_error(message: &str) {
    println!("{}", message.red());
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

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
