//! # Rendering
//!
//! Tables are laid out in Rust (column widths need Unicode-aware measuring)
//! and drawn by a minijinja template; the `style` filter applies the
//! `console` styles from [`STATZ_THEME`], or nothing when color is off.

use super::styles::{names, STATZ_THEME};
use colored::Colorize;
use console::Term;
use minijinja::Environment;
use serde::Serialize;
use statz::api::{CmdMessage, MessageLevel, StatusRow};
use statz::model::AttributeType;
use unicode_width::UnicodeWidthStr;

const TABLE_TEMPLATE: &str = r#"{{ top | style("border") }}
{% for row in rows %}{{ "│" | style("border") }}{% for cell in row %} {{ cell.text | style(cell.style) }} {{ "│" | style("border") }}{% endfor %}
{% if loop.first %}{{ middle | style("border") }}
{% endif %}{% endfor %}{{ bottom | style("border") }}"#;

#[derive(Serialize)]
struct Cell {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    top: String,
    middle: String,
    bottom: String,
    rows: Vec<Vec<Cell>>,
}

fn rule(widths: &[usize], left: &str, joint: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(joint), right)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Renders a bordered table. `styles` names the style of each column.
pub fn render_table(
    header: &[&str],
    styles: &[&'static str],
    rows: &[Vec<String>],
    use_color: bool,
) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header_cells: Vec<Cell> = header
        .iter()
        .zip(&widths)
        .map(|(text, width)| Cell {
            text: pad(text, *width),
            style: names::HEADER,
        })
        .collect();

    let mut table_rows: Vec<Vec<Cell>> = vec![header_cells];
    for row in rows {
        table_rows.push(
            widths
                .iter()
                .enumerate()
                .map(|(i, width)| Cell {
                    text: pad(row.get(i).map(String::as_str).unwrap_or(""), *width),
                    style: styles.get(i).copied().unwrap_or(names::VALUE),
                })
                .collect(),
        );
    }

    let data = TableData {
        top: rule(&widths, "┌", "┬", "┐"),
        middle: rule(&widths, "├", "┼", "┤"),
        bottom: rule(&widths, "└", "┴", "┘"),
        rows: table_rows,
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: String, name: String| -> String {
        match STATZ_THEME.get(name.as_str()) {
            Some(style) if use_color => style.apply_to(value).force_styling(true).to_string(),
            _ => value,
        }
    });
    env.add_template("table", template)?;
    env.get_template("table")?.render(data)
}

pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

pub fn render_status(rows: &[StatusRow], use_color: bool) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| vec![row.name.clone(), row.value.clone(), row.detail.clone()])
        .collect();
    render_table(
        &["Name", "Value", "Detail"],
        &[names::NAME, names::VALUE, names::DETAIL],
        &cells,
        use_color,
    )
}

pub fn render_types(types: &[AttributeType], use_color: bool) -> String {
    let cells: Vec<Vec<String>> = types
        .iter()
        .map(|ty| {
            vec![
                ty.name.clone(),
                ty.default.to_string(),
                ty.max.map(|m| m.to_string()).unwrap_or_else(|| "-".into()),
                ty.detail.clone(),
            ]
        })
        .collect();
    render_table(
        &["Name", "Default", "Max", "Detail"],
        &[names::NAME, names::VALUE, names::VALUE, names::DETAIL],
        &cells,
        use_color,
    )
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
