//! Property/value table used by the event preview
//!
//! `Property` is the right-aligned, muted label column and `Value` holds
//! the data. `Table` and `Row` add no styling of their own.

use ratatui::layout::{Alignment, Constraint};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row, Table};

use crate::domain::Event;

/// Width of the label column, trailing gap included
pub const PROPERTY_WIDTH: u16 = 14;

pub fn property_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn property(label: &str) -> Cell<'static> {
    Cell::from(Line::from(format!("{label} ")).alignment(Alignment::Right)).style(property_style())
}

pub fn value(text: impl Into<String>) -> Cell<'static> {
    Cell::from(text.into())
}

pub fn row(label: &str, text: impl Into<String>) -> Row<'static> {
    Row::new(vec![property(label), value(text)])
}

pub fn table(rows: Vec<Row<'static>>) -> Table<'static> {
    Table::new(
        rows,
        [Constraint::Length(PROPERTY_WIDTH), Constraint::Min(0)],
    )
    .column_spacing(1)
}

pub fn event_table(event: &Event) -> Table<'static> {
    let rows = event
        .properties()
        .into_iter()
        .map(|(label, text)| row(label, text))
        .collect();
    table(rows)
}
