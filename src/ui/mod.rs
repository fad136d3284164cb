use chrono::TimeZone;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub mod event_table;
pub mod layout;

use crate::app::App;
use crate::domain::{Event, State};

pub fn draw<Tz: TimeZone>(f: &mut Frame, app: &App<Tz>) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app.state());
    draw_timeline(f, areas.timeline, app);
    draw_preview(f, areas.preview, app.selected_event());
    draw_status_line(f, areas.status_line, &app.status);
}

fn draw_header(f: &mut Frame, area: Rect, state: &State) {
    let network = state.current_network.as_deref().unwrap_or("none");
    let title = Line::from(vec![
        Span::styled(
            "Multicall",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Network", Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::raw(network.to_string()),
        Span::raw("  "),
        Span::styled("Events", Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::raw(state.events.len().to_string()),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn event_color(event: &Event) -> Color {
    match event {
        Event::Init { .. } => Color::Cyan,
        Event::NetworkDisconnected { .. } => Color::Red,
        Event::NetworkConnected { .. } => Color::Green,
        Event::BlockFound { .. } => Color::Yellow,
    }
}

fn timeline_line(event: &Event) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            event.time().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(event.title(), Style::default().fg(event_color(event))),
    ];
    match event {
        Event::NetworkConnected { network, .. } => {
            spans.push(Span::raw(format!("  {network}")));
        }
        Event::BlockFound {
            network,
            block_number,
            ..
        } => {
            spans.push(Span::raw(format!("  {network} #{block_number}")));
        }
        Event::Init { .. } | Event::NetworkDisconnected { .. } => {}
    }
    Line::from(spans)
}

fn draw_timeline<Tz: TimeZone>(f: &mut Frame, area: Rect, app: &App<Tz>) {
    let block = Block::default().borders(Borders::ALL).title("Events");
    let events = &app.state().events;
    if events.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Waiting for messages…",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = events
        .iter()
        .map(|event| ListItem::new(timeline_line(event)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(app.selected());
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(f: &mut Frame, area: Rect, event: Option<&Event>) {
    let block = Block::default().borders(Borders::ALL).title(
        event
            .map(|event| event.title().to_string())
            .unwrap_or_else(|| "Preview".to_string()),
    );
    match event {
        Some(event) => f.render_widget(event_table::event_table(event).block(block), area),
        None => f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No event selected",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block),
            area,
        ),
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, status: &str) {
    let line = Line::from(vec![
        Span::styled(status.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            "j/k move  g/G first/last  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
