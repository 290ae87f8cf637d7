//! Gallery screen: search box over a table of patterns

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use crate::cli::tui::browser::state::GalleryState;
use crate::cli::tui::browser::theme::Theme;

pub fn render(frame: &mut Frame, state: &GalleryState, theme: &Theme) {
    let main_block = Block::default()
        .title(" Pattern Gallery ")
        .borders(Borders::ALL);

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search box
            Constraint::Min(5),         // Pattern table
            Constraint::Length(1),      // Status line
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    render_search(frame, chunks[0], state, theme);
    render_table(frame, chunks[1], state, theme);
    render_status(frame, chunks[2], state, theme);
    render_help_bar(frame, chunks[3], state, theme);
}

fn render_search(frame: &mut Frame, area: Rect, state: &GalleryState, theme: &Theme) {
    let border_style = if state.search_active {
        theme.focused
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let width = area.width.saturating_sub(3) as usize;
    let scroll = state.search_input.visual_scroll(width);
    let input = Paragraph::new(state.search_input.value())
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(input, area);

    if state.search_active {
        let cursor = state.search_input.visual_cursor().saturating_sub(scroll);
        frame.set_cursor_position((area.x + 1 + cursor as u16, area.y + 1));
    }
}

fn render_table(frame: &mut Frame, area: Rect, state: &GalleryState, theme: &Theme) {
    if state.rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No patterns match your search.",
            theme.muted,
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Name", "Difficulty", "Category", "Time"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(row.difficulty.clone())
                    .style(Style::default().fg(Theme::difficulty_color(&row.difficulty))),
                Cell::from(row.category.clone()),
                Cell::from(row.time.clone()).style(theme.muted),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(theme.selected)
    .highlight_symbol("> ")
    .block(Block::default().borders(Borders::ALL));

    let mut table_state = TableState::default().with_selected(Some(state.selected_index));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_status(frame: &mut Frame, area: Rect, state: &GalleryState, theme: &Theme) {
    let line = match &state.message {
        Some(message) => Line::from(Span::styled(format!(" {message}"), theme.error)),
        None => Line::from(Span::styled(
            format!(" {} of {} pattern(s)", state.rows.len(), state.total),
            theme.muted,
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &GalleryState, theme: &Theme) {
    let keys: &[(&str, &str)] = if state.search_active {
        &[("Type", "Filter"), ("↑↓", "Move"), ("Enter/Esc", "Done")]
    } else {
        &[("/", "Search"), ("↑↓", "Move"), ("Enter", "Open"), ("q", "Quit")]
    };

    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {action}  ")));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.help_bar), area);
}
