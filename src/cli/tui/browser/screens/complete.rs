//! Completion screen shown after the final step

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use crate::cli::tui::browser::state::CompleteState;
use crate::cli::tui::browser::theme::Theme;

pub fn render(frame: &mut Frame, state: &CompleteState, theme: &Theme, has_gallery: bool) {
    let main_block = Block::default()
        .title(" Pattern Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),         // Flexible space
            Constraint::Length(3),      // Message
            Constraint::Min(1),         // Flexible space
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    let message = vec![
        Line::from(Span::styled(format!("You finished {}!", state.title), theme.success)),
        Line::from(""),
        Line::from(Span::styled(
            format!("All {} steps of '{}' done.", state.total_steps, state.item_id),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), chunks[1]);

    let back = if has_gallery { " Back to gallery  " } else { " Exit  " };
    let help = Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(back),
        Span::styled(" q ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(help).style(theme.help_bar), chunks[3]);
}
