//! Tutorial screen: one step at a time with progress

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use crate::cli::tui::browser::state::TutorialState;
use crate::cli::tui::browser::theme::Theme;
use crate::view::TutorialSnapshot;

pub fn render(frame: &mut Frame, state: &TutorialState, theme: &Theme) {
    let snapshot = &state.snapshot;

    let main_block = Block::default()
        .title(format!(" {} ", snapshot.title))
        .borders(Borders::ALL);

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Step count
            Constraint::Length(1),      // Progress
            Constraint::Length(1),      // Spacing
            Constraint::Min(5),         // Instruction and detail
            Constraint::Length(3),      // Media
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(snapshot.step_count_text(), theme.highlight))),
        chunks[0],
    );

    render_progress(frame, chunks[1], snapshot);
    render_step(frame, chunks[3], snapshot, theme);
    render_media(frame, chunks[4], snapshot, theme);
    render_help_bar(frame, chunks[5], snapshot, theme);
}

fn render_progress(frame: &mut Frame, area: Rect, snapshot: &TutorialSnapshot) {
    let ratio = (snapshot.percent_complete / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(format!("{:.0}%", snapshot.percent_complete))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black));
    frame.render_widget(gauge, area);
}

fn render_step(frame: &mut Frame, area: Rect, snapshot: &TutorialSnapshot, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        snapshot.instruction_text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if !snapshot.detail_text.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(snapshot.detail_text.clone(), theme.muted)));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Instructions "));
    frame.render_widget(paragraph, area);
}

fn render_media(frame: &mut Frame, area: Rect, snapshot: &TutorialSnapshot, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!("{}: ", snapshot.media_kind.label()), theme.highlight),
        Span::raw(snapshot.resolved_media.clone()),
    ]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Media "));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, snapshot: &TutorialSnapshot, theme: &Theme) {
    let enabled = Style::default().fg(Color::Black).bg(Color::Cyan);
    let previous_style = if snapshot.can_retreat {
        enabled
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };

    let spans = vec![
        Span::styled(" ← ", previous_style),
        Span::styled(" Previous  ", if snapshot.can_retreat { Style::default() } else { theme.muted }),
        Span::styled(" → ", enabled),
        Span::raw(format!(" {}  ", snapshot.forward_label)),
        Span::styled(" Esc ", enabled),
        Span::raw(" Back  "),
        Span::styled(" q ", enabled),
        Span::raw(" Quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.help_bar), area);
}
