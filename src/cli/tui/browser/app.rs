use std::time::Duration;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame
};
use tokio::time;
use tui_input::backend::crossterm::EventHandler;

use crate::cursor::{Advance, StepCursor};
use crate::view::GalleryView;
use crate::Result;
use super::state::*;
use super::events::*;
use super::theme::Theme;

/// Main application struct
pub struct App {
    /// Current state of the browser
    state: BrowserState,
    /// Loaded catalog; `None` when walking a single tutorial
    gallery: Option<GalleryView>,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
}

impl App {
    /// Start on the gallery screen
    pub fn with_gallery(gallery: GalleryView) -> Self {
        Self {
            state: BrowserState::Gallery(GalleryState::new(&gallery)),
            gallery: Some(gallery),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Start directly on a tutorial, without a gallery to return to
    pub fn with_tutorial(cursor: StepCursor) -> Self {
        Self {
            state: BrowserState::Tutorial(TutorialState::new(cursor)),
            gallery: None,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        // Spawn input handler; it stops once the receiver is dropped
        tokio::task::spawn_blocking(move || {
            while !event_tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(width, height)) => {
                            let _ = event_tx.send(AppEvent::Resize(width, height));
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        drop(event_rx);
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout so resizes and ticks redraw
            let event = match time::timeout(Duration::from_millis(250), event_rx.recv()).await {
                Ok(Some(event)) => event,
                Ok(None) => break, // Channel closed
                Err(_) => AppEvent::Tick,
            };

            if let Some(transition) = self.handle_event(event)? {
                self.transition_state(transition)?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    fn render(&self, frame: &mut Frame) {
        match &self.state {
            BrowserState::Gallery(state) => {
                super::screens::gallery::render(frame, state, &self.theme);
            }
            BrowserState::Tutorial(state) => {
                super::screens::tutorial::render(frame, state, &self.theme);
            }
            BrowserState::Complete(state) => {
                super::screens::complete::render(frame, state, &self.theme, self.gallery.is_some());
            }
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<Option<StateTransition>> {
        // Handle global keys first
        if let AppEvent::Key(key) = &event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return Ok(None);
            }
        }

        // Route to state-specific handler
        match &mut self.state {
            BrowserState::Gallery(state) => {
                Self::handle_gallery_event(state, self.gallery.as_ref(), event)
            }
            BrowserState::Tutorial(state) => Self::handle_tutorial_event(state, event),
            BrowserState::Complete(_) => Self::handle_complete_event(event),
        }
    }

    /// Transition to a new state
    pub fn transition_state(&mut self, transition: StateTransition) -> Result<()> {
        match transition {
            StateTransition::Open(id) => {
                let Some(gallery) = &self.gallery else {
                    return Ok(());
                };

                let opened = gallery.store().find_by_id(&id).and_then(StepCursor::new);
                match opened {
                    Ok(cursor) => {
                        tracing::debug!(item = %id, "Opening tutorial");
                        self.state = BrowserState::Tutorial(TutorialState::new(cursor));
                    }
                    Err(e) => {
                        tracing::debug!("Error opening tutorial: {}", e);
                        if let BrowserState::Gallery(state) = &mut self.state {
                            state.message = Some(e.to_string());
                        }
                    }
                }
            }
            StateTransition::Complete => {
                if let BrowserState::Tutorial(tutorial) = &self.state {
                    self.state = BrowserState::Complete(CompleteState {
                        item_id: tutorial.cursor.item().id.clone(),
                        title: tutorial.cursor.item().name.clone(),
                        total_steps: tutorial.cursor.total_steps(),
                    });
                }
            }
            StateTransition::Back => match &self.gallery {
                Some(gallery) => {
                    self.state = BrowserState::Gallery(GalleryState::new(gallery));
                }
                None => self.should_quit = true,
            },
            StateTransition::Quit => {
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn handle_gallery_event(
        state: &mut GalleryState,
        gallery: Option<&GalleryView>,
        event: AppEvent,
    ) -> Result<Option<StateTransition>> {
        let AppEvent::Key(key) = event else {
            return Ok(None);
        };

        // Search box owns the keyboard while active
        if state.search_active {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    state.search_active = false;
                }
                KeyCode::Up => state.select_previous(),
                KeyCode::Down => state.select_next(),
                _ => {
                    state.search_input.handle_event(&Event::Key(key));
                    if let Some(gallery) = gallery {
                        state.refresh(gallery);
                    }
                }
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('/') => {
                state.search_active = true;
                state.message = None;
            }
            KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Enter => {
                if let Some(row) = state.selected_row() {
                    return Ok(Some(StateTransition::Open(row.id.clone())));
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(StateTransition::Quit)),
            _ => {}
        }
        Ok(None)
    }

    fn handle_tutorial_event(state: &mut TutorialState, event: AppEvent) -> Result<Option<StateTransition>> {
        let AppEvent::Key(key) = event else {
            return Ok(None);
        };

        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => {
                if state.advance() == Advance::Completed {
                    return Ok(Some(StateTransition::Complete));
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                state.retreat();
            }
            KeyCode::Esc | KeyCode::Backspace => return Ok(Some(StateTransition::Back)),
            KeyCode::Char('q') => return Ok(Some(StateTransition::Quit)),
            _ => {}
        }
        Ok(None)
    }

    fn handle_complete_event(event: AppEvent) -> Result<Option<StateTransition>> {
        let AppEvent::Key(key) = event else {
            return Ok(None);
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => Ok(Some(StateTransition::Back)),
            KeyCode::Char('q') => Ok(Some(StateTransition::Quit)),
            _ => Ok(None),
        }
    }
}
