use tui_input::Input;

use crate::cursor::{Advance, StepCursor};
use crate::view::{GalleryRow, GalleryView, TutorialSnapshot};

/// Main state machine for the browser
#[derive(Debug)]
pub enum BrowserState {
    Gallery(GalleryState),
    Tutorial(TutorialState),
    Complete(CompleteState),
}

/// State for the gallery screen
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Rows matching the current search
    pub rows: Vec<GalleryRow>,
    /// Total number of items in the catalog
    pub total: usize,

    // UI state
    pub selected_index: usize,
    pub search_input: Input,
    pub search_active: bool,

    /// One-line status, e.g. a tutorial that could not be opened
    pub message: Option<String>,
}

impl GalleryState {
    pub fn new(view: &GalleryView) -> Self {
        let mut state = Self {
            total: view.store().len(),
            ..Default::default()
        };
        state.refresh(view);
        state
    }

    /// Re-run the search and keep the selection in range
    pub fn refresh(&mut self, view: &GalleryView) {
        self.rows = view.filter(self.search_input.value());
        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&GalleryRow> {
        self.rows.get(self.selected_index)
    }
}

/// State for the tutorial screen
#[derive(Debug)]
pub struct TutorialState {
    pub cursor: StepCursor,
    /// View of the current step, refreshed after every transition
    pub snapshot: TutorialSnapshot,
}

impl TutorialState {
    pub fn new(cursor: StepCursor) -> Self {
        let snapshot = cursor.snapshot();
        Self { cursor, snapshot }
    }

    pub fn advance(&mut self) -> Advance {
        let outcome = self.cursor.advance();
        self.snapshot = self.cursor.snapshot();
        outcome
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.cursor.retreat();
        self.snapshot = self.cursor.snapshot();
        moved
    }
}

/// State for the completion screen
#[derive(Debug)]
pub struct CompleteState {
    pub item_id: String,
    pub title: String,
    pub total_steps: usize,
}

/// State transitions for the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateTransition {
    /// Open the tutorial of an item
    Open(String),
    /// Leave the tutorial after its final step
    Complete,
    /// Return to the gallery
    Back,
    /// Exit the browser
    Quit,
}

impl BrowserState {
    /// Get the name of the current state
    pub fn name(&self) -> &'static str {
        match self {
            BrowserState::Gallery(_) => "Gallery",
            BrowserState::Tutorial(_) => "Tutorial",
            BrowserState::Complete(_) => "Complete",
        }
    }

    /// Check if we can go back from this state
    pub fn can_go_back(&self) -> bool {
        !matches!(self, BrowserState::Gallery(_))
    }
}
