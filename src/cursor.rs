//! Tutorial step cursor
//!
//! A bounded position over one item's steps. `advance` and `retreat` clamp
//! at the ends instead of failing; every displayed value is derived from the
//! position on demand.

use std::sync::Arc;

use crate::catalog::{CatalogItem, Step};
use crate::error::{PatternbookError, Result};
use crate::media::{self, MediaRef};
use crate::view::TutorialSnapshot;

/// Outcome of [`StepCursor::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step
    Moved,
    /// Already on the final step; the tutorial is complete
    Completed,
}

/// Position within a tutorial. Always a valid index into a non-empty step list.
#[derive(Debug, Clone)]
pub struct StepCursor {
    item: Arc<CatalogItem>,
    position: usize,
}

impl StepCursor {
    /// Start a cursor on the first step of `item`.
    ///
    /// Fails with `EmptyStepSequence` when the item has no steps.
    pub fn new(item: Arc<CatalogItem>) -> Result<Self> {
        if item.steps.is_empty() {
            return Err(PatternbookError::EmptyStepSequence(item.id.clone()));
        }
        Ok(Self { item, position: 0 })
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_final() {
            tracing::debug!(item = %self.item.id, "Tutorial completed");
            return Advance::Completed;
        }
        self.position += 1;
        Advance::Moved
    }

    /// Step back; returns whether the position changed
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Zero-based position
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.item.steps.len()
    }

    pub fn is_final(&self) -> bool {
        self.position + 1 == self.total_steps()
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    /// One-based step number for display
    pub fn step_label(&self) -> usize {
        self.position + 1
    }

    /// Progress in `(0, 100]`
    pub fn percent_complete(&self) -> f64 {
        (self.position + 1) as f64 / self.total_steps() as f64 * 100.0
    }

    pub fn current_step(&self) -> &Step {
        &self.item.steps[self.position]
    }

    pub fn resolved_media(&self) -> MediaRef {
        media::resolve(self.current_step().media(), &self.item.image)
    }

    /// Label of the forward control
    pub fn forward_label(&self) -> &'static str {
        if self.is_final() {
            "Finish"
        } else {
            "Next Step"
        }
    }

    pub fn snapshot(&self) -> TutorialSnapshot {
        let step = self.current_step();
        let media = self.resolved_media();
        TutorialSnapshot {
            item_id: self.item.id.clone(),
            title: self.item.name.clone(),
            step_label: self.step_label(),
            total_steps: self.total_steps(),
            instruction_text: step.text.clone(),
            detail_text: step.detail.clone(),
            resolved_media: media.path,
            media_kind: media.kind,
            percent_complete: self.percent_complete(),
            is_final: self.is_final(),
            can_retreat: self.can_retreat(),
            forward_label: self.forward_label().to_string(),
        }
    }
}
