use async_trait::async_trait;

use super::{CommandContext, CommandHandler, CommandResult};
use crate::session::{PageState, Selection};
use crate::Result;

/// Handler for the `open` command
///
/// Behaves like a page load: the `id` parameter of the location decides
/// between the gallery and a tutorial.
pub struct OpenCommand {
    pub context: CommandContext,
    pub location: String,
    pub json: bool,
}

#[async_trait]
impl CommandHandler for OpenCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let selection = Selection::from_location(&self.location);
        let state = self.context.session().open(&selection).await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&state_json(&state))?);
            return Ok(if state.is_error() {
                CommandResult::Error(state_message(&state))
            } else {
                CommandResult::Success(None)
            });
        }

        match &state {
            PageState::Gallery(view) => {
                println!("{}", super::gallery::render_table(&view.rows()));
            }
            PageState::Tutorial(cursor) => {
                print!("{}", super::walk::render_snapshot(&cursor.snapshot()));
            }
            _ => return Ok(CommandResult::Error(state_message(&state))),
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "open"
    }
}

impl OpenCommand {
    pub fn new(context: CommandContext, location: String, json: bool) -> Self {
        Self {
            context,
            location,
            json,
        }
    }
}

/// User-facing description of a page state
pub fn state_message(state: &PageState) -> String {
    match state {
        PageState::Gallery(view) => format!("Gallery of {} pattern(s)", view.store().len()),
        PageState::Tutorial(cursor) => format!("Tutorial: {}", cursor.item().name),
        PageState::NotFound { id } if id.is_empty() => "No pattern id given".to_string(),
        PageState::NotFound { id } => format!("Pattern '{id}' not found"),
        PageState::Unavailable { reason } => reason.clone(),
        PageState::Misconfigured { id } => {
            format!("Pattern '{id}' has no steps and cannot be shown as a tutorial")
        }
    }
}

fn state_json(state: &PageState) -> serde_json::Value {
    match state {
        PageState::Gallery(view) => serde_json::json!({
            "state": state.name(),
            "rows": view.rows(),
        }),
        PageState::Tutorial(cursor) => serde_json::json!({
            "state": state.name(),
            "snapshot": cursor.snapshot(),
        }),
        PageState::NotFound { id } | PageState::Misconfigured { id } => serde_json::json!({
            "state": state.name(),
            "id": id,
            "message": state_message(state),
        }),
        PageState::Unavailable { .. } => serde_json::json!({
            "state": state.name(),
            "message": state_message(state),
        }),
    }
}
