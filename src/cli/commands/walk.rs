use async_trait::async_trait;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::{CommandContext, CommandHandler, CommandResult};
use crate::cursor::{Advance, StepCursor};
use crate::session::{PageState, Selection};
use crate::view::TutorialSnapshot;
use crate::Result;

/// Handler for the `walk` command
pub struct WalkCommand {
    pub context: CommandContext,
    pub id: String,
    pub plain: bool,
    pub json: bool,
}

/// A line-mode instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkInput {
    Next,
    Previous,
    Quit,
}

impl WalkInput {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(WalkInput::Next),
            "p" | "prev" | "previous" | "back" => Some(WalkInput::Previous),
            "q" | "quit" | "exit" => Some(WalkInput::Quit),
            _ => None,
        }
    }
}

/// How a line-mode walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Completed,
    Quit,
    EndOfInput,
}

#[async_trait]
impl CommandHandler for WalkCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let selection = Selection::Item(self.id.clone());
        let cursor = match self.context.session().open(&selection).await {
            PageState::Tutorial(cursor) => cursor,
            other => return Ok(CommandResult::Error(super::open::state_message(&other))),
        };

        #[cfg(feature = "tui")]
        {
            if !self.plain && !self.json && std::io::stdout().is_terminal() {
                crate::cli::tui::run_walker(cursor).await?;
                return Ok(CommandResult::Success(None));
            }
        }

        if !self.json && std::io::stdin().is_terminal() {
            eprintln!("Commands: n = next, p = previous, q = quit");
        }

        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        let outcome = run_line_mode(cursor, reader, &mut stdout, self.json).await?;
        tracing::debug!(?outcome, "Walk finished");

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "walk"
    }
}

impl WalkCommand {
    pub fn new(context: CommandContext, id: String, plain: bool, json: bool) -> Self {
        Self {
            context,
            id,
            plain,
            json,
        }
    }
}

/// Drive a cursor from line commands, printing the snapshot after each one
pub async fn run_line_mode<R, W>(
    mut cursor: StepCursor,
    reader: R,
    out: &mut W,
    json: bool,
) -> Result<WalkOutcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write_snapshot(out, &cursor.snapshot(), json)?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match WalkInput::parse(&line) {
            Some(WalkInput::Next) => match cursor.advance() {
                Advance::Moved => write_snapshot(out, &cursor.snapshot(), json)?,
                Advance::Completed => {
                    write_completion(out, &cursor, json)?;
                    return Ok(WalkOutcome::Completed);
                }
            },
            Some(WalkInput::Previous) => {
                if cursor.retreat() {
                    write_snapshot(out, &cursor.snapshot(), json)?;
                } else {
                    tracing::debug!("Already on the first step");
                }
            }
            Some(WalkInput::Quit) => return Ok(WalkOutcome::Quit),
            None => {
                tracing::warn!("Unknown command '{}' (use n, p or q)", line.trim());
            }
        }
    }

    Ok(WalkOutcome::EndOfInput)
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &TutorialSnapshot, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
    } else {
        write!(out, "{}", render_snapshot(snapshot))?;
    }
    Ok(())
}

fn write_completion<W: Write>(out: &mut W, cursor: &StepCursor, json: bool) -> Result<()> {
    if json {
        let event = serde_json::json!({
            "event": "completed",
            "item_id": cursor.item().id,
            "total_steps": cursor.total_steps(),
        });
        writeln!(out, "{event}")?;
    } else {
        writeln!(out, "Tutorial complete: {}", cursor.item().name)?;
    }
    Ok(())
}

/// Plain-text tutorial view of one step
pub fn render_snapshot(snapshot: &TutorialSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", snapshot.title));
    out.push_str(&format!(
        "{}  {}  {:.0}%\n",
        snapshot.step_count_text(),
        progress_bar(snapshot.percent_complete, 20),
        snapshot.percent_complete
    ));
    out.push_str(&format!("{}\n", snapshot.instruction_text));
    if !snapshot.detail_text.is_empty() {
        out.push_str(&format!("  {}\n", snapshot.detail_text));
    }
    if !snapshot.resolved_media.is_empty() {
        out.push_str(&format!(
            "{}: {}\n",
            snapshot.media_kind.label(),
            snapshot.resolved_media
        ));
    }

    let previous = if snapshot.can_retreat { "[p] Previous" } else { "" };
    out.push_str(&format!(
        "{}{}[n] {}  [q] Quit\n\n",
        previous,
        if previous.is_empty() { "" } else { "  " },
        snapshot.forward_label
    ));
    out
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
