use async_trait::async_trait;

use super::{CommandContext, CommandHandler, CommandResult};
use crate::catalog::CatalogStore;
use crate::view::ItemDetail;
use crate::{PatternbookError, Result};

/// Handler for the `show` command
pub struct ShowCommand {
    pub context: CommandContext,
    pub id: String,
    pub json: bool,
}

#[async_trait]
impl CommandHandler for ShowCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let store = CatalogStore::load(self.context.source.clone()).await?;

        let item = match store.find_by_id(&self.id) {
            Ok(item) => item,
            Err(PatternbookError::NotFound(id)) => {
                return Ok(CommandResult::Error(format!("Pattern '{id}' not found")));
            }
            Err(e) => return Err(e),
        };

        let detail = ItemDetail::from(&*item);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            print!("{}", render_detail(&detail));
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(context: CommandContext, id: String, json: bool) -> Self {
        Self { context, id, json }
    }
}

/// Plain-text detail view
pub fn render_detail(detail: &ItemDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("Pattern:    {}\n", detail.name));
    out.push_str(&format!("Id:         {}\n", detail.id));
    if !detail.difficulty.is_empty() {
        out.push_str(&format!("Difficulty: {}\n", detail.difficulty));
    }
    if !detail.category.is_empty() {
        out.push_str(&format!("Category:   {}\n", detail.category));
    }
    if !detail.time.is_empty() {
        out.push_str(&format!("Time:       {}\n", detail.time));
    }
    if !detail.image.is_empty() {
        out.push_str(&format!("Image:      {}\n", detail.image));
    }
    out.push_str(&format!("Steps:      {}\n", detail.step_count));

    for (heading, values) in [
        ("Materials", &detail.materials),
        ("Tools", &detail.tools),
        ("Techniques", &detail.techniques),
    ] {
        if values.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{heading}:\n"));
        for value in values {
            out.push_str(&format!("  - {value}\n"));
        }
    }

    out
}
