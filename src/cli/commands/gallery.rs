use async_trait::async_trait;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::{CommandContext, CommandHandler, CommandResult};
use crate::search::{FieldSet, SearchField};
use crate::session::{PageState, Selection};
use crate::view::GalleryRow;
use crate::Result;

/// Handler for the `gallery` command
pub struct GalleryCommand {
    pub context: CommandContext,
    pub query: Option<String>,
    pub fields: Vec<SearchField>,
    pub json: bool,
}

/// Table row for gallery listings
#[derive(Tabled)]
struct GalleryTableRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&GalleryRow> for GalleryTableRow {
    fn from(row: &GalleryRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            difficulty: row.difficulty.clone(),
            category: row.category.clone(),
            time: row.time.clone(),
        }
    }
}

#[async_trait]
impl CommandHandler for GalleryCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let mut context = self.context.clone();
        if !self.fields.is_empty() {
            context.settings.search_fields = self.fields.clone();
        }

        let view = match context.session().open(&Selection::All).await {
            PageState::Gallery(view) => view,
            other => return Ok(CommandResult::Error(super::open::state_message(&other))),
        };

        let rows = view.filter(self.query.as_deref().unwrap_or_default());
        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(CommandResult::Success(None));
        }

        if rows.is_empty() {
            return Ok(CommandResult::Warning(format!(
                "No patterns match '{}' (searched: {})",
                self.query.as_deref().unwrap_or_default(),
                describe_fields(view.fields())
            )));
        }

        println!("{}", render_table(&rows));
        Ok(CommandResult::Success(Some(format!(
            "{} of {} pattern(s)",
            rows.len(),
            view.store().len()
        ))))
    }

    fn name(&self) -> &'static str {
        "gallery"
    }
}

impl GalleryCommand {
    pub fn new(
        context: CommandContext,
        query: Option<String>,
        fields: Vec<SearchField>,
        json: bool,
    ) -> Self {
        Self {
            context,
            query,
            fields,
            json,
        }
    }
}

/// Render gallery rows as a table
pub fn render_table(rows: &[GalleryRow]) -> String {
    let table_rows: Vec<GalleryTableRow> = rows.iter().map(GalleryTableRow::from).collect();
    Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn describe_fields(fields: &FieldSet) -> String {
    fields
        .iter()
        .map(|f| format!("{f:?}").to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
