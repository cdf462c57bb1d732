//! FAQ listing commands: search, browse and categories.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_knowledge::{match_records, FaqView, ALL_CATEGORY};

use super::{load_base, print_json, print_records};

/// Search FAQs by free text
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Text to look for in questions, answers and keywords
    pub query: String,

    /// Show answers under each question
    #[arg(short, long)]
    pub answers: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");

        let base = load_base(config)?;
        let results = match_records(&self.query, &base);
        let heading = FaqView::new(self.query.as_str(), ALL_CATEGORY).heading(results.len());

        if self.json {
            print_json(&serde_json::json!({
                "query": self.query,
                "count": results.len(),
                "results": results,
            }))
        } else {
            print_records(&heading, &results, self.answers);
            Ok(())
        }
    }
}

/// Browse FAQs by category, or by search when a query is given
#[derive(Args, Debug)]
pub struct BrowseCommand {
    /// Category to list
    #[arg(short = 'C', long, default_value = ALL_CATEGORY)]
    pub category: String,

    /// Search text; takes precedence over the category
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Show answers under each question
    #[arg(short, long)]
    pub answers: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl BrowseCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing browse command");

        let base = load_base(config)?;
        let view = FaqView::new(self.query.as_str(), self.category.as_str());

        if !view.is_searching() && !base.has_category(&view.category) {
            tracing::warn!(
                "Unknown category '{}'. Known: {}",
                view.category,
                base.categories().join(", ")
            );
        }

        let results = view.results(&base);

        if self.json {
            print_json(&serde_json::json!({
                "view": view,
                "heading": view.heading(results.len()),
                "results": results,
            }))
        } else {
            print_records(&view.heading(results.len()), &results, self.answers);
            Ok(())
        }
    }
}

/// List FAQ categories
#[derive(Args, Debug)]
pub struct CategoriesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CategoriesCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let base = load_base(config)?;

        if self.json {
            print_json(&serde_json::json!({ "categories": base.categories() }))
        } else {
            for category in base.categories() {
                println!("{}", category);
            }
            Ok(())
        }
    }
}
