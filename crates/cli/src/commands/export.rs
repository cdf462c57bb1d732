//! Export command handler.

use clap::Args;
use faqdesk_core::{config::AppConfig, AppResult};
use faqdesk_knowledge::save_knowledge_base;
use std::path::PathBuf;

use super::load_base;

/// Write the active knowledge base to a YAML file
#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Destination file
    pub path: PathBuf,
}

impl ExportCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Exporting knowledge base to {:?}", self.path);

        let base = load_base(config)?;
        save_knowledge_base(&self.path, &base)?;

        println!("Exported {} FAQs to {}", base.len(), self.path.display());
        Ok(())
    }
}
