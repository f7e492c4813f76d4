//! CSV export and import handlers for the habit MCP server

use crate::HabitServerHandler;
use crate::csv_codec;
use crate::import::{self, ImportOutcome};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

impl HabitServerHandler {
    /// Serializes all habits to CSV. With a directory the backup is written
    /// there as `habits-backup-<today>.csv`; otherwise the text is returned.
    pub async fn handle_export_csv(&self, directory: Option<String>) -> McpResult<String> {
        let data = self.lock_data();
        let count = data.len();
        let csv = csv_codec::to_csv(data.habits());
        drop(data);

        let filename = csv_codec::export_filename(&self.today.today());

        let Some(directory) = validation::non_blank(directory) else {
            return Ok(format!("File: {}\n\n{}", filename, csv));
        };

        let path = Path::new(directory.trim()).join(&filename);
        if let Err(e) = fs::write(&path, csv) {
            bail_public!(_, "Failed to write '{}': {}", path.display(), e);
        }
        info!(path = %path.display(), count, "exported habits");

        Ok(format!("Exported {} habit(s) to {}", count, path.display()))
    }

    /// Parses CSV text (inline or from a file) and merges it into the
    /// collection. Zero usable rows is reported as a failed import and the
    /// collection is left as it was.
    pub async fn handle_import_csv(
        &self,
        csv: Option<String>,
        path: Option<String>,
    ) -> McpResult<String> {
        let text = match (validation::non_blank(csv), validation::non_blank(path)) {
            (Some(text), _) => text,
            (None, Some(path)) => match fs::read_to_string(path.trim()) {
                Ok(text) => text,
                Err(e) => {
                    bail_public!(_, "Failed to read '{}': {}", path.trim(), e);
                }
            },
            (None, None) => {
                bail_public!(_, "Provide CSV text or a path to a CSV file");
            }
        };

        let now = self.today.now_millis();
        let mut data = self.lock_data();

        let count = match import::import_csv(&mut data, &text, now) {
            ImportOutcome::Imported { count } => count,
            ImportOutcome::Failed => {
                drop(data);
                warn!("import found no usable rows");
                bail_public!(_, "Import failed. CSV format not recognized.");
            }
        };

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Imported {} habit(s).", count))
    }
}
