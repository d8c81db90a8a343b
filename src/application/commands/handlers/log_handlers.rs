//! AI Output Log Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::RecordAiOutput;
use crate::application::error::ApplicationError;
use crate::application::ports::{AiOutputLogPort, DEFAULT_LOG_LABEL};

/// RecordAiOutput Handler
pub struct RecordAiOutputHandler {
    output_log: Arc<dyn AiOutputLogPort>,
}

impl RecordAiOutputHandler {
    pub fn new(output_log: Arc<dyn AiOutputLogPort>) -> Self {
        Self { output_log }
    }

    pub async fn handle(&self, command: RecordAiOutput) -> Result<PathBuf, ApplicationError> {
        let label = command.label.as_deref().unwrap_or(DEFAULT_LOG_LABEL);
        let path = self.output_log.append(label, &command.payload).await?;

        tracing::info!(label = %label, path = %path.display(), "AI output recorded");

        Ok(path)
    }
}
