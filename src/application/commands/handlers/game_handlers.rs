//! Game Content Handlers - 对话清理与事件翻译

use crate::application::commands::{CleanDialogue, TranslateEvents};
use crate::domain::{translate_events, trim_dialogue, GameAction, DEFAULT_MAX_LEN};

// ============================================================================
// CleanDialogue
// ============================================================================

/// CleanDialogue Handler
pub struct CleanDialogueHandler {
    default_max_len: usize,
}

impl Default for CleanDialogueHandler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl CleanDialogueHandler {
    pub fn new(default_max_len: usize) -> Self {
        Self { default_max_len }
    }

    pub fn handle(&self, command: CleanDialogue) -> Vec<String> {
        let max_len = command.max_len.unwrap_or(self.default_max_len);
        let cleaned = trim_dialogue(&command.lines, max_len);

        tracing::debug!(
            lines = cleaned.len(),
            max_len,
            truncated = command
                .lines
                .iter()
                .zip(&cleaned)
                .filter(|(before, after)| before != after)
                .count(),
            "Dialogue cleaned"
        );

        cleaned
    }
}

// ============================================================================
// TranslateEvents
// ============================================================================

/// 单个事件的翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedEvent {
    pub event: String,
    pub action: GameAction,
}

/// TranslateEvents Handler
#[derive(Default)]
pub struct TranslateEventsHandler;

impl TranslateEventsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: TranslateEvents) -> Vec<TranslatedEvent> {
        let actions = translate_events(&command.events);

        command
            .events
            .into_iter()
            .zip(actions)
            .map(|(event, action)| {
                if action == GameAction::Idle {
                    tracing::debug!(event = %event, "Unrecognized event, falling back to idle");
                }
                TranslatedEvent { event, action }
            })
            .collect()
    }
}
