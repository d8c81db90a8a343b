//! 事件翻译：文本事件 → 3D 游戏动作
//!
//! 映射表是封闭的，未识别的事件（包括空串、大小写不一致、带空白）一律落到 `idle`。

use serde::Serialize;

/// 游戏生成器识别的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameAction {
    StartCombat,
    SpawnNpc,
    AddInventory,
    Idle,
}

impl GameAction {
    /// 查表，区分大小写
    pub fn from_event(event: &str) -> Self {
        match event {
            "fight" => Self::StartCombat,
            "meet_npc" => Self::SpawnNpc,
            "find_item" => Self::AddInventory,
            _ => Self::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartCombat => "start_combat",
            Self::SpawnNpc => "spawn_npc",
            Self::AddInventory => "add_inventory",
            Self::Idle => "idle",
        }
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 翻译单个事件名
pub fn translate_event(event: &str) -> &'static str {
    GameAction::from_event(event).as_str()
}

/// 批量翻译，保持顺序
pub fn translate_events<S: AsRef<str>>(events: &[S]) -> Vec<GameAction> {
    events
        .iter()
        .map(|event| GameAction::from_event(event.as_ref()))
        .collect()
}
