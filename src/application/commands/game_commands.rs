//! Game Content Commands - 对话清理与事件翻译

/// 清理 NPC 对话命令
#[derive(Debug, Clone)]
pub struct CleanDialogue {
    pub lines: Vec<String>,
    /// 未指定时使用配置中的默认上限
    pub max_len: Option<usize>,
}

/// 事件翻译命令
#[derive(Debug, Clone)]
pub struct TranslateEvents {
    pub events: Vec<String>,
}
