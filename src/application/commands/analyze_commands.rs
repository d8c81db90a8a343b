//! Analyze Commands

/// 分析书籍并组装游戏提示词
#[derive(Debug, Clone)]
pub struct AnalyzeBook {
    pub title: String,
}
