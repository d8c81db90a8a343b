//! Data Transfer Objects

use serde::Serialize;

use crate::domain::BookAnalysis;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Analysis View
// ============================================================================

/// 分析结果视图
///
/// `game_link` 仅在书名匹配预置作品时出现
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    pub analysis: BookAnalysis,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_link: Option<String>,
}
