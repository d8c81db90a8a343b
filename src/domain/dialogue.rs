//! NPC 对话清理
//!
//! AI 生成的对话可能过长，超出游戏画面。超过上限的对话截断并追加省略号。
//! 长度按字符（Unicode scalar value）计算，截断不会切开多字节字符。

/// 默认最大字符数
pub const DEFAULT_MAX_LEN: usize = 150;

/// 截断后追加的省略号
pub const ELLIPSIS: &str = "...";

/// 截断单条对话
///
/// 长度不超过 `max_len` 时原样返回，否则保留前 `max_len` 个字符并追加 `...`
pub fn trim_line(line: &str, max_len: usize) -> String {
    match line.char_indices().nth(max_len) {
        // 第 max_len 个字符之后仍有内容，需要截断
        Some((cut, _)) => format!("{}{}", &line[..cut], ELLIPSIS),
        None => line.to_string(),
    }
}

/// 批量截断对话，保持顺序和数量
pub fn trim_dialogue<S: AsRef<str>>(lines: &[S], max_len: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| trim_line(line.as_ref(), max_len))
        .collect()
}
