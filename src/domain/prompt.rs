//! 游戏生成提示词组装
//!
//! 将书名和有序章节摘要拼成一段发给 3D 游戏生成器的提示词：
//!
//! ```text
//! Create a 3D first-person RPG based on '<title>'.
//! Chapter 1: <summary>
//! Chapter 2: <summary>
//! ```

use serde_json::Value;

use super::book::{chapters_from_records, BookError, ChapterSummary};

/// 组装提示词
///
/// 空标题可以接受，只是生成的提示词没有意义。结果不含尾部空白。
pub fn build_prompt(title: &str, chapters: &[ChapterSummary]) -> String {
    let mut lines = Vec::with_capacity(chapters.len() + 1);
    lines.push(format!("Create a 3D first-person RPG based on '{}'.", title));

    for (i, chapter) in chapters.iter().enumerate() {
        lines.push(format!("Chapter {}: {}", i + 1, chapter.summary));
    }

    lines.join("\n").trim_end().to_string()
}

/// 从未类型化的章节记录组装提示词
///
/// 任一记录缺少 summary 时返回 `BookError::InvalidInput`
pub fn build_prompt_from_records(title: &str, records: &[Value]) -> Result<String, BookError> {
    let chapters = chapters_from_records(records)?;
    Ok(build_prompt(title, &chapters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn oz_chapters() -> Vec<ChapterSummary> {
        vec![
            ChapterSummary::new("Dorothy is swept away to Oz."),
            ChapterSummary::new("She meets the Scarecrow."),
        ]
    }

    #[test]
    fn test_build_prompt_wizard_of_oz() {
        let prompt = build_prompt("The Wizard of Oz", &oz_chapters());
        assert_eq!(
            prompt,
            "Create a 3D first-person RPG based on 'The Wizard of Oz'.\n\
             Chapter 1: Dorothy is swept away to Oz.\n\
             Chapter 2: She meets the Scarecrow."
        );
    }

    #[test]
    fn test_no_chapters_gives_header_only() {
        assert_eq!(
            build_prompt("Dune", &[]),
            "Create a 3D first-person RPG based on 'Dune'."
        );
    }

    #[test]
    fn test_empty_title_is_accepted() {
        assert_eq!(
            build_prompt("", &[ChapterSummary::new("x")]),
            "Create a 3D first-person RPG based on ''.\nChapter 1: x"
        );
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let chapters = vec![ChapterSummary::new("a"), ChapterSummary::new("ends with space  \n")];
        let prompt = build_prompt("T", &chapters);
        assert!(prompt.ends_with("Chapter 2: ends with space"));

        let prompt = build_prompt("T", &[ChapterSummary::new("")]);
        assert_eq!(prompt, "Create a 3D first-person RPG based on 'T'.\nChapter 1:");
    }

    #[test]
    fn test_order_and_count_preserved() {
        let mut chapters = oz_chapters();
        chapters.reverse();
        let prompt = build_prompt("Oz", &chapters);
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines.len(), chapters.len() + 1);
        assert_eq!(lines[1], "Chapter 1: She meets the Scarecrow.");
        assert_eq!(lines[2], "Chapter 2: Dorothy is swept away to Oz.");
    }

    #[test]
    fn test_build_from_records() {
        let records = vec![
            json!({"summary": "Dorothy is swept away to Oz."}),
            json!({"summary": "She meets the Scarecrow."}),
        ];
        let prompt = build_prompt_from_records("The Wizard of Oz", &records).unwrap();
        assert_eq!(prompt, build_prompt("The Wizard of Oz", &oz_chapters()));
    }

    #[test]
    fn test_build_from_records_missing_summary() {
        let records = vec![json!({"summary": "ok"}), json!({})];
        let err = build_prompt_from_records("Oz", &records).unwrap_err();
        assert!(matches!(err, BookError::InvalidInput(_)));
    }
}
