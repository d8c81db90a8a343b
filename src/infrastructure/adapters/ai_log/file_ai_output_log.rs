//! File AI Output Log - 按日期追加写入 JSON 日志
//!
//! 实现 AiOutputLogPort trait
//!
//! 文件布局: `<dir>/<label>_<YYYY-MM-DD>.json`
//! 每条记录为格式化后的 JSON，后跟一行 `---` 作为分隔符，同一天的记录写入同一文件。

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{validate_label, AiOutputLogPort, LogError};

/// 记录分隔符
pub const RECORD_SEPARATOR: &str = "\n---\n";

/// 文件 AI 输出日志
pub struct FileAiOutputLog {
    /// 日志目录
    dir: PathBuf,
    /// 进程内串行化写入，避免多行 JSON 交错
    write_lock: Mutex<()>,
}

impl FileAiOutputLog {
    /// 创建日志写入器，确保目录存在
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self, LogError> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| LogError::Io(e.to_string()))?;

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// 获取日志目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 指定日期的日志文件路径
    pub fn log_path(&self, label: &str, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", label, date.format("%Y-%m-%d")))
    }

    /// 追加写入指定日期的文件
    pub async fn append_on(
        &self,
        label: &str,
        entry: &Value,
        date: NaiveDate,
    ) -> Result<PathBuf, LogError> {
        validate_label(label)?;

        let mut record = serde_json::to_string_pretty(entry)
            .map_err(|e| LogError::Serialization(e.to_string()))?;
        record.push_str(RECORD_SEPARATOR);

        let path = self.log_path(label, date);

        let _guard = self.write_lock.lock().await;

        // 文件句柄只在本次写入内持有，离开作用域即关闭
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| LogError::Io(e.to_string()))?;

        file.write_all(record.as_bytes())
            .await
            .map_err(|e| LogError::Io(e.to_string()))?;
        file.flush().await.map_err(|e| LogError::Io(e.to_string()))?;

        tracing::debug!(
            "Appended AI output: label={}, path={}, size={} bytes",
            label,
            path.display(),
            record.len()
        );

        Ok(path)
    }
}

#[async_trait]
impl AiOutputLogPort for FileAiOutputLog {
    async fn append(&self, label: &str, entry: &Value) -> Result<PathBuf, LogError> {
        self.append_on(label, entry, Local::now().date_naive()).await
    }
}
