//! taskman 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// taskman 错误类型
#[derive(Debug, Error)]
pub enum TaskmanError {
    /// I/O 错误（配置文件读写、终端操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 网络/HTTP 错误（所有远端调用失败统一归为此类，不区分状态码）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 无效数据
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// taskman Result 类型别名
pub type Result<T> = std::result::Result<T, TaskmanError>;

impl TaskmanError {
    /// 创建 Transport 错误
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 创建 InvalidData 错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

// ureq::Error 统一降级为字符串描述
impl From<ureq::Error> for TaskmanError {
    fn from(err: ureq::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskmanError::transport("connection refused");
        assert_eq!(err.to_string(), "Transport error: connection refused");

        let err = TaskmanError::not_found("task 42");
        assert_eq!(err.to_string(), "Not found: task 42");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskmanError = io_err.into();
        assert!(matches!(err, TaskmanError::Io(_)));
    }
}
