use std::fmt;

use crate::client::models::ApiErrorDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShrtError {
    Authentication(String),
    Server(String),
    Request(String),
    UnexpectedStatus(u16, String),
    Timeout(String),
    Network(String),
    Decode(String),
    Configuration(String),
    Validation(String),
    Clipboard(String),
    FileOperation(String),
}

impl ShrtError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShrtError::Authentication(_) => "E001",
            ShrtError::Server(_) => "E002",
            ShrtError::Request(_) => "E003",
            ShrtError::UnexpectedStatus(..) => "E004",
            ShrtError::Timeout(_) => "E005",
            ShrtError::Network(_) => "E006",
            ShrtError::Decode(_) => "E007",
            ShrtError::Configuration(_) => "E008",
            ShrtError::Validation(_) => "E009",
            ShrtError::Clipboard(_) => "E010",
            ShrtError::FileOperation(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShrtError::Authentication(_) => "Authentication Error",
            ShrtError::Server(_) => "Server Error",
            ShrtError::Request(_) => "Request Error",
            ShrtError::UnexpectedStatus(..) => "Unexpected Status",
            ShrtError::Timeout(_) => "Timeout Error",
            ShrtError::Network(_) => "Network Error",
            ShrtError::Decode(_) => "Decode Error",
            ShrtError::Configuration(_) => "Configuration Error",
            ShrtError::Validation(_) => "Validation Error",
            ShrtError::Clipboard(_) => "Clipboard Error",
            ShrtError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShrtError::Authentication(msg) => msg,
            ShrtError::Server(msg) => msg,
            ShrtError::Request(msg) => msg,
            ShrtError::UnexpectedStatus(_, msg) => msg,
            ShrtError::Timeout(msg) => msg,
            ShrtError::Network(msg) => msg,
            ShrtError::Decode(msg) => msg,
            ShrtError::Configuration(msg) => msg,
            ShrtError::Validation(msg) => msg,
            ShrtError::Clipboard(msg) => msg,
            ShrtError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status behind the error, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ShrtError::Authentication(_) => Some(401),
            ShrtError::Server(_) => Some(500),
            ShrtError::Request(_) => Some(400),
            ShrtError::UnexpectedStatus(status, _) => Some(*status),
            _ => None,
        }
    }

    /// Decode the service's problem-details body carried by a 4xx error.
    pub fn api_error_detail(&self) -> Option<ApiErrorDetail> {
        match self {
            ShrtError::Request(body) | ShrtError::UnexpectedStatus(_, body) => {
                serde_json::from_str(body).ok()
            }
            _ => None,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;

        let detail = match self.api_error_detail() {
            Some(api) if !api.detail.is_empty() => api.detail,
            _ => self.message().to_string(),
        };
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            detail.white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match self {
            ShrtError::UnexpectedStatus(status, msg) => {
                format!("{} (HTTP {}): {}", self.error_type(), status, msg)
            }
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for ShrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShrtError {}

// 便捷的构造函数
impl ShrtError {
    pub fn authentication<T: Into<String>>(msg: T) -> Self {
        ShrtError::Authentication(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        ShrtError::Server(msg.into())
    }

    pub fn request<T: Into<String>>(msg: T) -> Self {
        ShrtError::Request(msg.into())
    }

    pub fn unexpected_status<T: Into<String>>(status: u16, msg: T) -> Self {
        ShrtError::UnexpectedStatus(status, msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        ShrtError::Timeout(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        ShrtError::Network(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ShrtError::Decode(msg.into())
    }

    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        ShrtError::Configuration(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShrtError::Validation(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShrtError::Clipboard(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShrtError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for ShrtError {
    fn from(err: serde_json::Error) -> Self {
        ShrtError::Decode(err.to_string())
    }
}

impl From<ureq::Error> for ShrtError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(t) => ShrtError::Timeout(format!("request timed out ({:?})", t)),
            ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                ShrtError::Timeout(e.to_string())
            }
            other => ShrtError::Network(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for ShrtError {
    fn from(err: config::ConfigError) -> Self {
        ShrtError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for ShrtError {
    fn from(err: std::io::Error) -> Self {
        ShrtError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for ShrtError {
    fn from(err: toml::ser::Error) -> Self {
        ShrtError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShrtError>;
