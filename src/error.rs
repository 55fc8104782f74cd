use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 本地校验错误（未发起任何网络请求）
    Validation(ValidationError),
    /// 传输层错误（网络失败或非 2xx 状态）
    Transport(TransportError),
    /// 响应解释错误（结构有效但业务失败，或载荷无法解析）
    Interpreted(InterpretedError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 不加前缀：错误面板直接使用子错误的文案
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Transport(e) => write!(f, "{}", e),
            AppError::Interpreted(e) => write!(f, "{}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Transport(e) => Some(e),
            AppError::Interpreted(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 本地校验错误
///
/// 文案是对用户展示的规范消息，测试按原文断言
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 手动输入时两个集合均不能为空
    BothSetsRequired,
    /// 文件上传时必须选择两个文件
    BothFilesRequired,
    /// 文件超过大小上限
    FileTooLarge { name: String, size_bytes: usize },
    /// 文件扩展名不被支持
    UnsupportedFormat { name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BothSetsRequired => write!(f, "both sets required"),
            ValidationError::BothFilesRequired => write!(f, "both files required"),
            ValidationError::FileTooLarge { .. } => write!(f, "file too large, max 10MB"),
            ValidationError::UnsupportedFormat { .. } => {
                write!(f, "unsupported file format, use TXT or CSV")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 传输层错误
#[derive(Debug)]
pub enum TransportError {
    /// 请求未能完成（连接失败、超时等）
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 非 2xx 状态；message 取自响应体的 error 字段（如果有）
    BadStatus { status: u16, message: Option<String> },
}

impl TransportError {
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestFailed { endpoint, source } => {
                write!(f, "request failed ({}): {}", endpoint, source)
            }
            TransportError::BadStatus {
                message: Some(message),
                ..
            } => write!(f, "{}", message),
            TransportError::BadStatus {
                status,
                message: None,
            } => write!(f, "server error {}", status),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            TransportError::BadStatus { .. } => None,
        }
    }
}

/// 响应解释错误
#[derive(Debug)]
pub enum InterpretedError {
    /// 结构有效、业务明确失败的响应
    Application { message: String },
    /// 载荷不是合法 JSON 或形态不符
    MalformedPayload {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for InterpretedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretedError::Application { message } => write!(f, "{}", message),
            InterpretedError::MalformedPayload { source } => {
                write!(f, "malformed response payload: {}", source)
            }
        }
    }
}

impl std::error::Error for InterpretedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterpretedError::Application { .. } => None,
            InterpretedError::MalformedPayload { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::Transport(err)
    }
}

impl From<InterpretedError> for AppError {
    fn from(err: InterpretedError) -> Self {
        AppError::Interpreted(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: String::new(), // reqwest 错误里通常拿不到端点信息
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Interpreted(InterpretedError::MalformedPayload {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建传输请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::request_failed(endpoint, source))
    }

    /// 创建业务失败错误
    pub fn application(message: impl Into<String>) -> Self {
        AppError::Interpreted(InterpretedError::Application {
            message: message.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_canonical() {
        assert_eq!(
            ValidationError::BothSetsRequired.to_string(),
            "both sets required"
        );
        assert_eq!(
            ValidationError::BothFilesRequired.to_string(),
            "both files required"
        );
        assert_eq!(
            ValidationError::FileTooLarge {
                name: "big.txt".to_string(),
                size_bytes: 10 * 1024 * 1024 + 1,
            }
            .to_string(),
            "file too large, max 10MB"
        );
        assert_eq!(
            ValidationError::UnsupportedFormat {
                name: "data.pdf".to_string(),
            }
            .to_string(),
            "unsupported file format, use TXT or CSV"
        );
    }

    #[test]
    fn test_bad_status_display() {
        let with_body = TransportError::BadStatus {
            status: 400,
            message: Some("bad input".to_string()),
        };
        assert_eq!(with_body.to_string(), "bad input");

        let generic = TransportError::BadStatus {
            status: 500,
            message: None,
        };
        assert_eq!(generic.to_string(), "server error 500");
    }
}
