//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_madrasa_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MadrasaError {
            $($variant(String),)*
        }

        impl MadrasaError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MadrasaError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MadrasaError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MadrasaError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl MadrasaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MadrasaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_madrasa_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    Configuration("E003", "Configuration Error"),
    StorageOperation("E004", "Storage Operation Error"),
    // E005 不再使用，保留编号
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    InvalidState("E010", "Invalid State Error"),
}

impl MadrasaError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为记录不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, MadrasaError::NotFound(_))
    }
}

impl fmt::Display for MadrasaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MadrasaError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for MadrasaError {
    fn from(err: serde_json::Error) -> Self {
        MadrasaError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for MadrasaError {
    fn from(err: chrono::ParseError) -> Self {
        MadrasaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MadrasaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MadrasaError::cache_connection("test").code(), "E001");
        assert_eq!(MadrasaError::configuration("test").code(), "E003");
        assert_eq!(MadrasaError::validation("test").code(), "E006");
        assert_eq!(MadrasaError::not_found("test").code(), "E007");
        assert_eq!(MadrasaError::invalid_state("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MadrasaError::storage_operation("test").error_type(),
            "Storage Operation Error"
        );
        assert_eq!(
            MadrasaError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = MadrasaError::not_found("Student not found");
        assert_eq!(err.message(), "Student not found");
        assert!(err.is_not_found());
        assert!(!MadrasaError::validation("x").is_not_found());
    }

    #[test]
    fn test_format_simple() {
        let err = MadrasaError::validation("Invalid phone");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid phone"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: MadrasaError = serde_json::from_str::<u32>("not a number")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E008");
    }
}
