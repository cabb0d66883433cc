//! 日志输出
//!
//! 开发环境使用带文件位置的文本格式，其余环境输出 JSON。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// 安装全局订阅者，返回的 guard 需保持到进程退出
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(level_filter(&config.app.log_level))
        .with_writer(writer)
        .with_level(true);

    if config.is_development() {
        subscriber
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        subscriber.with_ansi(false).json().init();
    }
    guard
}

// 配置值无法解析时退回 info
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(level_filter("rust_madrasa_admin=trace").to_string(), "rust_madrasa_admin=trace");
        assert_eq!(level_filter("app=verbose").to_string(), "info");
    }
}
