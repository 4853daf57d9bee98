//! 日志初始化

use infrastructure_common::InfrastructureError;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别，`RUST_LOG` 存在时以其为准
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名和行号
    pub show_location: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_location: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            show_target: true,
            show_thread_ids: true,
            show_location: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            show_thread_ids: false,
            show_location: false,
            json_format: true,
        }
    }

    /// 设置日志级别，无法识别时保持原级别
    pub fn with_level_str(mut self, level: &str) -> Self {
        if let Some(level) = parse_log_level(level) {
            self.level = level;
        }
        self
    }

    /// 设置是否使用 JSON 格式
    pub fn with_json(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string().to_lowercase()))
    }
}

/// 初始化全局日志系统
///
/// 全局订阅者只能设置一次，重复调用会返回错误。
pub fn init_logging(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_location)
        .with_line_number(config.show_location);

    if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("日志初始化失败: {}", e),
    })?;

    info!("日志系统初始化完成");
    Ok(())
}

fn parse_log_level(level: &str) -> Option<tracing::Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
