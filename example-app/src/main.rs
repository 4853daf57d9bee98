//! # 示例应用程序
//!
//! 演示配置服务提供者的启动流程：注册、启动，然后通过容器读写配置

use anyhow::{anyhow, Context};
use clap::Parser;
use config_abstractions::{ConfigManager, ConfigManagerExt};
use di_abstractions::Application;
use infrastructure_composition::{init_logging, HostApplication, LoggingConfig, ProviderBootstrapper};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn ADSP 配置服务示例应用")]
struct Args {
    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 使用 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,

    /// 设置配置项，格式为 key=value，可重复
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(
        &LoggingConfig::default()
            .with_level_str(&args.log_level)
            .with_json(args.json_logs),
    )?;

    info!("启动 Lorn ADSP 配置服务示例应用");

    let app = HostApplication::new();
    let report = ProviderBootstrapper::with_defaults().bootstrap(Some(&app))?;
    for metadata in &report {
        info!("已启动服务提供者: {}", serde_json::to_string(metadata)?);
    }

    let config = app.config()?;
    apply_defaults(config.as_ref())?;
    for entry in &args.overrides {
        let (key, value) = parse_override(entry)?;
        config
            .set(key, value)
            .with_context(|| format!("设置配置项失败: {}", entry))?;
    }

    demonstrate_configuration(config.as_ref())?;

    if let Some(container) = app.container() {
        info!("容器中的服务: {:?}", container.names());
    }
    Ok(())
}

/// 写入示例默认值
fn apply_defaults(config: &dyn ConfigManager) -> anyhow::Result<()> {
    config.set_default("app", serde_json::to_value(AppConfig::default())?)?;
    config.set_default("database", serde_json::to_value(DatabaseConfig::default())?)?;
    Ok(())
}

/// 解析 `key=value`，值优先按 JSON 解析，失败时作为字符串
fn parse_override(entry: &str) -> anyhow::Result<(&str, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("配置项格式应为 key=value: {}", entry))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim(), value))
}

/// 演示配置获取
fn demonstrate_configuration(config: &dyn ConfigManager) -> anyhow::Result<()> {
    let app_config: AppConfig = config.unmarshal_key("app")?;
    info!("应用配置: {:?}", app_config);

    let database: DatabaseConfig = config.unmarshal_key("database")?;
    info!("数据库配置: {}:{}/{}", database.host, database.port, database.database);

    for key in config.all_keys() {
        info!("{} = {}", key, config.get_string(&key).unwrap_or_else(|_| "<复合值>".to_string()));
    }
    Ok(())
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 应用名称
    pub name: String,
    /// 应用版本
    pub version: String,
    /// 监听端口
    pub port: u16,
    /// 工作线程数
    pub worker_threads: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "example-app".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            port: 8080,
            worker_threads: 4,
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "adsp".to_string(),
            max_connections: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("app.port=9090").unwrap(), ("app.port", json!(9090)));
        assert_eq!(
            parse_override("app.name=demo").unwrap(),
            ("app.name", json!("demo"))
        );
        assert_eq!(
            parse_override("hosts=[\"a\",\"b\"]").unwrap(),
            ("hosts", json!(["a", "b"]))
        );
        assert!(parse_override("missing-separator").is_err());
    }

    #[test]
    fn test_overrides_shadow_defaults() {
        let app = HostApplication::new();
        ProviderBootstrapper::with_defaults()
            .bootstrap(Some(&app))
            .unwrap();
        let config = app.config().unwrap();
        apply_defaults(config.as_ref()).unwrap();

        let (key, value) = parse_override("app.port=9090").unwrap();
        config.set(key, value).unwrap();

        let app_config: AppConfig = config.unmarshal_key("app").unwrap();
        assert_eq!(app_config.port, 9090);
        assert_eq!(app_config.name, "example-app");
    }
}
