//! 配置管理器实现

use config_abstractions::ConfigManager;
use infrastructure_common::{ConfigError, ConfigResult};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 默认配置管理器
///
/// 内存中的两层配置树：显式设置的值和默认值。读取时显式值优先，
/// 两层都是对象时按键深度合并。
#[derive(Debug)]
pub struct DefaultConfigManager {
    /// 显式设置的配置
    overrides: RwLock<Value>,
    /// 默认配置
    defaults: RwLock<Value>,
}

/// 创建新的配置管理器
pub fn new_config() -> DefaultConfigManager {
    DefaultConfigManager::new()
}

impl DefaultConfigManager {
    /// 创建空的配置管理器
    pub fn new() -> Self {
        Self {
            overrides: RwLock::new(Value::Object(Map::new())),
            defaults: RwLock::new(Value::Object(Map::new())),
        }
    }
}

impl Default for DefaultConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager for DefaultConfigManager {
    fn get(&self, key: &str) -> Option<Value> {
        let path = match parse_key(key) {
            Ok(path) => path,
            Err(e) => {
                debug!("忽略无效配置键: {}", e);
                return None;
            }
        };

        lookup(&self.all_settings(), &path).cloned()
    }

    fn set(&self, key: &str, value: Value) -> ConfigResult<()> {
        let path = parse_key(key)?;
        debug!("设置配置: {}", key);
        insert(&mut self.overrides.write(), &path, normalize_keys(value));
        Ok(())
    }

    fn set_default(&self, key: &str, value: Value) -> ConfigResult<()> {
        let path = parse_key(key)?;
        debug!("设置默认配置: {}", key);
        insert(&mut self.defaults.write(), &path, normalize_keys(value));
        Ok(())
    }

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn all_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.all_settings(), "", &mut keys);
        keys.sort();
        keys
    }

    fn all_settings(&self) -> Value {
        let mut settings = self.defaults.read().clone();
        deep_merge(&mut settings, self.overrides.read().clone());
        settings
    }

    fn merge(&self, settings: Value) -> ConfigResult<()> {
        if !settings.is_object() {
            warn!("拒绝合并非对象配置");
            return Err(ConfigError::MergeError {
                message: format!("只能合并 JSON 对象, 实际为 {}", settings),
            });
        }
        deep_merge(&mut self.overrides.write(), normalize_keys(settings));
        debug!("合并配置完成");
        Ok(())
    }
}

/// 解析点分路径，键统一为小写
fn parse_key(key: &str) -> ConfigResult<Vec<String>> {
    let normalized = key.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ConfigError::invalid_key(key, "键为空"));
    }

    let segments: Vec<String> = normalized.split('.').map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err(ConfigError::invalid_key(key, "路径中存在空段"));
    }
    Ok(segments)
}

fn lookup<'a>(root: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// 沿路径写入，途中的非对象节点会被替换为对象
fn insert(node: &mut Value, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(first.clone()).or_insert(Value::Null);
        insert(child, rest, value);
    }
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

fn collect_keys(value: &Value, prefix: &str, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_keys(child, &path, keys);
            }
        }
        _ if !prefix.is_empty() => keys.push(prefix.to_string()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_abstractions::ConfigManagerExt;
    use serde_json::json;

    #[test]
    fn test_set_and_get_nested() {
        let manager = new_config();
        manager.set("server.port", json!(8080)).unwrap();
        manager.set("server.host", json!("0.0.0.0")).unwrap();

        assert_eq!(manager.get("server.port"), Some(json!(8080)));
        assert_eq!(
            manager.get("server"),
            Some(json!({"port": 8080, "host": "0.0.0.0"}))
        );
        assert!(manager.has("server.host"));
        assert!(!manager.has("server.timeout"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let manager = new_config();
        manager.set("App.Name", json!("adsp")).unwrap();
        manager.set("Database", json!({"Host": "db"})).unwrap();

        assert_eq!(manager.get_string("app.name").unwrap(), "adsp");
        assert_eq!(manager.get_string("APP.NAME").unwrap(), "adsp");
        assert_eq!(manager.get_string("database.host").unwrap(), "db");
    }

    #[test]
    fn test_explicit_values_shadow_defaults() {
        let manager = new_config();
        manager.set_default("server.port", json!(80)).unwrap();
        manager.set_default("server.host", json!("localhost")).unwrap();
        assert_eq!(manager.get_int("server.port").unwrap(), 80);

        manager.set("server.port", json!(8080)).unwrap();
        assert_eq!(manager.get_int("server.port").unwrap(), 8080);
        assert_eq!(
            manager.get("server"),
            Some(json!({"port": 8080, "host": "localhost"}))
        );
    }

    #[test]
    fn test_explicit_scalar_hides_default_subtree() {
        let manager = new_config();
        manager.set_default("server.port", json!(80)).unwrap();
        manager.set("server", json!("disabled")).unwrap();

        assert_eq!(manager.get("server"), Some(json!("disabled")));
        assert_eq!(manager.get("server.port"), None);
        assert!(!manager.has("server.port"));
        assert!(manager.get_int("server.port").is_err());
        assert_eq!(manager.all_keys(), vec!["server"]);
        assert_eq!(manager.all_settings(), json!({"server": "disabled"}));
    }

    #[test]
    fn test_invalid_keys() {
        let manager = new_config();
        assert!(matches!(
            manager.set("", json!(1)),
            Err(ConfigError::InvalidKey { .. })
        ));
        assert!(matches!(
            manager.set("a..b", json!(1)),
            Err(ConfigError::InvalidKey { .. })
        ));
        assert!(matches!(
            manager.set_default(".a", json!(1)),
            Err(ConfigError::InvalidKey { .. })
        ));
        assert_eq!(manager.get("a..b"), None);
    }

    #[test]
    fn test_section_path_matches_stored_key() {
        let manager = new_config();
        manager.set("Ünits.Server.Port", json!(8080)).unwrap();

        let section = manager.get_section("ÜNITS.Server").unwrap();
        assert_eq!(section.path, "ünits.server");
        assert_eq!(section.get("port"), Some(&json!(8080)));
    }

    #[test]
    fn test_set_replaces_scalar_parent() {
        let manager = new_config();
        manager.set("cache", json!("redis")).unwrap();
        manager.set("cache.ttl", json!(60)).unwrap();

        assert_eq!(manager.get("cache"), Some(json!({"ttl": 60})));
    }

    #[test]
    fn test_all_keys_and_settings() {
        let manager = new_config();
        manager.set_default("log.level", json!("info")).unwrap();
        manager.set("server.port", json!(8080)).unwrap();
        manager.set("features", json!({})).unwrap();

        assert_eq!(
            manager.all_keys(),
            vec!["features", "log.level", "server.port"]
        );
        assert_eq!(
            manager.all_settings(),
            json!({"log": {"level": "info"}, "server": {"port": 8080}, "features": {}})
        );
    }

    #[test]
    fn test_merge() {
        let manager = new_config();
        manager.set("server.port", json!(8080)).unwrap();
        manager
            .merge(json!({"Server": {"Host": "example.com"}, "debug": true}))
            .unwrap();

        assert_eq!(manager.get_int("server.port").unwrap(), 8080);
        assert_eq!(manager.get_string("server.host").unwrap(), "example.com");
        assert!(manager.get_bool("debug").unwrap());

        assert!(matches!(
            manager.merge(json!([1, 2])),
            Err(ConfigError::MergeError { .. })
        ));
    }
}
