//! Centralized integration tests: container, configuration provider and bootstrapper together
use config_abstractions::{ConfigManager, ConfigManagerExt};
use config_impl::{resolve_config, ConfigServiceProvider, CONFIG_SERVICE_KEY};
use di_abstractions::{Application, Container, ContainerExt, ServiceProvider};
use di_impl::ServiceContainer;
use infrastructure_common::{InfrastructureError, ProviderError};
use infrastructure_composition::{HostApplication, ProviderBootstrapper};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// 依赖配置服务的下游提供者，启动阶段读取配置
struct GreetingServiceProvider;

struct GreetingService {
    greeting: String,
}

impl ServiceProvider for GreetingServiceProvider {
    fn name(&self) -> &'static str {
        "GreetingServiceProvider"
    }

    fn register(&self, app: Option<&dyn Application>) -> Result<(), ProviderError> {
        let container = app
            .ok_or(ProviderError::ApplicationMissing)?
            .container()
            .ok_or(ProviderError::ContainerMissing)?;

        let greeting = resolve_config(container.as_ref())
            .ok()
            .and_then(|config| config.get_string("greeting.text").ok())
            .unwrap_or_else(|| "hello".to_string());
        container.instance("greeting", Arc::new(GreetingService { greeting }));
        Ok(())
    }

    fn boot(&self, app: Option<&dyn Application>) -> Result<(), ProviderError> {
        app.map(|_| ()).ok_or(ProviderError::ApplicationMissing)
    }

    fn requires(&self) -> Vec<&'static str> {
        vec![CONFIG_SERVICE_KEY]
    }

    fn providers(&self) -> Vec<&'static str> {
        vec!["greeting"]
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct ServerOptions {
    host: String,
    port: u16,
}

#[test]
fn test_provider_registers_into_plain_container() -> anyhow::Result<()> {
    struct Plain(Arc<dyn Container>);

    impl Application for Plain {
        fn container(&self) -> Option<Arc<dyn Container>> {
            Some(Arc::clone(&self.0))
        }
    }

    let app = Plain(Arc::new(ServiceContainer::new()));
    let provider = ConfigServiceProvider::new();
    provider.register(Some(&app))?;
    provider.boot(Some(&app))?;

    let manager = app.0.make_as::<Arc<dyn ConfigManager>>("config")?;
    manager.set("server", json!({"host": "127.0.0.1", "port": 9000}))?;

    let options: ServerOptions = manager.unmarshal_key("server")?;
    assert_eq!(
        options,
        ServerOptions {
            host: "127.0.0.1".to_string(),
            port: 9000
        }
    );
    Ok(())
}

#[test]
fn test_downstream_provider_sees_config() -> anyhow::Result<()> {
    let app = HostApplication::new();

    let report = ProviderBootstrapper::new()
        .add_provider(GreetingServiceProvider)
        .add_provider(ConfigServiceProvider::new())
        .bootstrap(Some(&app))?;

    assert_eq!(report[0].name, "ConfigServiceProvider");
    assert_eq!(report[1].name, "GreetingServiceProvider");

    let container = app.container().expect("宿主应用应持有容器");
    let greeting = container.make_as::<GreetingService>("greeting")?;
    assert_eq!(greeting.greeting, "hello");
    Ok(())
}

#[test]
fn test_rebootstrap_replaces_config_binding() -> anyhow::Result<()> {
    let app = HostApplication::new();
    let bootstrapper = ProviderBootstrapper::with_defaults();

    bootstrapper.bootstrap(Some(&app))?;
    app.config()?.set("session.ttl", json!(30))?;

    bootstrapper.bootstrap(Some(&app))?;
    assert!(!app.config()?.has("session.ttl"));
    Ok(())
}

#[test]
fn test_bootstrap_requires_container() {
    let app = HostApplication::without_container();
    let err = ProviderBootstrapper::with_defaults()
        .bootstrap(Some(&app))
        .unwrap_err();

    assert!(matches!(
        err,
        InfrastructureError::Provider {
            source: ProviderError::ContainerMissing
        }
    ));
}
