use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    // lets several volunteers sign up for one job; when off a job takes one volunteer
    pub allow_shared_jobs: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Self::defaults()?
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        Self::from_config(conf)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("service_name", "vms")?
            .set_default("database_url", "sqlite://vms.db?mode=rwc")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("allow_shared_jobs", true)
    }

    fn from_config(conf: Config) -> Result<Self, ConfigError> {
        let mut s: Settings = conf.try_deserialize()?;
        if s.database_pool_max_connections == 0 {
            s.database_pool_max_connections = 1;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use config::ConfigError;

    use super::Settings;

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let s = Settings::from_config(Settings::defaults()?.build()?)?;
        assert_eq!(s.service_name, "vms");
        assert_eq!(s.database_url, "sqlite://vms.db?mode=rwc");
        assert_eq!(s.database_pool_max_connections, 5);
        assert!(s.allow_shared_jobs);
        Ok(())
    }

    #[test]
    fn test_overrides_and_zero_pool_size() -> Result<(), ConfigError> {
        let conf = Settings::defaults()?
            .set_override("database_pool_max_connections", 0)?
            .set_override("allow_shared_jobs", false)?
            .build()?;
        let s = Settings::from_config(conf)?;
        assert_eq!(s.database_pool_max_connections, 1);
        assert!(!s.allow_shared_jobs);
        Ok(())
    }
}
