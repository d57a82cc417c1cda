use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized};
use serde::{Deserialize, Serialize};
use thiserror::Error;


const ENV_PREFIX: &str = "NATIVELIB_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: {0}")]
    Parsing(#[from] Box<figment::Error>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLibConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub filter: String,
    /// emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

impl NativeLibConfig {
    /// Defaults, overridden by `config_json` and then by `NATIVELIB_*` env
    /// variables (`NATIVELIB_LOGGING__FILTER=debug`)
    pub fn load(config_json: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(json) = config_json {
            figment = figment.merge(Json::string(json));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|err| ConfigError::Parsing(Box::new(err)))
    }
}
