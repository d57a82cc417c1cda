use nativelib_core::config::{LoggingConfig, NativeLibConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::BindingError;

#[cfg(target_os = "android")]
const ANDROID_TAG: &str = "nativelib";
#[cfg(target_os = "ios")]
const OSLOG_SUBSYSTEM: &str = "ch.nativelib";

/// Installs the global log subscriber.
/// * `config_json` - optional JSON overriding the defaults, e.g. `{"logging": {"filter": "debug"}}`
///
/// Calling it again once a subscriber is installed has no effect.
#[uniffi::export]
pub fn initialize_logging(config_json: Option<String>) -> Result<(), BindingError> {
    let config = NativeLibConfig::load(config_json.as_deref())?;
    install(&config.logging)
}

pub(crate) fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, BindingError> {
    EnvFilter::try_new(&config.filter)
        .map_err(|err| BindingError::ConfigValidationError(err.to_string()))
}

fn install(config: &LoggingConfig) -> Result<(), BindingError> {
    let filter = env_filter(config)?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(config.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.json).then(tracing_subscriber::fmt::layer));

    #[cfg(target_os = "android")]
    let registry = registry.with(
        tracing_android::layer(ANDROID_TAG).map_err(|err| BindingError::Unknown(err.to_string()))?,
    );

    #[cfg(target_os = "ios")]
    let registry = registry.with(tracing_oslog::OsLogger::new(OSLOG_SUBSYSTEM, "default"));

    if let Err(err) = registry.try_init() {
        debug!("log subscriber already installed: {err}");
    }

    Ok(())
}
