use std::sync::{Arc, LazyLock};

use nativelib_core::{HandleTable, NativeRelease, ProxyInstance};
use tracing::info;

use crate::error::BindingError;

/// Entries only track which engine handles are still live
type EngineTable = HandleTable<()>;

pub(crate) static ENGINES: LazyLock<Arc<EngineTable>> =
    LazyLock::new(|| Arc::new(HandleTable::new()));

/// Opens a native engine and hands out its sole owner.
#[uniffi::export]
pub fn open_engine() -> Result<Arc<LibVersionProxy>, BindingError> {
    let handle = ENGINES.insert(());
    info!("opened engine {handle:?}");

    let releaser: Arc<dyn NativeRelease> = ENGINES.clone();
    Ok(Arc::new(LibVersionProxy::with_releaser(
        handle.into_raw(),
        releaser,
    )?))
}

/// Number of engines opened and not yet released
#[uniffi::export]
pub fn live_engine_count() -> u64 {
    ENGINES.len() as u64
}

/// Foreign-side owner of a native engine handle.
///
/// Only `open_engine` creates one. The engine is released when the foreign
/// object is destroyed or collected, or earlier through `release_engine`.
#[derive(Debug, uniffi::Object)]
pub struct LibVersionProxy {
    inner: ProxyInstance,
}

#[uniffi::export]
impl LibVersionProxy {
    /// Releases the engine now instead of waiting for the object to go away
    pub fn release_engine(&self) {
        self.inner.destroy();
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_destroyed()
    }

    pub fn native_ref(&self) -> u64 {
        self.inner.handle().into_raw()
    }
}

impl LibVersionProxy {
    pub(crate) fn with_releaser(
        native_ref: u64,
        releaser: Arc<dyn NativeRelease>,
    ) -> Result<Self, BindingError> {
        Ok(Self {
            inner: ProxyInstance::new(native_ref, releaser)?,
        })
    }
}
