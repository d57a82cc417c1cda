use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, trace};

use crate::handle::{HandleError, NativeHandle, NativeRelease};


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Invalid native handle: {0}")]
    InvalidHandle(#[from] HandleError),
}

/// Owner of exactly one native object.
///
/// The object is released on the first `destroy` call, or on drop if
/// `destroy` was never called. Any further request is a no-op.
pub struct ProxyInstance {
    handle: NativeHandle,
    destroyed: AtomicBool,
    releaser: Arc<dyn NativeRelease>,
}

impl ProxyInstance {
    pub fn new(native_ref: u64, releaser: Arc<dyn NativeRelease>) -> Result<Self, ProxyError> {
        let handle = NativeHandle::try_from(native_ref)?;
        Ok(Self {
            handle,
            destroyed: AtomicBool::new(false),
            releaser,
        })
    }

    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }

    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            trace!("{:?} already destroyed", self.handle);
            return;
        }

        debug!("destroying {:?}", self.handle);
        self.releaser.release(self.handle);
    }
}

impl Drop for ProxyInstance {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for ProxyInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyInstance")
            .field("handle", &self.handle)
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}
