use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    #[error("native handle is zero")]
    Zero,
}

/// Opaque reference to an object living on the native side.
///
/// Never zero. The raw value is only meaningful to the table that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(NonZeroU64);

impl NativeHandle {
    /// Raw value to hand over to the foreign runtime
    pub fn into_raw(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for NativeHandle {
    type Error = HandleError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value).map(Self).ok_or(HandleError::Zero)
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeHandle({:#x})", self.0)
    }
}

/// Teardown of the native object behind a handle
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait NativeRelease: Send + Sync {
    fn release(&self, handle: NativeHandle);
}

/// Registry of live native objects.
///
/// Handles are taken from a counter starting at 1 and are never reused, so a
/// stale handle can not reach an object registered later.
pub struct HandleTable<T> {
    next: AtomicU64,
    entries: Mutex<HashMap<NativeHandle, T>>,
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, value: T) -> NativeHandle {
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        // a u64 counter starting at 1 never reaches zero
        let handle = NativeHandle(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN));
        self.entries().insert(handle, value);
        debug!("registered native object {handle:?}");
        handle
    }

    pub fn remove(&self, handle: NativeHandle) -> Option<T> {
        self.entries().remove(&handle)
    }

    pub fn contains(&self, handle: NativeHandle) -> bool {
        self.entries().contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<NativeHandle, T>> {
        // entries stay consistent even if a holder panicked
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> HandleTable<T> {
    pub fn get(&self, handle: NativeHandle) -> Option<T> {
        self.entries().get(&handle).cloned()
    }
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> NativeRelease for HandleTable<T> {
    fn release(&self, handle: NativeHandle) {
        // drop the object outside of the lock
        let removed = self.remove(handle);
        match removed {
            Some(object) => {
                drop(object);
                debug!("released native object {handle:?}");
            }
            None => warn!("release of unknown native object {handle:?}"),
        }
    }
}
