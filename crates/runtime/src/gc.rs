use std::{ops::Deref, sync::Arc};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Garbage-collectable cell
///
/// Cloning it only clones the handle, not the underlying value
#[derive(Debug)]
pub struct GcCell<T> {
    value: Arc<RwLock<T>>,
}

impl<T> GcCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.value.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.value.write()
    }

    /// Check if two cells point to the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for GcCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

/// Garbage-collectable read-only cell
#[derive(Debug)]
pub struct GcReadOnlyCell<T> {
    value: Arc<T>,
}

impl<T> GcReadOnlyCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    /// Check if two cells point to the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for GcReadOnlyCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Deref for GcReadOnlyCell<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
