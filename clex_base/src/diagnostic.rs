//! A module for routing diagnostics out of the scanner.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// Represents a trait responsible for handling diagnostics reported while scanning.
pub trait Handler<T> {
    /// Receives an error and handles it.
    fn receive(&self, error: T);
}

/// Is a struct that implements [`Handler`] trait by storing all errors in a vector.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    errors: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of errors.
    pub fn into_vec(self) -> Vec<T> {
        self.errors
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a reference to the underlying vector of errors.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> {
        self.errors.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of errors received so far.
    pub fn len(&self) -> usize { self.as_vec().len() }

    /// Returns `true` if no error has been received.
    pub fn is_empty(&self) -> bool { self.as_vec().is_empty() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) {
        self.errors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{Handler, Storage};

    #[test]
    fn storage_keeps_errors_in_order() {
        let storage: Storage<String> = Storage::new();
        assert!(storage.is_empty());

        storage.receive("first");
        storage.receive(String::from("second"));

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.into_vec(), vec!["first", "second"]);
    }
}
