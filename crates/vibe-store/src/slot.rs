//! Durable key-value slot abstraction

use crate::StoreError;

/// A durable string slot addressed by key
///
/// `write` replaces the whole value. Implementations must not leave a
/// half-written value visible to a later `read`.
pub trait KeyValueSlot {
    /// Read the value under `key`, or `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
