//! version/registry.rs
//! Process-wide version registry.
//!
//! Lifecycle: populated once (the built-in version 0 at first access, any
//! additional versions during process initialization), read-only afterwards.
//! Append-only: a version number can never be re-bound. The lock exists so
//! that a late registration cannot race a concurrent lookup; steady-state
//! decodes only ever take the read side.

use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};

use crate::constants::VERSION_V0;
use crate::error::ContainerError;
use crate::version::v0::V0Driver;
use crate::version::VersionDriver;

/// Constructor for a version's driver.
pub type DriverFactory = fn() -> Box<dyn VersionDriver>;

static REGISTRY: LazyLock<RwLock<BTreeMap<u32, DriverFactory>>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert(VERSION_V0, (|| Box::new(V0Driver) as Box<dyn VersionDriver>) as DriverFactory);
    RwLock::new(map)
});

/// Register a decoder factory for a new version number.
///
/// Fails with `DuplicateVersion` if the version is already bound; the
/// registry is append-only for the lifetime of the process.
pub fn register(version: u32, factory: DriverFactory) -> Result<(), ContainerError> {
    let mut map = REGISTRY.write().expect("version registry poisoned");
    if map.contains_key(&version) {
        return Err(ContainerError::DuplicateVersion { version });
    }
    map.insert(version, factory);
    Ok(())
}

/// Resolve the driver for a declared version number.
///
/// Fails with `UnregisteredVersion` if no decoder was registered for it.
pub fn resolve(version: u32) -> Result<Box<dyn VersionDriver>, ContainerError> {
    let map = REGISTRY.read().expect("version registry poisoned");
    match map.get(&version) {
        Some(factory) => Ok(factory()),
        None => Err(ContainerError::UnregisteredVersion { version }),
    }
}
