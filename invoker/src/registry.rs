//! Registry boundary.
//!
//! A registry is an optional name-to-value lookup service (typically a
//! dependency-injection container) consulted by the name and type
//! resolvers. Only the contract lives here; implementations belong to the
//! consumer.

use crate::error::RegistryError;
use crate::values::Value;
use std::fmt;

/// Name-keyed value lookup.
///
/// Lookups are assumed synchronous and side-effect-free. A
/// [`RegistryError::NotFound`] from `get` is a normal outcome: resolvers
/// treat it as a decline for that one parameter and keep resolving the
/// others. `get` may return NotFound even after `has` answered true
/// (entries on a shared container can disappear between the two calls).
pub trait Registry: fmt::Debug + Send + Sync {
    fn has(&self, name: &str) -> bool;

    fn get(&self, name: &str) -> Result<Value, RegistryError>;
}
