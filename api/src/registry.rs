//! Named dependency registry
//!
//! A string-keyed table binding logical service names (e.g. `accountRepository`)
//! to shared implementations. Use cases hold [`Inject`] handles and resolve them
//! on every access, so they can be built before their dependencies are bound and
//! pick up rebinding (how tests swap in doubles).
//!
//! Lifecycle: bindings are provided at process start (or per test), read on every
//! resolution, and cleared with [`Registry::reset`]. Tests should build their own
//! registry with [`Registry::new`] instead of sharing [`Registry::global`].

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::RegistryError;

/// Type-erased `Arc<T>`; `T` is usually a `dyn` port trait
type Binding = Arc<dyn Any + Send + Sync>;

/// Process-wide dependency table
#[derive(Default)]
pub struct Registry {
    bindings: RwLock<HashMap<String, Binding>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process
    pub fn global() -> Arc<Registry> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Registry::new())).clone()
    }

    /// Bind `name` to an implementation, replacing any previous binding
    ///
    /// Resolve with the same `T` it was provided as, e.g.
    /// `provide::<dyn AccountRepository>(..)` then `resolve::<dyn AccountRepository>(..)`.
    pub fn provide<T>(&self, name: impl Into<String>, implementation: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let name = name.into();
        let binding: Binding = Arc::new(implementation);

        let previous = self
            .bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), binding);

        if previous.is_some() {
            debug!(dependency = %name, "Rebound dependency");
        } else {
            debug!(dependency = %name, "Bound dependency");
        }
    }

    /// Look up the implementation bound to `name`
    pub fn resolve<T>(&self, name: &str) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);

        let binding = bindings
            .get(name)
            .ok_or_else(|| RegistryError::Unresolved(name.to_string()))?;

        let resolved = (**binding).downcast_ref::<Arc<T>>().cloned();

        resolved.ok_or_else(|| RegistryError::TypeMismatch {
            name: name.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// Whether anything is bound to `name`
    #[allow(dead_code)]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Drop every binding
    #[allow(dead_code)]
    pub fn reset(&self) {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
        debug!(count = bindings.len(), "Resetting dependency registry");
        bindings.clear();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<&String> = bindings.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("bindings", &names).finish()
    }
}

/// A named dependency resolved lazily from a [`Registry`]
pub struct Inject<T: ?Sized> {
    registry: Arc<Registry>,
    name: &'static str,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T> Inject<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    pub fn new(registry: Arc<Registry>, name: &'static str) -> Self {
        Self {
            registry,
            name,
            _marker: PhantomData,
        }
    }

    /// Resolve the current binding
    pub fn get(&self) -> Result<Arc<T>, RegistryError> {
        self.registry.resolve(self.name)
    }
}

impl<T: ?Sized> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            name: self.name,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject").field("name", &self.name).finish()
    }
}
