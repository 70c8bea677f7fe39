//! Application state shared outside the node tree.
//!
//! The layout engine never reads state directly. Applications keep values
//! here, rebuild their node tree from them and hand the fresh tree to the
//! renderer. Listeners fire after every [`StateManager::set`].

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use smallvec::SmallVec;

use crate::collections::map::HashMap;
use crate::property::PropValue;

/// Callback receiving the previous value (if any) and the new one.
pub type StateListener = Arc<dyn Fn(Option<&PropValue>, &PropValue) + Send + Sync>;

/// Identifies a registered listener for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ListenerList = SmallVec<[(ListenerId, StateListener); 2]>;

#[derive(Default)]
struct StateTable {
    states: HashMap<String, PropValue>,
    listeners: HashMap<String, ListenerList>,
    next_listener: u64,
}

/// Keyed store of [`PropValue`]s with change listeners.
#[derive(Default)]
pub struct StateManager {
    table: RwLock<StateTable>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StateTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StateTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<PropValue> {
        self.read().states.get(key).cloned()
    }

    /// Stores `value` and notifies the listeners of `key`.
    ///
    /// Listeners run after the lock is released, so they may read or write
    /// state themselves.
    pub fn set(&self, key: &str, value: impl Into<PropValue>) {
        let value = value.into();
        let (old, listeners) = {
            let mut table = self.write();
            let old = table.states.insert(key.to_owned(), value.clone());
            let listeners: SmallVec<[StateListener; 2]> = table
                .listeners
                .get(key)
                .map(|list| list.iter().map(|(_, listener)| listener.clone()).collect())
                .unwrap_or_default();
            (old, listeners)
        };
        log::debug!(
            "state '{key}' changed; notifying {} listener(s)",
            listeners.len()
        );
        for listener in &listeners {
            listener(old.as_ref(), &value);
        }
    }

    pub fn add_listener<F>(&self, key: &str, listener: F) -> ListenerId
    where
        F: Fn(Option<&PropValue>, &PropValue) + Send + Sync + 'static,
    {
        let mut table = self.write();
        let id = ListenerId(table.next_listener);
        table.next_listener += 1;
        table
            .listeners
            .entry(key.to_owned())
            .or_default()
            .push((id, Arc::new(listener)));
        id
    }

    /// Returns false when `id` was not registered for `key`.
    pub fn remove_listener(&self, key: &str, id: ListenerId) -> bool {
        let mut table = self.write();
        let Some(list) = table.listeners.get_mut(key) else {
            return false;
        };
        let before = list.len();
        list.retain(|(registered, _)| *registered != id);
        before != list.len()
    }

    /// Seeds `key` with `initial` (without notifying) and returns a handle
    /// bound to it.
    pub fn create_state(self: &Arc<Self>, key: &str, initial: impl Into<PropValue>) -> StateHandle {
        self.write().states.insert(key.to_owned(), initial.into());
        StateHandle {
            key: key.to_owned(),
            manager: Arc::clone(self),
        }
    }
}

impl fmt::Debug for StateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.read();
        let mut keys: Vec<_> = table.states.keys().collect();
        keys.sort();
        f.debug_struct("StateManager")
            .field("keys", &keys)
            .finish_non_exhaustive()
    }
}

/// Getter/setter pair for one state key.
#[derive(Clone)]
pub struct StateHandle {
    key: String,
    manager: Arc<StateManager>,
}

impl StateHandle {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> Option<PropValue> {
        self.manager.get(&self.key)
    }

    pub fn set(&self, value: impl Into<PropValue>) {
        self.manager.set(&self.key, value);
    }

    /// Replaces the value with `f(current)`.
    ///
    /// Read and write are separate lock acquisitions; concurrent updates of
    /// the same key may interleave.
    pub fn update(&self, f: impl FnOnce(Option<PropValue>) -> PropValue) {
        let next = f(self.get());
        self.set(next);
    }
}

impl fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle").field("key", &self.key).finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
