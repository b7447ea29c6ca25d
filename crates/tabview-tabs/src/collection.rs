//! Tab collection adapter
//!
//! Two-phase ownership: `Standalone` holds the entries itself until the host
//! list loads, then `attach_to_host` copies them into the host's storage and
//! the collection becomes a proxy for it. The switch happens at most once.
//!
//! Delegated operations take the host lock; callers must not hold it.

use tabview_host::{HostList, Shared, TabEntry, VectorChange};

use crate::error::TabError;
use crate::Result;

enum Backing<T: TabEntry> {
    Standalone(Vec<T>),
    Delegated(Shared<dyn HostList<T>>),
}

pub struct TabCollection<T: TabEntry> {
    backing: Backing<T>,
}

impl<T: TabEntry> TabCollection<T> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            backing: Backing::Standalone(items),
        }
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self.backing, Backing::Delegated(_))
    }

    /// Host list the entries live in, once attached
    pub fn host(&self) -> Option<&Shared<dyn HostList<T>>> {
        match &self.backing {
            Backing::Standalone(_) => None,
            Backing::Delegated(host) => Some(host),
        }
    }

    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Standalone(items) => items.len(),
            Backing::Delegated(host) => host.read().item_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<T> {
        match &self.backing {
            Backing::Standalone(items) => items.get(index).cloned(),
            Backing::Delegated(host) => host.read().item_at(index),
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        match &self.backing {
            Backing::Standalone(items) => items.clone(),
            Backing::Delegated(host) => host.read().items(),
        }
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        match &self.backing {
            Backing::Standalone(items) => items.iter().position(|candidate| candidate == item),
            Backing::Delegated(host) => host.read().index_of(item),
        }
    }

    pub fn push(&mut self, item: T) -> VectorChange {
        let index = self.len();
        match &mut self.backing {
            Backing::Standalone(items) => items.push(item),
            Backing::Delegated(host) => host.write().insert_item(index, item),
        }
        VectorChange::inserted(index)
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<VectorChange> {
        let len = self.len();
        if index > len {
            return Err(TabError::IndexOutOfRange { index, len });
        }

        match &mut self.backing {
            Backing::Standalone(items) => items.insert(index, item),
            Backing::Delegated(host) => host.write().insert_item(index, item),
        }
        Ok(VectorChange::inserted(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<(T, VectorChange)> {
        let len = self.len();
        let removed = match &mut self.backing {
            Backing::Standalone(items) if index < items.len() => Some(items.remove(index)),
            Backing::Standalone(_) => None,
            Backing::Delegated(host) => host.write().remove_item(index),
        };

        removed
            .map(|item| (item, VectorChange::removed(index)))
            .ok_or(TabError::IndexOutOfRange { index, len })
    }

    /// Move every entry, in order, into the host list's storage and proxy to
    /// it from now on. Returns false when already attached.
    pub fn attach_to_host(&mut self, host: Shared<dyn HostList<T>>) -> bool {
        let items = match &mut self.backing {
            Backing::Standalone(items) => std::mem::take(items),
            Backing::Delegated(_) => {
                tracing::warn!("Tab collection already attached to a host list");
                return false;
            }
        };

        let count = items.len();
        {
            let mut list = host.write();
            for item in items {
                let end = list.item_count();
                list.insert_item(end, item);
            }
        }

        self.backing = Backing::Delegated(host);
        tracing::debug!(tab_count = count, "Tab collection attached to host list");

        true
    }
}

impl<T: TabEntry> Default for TabCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
