//! Event sources with revocable subscriptions
//!
//! A `Subscription` removes its handler when dropped, so a subscription
//! taken on a part never outlives the owner's interest in that part.

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct Slot<H: ?Sized> {
    id: u64,
    handler: Arc<Mutex<H>>,
}

/// Handler table shared by both event source flavours
struct Slots<H: ?Sized> {
    entries: Arc<Mutex<Vec<Slot<H>>>>,
    next_id: AtomicU64,
}

impl<H: ?Sized + Send + 'static> Slots<H> {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(1),
        }
    }

    fn register(&self, handler: Arc<Mutex<H>>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push(Slot { id, handler });

        let entries = Arc::downgrade(&self.entries);
        Subscription {
            revoke: Some(Box::new(move || {
                if let Some(entries) = entries.upgrade() {
                    entries.lock().retain(|slot| slot.id != id);
                }
            })),
        }
    }

    /// Handlers in subscription order, taken without holding the table
    /// lock so handlers may subscribe or revoke while being invoked
    fn snapshot(&self) -> Vec<Arc<Mutex<H>>> {
        self.entries
            .lock()
            .iter()
            .map(|slot| Arc::clone(&slot.handler))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

pub struct EventSource<A> {
    slots: Slots<dyn FnMut(&A) + Send>,
}

impl<A: 'static> EventSource<A> {
    pub fn new() -> Self {
        Self {
            slots: Slots::new(),
        }
    }

    /// Register a handler; it stays registered while the returned
    /// `Subscription` is alive.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&A) + Send + 'static,
    {
        let handler: Arc<Mutex<dyn FnMut(&A) + Send>> = Arc::new(Mutex::new(handler));
        self.slots.register(handler)
    }

    /// Invoke every registered handler in subscription order.
    ///
    /// Handlers may subscribe or revoke while the event is being raised.
    /// A handler that re-raises the event it is handling is skipped for
    /// the nested raise.
    pub fn raise(&self, args: &A) {
        for handler in self.slots.snapshot() {
            if let Some(mut handler) = handler.try_lock() {
                (&mut *handler)(args);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.slots.len()
    }
}

impl<A: 'static> Default for EventSource<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for EventSource<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("handlers", &self.slots.entries.lock().len())
            .finish()
    }
}

/// Event source whose handlers can write back into the payload, for
/// notifications where a subscriber's answer flows back to the raiser
/// (accepting a drop, cancelling a drag).
///
/// Handlers run in subscription order and each sees the changes made by
/// the ones before it.
pub struct RoutedEventSource<A> {
    slots: Slots<dyn FnMut(&mut A) + Send>,
}

impl<A: 'static> RoutedEventSource<A> {
    pub fn new() -> Self {
        Self {
            slots: Slots::new(),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        let handler: Arc<Mutex<dyn FnMut(&mut A) + Send>> = Arc::new(Mutex::new(handler));
        self.slots.register(handler)
    }

    pub fn raise(&self, args: &mut A) {
        for handler in self.slots.snapshot() {
            if let Some(mut handler) = handler.try_lock() {
                (&mut *handler)(args);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.slots.len()
    }
}

impl<A: 'static> Default for RoutedEventSource<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for RoutedEventSource<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutedEventSource")
            .field("handlers", &self.slots.entries.lock().len())
            .finish()
    }
}

/// Registration of a handler on an `EventSource` or `RoutedEventSource`
#[must_use = "dropping a Subscription revokes its handler"]
pub struct Subscription {
    revoke: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Remove the handler now
    pub fn revoke(mut self) {
        if let Some(revoke) = self.revoke.take() {
            revoke();
        }
    }

    /// Keep the handler registered for the lifetime of the source
    pub fn detach(mut self) {
        self.revoke = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(revoke) = self.revoke.take() {
            revoke();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.revoke.is_some())
            .finish()
    }
}
