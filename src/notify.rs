use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Slots {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

impl Slots {
    fn get(&self, id: u64) -> Option<Callback> {
        self.callbacks
            .iter()
            .find(|(slot_id, _)| *slot_id == id)
            .map(|(_, cb)| cb.clone())
    }
}

/// A single-threaded notification source.
///
/// Callbacks run synchronously inside [`Notification::notify`], in the order
/// they subscribed. Cloning a `Notification` yields another handle to the same
/// subscriber list.
#[derive(Clone, Default)]
pub struct Notification {
    slots: Rc<RefCell<Slots>>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.callbacks.push((id, Rc::new(callback)));

        Subscription {
            slots: Rc::downgrade(&self.slots),
            id,
        }
    }

    pub fn notify(&self) {
        // Snapshot ids so callbacks may (un)subscribe while we deliver.
        let ids = self
            .slots
            .borrow()
            .callbacks
            .iter()
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();

        for id in ids {
            let callback = self.slots.borrow().get(id);
            if let Some(callback) = callback {
                callback();
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().callbacks.len()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a callback registered; unregisters it on drop.
#[must_use = "dropping a Subscription unregisters its callback"]
pub struct Subscription {
    slots: Weak<RefCell<Slots>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots
                .borrow_mut()
                .callbacks
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
