//! Scoped locking for lists shared between threads.
//!
//! The engine itself is unsynchronised. [`LockedPoolList`] pairs a list
//! with a spin lock so every access goes through a guard that releases on
//! drop, including when the guarded operation returns an error.

use spin::{Mutex, MutexGuard};
use slotlist_core::Node;

use crate::list::PoolList;

/// A [`PoolList`] behind a spin lock.
pub struct LockedPoolList<'a, N: Node> {
    inner: Mutex<PoolList<'a, N>>,
}

impl<'a, N: Node> LockedPoolList<'a, N> {
    /// Take ownership of `list`.
    pub fn new(list: PoolList<'a, N>) -> Self {
        Self {
            inner: Mutex::new(list),
        }
    }

    /// Acquire the lock, spinning until it is free.
    pub fn lock(&self) -> MutexGuard<'_, PoolList<'a, N>> {
        self.inner.lock()
    }

    /// Acquire the lock if nobody holds it.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, PoolList<'a, N>>> {
        self.inner.try_lock()
    }

    /// Run `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&mut PoolList<'a, N>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Access the list without locking; `&mut self` proves exclusivity.
    pub fn get_mut(&mut self) -> &mut PoolList<'a, N> {
        self.inner.get_mut()
    }

    /// Release the list.
    pub fn into_inner(self) -> PoolList<'a, N> {
        self.inner.into_inner()
    }
}

impl<'a, N: Node> From<PoolList<'a, N>> for LockedPoolList<'a, N> {
    fn from(list: PoolList<'a, N>) -> Self {
        Self::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotlist_core::{ByteNode, ListError};

    use crate::slot::Slot;

    #[test]
    fn guard_releases_on_error_path() {
        let mut storage = Slot::<ByteNode>::array::<1>();
        let shared = LockedPoolList::new(PoolList::new(&mut storage).unwrap());

        assert_eq!(shared.with(|l| l.remove_first()), Err(ListError::EmptyList));
        assert!(shared.try_lock().is_some());

        shared.with(|l| l.append(1)).unwrap();
        assert_eq!(
            shared.with(|l| l.append(2)),
            Err(ListError::PoolExhausted { capacity: 1 })
        );
        assert!(shared.try_lock().is_some());
    }

    #[test]
    fn try_lock_fails_while_held() {
        let mut storage = Slot::<ByteNode>::array::<1>();
        let shared = LockedPoolList::from(PoolList::new(&mut storage).unwrap());
        let guard = shared.lock();
        assert!(shared.try_lock().is_none());
        drop(guard);
        assert!(shared.try_lock().is_some());
    }

    #[test]
    fn concurrent_appends_are_serialised() {
        let mut storage = Slot::<ByteNode>::array::<64>();
        let shared = LockedPoolList::new(PoolList::new(&mut storage).unwrap());

        std::thread::scope(|s| {
            for t in 0..4u8 {
                let shared = &shared;
                s.spawn(move || {
                    for i in 0..16u8 {
                        shared.with(|l| l.append(t * 16 + i)).unwrap();
                    }
                });
            }
        });

        let mut shared = shared;
        let list = shared.get_mut();
        assert_eq!(list.len(), 64);
        assert!(list.is_full());
        let mut seen: Vec<u8> = list.iter().map(|(_, n)| n.data).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<u8>>());
    }
}
