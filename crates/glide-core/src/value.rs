use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{DefaultKey, SlotMap};

pub type SubId = DefaultKey;

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A driving scalar (scroll offset, step index, progress percent) shared
/// between the control thread that writes it and the render path that reads
/// it.
///
/// Clones are handles to the same cell. Writes are last-writer-wins and
/// visible to every handle as soon as `set` returns; no history is kept.
/// Writing never re-renders anything by itself; subscribers are the only
/// push channel.
pub struct DrivingValue<T>(Arc<RwLock<Inner<T>>>);

struct Inner<T> {
    value: T,
    version: u64,
    subs: SlotMap<DefaultKey, Subscriber<T>>,
}

impl<T> Clone for DrivingValue<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DrivingValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.read();
        f.debug_struct("DrivingValue")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Default> Default for DrivingValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> DrivingValue<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(Inner {
            value,
            version: 0,
            subs: SlotMap::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.read().value.clone()
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.update(|slot| *slot = v);
    }

    /// Subscribers run after the lock is released with the value this write
    /// produced, so they may write to or unsubscribe from this same value.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let (value, subs) = {
            let mut inner = self.0.write();
            f(&mut inner.value);
            inner.version = inner.version.wrapping_add(1);
            let subs: Vec<Subscriber<T>> = inner.subs.values().cloned().collect();
            (inner.value.clone(), subs)
        };
        for s in subs {
            s(&value);
        }
    }

    /// Bumped on every write. Readers compare versions to skip recomputing
    /// when nothing changed since their last frame.
    pub fn version(&self) -> u64 {
        self.0.read().version
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> SubId {
        self.0.write().subs.insert(Arc::new(f))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.write().subs.remove(id).is_some()
    }
}

pub fn driving_value<T>(t: T) -> DrivingValue<T> {
    DrivingValue::new(t)
}
