//! Explicitly scoped string interning.
//!
//! Equal byte strings interned through the same [`StringInterner`] share one
//! allocation. The pool is an ordinary value: a session creates one, shares it
//! through a [`SharedInterner`], and drops it when done.

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An interned name.
///
/// Cloning is a reference-count bump. Equality compares contents, so a name
/// interned before a [`StringInterner::deintern`] still equals one interned
/// after it, even though they no longer share storage.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<[u8]>);

impl Name {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether two names share one allocation.
    #[inline]
    pub fn ptr_eq(a: &Name, b: &Name) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for Name {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl std::borrow::Borrow<[u8]> for Name {
    #[inline]
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Pool of canonical name allocations.
///
/// # Thread Safety
/// Uses a `RwLock` so lookups of already-interned names only take a read lock.
#[derive(Default)]
pub struct StringInterner {
    pool: RwLock<FxHashSet<Arc<[u8]>>>,
}

/// Interner shared between the compiler and the runtime of one session.
pub type SharedInterner = Arc<StringInterner>;

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical name for `text`, adding it to the pool if needed.
    pub fn intern(&self, text: &[u8]) -> Name {
        // Fast path: already interned
        if let Some(existing) = self.pool.read().get(text) {
            return Name(Arc::clone(existing));
        }

        let mut pool = self.pool.write();
        // Double-check after acquiring write lock
        if let Some(existing) = pool.get(text) {
            return Name(Arc::clone(existing));
        }
        let fresh: Arc<[u8]> = Arc::from(text);
        pool.insert(Arc::clone(&fresh));
        Name(fresh)
    }

    /// Drop `text` from the pool. Returns whether it was present.
    ///
    /// Names handed out earlier stay valid; the next `intern` of the same
    /// text allocates a new canonical copy.
    pub fn deintern(&self, text: &[u8]) -> bool {
        self.pool.write().remove(text)
    }

    /// Drop every pooled name.
    pub fn deintern_all(&self) {
        self.pool.write().clear();
    }

    pub fn contains(&self, text: &[u8]) -> bool {
        self.pool.read().contains(text)
    }

    pub fn len(&self) -> usize {
        self.pool.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.read().is_empty()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}
