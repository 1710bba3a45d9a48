//! Sparse-set component storage.
//!
//! One [`SparseSet`] exists per component type and maps entity ids to
//! component values with O(1) bind, lookup, and unbind. Values live in a
//! densely packed array so traversal touches contiguous memory; the price
//! is a sparse index array sized by the largest id ever bound.
//!
//! Deletion is swap-remove: the removed slot is overwritten by the last
//! element and the tail is popped, so the dense arrays never grow holes.
//!
//! [`TypeErasedStore`] is the type-independent face of a set. The registry
//! holds its stores behind this trait so a killed entity can be purged from
//! every store without knowing any component type, and recovers the typed
//! set through a checked downcast.

use std::any::{type_name, Any};

use crate::engine::types::{EntityID, NULL_ID};
use crate::engine::error::{BindError, BindResult};


/// Type-independent handle to a component store.
///
/// Exposes the operations the registry needs across all stores uniformly:
/// purging a killed entity, and enough metadata for diagnostics. The typed
/// [`SparseSet`] is recovered via `as_any`/`as_any_mut`.
pub trait TypeErasedStore: Any {
    /// Drops the component bound to `entity`, if any. Absent is a no-op.
    fn purge(&mut self, entity: EntityID);

    /// Number of entities currently bound in this store.
    fn len(&self) -> usize;

    /// Returns `true` if no entity is bound in this store.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Name of the stored component type, for diagnostics.
    fn element_type_name(&self) -> &'static str;

    /// Upcast for checked typed retrieval.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for checked typed retrieval.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Sparse-set store associating entity ids with values of `T`.
///
/// Invariant:
/// - `dense.len() == data.len()`.
/// - For every `i < dense.len()`: `sparse[dense[i]] == i` and `data[i]` is
///   the value bound to `dense[i]`.
/// - No id occurs twice in `dense`, and `NULL_ID` never occurs in `dense`.
/// - Every `sparse` cell not reachable from `dense` holds `NULL_ID`.
///
/// The sparse array grows monotonically to cover observed keys and is never
/// shrunk. Growth happens before any association is recorded, so a failed
/// growth leaves the set unchanged.
pub struct SparseSet<T> {
    sparse: Vec<EntityID>,
    dense: Vec<EntityID>,
    data: Vec<T>,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self { sparse: Vec::new(), dense: Vec::new(), data: Vec::new() }
    }
}

impl<T> SparseSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self { Self::default() }

    #[inline]
    fn out_of_bounds(&self, key: EntityID) -> bool {
        key as usize >= self.sparse.len()
    }

    /// Returns `true` if `key` has a value bound to it.
    #[inline]
    pub fn has(&self, key: EntityID) -> bool {
        key != NULL_ID && !self.out_of_bounds(key) && self.sparse[key as usize] != NULL_ID
    }

    /// Returns a borrow of the value bound to `key`, if any.
    ///
    /// The borrow is valid until the next mutating operation on this set.
    pub fn get(&self, key: EntityID) -> Option<&T> {
        if !self.has(key) { return None; }
        Some(&self.data[self.sparse[key as usize] as usize])
    }

    /// Binds `value` to `key`, constructing the association in place.
    ///
    /// ## Behavior
    /// - Rejects the null id with [`BindError::InvalidKey`].
    /// - Grows the sparse array to cover `key`, filling new cells with the
    ///   null id.
    /// - A fresh key is appended to the dense arrays; a key that is already
    ///   bound has its slot overwritten with `value` (an update, not an
    ///   in-place mutation), leaving the dense length unchanged.
    ///
    /// The set becomes the sole owner of `value`. All storage growth occurs
    /// before the association is published.
    pub fn bind(&mut self, key: EntityID, value: T) -> BindResult {
        if key == NULL_ID {
            return Err(BindError::InvalidKey);
        }

        if self.out_of_bounds(key) {
            self.sparse.resize(key as usize + 1, NULL_ID);
        }

        let cell = self.sparse[key as usize];
        if cell == NULL_ID {
            self.dense.reserve(1);
            self.data.reserve(1);
            self.dense.push(key);
            self.data.push(value);
            self.sparse[key as usize] = (self.dense.len() - 1) as EntityID;
        } else {
            self.data[cell as usize] = value;
        }

        Ok(())
    }

    /// Binds the value produced by `make` to `key`.
    ///
    /// Constructor-argument form of [`bind`](Self::bind): the closure runs
    /// exactly once and its result is owned solely by the set. `make` is not
    /// invoked when the key is rejected.
    pub fn bind_with(&mut self, key: EntityID, make: impl FnOnce() -> T) -> BindResult {
        if key == NULL_ID {
            return Err(BindError::InvalidKey);
        }
        self.bind(key, make())
    }

    /// Removes the association for `key` and returns its value, if any.
    ///
    /// ## Behavior
    /// Swap-remove: the removed slot is overwritten by the back element,
    /// whose sparse cell is re-pointed before the tail is popped. The
    /// ordering is safe when the removed element is itself the back element.
    pub fn unbind(&mut self, key: EntityID) -> Option<T> {
        if !self.has(key) { return None; }

        let index = self.sparse[key as usize] as usize;
        let last = self.dense.len() - 1;

        self.dense.swap(index, last);
        self.data.swap(index, last);

        let moved = self.dense[index];
        self.sparse[moved as usize] = index as EntityID;
        self.sparse[key as usize] = NULL_ID;

        self.dense.pop();
        self.data.pop()
    }

    /// Number of bound entities.
    pub fn len(&self) -> usize { self.dense.len() }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool { self.dense.is_empty() }

    /// The bound entity ids, in dense (insertion-modulo-swap) order.
    pub fn entities(&self) -> &[EntityID] { &self.dense }

    /// The bound values, parallel to [`entities`](Self::entities).
    pub fn values(&self) -> &[T] { &self.data }

    /// Drops every association.
    ///
    /// The sparse array keeps its allocation; only the referenced cells are
    /// reset to the null id.
    pub fn clear(&mut self) {
        for &id in &self.dense {
            self.sparse[id as usize] = NULL_ID;
        }
        self.dense.clear();
        self.data.clear();
    }

    /// Iterates over `(entity, value)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityID, &T)> {
        self.dense.iter().copied().zip(self.data.iter())
    }
}

impl<T: 'static> TypeErasedStore for SparseSet<T> {
    fn purge(&mut self, entity: EntityID) {
        let _ = self.unbind(entity);
    }

    fn len(&self) -> usize { self.dense.len() }

    fn element_type_name(&self) -> &'static str { type_name::<T>() }

    fn as_any(&self) -> &dyn Any { self }

    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}
