//! Component-set queries over the registry.
//!
//! A query names a *must-have* group of component types (a tuple, realized
//! through [`ComponentGroup`]) and an optional *must-not-have* set added
//! with [`Query::without`]. Running it yields, in ascending entity-id
//! order, one row per live entity that holds every must-have component and
//! none of the excluded ones, with a borrow of each must-have component.
//!
//! ## Execution model
//! 1. Every type in the group contributes its ascending
//!    [`entities_with`](crate::Registry::entities_with) list; the lists are
//!    intersected.
//! 2. Excluded types contribute the same lists, unioned.
//! 3. The difference of the two is the result id sequence; all three set
//!    operations are linear merges of sorted sequences.
//! 4. Each surviving id fetches its component borrows, which are guaranteed
//!    present by step 1.
//!
//! A group must name at least one component type (there is no nullary
//! tuple implementation), so a query with no positive constraints is
//! unrepresentable and the empty-projection rule holds by construction.

use std::marker::PhantomData;

use crate::engine::registry::Registry;
use crate::engine::types::EntityID;


/// A group of component types usable in [`Registry::query`] and
/// [`Registry::get_all`].
///
/// Implemented for tuples of up to eight component types. The group fixes
/// the shape of the returned rows: `Refs` borrows every member, `MaybeRefs`
/// carries one `Option` borrow per member.
pub trait ComponentGroup: 'static {
    /// One borrow per member type, all present.
    type Refs<'r>;

    /// One optional borrow per member type.
    type MaybeRefs<'r>;

    /// Borrows every member component of `entity`, or `None` when any
    /// member is missing.
    fn fetch<'r>(registry: &'r Registry, entity: EntityID) -> Option<Self::Refs<'r>>;

    /// Borrows each member component of `entity` independently.
    fn fetch_maybe<'r>(registry: &'r Registry, entity: EntityID) -> Self::MaybeRefs<'r>;

    /// The ascending live-entity list of every member type, in member order.
    fn candidate_lists(registry: &Registry) -> Vec<Vec<EntityID>>;
}

macro_rules! impl_component_group {
    ($($T:ident),+) => {
        impl<$($T: 'static),+> ComponentGroup for ($($T,)+) {
            type Refs<'r> = ($(&'r $T,)+);
            type MaybeRefs<'r> = ($(Option<&'r $T>,)+);

            fn fetch<'r>(registry: &'r Registry, entity: EntityID) -> Option<Self::Refs<'r>> {
                Some(($(registry.get::<$T>(entity)?,)+))
            }

            fn fetch_maybe<'r>(registry: &'r Registry, entity: EntityID) -> Self::MaybeRefs<'r> {
                ($(registry.get::<$T>(entity),)+)
            }

            fn candidate_lists(registry: &Registry) -> Vec<Vec<EntityID>> {
                vec![$(registry.entities_with::<$T>()),+]
            }
        }
    };
}

impl_component_group!(A);
impl_component_group!(A, B);
impl_component_group!(A, B, C);
impl_component_group!(A, B, C, D);
impl_component_group!(A, B, C, D, E);
impl_component_group!(A, B, C, D, E, F);
impl_component_group!(A, B, C, D, E, F, G);
impl_component_group!(A, B, C, D, E, F, G, H);

/// Intersection of two ascending id sequences.
fn intersect_sorted(a: &[EntityID], b: &[EntityID]) -> Vec<EntityID> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            out.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    out
}

/// Union of two ascending id sequences.
fn union_sorted(a: &[EntityID], b: &[EntityID]) -> Vec<EntityID> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            out.push(b[j]);
            j += 1;
        } else {
            out.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Elements of `a` absent from `b`, both ascending.
fn difference_sorted(a: &[EntityID], b: &[EntityID]) -> Vec<EntityID> {
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() {
        if j == b.len() || a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}

/// A prepared query: a must-have component group plus an accumulated
/// exclusion set.
///
/// Produced by [`Registry::query`]. The exclusion set is resolved eagerly
/// against the registry as [`without`](Self::without) is chained; running
/// the query performs the merges and fetches the rows.
pub struct Query<'r, G: ComponentGroup> {
    registry: &'r Registry,
    excluded: Vec<EntityID>,
    group: PhantomData<G>,
}

impl<'r, G: ComponentGroup> Query<'r, G> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self { registry, excluded: Vec::new(), group: PhantomData }
    }

    /// Excludes entities holding a `T` component from the result.
    pub fn without<T: 'static>(mut self) -> Self {
        let more = self.registry.entities_with::<T>();
        self.excluded = union_sorted(&self.excluded, &more);
        self
    }

    /// The matching entity ids, ascending.
    pub fn ids(&self) -> Vec<EntityID> {
        let mut lists = G::candidate_lists(self.registry).into_iter();
        let Some(first) = lists.next() else { return Vec::new(); };

        let matched = lists.fold(first, |acc, list| intersect_sorted(&acc, &list));
        difference_sorted(&matched, &self.excluded)
    }

    /// Runs the query, yielding `(entity, borrows)` rows in ascending
    /// entity-id order.
    ///
    /// ## Panics
    /// Panics if a must-have component vanishes between matching and
    /// fetching, which cannot happen through this API.
    pub fn run(&self) -> Vec<(EntityID, G::Refs<'r>)> {
        self.ids()
            .into_iter()
            .map(|entity| {
                let refs = G::fetch(self.registry, entity)
                    .expect("matched entity is missing a must-have component");
                (entity, refs)
            })
            .collect()
    }
}
