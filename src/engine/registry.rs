use std::any::TypeId;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::engine::entity::Entities;
use crate::engine::error::{BindError, BindResult};
use crate::engine::query::{ComponentGroup, Query};
use crate::engine::storage::{SparseSet, TypeErasedStore};
use crate::engine::types::{EntityID, StoreID, STORE_CAP};


/// Central owner of entities and their components.
///
/// Holds one entity allocator and one sparse-set store per component type
/// ever bound. Stores are created lazily on the first `bind` of a type and
/// live for the registry's lifetime; killed entities are purged from every
/// store through the type-erased interface.
///
/// All mutation requires `&mut self`, so outstanding component borrows end
/// before the registry can change underneath them.
pub struct Registry {
    entities: Entities,
    stores: Vec<Box<dyn TypeErasedStore>>,
    store_map: HashMap<TypeId, StoreID>,
}

impl Registry {
    /// Creates a registry with no entities and no stores.
    pub fn new() -> Self {
        Self {
            entities: Entities::new(),
            stores: Vec::new(),
            store_map: HashMap::new(),
        }
    }

    #[inline]
    fn store<T: 'static>(&self) -> Option<&SparseSet<T>> {
        let &id = self.store_map.get(&TypeId::of::<T>())?;
        let store = self.stores[id as usize].as_any().downcast_ref::<SparseSet<T>>();
        debug_assert!(store.is_some(), "store map points at a store of a different type");
        store
    }

    #[inline]
    fn store_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        let &id = self.store_map.get(&TypeId::of::<T>())?;
        let store = self.stores[id as usize].as_any_mut().downcast_mut::<SparseSet<T>>();
        debug_assert!(store.is_some(), "store map points at a store of a different type");
        store
    }

    fn store_or_create<T: 'static>(&mut self) -> &mut SparseSet<T> {
        let id = match self.store_map.get(&TypeId::of::<T>()) {
            Some(&id) => id,
            None => {
                assert!(self.stores.len() < STORE_CAP, "component store capacity exhausted");
                let id = self.stores.len() as StoreID;
                self.store_map.insert(TypeId::of::<T>(), id);
                self.stores.push(Box::new(SparseSet::<T>::new()));
                debug!(
                    component = std::any::type_name::<T>(),
                    store = id,
                    "created component store"
                );
                id
            }
        };

        self.stores[id as usize]
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
            .expect("store map points at a store of a different type")
    }

    /// Allocates an entity id, recycling the most recently killed id first.
    ///
    /// ## Panics
    /// Panics when the id space is exhausted.
    pub fn make_entity(&mut self) -> EntityID {
        self.entities.make_entity()
    }

    /// Returns `true` if `entity` is alive.
    pub fn is_alive(&self, entity: EntityID) -> bool {
        self.entities.alive(entity)
    }

    /// Kills a live entity and drops all of its components.
    ///
    /// The id is marked dead first, then every registered store is purged
    /// in store-creation order. Dead or never-created ids are ignored.
    pub fn kill_entity(&mut self, entity: EntityID) {
        if !self.entities.alive(entity) { return; }

        self.entities.kill_entity(entity);
        trace!(entity, stores = self.stores.len(), "purging killed entity");
        for store in &mut self.stores {
            store.purge(entity);
        }
    }

    /// Returns `true` if `entity` has a `T` component.
    pub fn has<T: 'static>(&self, entity: EntityID) -> bool {
        self.store::<T>().is_some_and(|store| store.has(entity))
    }

    /// Returns a borrow of the `T` component of `entity`, if any.
    ///
    /// The borrow is invalidated by the next mutating registry call.
    pub fn get<T: 'static>(&self, entity: EntityID) -> Option<&T> {
        self.store::<T>()?.get(entity)
    }

    /// Binds `value` to a live entity, creating the `T` store on first use.
    ///
    /// ## Errors
    /// - [`BindError::DeadEntity`] when `entity` is not alive (the null id
    ///   is never alive).
    /// - [`BindError::InvalidKey`] surfaced unchanged from the store.
    ///
    /// A refused bind leaves the registry unchanged. Rebinding an already
    /// bound entity overwrites the stored value.
    pub fn bind<T: 'static>(&mut self, entity: EntityID, value: T) -> BindResult {
        if !self.entities.alive(entity) {
            return Err(BindError::DeadEntity);
        }
        self.store_or_create::<T>().bind(entity, value)
    }

    /// Binds the value produced by `make` to a live entity.
    ///
    /// Constructor-argument form of [`bind`](Self::bind); `make` is not
    /// invoked when the bind is refused.
    pub fn bind_with<T: 'static>(
        &mut self,
        entity: EntityID,
        make: impl FnOnce() -> T,
    ) -> BindResult {
        if !self.entities.alive(entity) {
            return Err(BindError::DeadEntity);
        }
        self.store_or_create::<T>().bind_with(entity, make)
    }

    /// Removes the `T` component of `entity` and transfers it to the caller.
    ///
    /// Succeeds independently of entity liveness; a killed entity has
    /// already been purged, so the result is absent in practice.
    pub fn unbind<T: 'static>(&mut self, entity: EntityID) -> Option<T> {
        self.store_mut::<T>()?.unbind(entity)
    }

    /// All live entities holding a `T` component, in ascending id order.
    pub fn entities_with<T: 'static>(&self) -> Vec<EntityID> {
        let Some(store) = self.store::<T>() else { return Vec::new(); };

        let mut ids: Vec<EntityID> = store
            .entities()
            .iter()
            .copied()
            .filter(|&entity| self.entities.alive(entity))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Componentwise lookup of a group of component types.
    ///
    /// Returns one `Option` borrow per requested type, present exactly for
    /// the components `entity` holds.
    pub fn get_all<G: ComponentGroup>(&self, entity: EntityID) -> G::MaybeRefs<'_> {
        G::fetch_maybe(self, entity)
    }

    /// Starts a query over entities holding every component in `G`.
    ///
    /// Chain [`Query::without`] to exclude component types, then run it.
    pub fn query<G: ComponentGroup>(&self) -> Query<'_, G> {
        Query::new(self)
    }

    /// Number of live entities.
    pub fn live_count(&self) -> usize {
        self.entities.live_count()
    }

    /// Number of component stores ever created.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }
}

impl Default for Registry {
    fn default() -> Self { Self::new() }
}
