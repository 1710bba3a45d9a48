//! # Entity Lifecycle
//!
//! This module defines entity identity and the allocator that issues and
//! recycles entity ids.
//!
//! ## Purpose
//! Entities are lightweight integer ids with no payload of their own;
//! components attached through the registry carry all the data. This module
//! is responsible for:
//!
//! - Issuing fresh ids in ascending order
//! - Recycling killed ids without growing the slot array
//! - Answering liveness queries in O(1)
//!
//! ## Implicit Free-List
//! The allocator keeps a single array `slots`, indexed by entity id. One
//! reused field per slot encodes both states:
//!
//! - `slots[e] == e` — entity `e` is alive.
//! - otherwise — slot `e` is dead and `slots[e]` is the id of the next dead
//!   slot, with [`NULL_ID`] terminating the chain.
//!
//! `head` points at the most recently killed slot. Allocation pops the
//! head; killing pushes onto it, so recycling is LIFO: killing
//! `e1, e2, …, en` makes the next `n` allocations return `en, …, e1`.
//!
//! ## Invariants
//! - Every index of `slots` is either alive or a link on the free chain.
//! - The free chain is acyclic and its length equals the number of dead
//!   slots.
//! - No slot ever holds the id [`NULL_ID`] while alive.

use crate::engine::types::{EntityID, NULL_ID};


/// Entity allocator with in-array id recycling.
///
/// ## Design
/// - Fresh ids are the next unused index of the slot array.
/// - Killed ids chain through their own slot cells (see the module docs);
///   per-entity overhead is one id-sized word.
/// - A live counter is maintained alongside for O(1) population queries.
///
/// ## Concurrency
/// Not internally synchronized; mutation requires exclusive access, which
/// the borrow checker enforces.

pub struct Entities {
    slots: Vec<EntityID>,
    head: EntityID,
    live: usize,
}

impl Entities {
    /// Creates an allocator with no entities.
    pub fn new() -> Self {
        Self { slots: Vec::new(), head: NULL_ID, live: 0 }
    }

    /// Allocates an entity id.
    ///
    /// ## Behavior
    /// - Pops the most recently killed id off the free chain when one
    ///   exists; the recycled id is numerically identical to the killed one.
    /// - Otherwise appends a fresh slot and returns its index.
    ///
    /// ## Panics
    /// Panics when the id space is exhausted, i.e. a fresh slot would have
    /// to take the value [`NULL_ID`].
    pub fn make_entity(&mut self) -> EntityID {
        let id = if self.head == NULL_ID {
            assert!(
                (self.slots.len() as u64) < NULL_ID as u64,
                "entity id space exhausted ({} slots)",
                self.slots.len()
            );
            let id = self.slots.len() as EntityID;
            self.slots.push(id);
            id
        } else {
            let id = self.head;
            self.head = self.slots[id as usize];
            self.slots[id as usize] = id;
            id
        };

        self.live += 1;
        id
    }

    /// Returns `true` if `id` currently identifies a live entity.
    #[inline]
    pub fn alive(&self, id: EntityID) -> bool {
        (id as usize) < self.slots.len() && self.slots[id as usize] == id
    }

    /// Kills a live entity, making its id eligible for reuse.
    ///
    /// Dead or never-created ids are ignored. The slot is pushed onto the
    /// free chain, so the most recent kill is the first id recycled.
    pub fn kill_entity(&mut self, id: EntityID) {
        if !self.alive(id) { return; }

        self.slots[id as usize] = self.head;
        self.head = id;
        self.live -= 1;
    }

    /// Number of live entities.
    pub fn live_count(&self) -> usize { self.live }

    /// Total number of slots ever allocated, live or dead.
    pub fn slot_count(&self) -> usize { self.slots.len() }
}

impl Default for Entities {
    fn default() -> Self { Self::new() }
}
