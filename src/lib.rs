//! # ECS Registry
//!
//! Sparse-set Entity-Component-System registry for games and simulations
//! that model world state as integer-keyed entities composed of orthogonal
//! data components.
//!
//! ## Design Goals
//! - O(1) bind / unbind / lookup with contiguous component storage
//! - Entity id recycling through an implicit in-array free-list
//! - One lazily created store per component type, purged uniformly on kill
//! - Sorted-merge queries over must-have / must-not-have component sets
//!
//! Components are plain user-defined value types; there is no registration
//! ceremony and no base-trait requirement beyond `'static`.
//!
//! ```
//! use ecs_registry::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Position { x: f32, y: f32 }
//! struct Frozen;
//!
//! let mut registry = Registry::new();
//! let entity = registry.make_entity();
//! registry.bind(entity, Position { x: 1.0, y: 2.0 }).unwrap();
//!
//! for (id, (position,)) in registry.query::<(Position,)>().without::<Frozen>().run() {
//!     assert_eq!(id, entity);
//!     assert_eq!(*position, Position { x: 1.0, y: 2.0 });
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]
#![deny(dead_code)]

pub mod engine;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::registry::Registry;

pub use engine::storage::{
    SparseSet,
    TypeErasedStore,
};

pub use engine::entity::Entities;

pub use engine::query::{
    ComponentGroup,
    Query,
};

pub use engine::error::{
    BindError,
    BindResult,
};

pub use engine::types::{
    EntityID,
    StoreID,
    NULL_ID,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude (Optional but recommended)
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used registry types.
///
/// Import with:
/// ```rust
/// use ecs_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Registry,
        SparseSet,
        Entities,
        Query,
        BindError,
        EntityID,
        NULL_ID,
    };
}
