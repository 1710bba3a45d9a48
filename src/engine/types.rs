//! Core identifier types and compile-time layout configuration.
//!
//! This module defines the numeric identifiers shared by every part of the
//! registry: entity ids, the reserved null sentinel, and store indices.
//!
//! ## Entity Id Width
//!
//! The entity id is an unsigned integer whose width is selected at compile
//! time:
//!
//! - default: 32 bits (`u32`),
//! - with the `wide-id` cargo feature: 64 bits (`u64`).
//!
//! One value of the id space is reserved as [`NULL_ID`], the all-ones
//! pattern. No live entity may ever hold this value, which caps the live
//! population at `2^W - 1` for a width of `W` bits.
//!
//! The same id type doubles as the cell type of sparse lookup arrays, where
//! a cell holds either [`NULL_ID`] or a dense index. Keeping both roles in
//! one type means a sparse cell is exactly one word per entity.
//!
//! All width choices are validated with static assertions below.

/// Bit-width type used for compile-time layout checks.
pub type Bits = u8;

/// Unsigned integer identifying an entity slot.
///
/// Plain value; copying or comparing an id never touches the registry.
#[cfg(not(feature = "wide-id"))]
pub type EntityID = u32;

/// Unsigned integer identifying an entity slot.
///
/// Plain value; copying or comparing an id never touches the registry.
#[cfg(feature = "wide-id")]
pub type EntityID = u64;

/// Total number of bits in an [`EntityID`].
#[cfg(not(feature = "wide-id"))]
pub const ENTITY_BITS: Bits = 32;

/// Total number of bits in an [`EntityID`].
#[cfg(feature = "wide-id")]
pub const ENTITY_BITS: Bits = 64;

/// Reserved sentinel id: the maximum representable [`EntityID`].
///
/// Marks empty sparse cells, terminates the free chain inside the entity
/// array, and is rejected as a bind key. Never identifies a live entity.
pub const NULL_ID: EntityID = EntityID::MAX;

/// Index of a component store inside the registry.
pub type StoreID = u16;

/// Maximum number of distinct component stores a registry may hold.
pub const STORE_CAP: usize = StoreID::MAX as usize;

const _: [(); 1] = [(); ((ENTITY_BITS as u32) == EntityID::BITS) as usize];
const _: [(); 1] = [(); (NULL_ID.count_ones() == EntityID::BITS) as usize];
const _: [(); 1] = [(); (STORE_CAP > 0) as usize];
