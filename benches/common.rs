#![allow(dead_code)]

use ecs_registry::{EntityID, Registry};

pub const ENTITIES_SMALL: usize = 10_000;
pub const ENTITIES_MED: usize = 100_000;

#[derive(Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Clone, Copy)]
pub struct Health {
    pub value: u32,
}

/// Populates a registry with `count` entities: every entity gets a
/// `Position`, every second a `Velocity`, every third a `Health`.
pub fn populate(registry: &mut Registry, count: usize) -> Vec<EntityID> {
    let mut ids = Vec::with_capacity(count);

    for index in 0..count {
        let entity = registry.make_entity();
        ids.push(entity);

        registry
            .bind(entity, Position { x: index as f32, y: 0.0 })
            .unwrap();
        if index % 2 == 0 {
            registry.bind(entity, Velocity { dx: 1.0, dy: 1.0 }).unwrap();
        }
        if index % 3 == 0 {
            registry.bind(entity, Health { value: 100 }).unwrap();
        }
    }

    ids
}

pub fn make_world(count: usize) -> Registry {
    let mut registry = Registry::new();
    populate(&mut registry, count);
    registry
}
