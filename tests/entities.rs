use std::collections::HashSet;

use ecs_registry::engine::entity::Entities;
use ecs_registry::engine::types::{EntityID, NULL_ID};

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }
}

#[test]
fn fresh_ids_ascend_from_zero() {
    let mut entities = Entities::new();

    assert_eq!(entities.make_entity(), 0);
    assert_eq!(entities.make_entity(), 1);
    assert_eq!(entities.make_entity(), 2);
    assert_eq!(entities.live_count(), 3);
    assert_eq!(entities.slot_count(), 3);
}

#[test]
fn alive_tracks_lifecycle() {
    let mut entities = Entities::new();

    let id = entities.make_entity();
    assert!(entities.alive(id));

    entities.kill_entity(id);
    assert!(!entities.alive(id));
    assert_eq!(entities.live_count(), 0);
}

#[test]
fn never_created_ids_are_dead() {
    let entities = Entities::new();

    assert!(!entities.alive(0));
    assert!(!entities.alive(42));
    assert!(!entities.alive(NULL_ID));
}

#[test]
fn killing_dead_ids_is_a_no_op() {
    let mut entities = Entities::new();

    let id = entities.make_entity();
    entities.kill_entity(id);
    entities.kill_entity(id);
    entities.kill_entity(99);

    assert_eq!(entities.live_count(), 0);

    // The free chain must still be intact: exactly one id to recycle.
    assert_eq!(entities.make_entity(), id);
    assert_eq!(entities.make_entity(), 1);
}

#[test]
fn recycling_is_lifo() {
    let mut entities = Entities::new();

    let ids: Vec<EntityID> = (0..4).map(|_| entities.make_entity()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    entities.kill_entity(2);
    entities.kill_entity(0);
    entities.kill_entity(1);
    entities.kill_entity(3);

    assert_eq!(entities.make_entity(), 3);
    assert_eq!(entities.make_entity(), 1);
    assert_eq!(entities.make_entity(), 0);
    assert_eq!(entities.make_entity(), 2);

    // The pool is drained, so the next id is fresh.
    assert_eq!(entities.make_entity(), 4);
    assert_eq!(entities.slot_count(), 5);
}

#[test]
fn recycled_ids_reverse_any_kill_order() {
    let mut entities = Entities::new();
    let mut rng = XorShift(0xDEAD_BEEF_CAFE_F00D);

    let count = 64;
    for _ in 0..count {
        entities.make_entity();
    }

    let mut killed: Vec<EntityID> = (0..count).collect();
    // Fisher-Yates driven by the test stream.
    for i in (1..killed.len()).rev() {
        let j = (rng.next() % (i as u64 + 1)) as usize;
        killed.swap(i, j);
    }

    for &id in &killed {
        entities.kill_entity(id);
    }

    let recycled: Vec<EntityID> = (0..count).map(|_| entities.make_entity()).collect();
    let expected: Vec<EntityID> = killed.iter().rev().copied().collect();
    assert_eq!(recycled, expected);
}

// Random make/kill interleavings against a shadow set: the live population
// must always equal the created ids minus the killed ones.
#[test]
fn liveness_matches_shadow_model() {
    let mut entities = Entities::new();
    let mut live: HashSet<EntityID> = HashSet::new();
    let mut rng = XorShift(0x1234_5678_9ABC_DEF1);

    for step in 0..20_000u64 {
        if rng.next() % 2 == 0 || live.is_empty() {
            let id = entities.make_entity();
            assert!(live.insert(id), "step {step}: id {id} recycled while live");
        } else {
            let victim = {
                let index = (rng.next() as usize) % live.len();
                *live.iter().nth(index).unwrap()
            };
            entities.kill_entity(victim);
            live.remove(&victim);
        }

        assert_eq!(entities.live_count(), live.len(), "step {step}");
    }

    for slot in 0..entities.slot_count() as EntityID {
        assert_eq!(entities.alive(slot), live.contains(&slot));
    }
}
