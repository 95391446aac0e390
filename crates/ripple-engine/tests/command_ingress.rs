//! Commands queued between frames.

use proptest::prelude::*;
use ripple_core::{Command, GridCoord, IngressError, WaveParams};
use ripple_engine::{IngressQueue, WaveWorld, WorldConfig};

fn c(x: i32, y: i32) -> GridCoord {
    GridCoord::new(x, y)
}

#[test]
fn frame_applies_commands_before_stepping() {
    let mut world = WaveWorld::new(WorldConfig::new(16, 16)).unwrap();
    let mut queue = world.ingress_queue().unwrap();
    queue.push(Command::AddSource(c(8, 8))).unwrap();

    let m = world.frame(&mut queue).clone();
    assert_eq!(m.commands_applied, 1);
    // The source injected in the same frame it was queued.
    assert_eq!(m.injected_terms, 1);
    assert!(world.snapshot().amplitude(c(8, 8)).is_some_and(|a| a != 0.0));
}

#[test]
fn commands_apply_in_arrival_order() {
    let mut world = WaveWorld::new(WorldConfig::new(16, 16)).unwrap();
    let mut queue = world.ingress_queue().unwrap();
    let tx = queue.sender();
    tx.send(Command::DrawWall {
        start: c(1, 1),
        end: c(14, 1),
    })
    .unwrap();
    tx.send(Command::ClearWalls).unwrap();
    tx.send(Command::DrawWall {
        start: c(3, 3),
        end: c(3, 6),
    })
    .unwrap();
    tx.send(Command::SetWaveSpeed(0.2)).unwrap();
    tx.send(Command::SetWaveSpeed(0.4)).unwrap();

    world.frame(&mut queue);
    assert_eq!(world.wall_count(), 4);
    assert_eq!(world.params().wave_speed, 0.4);
}

#[test]
fn bad_resize_is_skipped_rest_applies() {
    let mut world = WaveWorld::new(WorldConfig::new(10, 10)).unwrap();
    let mut queue = world.ingress_queue().unwrap();
    queue.push(Command::Resize { nx: 0, ny: 10 }).unwrap();
    queue.push(Command::SetDamping(0.05)).unwrap();

    let m = world.frame(&mut queue).clone();
    assert_eq!(m.commands_applied, 1);
    assert_eq!(m.commands_rejected, 1);
    assert_eq!(world.grid().cell_count(), 100);
    assert_eq!(world.params(), WaveParams::new(0.5, 0.05));
}

#[test]
fn full_queue_rejects_until_drained() {
    let mut world = WaveWorld::new(WorldConfig::new(8, 8).with_ingress_capacity(3)).unwrap();
    let mut queue = world.ingress_queue().unwrap();
    let tx = queue.sender();
    for i in 0..3 {
        tx.send(Command::AddSource(c(i + 1, 1))).unwrap();
    }
    assert_eq!(tx.send(Command::ClearSources), Err(IngressError::QueueFull));

    world.frame(&mut queue);
    assert_eq!(world.sources().len(), 3);
    assert!(tx.send(Command::ClearSources).is_ok());
    world.frame(&mut queue);
    assert!(world.sources().is_empty());
}

#[test]
fn frame_without_commands_is_a_tick() {
    let mut a = WaveWorld::new(WorldConfig::new(12, 12)).unwrap();
    let mut b = WaveWorld::new(WorldConfig::new(12, 12)).unwrap();
    a.add_source(6, 6);
    b.add_source(6, 6);
    let mut queue = IngressQueue::new(4).unwrap();
    for _ in 0..15 {
        a.tick();
        b.frame(&mut queue);
    }
    assert_eq!(a.snapshot().current(), b.snapshot().current());
    assert_eq!(a.current_tick(), b.current_tick());
}

proptest! {
    #[test]
    fn queue_preserves_order(ops in prop::collection::vec(0u8..3, 1..40)) {
        let mut queue = IngressQueue::new(64).unwrap();
        let sent: Vec<Command> = ops
            .iter()
            .enumerate()
            .map(|(i, op)| match op {
                0 => Command::AddSource(c(i as i32, 0)),
                1 => Command::SetDamping(i as f32),
                _ => Command::ResetField,
            })
            .collect();
        for cmd in &sent {
            queue.push(*cmd).unwrap();
        }
        let drained = queue.drain();
        prop_assert_eq!(drained.as_slice(), sent.as_slice());
    }
}
