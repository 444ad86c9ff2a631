use criterion::{criterion_group, criterion_main, Criterion, black_box};

use voxedit::block::{id, Block};
use voxedit::core::IVec3;
use voxedit::region::CuboidRegion;
use voxedit::world::MemoryWorld;
use voxedit::EditSession;

fn bench_sphere_filled_16(c: &mut Criterion) {
    c.bench_function("sphere_filled_16", |b| {
        b.iter(|| {
            let mut world = MemoryWorld::new(127);
            let mut session = EditSession::new(&mut world, None);
            session
                .make_sphere(IVec3::new(0, 64, 0), &mut Block::of(id::STONE), black_box(16.0), true)
                .unwrap()
        });
    });
}

fn bench_sphere_hollow_32(c: &mut Criterion) {
    c.bench_function("sphere_hollow_32", |b| {
        b.iter(|| {
            let mut world = MemoryWorld::new(127);
            let mut session = EditSession::new(&mut world, None);
            session
                .make_sphere(IVec3::new(0, 64, 0), &mut Block::of(id::STONE), black_box(32.0), false)
                .unwrap()
        });
    });
}

fn bench_queue_flush(c: &mut Criterion) {
    let region = CuboidRegion::new(IVec3::new(0, 1, 0), IVec3::new(31, 1, 31));
    let floor = CuboidRegion::new(IVec3::new(0, 0, 0), IVec3::new(31, 0, 31));

    c.bench_function("queue_flush_torches_32x32", |b| {
        b.iter(|| {
            let mut world = MemoryWorld::new(127);
            let mut session = EditSession::new(&mut world, None);
            session.enable_queue();
            session.set_blocks(&floor, &mut Block::of(id::STONE)).unwrap();
            session.set_blocks(&region, &mut Block::new(id::TORCH, 5)).unwrap();
            session.flush_queue();
            black_box(session.len())
        });
    });
}

fn bench_undo(c: &mut Criterion) {
    let region = CuboidRegion::new(IVec3::new(0, 0, 0), IVec3::new(31, 15, 31));

    c.bench_function("undo_16k", |b| {
        b.iter(|| {
            let mut world = MemoryWorld::new(127);
            let change_set = {
                let mut session = EditSession::new(&mut world, None);
                session.set_blocks(&region, &mut Block::of(id::DIRT)).unwrap();
                session.into_change_set()
            };
            change_set.undo(&mut world, None);
            black_box(world.len())
        });
    });
}

criterion_group!(
    benches,
    bench_sphere_filled_16,
    bench_sphere_hollow_32,
    bench_queue_flush,
    bench_undo,
);
criterion_main!(benches);
