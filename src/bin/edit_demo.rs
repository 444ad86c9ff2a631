//! Edit demo: runs a few operations against an in-memory world and undoes them.
//!
//! Usage: cargo run --bin edit_demo -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Load an EditConfig from JSON (default: built-in defaults)
//!   --radius <R>      Sphere radius (default: 6.0)
//!   --seed <SEED>     Seed for tree and pumpkin placement (default: 12345)

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use voxedit::block::{id, Block};
use voxedit::core::{EditConfig, IVec3, Result};
use voxedit::ops::PineTreeGenerator;
use voxedit::region::CuboidRegion;
use voxedit::world::MemoryWorld;
use voxedit::{Clipboard, EditSession, History};

fn main() -> Result<()> {
    voxedit::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_str_arg(&args, "--config") {
        Some(path) => EditConfig::load(&PathBuf::from(path))?,
        None => EditConfig::default(),
    };
    let radius = parse_f64_arg(&args, "--radius").unwrap_or(6.0);
    let seed = parse_u64_arg(&args, "--seed").unwrap_or(12345);
    config.check_radius(radius)?;

    println!("=== Voxedit Demo ===");
    println!("Radius: {}", radius);
    println!("Seed:   {}", seed);
    println!();

    let mut world = MemoryWorld::new(127);
    let mut history = History::from_config(&config);
    let mut rng = StdRng::seed_from_u64(seed);

    // Ground: stone under a grass layer
    {
        let mut session = EditSession::from_config(&mut world, &config);
        let ground = CuboidRegion::new(IVec3::new(-32, 0, -32), IVec3::new(32, 3, 32));
        let placed = session.set_blocks(&ground, &mut Block::of(id::STONE))?;
        let natural = session.naturalize(&ground)?;
        println!("Ground: {} blocks placed, {} naturalized", placed, natural);
        history.remember(session.into_change_set());
    }

    {
        let mut session = EditSession::from_config(&mut world, &config);
        let center = IVec3::new(0, 4 + radius.ceil() as i32, 0);
        let sphere = session.make_sphere(center, &mut Block::of(id::GLASS), radius, false)?;
        let mut generator = PineTreeGenerator::new(seed);
        let trees = session.make_forest(IVec3::new(0, 4, 0), 24, 0.02, &mut generator, &mut rng)?;
        let pumpkins = session.make_pumpkin_patches(IVec3::new(0, 4, 0), 24, &mut rng)?;
        println!("Sphere: {} blocks", sphere);
        println!("Trees:  {}", trees);
        println!("Pumpkin blocks: {}", pumpkins);
        history.remember(session.into_change_set());
    }

    {
        let region = CuboidRegion::new(IVec3::new(-4, 0, -4), IVec3::new(4, 3, 4));
        let mut clipboard = Clipboard::for_region(&region, IVec3::ZERO);
        let mut session = EditSession::from_config(&mut world, &config);
        clipboard.copy(&session);
        clipboard.rotate_2d(90);
        let pasted = clipboard.paste(&mut session, IVec3::new(0, 40, 0), true, false)?;
        println!("Pasted: {} blocks", pasted);
        for count in clipboard.block_distribution().iter().rev() {
            println!("  {:>5} x type {}", count.amount, count.id);
        }
        history.remember(session.into_change_set());
    }

    println!();
    println!("World holds {} blocks across {} history entries", world.len(), history.len());
    while let Some(change_set) = history.undo(&mut world, None) {
        println!("Undid {} changes", change_set.len());
    }
    println!("World holds {} blocks after undo", world.len());

    Ok(())
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
