//! Organic structures: forests and pumpkin patches.
//!
//! Randomness always comes from a caller-owned generator so runs can be
//! reproduced from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::block::{id, Block};
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::math::Aabb;

/// Chance per column of starting a pumpkin patch.
const PUMPKIN_PATCH_DENSITY: f64 = 0.02;

/// How far down a forest looks for ground under each column.
const FOREST_GROUND_SEARCH: i32 = 10;

/// Grows a single tree.
pub trait TreeGenerator {
    /// Grow a tree whose trunk starts at `pos`. Returns whether one was placed.
    fn generate(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool>;
}

/// Narrow conifer: a bare trunk topped by a log spire wrapped in leaves.
#[derive(Clone, Debug)]
pub struct PineTreeGenerator {
    rng: StdRng,
}

impl PineTreeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TreeGenerator for PineTreeGenerator {
    fn generate(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        let trunk_height = self.rng.gen_range(3..5);
        let height = self.rng.gen_range(8..13);
        let log = Block::of(id::LOG);
        let leaves = Block::of(id::LEAVES);

        for i in 0..trunk_height {
            if !session.set_block_if_air(pos + IVec3::new(0, i, 0), &log)? {
                return Ok(i > 0);
            }
        }

        let base = pos + IVec3::new(0, trunk_height, 0);
        for i in 0..height {
            session.set_block_if_air(base + IVec3::new(0, i, 0), &log)?;

            // Thinner at the bottom and top layers
            let chance = if i == 0 || i == height - 1 { 0.6 } else { 1.0 };
            for (dx, dz) in [(-1, 0), (1, 0), (0, -1), (0, 1), (1, 1), (-1, 1), (1, -1), (-1, -1)] {
                session.set_chance_block_if_air(base + IVec3::new(dx, i, dz), &leaves, chance, &mut self.rng)?;
            }

            if i != 0 && i != height - 1 {
                for j in -2..=2 {
                    for offset in [IVec3::new(-2, i, j), IVec3::new(2, i, j), IVec3::new(j, i, -2), IVec3::new(j, i, 2)] {
                        session.set_chance_block_if_air(base + offset, &leaves, 0.6, &mut self.rng)?;
                    }
                }
            }
        }

        session.set_block_if_air(base + IVec3::new(0, height, 0), &leaves)?;
        Ok(true)
    }
}

impl EditSession<'_> {
    /// Plant trees on grass and dirt in a square around `pos`.
    ///
    /// Each air column at `pos.y` gets a tree with probability `density`,
    /// rooted on the first grass or dirt within ten blocks below. Snow on the
    /// way down is cleared. Returns the number of trees grown.
    pub fn make_forest<R: Rng + ?Sized>(
        &mut self,
        pos: IVec3,
        size: i32,
        density: f64,
        generator: &mut dyn TreeGenerator,
        rng: &mut R,
    ) -> Result<usize> {
        if size < 0 {
            return Err(Error::invalid("size must be non-negative"));
        }

        let mut trees = 0;
        for x in pos.x - size..=pos.x + size {
            for z in pos.z - size..=pos.z + size {
                if !self.get_block(IVec3::new(x, pos.y, z)).is_air() {
                    continue;
                }
                if rng.r#gen::<f64>() >= density {
                    continue;
                }

                for y in (pos.y - FOREST_GROUND_SEARCH..=pos.y).rev() {
                    let ground = IVec3::new(x, y, z);
                    match self.block_type(ground) {
                        id::GRASS | id::DIRT => {
                            if generator.generate(self, ground + IVec3::Y)? {
                                trees += 1;
                            }
                            break;
                        }
                        id::SNOW => {
                            self.set_block(ground, &Block::AIR)?;
                        }
                        id::AIR => {}
                        _ => break,
                    }
                }
            }
        }

        Ok(trees)
    }

    /// Scatter pumpkin patches over grass in a square around `pos`.
    /// Returns the number of patches planted.
    pub fn make_pumpkin_patches<R: Rng + ?Sized>(&mut self, pos: IVec3, apothem: i32, rng: &mut R) -> Result<usize> {
        if apothem < 0 {
            return Err(Error::invalid("apothem must be non-negative"));
        }

        let bounds = Aabb::new(pos + IVec3::new(-apothem, -5, -apothem), pos + IVec3::new(apothem, 10, apothem));
        let Some(bounds) = self.clamp_to_world(bounds) else {
            return Ok(0);
        };

        let mut patches = 0;
        for x in bounds.min.x..=bounds.max.x {
            for z in bounds.min.z..=bounds.max.z {
                if rng.r#gen::<f64>() > PUMPKIN_PATCH_DENSITY {
                    continue;
                }
                let ground = (bounds.min.y..=bounds.max.y)
                    .rev()
                    .map(|y| IVec3::new(x, y, z))
                    .find(|p| !self.get_block(*p).is_air());
                if let Some(ground) = ground {
                    if self.place_pumpkin_patch(ground, rng)? {
                        patches += 1;
                    }
                }
            }
        }

        Ok(patches)
    }

    /// Leaf cluster with pumpkins, rooted on grass at or above `pos`.
    fn place_pumpkin_patch<R: Rng + ?Sized>(&mut self, pos: IVec3, rng: &mut R) -> Result<bool> {
        let pos = if self.get_block(pos).is_air() { pos } else { pos + IVec3::Y };
        if self.block_type(pos - IVec3::Y) != id::GRASS {
            return Ok(false);
        }

        self.set_block_if_air(pos, &Block::of(id::LEAVES))?;
        for dir in [IVec3::Z, IVec3::NEG_Z, IVec3::X, IVec3::NEG_X] {
            self.place_vine(pos, pos + dir, rng)?;
        }
        Ok(true)
    }

    /// One step of a creeping leaf vine, maybe branching, with a pumpkin
    /// and sometimes a log beside it.
    fn place_vine<R: Rng + ?Sized>(&mut self, base: IVec3, pos: IVec3, rng: &mut R) -> Result<()> {
        if (pos - base).as_dvec3().length() > 4.0 || !self.get_block(pos).is_air() {
            return Ok(());
        }

        // Settle up to two blocks down into air
        let mut pos = pos;
        for _ in 0..2 {
            if self.get_block(pos - IVec3::Y).is_air() {
                pos -= IVec3::Y;
            } else {
                break;
            }
        }

        self.set_block_if_air(pos, &Block::of(id::LEAVES))?;

        let turn = rng.gen_range(0..4);
        let h = rng.gen_range(-1..=1);
        let (branch, log_at, plant_at) = match turn {
            0 => (IVec3::new(1, 0, 0), IVec3::new(1, h, -1), IVec3::new(0, 0, -1)),
            1 => (IVec3::new(0, 0, 1), IVec3::new(1, h, 0), IVec3::new(1, 0, 1)),
            2 => (IVec3::new(0, 0, -1), IVec3::new(-1, h, 0), IVec3::new(-1, 0, 1)),
            _ => (IVec3::new(-1, 0, 0), IVec3::new(-1, h, -1), IVec3::new(-1, 0, -1)),
        };

        if rng.r#gen::<bool>() {
            self.place_vine(base, pos + branch, rng)?;
        }
        if rng.r#gen::<bool>() {
            self.set_block_if_air(pos + log_at, &Block::of(id::LOG))?;
        }
        let pumpkin = Block::new(id::PUMPKIN, rng.gen_range(0..4));
        self.set_block_if_air(pos + plant_at, &pumpkin)?;

        Ok(())
    }
}
