//! Consumable color pool backed by the nearest-neighbor tree
//!
//! Every color the image will ever use is enumerated up front. The tree
//! answers closest-color pops; the pool vector answers random and back pops.
//! Each removal updates both sides, so the pool length always equals the
//! tree's available count.

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;

use crate::color::kdtree::KdTree;
use crate::color::rgb::Color;

/// Pre-enumerated color multiset supporting closest, random, and back pops
#[derive(Debug, Clone)]
pub struct Palette {
    tree: KdTree,
    pool: Vec<Color>,
    /// Back-reference from channel bits to pool slots, so removal by value
    /// stays O(1)
    slots: HashMap<[u64; 3], Vec<usize>>,
}

impl Palette {
    /// Build a palette from an explicit color multiset
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Self {
        let mut buffer = colors.clone();
        let tree = KdTree::build(&mut buffer);
        let mut slots: HashMap<[u64; 3], Vec<usize>> = HashMap::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            slots.entry(color.bits()).or_default().push(index);
        }
        Self { tree, pool: colors, slots }
    }

    /// Deterministic enumeration of at least `count` colors spread evenly
    /// over the RGB cube
    ///
    /// Builds the smallest per-channel grid whose cube reaches `count`;
    /// excess colors beyond `count` are kept.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn uniform(count: usize) -> Self {
        assert!(count > 0, "palette must hold at least one color");
        let mut side = (count as f64).cbrt().ceil() as usize;
        // Guards against cube-root rounding on perfect cubes.
        while side * side * side < count {
            side += 1;
        }
        let step = if side > 1 {
            255.0 / (side - 1) as f64
        } else {
            0.0
        };
        let mut colors = Vec::with_capacity(side * side * side);
        for r in 0..side {
            for g in 0..side {
                for b in 0..side {
                    colors.push(Color::new(
                        r as f64 * step,
                        g as f64 * step,
                        b as f64 * step,
                    ));
                }
            }
        }
        Self::new(colors)
    }

    /// Colors not yet consumed
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Remove and return the color nearest to `target`
    ///
    /// `epsilon` is a tolerance hook: the nearest entry is popped whether or
    /// not it lies within `epsilon` of the target, so behavior matches a
    /// plain closest pop for every non-negative value. A future relaxation
    /// may skip work inside the tolerance, but must still pop the true
    /// nearest whenever `epsilon` is at most the actual distance.
    ///
    /// # Panics
    ///
    /// Panics if the palette is exhausted.
    pub fn pop_closest(&mut self, target: &Color, epsilon: f64) -> Color {
        debug_assert!(epsilon >= 0.0, "tolerance must be non-negative");
        let color = self.tree.pop(target);
        self.detach_color(&color);
        debug_assert_eq!(self.pool.len(), self.tree.available() as usize);
        color
    }

    /// Remove and return a uniformly random color
    ///
    /// # Panics
    ///
    /// Panics if the palette is exhausted.
    pub fn pop_random(&mut self, rng: &mut StdRng) -> Color {
        let index = rng.random_range(0..self.pool.len());
        let color = self.detach_at(index);
        // The color is present at distance zero, so the search pops exactly
        // that leaf.
        self.tree.pop(&color);
        debug_assert_eq!(self.pool.len(), self.tree.available() as usize);
        color
    }

    /// Remove and return the last enumerated color
    ///
    /// # Panics
    ///
    /// Panics if the palette is exhausted.
    pub fn pop_back(&mut self) -> Color {
        let index = self.pool.len().checked_sub(1).expect("pop on an empty palette");
        let color = self.detach_at(index);
        self.tree.pop(&color);
        debug_assert_eq!(self.pool.len(), self.tree.available() as usize);
        color
    }

    /// Drop one pool entry matching a color the tree already surrendered
    fn detach_color(&mut self, color: &Color) {
        let index = self
            .slots
            .get(&color.bits())
            .and_then(|indices| indices.last().copied())
            .expect("popped color is present in the pool");
        self.detach_at(index);
    }

    /// Swap-remove the pool entry at `index`, fixing up the slot map for the
    /// entry that moved into its place
    fn detach_at(&mut self, index: usize) -> Color {
        let color = self.pool.swap_remove(index);
        remove_slot(&mut self.slots, &color, index);
        if let Some(moved) = self.pool.get(index).copied() {
            retarget_slot(&mut self.slots, &moved, self.pool.len(), index);
        }
        color
    }
}

fn remove_slot(slots: &mut HashMap<[u64; 3], Vec<usize>>, color: &Color, index: usize) {
    if let Some(indices) = slots.get_mut(&color.bits()) {
        if let Some(position) = indices.iter().position(|&slot| slot == index) {
            indices.swap_remove(position);
        }
        if indices.is_empty() {
            slots.remove(&color.bits());
        }
    }
}

fn retarget_slot(slots: &mut HashMap<[u64; 3], Vec<usize>>, color: &Color, from: usize, to: usize) {
    if let Some(indices) = slots.get_mut(&color.bits()) {
        if let Some(slot) = indices.iter_mut().find(|slot| **slot == from) {
            *slot = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pool_and_tree_agree_across_mixed_pops() {
        let mut palette = Palette::uniform(27);
        let mut rng = StdRng::seed_from_u64(9);

        while palette.remaining() > 0 {
            let before = palette.remaining();
            match before % 3 {
                0 => {
                    palette.pop_closest(&Color::new(40.0, 200.0, 12.0), 0.0);
                }
                1 => {
                    palette.pop_random(&mut rng);
                }
                _ => {
                    palette.pop_back();
                }
            }
            assert_eq!(palette.remaining(), before - 1);
            assert_eq!(palette.remaining(), palette.tree.available() as usize);
        }
    }

    #[test]
    fn test_duplicate_colors_consume_one_slot_per_pop() {
        let duplicates = vec![Color::new(9.0, 9.0, 9.0); 5];
        let mut palette = Palette::new(duplicates);

        for expected in (0..5).rev() {
            let popped = palette.pop_closest(&Color::new(0.0, 0.0, 0.0), 0.0);
            assert_eq!(popped, Color::new(9.0, 9.0, 9.0));
            assert_eq!(palette.remaining(), expected);
            assert_eq!(palette.tree.available() as usize, expected);
        }
    }
}
