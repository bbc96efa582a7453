use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cell, TileWorldView, Vec2};

/// How an entity occupies its cell.
///
/// `Tile` entities are addressed by cell; goto-style consumers snap their
/// position to the tile center before steering at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Placement {
    Object,
    Tile,
}

/// A located entity returned by cell queries and ring search.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityHit<E> {
    pub entity: E,
    pub kind: Cow<'static, str>,
    pub position: Vec2,
    pub placement: Placement,
}

impl<E> EntityHit<E> {
    /// Steering target for this hit: tile hits snap to the tile center.
    pub fn target(&self) -> Vec2 {
        match self.placement {
            Placement::Object => self.position,
            Placement::Tile => Cell::containing(self.position).center(),
        }
    }
}

/// Cells at exactly Chebyshev distance `radius` from `center`: the perimeter
/// of the `(2r+1) x (2r+1)` box, `8r` cells, each yielded exactly once.
///
/// A radius of 0 yields just the center.
pub fn ring(center: Cell, radius: i32) -> Ring {
    Ring {
        center,
        radius: radius.max(0),
        index: 0,
    }
}

#[derive(Debug, Clone)]
pub struct Ring {
    center: Cell,
    radius: i32,
    index: i32,
}

impl Iterator for Ring {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let r = self.radius;
        if r == 0 {
            if self.index > 0 {
                return None;
            }
            self.index = 1;
            return Some(self.center);
        }

        let side_len = 2 * r;
        if self.index >= 4 * side_len {
            return None;
        }
        let side = self.index / side_len;
        let i = self.index % side_len;
        self.index += 1;

        let Cell { x: cx, y: cy } = self.center;
        // Fixed edge order for determinism; each corner belongs to exactly
        // one edge.
        let cell = match side {
            0 => Cell::new(cx - r + i, cy - r),
            1 => Cell::new(cx + r, cy - r + i),
            2 => Cell::new(cx + r - i, cy + r),
            _ => Cell::new(cx - r, cy + r - i),
        };
        Some(cell)
    }
}

/// Nearest entity accepted by `matches`, scanning square rings of increasing
/// Chebyshev radius from the cell containing `origin`.
///
/// Radii run from 1 to `max_radius` inclusive; the origin cell itself is
/// never scanned. All cells in a ring are equidistant under the Chebyshev
/// metric, so ties within a ring go to scan order. Exhausting `max_radius`
/// returns `None`; the search never degrades into a full-world scan.
pub fn find_nearest<W, P>(
    world: &W,
    origin: Vec2,
    max_radius: i32,
    mut matches: P,
) -> Option<EntityHit<W::Entity>>
where
    W: TileWorldView + ?Sized,
    P: FnMut(&EntityHit<W::Entity>) -> bool,
{
    let center = Cell::containing(origin);
    let mut hits = Vec::new();
    for radius in 1..=max_radius {
        for cell in ring(center, radius) {
            hits.clear();
            world.entities_at(cell, &mut hits);
            for hit in hits.drain(..) {
                if matches(&hit) {
                    return Some(hit);
                }
            }
        }
    }
    None
}
