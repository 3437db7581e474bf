use std::collections::BTreeMap;

use blockworld_common::{BlockCoord, BlockFaces};
use blockworld_kernel::WorldGrid;
use serde::Serialize;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the grid for debugging and CLI output.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the grid.
    pub fn summary(world: &WorldGrid) -> WorldSummary {
        WorldSummary {
            block_count: world.len(),
            logged_events: world.events().len(),
            bounds: Self::bounds(world),
            state_hash: world.state_hash(),
        }
    }

    /// Smallest box containing every block, or `None` for an empty grid.
    pub fn bounds(world: &WorldGrid) -> Option<Bounds> {
        let mut iter = world.iter().map(|(c, _)| c);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), c| {
            (
                BlockCoord::new(lo.x.min(c.x), lo.y.min(c.y), lo.z.min(c.z)),
                BlockCoord::new(hi.x.max(c.x), hi.y.max(c.y), hi.z.max(c.z)),
            )
        });
        Some(Bounds { min, max })
    }

    /// Look up one block.
    pub fn inspect_block(world: &WorldGrid, coord: BlockCoord) -> Option<BlockInfo> {
        world.get(coord).map(|faces| BlockInfo {
            coord,
            faces: *faces,
        })
    }

    /// Highest occupied y for every (x, z) column, in (x, z) order.
    pub fn column_heights(world: &WorldGrid) -> BTreeMap<(i32, i32), i32> {
        let mut heights = BTreeMap::new();
        for (c, _) in world.iter() {
            heights
                .entry((c.x, c.z))
                .and_modify(|y: &mut i32| *y = (*y).max(c.y))
                .or_insert(c.y);
        }
        heights
    }
}

/// Axis-aligned block bounds, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: BlockCoord,
    pub max: BlockCoord,
}

/// Summary of the grid for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub block_count: usize,
    /// Length of the grid's event log, which only shrinks when drained.
    pub logged_events: usize,
    pub bounds: Option<Bounds>,
    pub state_hash: u64,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: blocks={} logged_events={} hash={:#018x}",
            self.block_count, self.logged_events, self.state_hash
        )?;
        if let Some(b) = self.bounds {
            write!(f, " bounds={}..={}", b.min, b.max)?;
        }
        Ok(())
    }
}

/// Detailed info about a single block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockInfo {
    pub coord: BlockCoord,
    pub faces: BlockFaces,
}

impl std::fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = &self.faces;
        write!(
            f,
            "Block {} front=({}, {}) top=({}, {}) bottom=({}, {})",
            self.coord, t.front.tx, t.front.ty, t.top.tx, t.top.ty, t.bottom.tx, t.bottom.ty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_of(coords: &[BlockCoord]) -> WorldGrid {
        let mut w = WorldGrid::new();
        for c in coords {
            w.insert(*c, BlockFaces::default());
        }
        w
    }

    #[test]
    fn summary_empty_world() {
        let world = WorldGrid::new();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.block_count, 0);
        assert!(summary.bounds.is_none());
    }

    #[test]
    fn summary_with_blocks() {
        let mut world = world_of(&[BlockCoord::new(0, 0, 0), BlockCoord::new(1, 0, 0)]);
        world.remove(BlockCoord::new(1, 0, 0));

        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.block_count, 1);
        assert_eq!(summary.logged_events, 3); // 2 inserts + 1 remove
        assert_eq!(summary.state_hash, world.state_hash());
    }

    #[test]
    fn logged_events_reset_on_drain() {
        let mut world = world_of(&[BlockCoord::new(0, 0, 0), BlockCoord::new(0, 1, 0)]);
        assert_eq!(WorldInspector::summary(&world).logged_events, 2);

        world.drain_events();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.logged_events, 0);
        assert_eq!(summary.block_count, 2);
        assert!(summary.to_string().contains("logged_events=0"));
    }

    #[test]
    fn bounds_cover_negative_space() {
        let world = world_of(&[
            BlockCoord::new(-3, 4, 0),
            BlockCoord::new(2, -1, 7),
            BlockCoord::new(0, 0, -5),
        ]);
        let b = WorldInspector::bounds(&world).unwrap();
        assert_eq!(b.min, BlockCoord::new(-3, -1, -5));
        assert_eq!(b.max, BlockCoord::new(2, 4, 7));
    }

    #[test]
    fn inspect_block_found_and_missing() {
        let world = world_of(&[BlockCoord::new(1, 2, 3)]);
        let info = WorldInspector::inspect_block(&world, BlockCoord::new(1, 2, 3)).unwrap();
        assert_eq!(info.faces, BlockFaces::default());
        assert!(WorldInspector::inspect_block(&world, BlockCoord::new(0, 0, 0)).is_none());
    }

    #[test]
    fn column_heights_take_the_top_block() {
        let world = world_of(&[
            BlockCoord::new(0, 5, 0),
            BlockCoord::new(0, 6, 0),
            BlockCoord::new(1, 2, 0),
        ]);
        let heights = WorldInspector::column_heights(&world);
        assert_eq!(heights.len(), 2);
        assert_eq!(heights[&(0, 0)], 6);
        assert_eq!(heights[&(1, 0)], 2);
    }

    #[test]
    fn summary_display() {
        let world = world_of(&[BlockCoord::new(0, 0, 0)]);
        let s = WorldInspector::summary(&world).to_string();
        assert!(s.contains("blocks=1"));
        assert!(s.contains("bounds=(0, 0, 0)..=(0, 0, 0)"));
    }
}
