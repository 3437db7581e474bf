use std::collections::HashMap;

use blockworld_common::{BlockCoord, BlockFaces};
use serde::{Deserialize, Serialize};

/// An event record produced by every mutation to the grid.
///
/// The log is the foundation for replay and undo/redo. Each event carries
/// enough information to reconstruct or reverse the mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A block was written. `replaced` holds the faces of any block it overwrote.
    Placed {
        coord: BlockCoord,
        faces: BlockFaces,
        replaced: Option<BlockFaces>,
    },
    /// A block was deleted. Carries its faces for undo support.
    Removed { coord: BlockCoord, faces: BlockFaces },
}

/// Read-only occupancy query. This is all the raycaster needs from a world.
pub trait BlockQuery {
    fn contains(&self, coord: BlockCoord) -> bool;
}

/// Sparse grid of solid blocks.
///
/// Absence of a coordinate means air. Any `i32` triple is a valid key; there
/// are no bounds. Lookups are O(1) average through a hash map, so iteration
/// order is unspecified; use [`WorldGrid::sorted_blocks`] when order matters.
#[derive(Debug, Clone, Default)]
pub struct WorldGrid {
    blocks: HashMap<BlockCoord, BlockFaces>,
    /// Every mutation since creation or the last [`WorldGrid::drain_events`].
    event_log: Vec<WorldEvent>,
}

impl WorldGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of solid blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    pub fn get(&self, coord: BlockCoord) -> Option<&BlockFaces> {
        self.blocks.get(&coord)
    }

    /// Write a block, overwriting any block already there. Returns the overwritten faces.
    pub fn insert(&mut self, coord: BlockCoord, faces: BlockFaces) -> Option<BlockFaces> {
        let replaced = self.blocks.insert(coord, faces);
        self.event_log.push(WorldEvent::Placed {
            coord,
            faces,
            replaced,
        });
        replaced
    }

    /// Delete a block. Returns its faces if it existed; removing air is a no-op.
    pub fn remove(&mut self, coord: BlockCoord) -> Option<BlockFaces> {
        let faces = self.blocks.remove(&coord)?;
        self.event_log.push(WorldEvent::Removed { coord, faces });
        Some(faces)
    }

    /// All blocks, in hash order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockCoord, &BlockFaces)> {
        self.blocks.iter().map(|(c, f)| (*c, f))
    }

    /// All blocks sorted by coordinate, for deterministic output.
    pub fn sorted_blocks(&self) -> Vec<(BlockCoord, BlockFaces)> {
        let mut out: Vec<_> = self.blocks.iter().map(|(c, f)| (*c, *f)).collect();
        out.sort_unstable_by_key(|(c, _)| *c);
        out
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log. Nothing drains it implicitly, so it grows
    /// with every edit until a consumer (a persistence or network layer) takes it.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Reconstruct a grid from a sequence of events. The rebuilt grid's log is the input log.
    pub fn replay(events: &[WorldEvent]) -> Self {
        let mut world = Self::new();
        for event in events {
            match event {
                WorldEvent::Placed { coord, faces, .. } => {
                    world.blocks.insert(*coord, *faces);
                }
                WorldEvent::Removed { coord, .. } => {
                    world.blocks.remove(coord);
                }
            }
        }
        world.event_log = events.to_vec();
        world
    }

    /// Deterministic hash of the occupied cells and their tiles.
    /// Coordinates are visited in sorted order so hash-map layout does not leak in.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        for (coord, faces) in self.sorted_blocks() {
            mix(&mut h, &coord.x.to_le_bytes());
            mix(&mut h, &coord.y.to_le_bytes());
            mix(&mut h, &coord.z.to_le_bytes());
            for tile in [
                faces.front,
                faces.back,
                faces.left,
                faces.right,
                faces.top,
                faces.bottom,
            ] {
                mix(&mut h, &[tile.tx, tile.ty]);
            }
        }
        h
    }
}

impl BlockQuery for WorldGrid {
    fn contains(&self, coord: BlockCoord) -> bool {
        WorldGrid::contains(self, coord)
    }
}

impl BlockQuery for std::collections::HashSet<BlockCoord> {
    fn contains(&self, coord: BlockCoord) -> bool {
        std::collections::HashSet::contains(self, &coord)
    }
}
