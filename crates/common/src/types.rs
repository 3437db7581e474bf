use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::orientation;

/// Grid-aligned position of a unit cube. Key into the world grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell containing a continuous point. Uses floor, so `-0.5` maps to `-1`.
    pub fn containing(point: Vec3) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Component along one axis.
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Shift by `delta` cells along `axis`.
    pub fn offset(self, axis: Axis, delta: i32) -> Self {
        self + axis.unit() * delta
    }
}

impl From<IVec3> for BlockCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockCoord> for IVec3 {
    fn from(c: BlockCoord) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

impl std::ops::Add<IVec3> for BlockCoord {
    type Output = Self;

    fn add(self, rhs: IVec3) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three grid axes. Ordering is the tie-break priority for corner clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A ray crossing a cell boundary: the axis crossed and the direction of travel (+1 / -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceCrossing {
    pub axis: Axis,
    pub sign: i32,
}

impl FaceCrossing {
    pub fn new(axis: Axis, sign: i32) -> Self {
        debug_assert!(sign == 1 || sign == -1, "crossing sign must be +1 or -1");
        Self { axis, sign }
    }

    /// Outward normal of the face that was struck.
    pub fn normal(self) -> IVec3 {
        self.axis.unit() * -self.sign
    }

    /// The cell just outside the struck face of `hit`.
    pub fn adjacent(self, hit: BlockCoord) -> BlockCoord {
        hit.offset(self.axis, -self.sign)
    }
}

impl std::fmt::Display for FaceCrossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = if self.sign > 0 { '+' } else { '-' };
        write!(f, "{}{}", s, self.axis.name())
    }
}

/// Cell in the 16x16 tile atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    pub tx: u8,
    pub ty: u8,
}

impl TileIndex {
    pub const fn new(tx: u8, ty: u8) -> Self {
        Self { tx, ty }
    }
}

/// Named cube face, used to index [`BlockFaces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];
}

/// Per-face atlas tiles. Opaque to the core; copied verbatim when a block is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockFaces {
    pub front: TileIndex,
    pub back: TileIndex,
    pub left: TileIndex,
    pub right: TileIndex,
    pub top: TileIndex,
    pub bottom: TileIndex,
}

impl BlockFaces {
    /// Same tile on every face.
    pub const fn uniform(tile: TileIndex) -> Self {
        Self {
            front: tile,
            back: tile,
            left: tile,
            right: tile,
            top: tile,
            bottom: tile,
        }
    }

    pub fn tile(&self, face: Face) -> TileIndex {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }
}

impl Default for BlockFaces {
    /// Grass block: dirt-with-grass sides, grass top, dirt bottom.
    fn default() -> Self {
        let side = TileIndex::new(3, 15);
        Self {
            front: side,
            back: side,
            left: side,
            right: side,
            top: TileIndex::new(0, 15),
            bottom: TileIndex::new(2, 15),
        }
    }
}

/// Camera position plus view angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Unit view direction.
    pub fn direction(&self) -> Vec3 {
        orientation::direction(self.yaw, self.pitch)
    }
}
