use blockworld_kernel::WorldGrid;
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::new(0.0, 10.0, 1.0),
            fov_degrees: 65.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the grid and a view every frame, then produces output.
/// It never mutates the grid.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given grid and view.
    fn render(&self, world: &WorldGrid, view: &RenderView) -> Self::Output;
}

/// Text renderer for the CLI, logs and tests.
///
/// Lists every block in coordinate order with its top and side tiles.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Stop listing blocks after this many. `None` lists all.
    pub max_blocks: Option<usize>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_blocks: usize) -> Self {
        Self {
            max_blocks: Some(max_blocks),
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &WorldGrid, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Block World ({} blocks) ===\n", world.len()));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        let blocks = world.sorted_blocks();
        let shown = self.max_blocks.unwrap_or(blocks.len()).min(blocks.len());
        for (coord, faces) in &blocks[..shown] {
            out.push_str(&format!(
                "  {coord} top=({}, {}) side=({}, {})\n",
                faces.top.tx, faces.top.ty, faces.front.tx, faces.front.ty
            ));
        }
        if shown < blocks.len() {
            out.push_str(&format!("  ... {} more\n", blocks.len() - shown));
        }

        out
    }
}
