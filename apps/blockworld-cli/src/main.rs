use std::path::PathBuf;

use anyhow::Context;
use blockworld_kernel::{RaycastConfig, raycast};
use blockworld_render::{DebugTextRenderer, Renderer};
use blockworld_session::{ScriptStep, Session, SessionConfig, script};
use blockworld_tools::WorldInspector;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockworld-cli", about = "CLI tool for block world operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Session config (YAML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective config
    Info,
    /// Seed terrain and summarise it
    Terrain {
        /// Noise seed (overrides the config)
        #[arg(short, long)]
        seed: Option<u32>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cast a ray into freshly seeded terrain
    Cast {
        #[arg(long, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, allow_hyphen_values = true)]
        y: f32,
        #[arg(long, allow_hyphen_values = true)]
        z: f32,
        /// Degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        yaw: f32,
        /// Degrees, clamped to [-89, 89]
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pitch: f32,
        /// Reach (overrides the config)
        #[arg(long)]
        max_distance: Option<f32>,
    },
    /// Run an edit script against a session
    Script {
        /// Script file; one command per line
        file: PathBuf,
        /// Start from an empty grid instead of seeded terrain
        #[arg(long)]
        empty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::with_default_terrain(),
    };

    match cli.command {
        Commands::Info => {
            println!("blockworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "raycast: max_distance={} step_size={} steps={}",
                config.raycast.max_distance,
                config.raycast.step_size,
                config.raycast.step_count()
            );
            println!(
                "camera: position={} yaw={} pitch={} speed={} sensitivity={}",
                config.camera.position,
                config.camera.yaw,
                config.camera.pitch,
                config.camera.speed,
                config.camera.sensitivity
            );
            match &config.terrain {
                Some(t) => println!(
                    "terrain: {}x{} seed={} octaves={}",
                    t.size_x, t.size_z, t.seed, t.octaves
                ),
                None => println!("terrain: none"),
            }
        }
        Commands::Terrain { seed, json } => {
            if let Some(seed) = seed {
                config.terrain.get_or_insert_with(Default::default).seed = seed;
            }
            let session = Session::new(&config)?;
            let summary = WorldInspector::summary(&session.world);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
                for ((x, z), y) in WorldInspector::column_heights(&session.world) {
                    tracing::debug!(x, z, y, "column");
                }
            }
        }
        Commands::Cast {
            x,
            y,
            z,
            yaw,
            pitch,
            max_distance,
        } => {
            anyhow::ensure!(
                [x, y, z, yaw, pitch].iter().all(|v| v.is_finite()),
                "cast pose must be finite, got ({x}, {y}, {z}) yaw={yaw} pitch={pitch}"
            );
            let mut session = Session::new(&config)?;
            session.camera.set_position(glam::Vec3::new(x, y, z));
            session.camera.set_angles(yaw, pitch);

            let reach = match max_distance {
                Some(d) => {
                    let r = RaycastConfig {
                        max_distance: d,
                        ..config.raycast
                    };
                    r.validate()?;
                    r
                }
                None => config.raycast,
            };
            match raycast::cast_from(&session.camera.pose(), &session.world, &reach) {
                Some(hit) => {
                    let faces: Vec<String> =
                        hit.crossings.iter().map(|c| c.to_string()).collect();
                    println!(
                        "hit {} at distance {:.2} crossing [{}]",
                        hit.block,
                        hit.distance,
                        faces.join(", ")
                    );
                    if let Some(face) = hit.primary() {
                        println!("place target {}", face.adjacent(hit.block));
                    }
                }
                None => println!("no hit within {}", reach.max_distance),
            }
        }
        Commands::Script { file, empty } => {
            if empty {
                config.terrain = None;
            }
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading script {}", file.display()))?;
            let steps = script::parse(&text)?;
            let mut session = Session::new(&config)?;
            let renderer = DebugTextRenderer::with_limit(64);

            for step in &steps {
                if let ScriptStep::Dump = step {
                    print!("{}", renderer.render(&session.world, &session.render_view()));
                    continue;
                }
                let outcome = script::apply(&mut session, step);
                if outcome.changed_world() {
                    println!("{outcome:?}");
                }
            }
            println!("{}", WorldInspector::summary(&session.world));
        }
    }

    Ok(())
}
