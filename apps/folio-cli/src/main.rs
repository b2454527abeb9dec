use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_common::{MotionPreference, SurfaceSize};
use folio_content::{ContentStore, SiteContent};
use folio_drive::{DriveScene, DriveSim, DriveTuning};
use folio_input::{KeyState, PointerDrag};
use folio_neural::NeuralMap;
use folio_orbit::OrbitField;
use folio_render::{DebugTextRenderer, Renderer};
use folio_scene::{CanvasHandle, Frame, ListenerRegistry, SceneLifecycle};
use folio_sections::{CanvasDescription, Section};

#[derive(Parser)]
#[command(name = "folio-cli", about = "Headless portfolio scene tools")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Dump the sample site content
    Content {
        /// Emit JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Run the hero orbit field headless
    Orbit {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// RNG seed for the velocity draws
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Simulate a reduced-motion host
        #[arg(long)]
        reduced_motion: bool,
    },
    /// Run the skill map headless
    Neural {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Horizontal drag to apply, in pixels
        #[arg(long, default_value = "0")]
        drag: f32,
    },
    /// Run the car simulation headless
    Drive {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Comma-separated keys held the whole run (w,s,a,d,r or space)
        #[arg(long, default_value = "w")]
        hold: String,
    },
}

/// Synthetic 60 fps frame for headless runs.
fn frame(index: u64) -> Frame {
    Frame {
        index,
        elapsed: Duration::from_micros(16_667 * index),
    }
}

fn canvas_for(section: Section) -> CanvasHandle {
    let label = CanvasDescription::for_section(section)
        .map(|d| d.label)
        .unwrap_or("");
    CanvasHandle::new(section.anchor(), SurfaceSize::new(800, 600), label)
}

fn run_orbit(ticks: u64, seed: u64, motion: MotionPreference) -> anyhow::Result<()> {
    let mut lifecycle = SceneLifecycle::new();
    let mut listeners = ListenerRegistry::new();
    let mut context = lifecycle.acquire(
        &mut listeners,
        &canvas_for(Section::Hero),
        SurfaceSize::new(800, 600),
    )?;

    let field = OrbitField::new(&mut context.arena, seed, motion);
    for _ in 0..ticks {
        field.update(&mut context.arena);
    }

    println!("Orbit field: seed={seed}, ticks={ticks}, motion={motion:?}");
    print!("{}", DebugTextRenderer::new().render(&context));

    let report = lifecycle.release(&mut listeners, context);
    println!(
        "Released: {} objects, {} listeners remain",
        report.objects_freed,
        listeners.count()
    );
    Ok(())
}

fn run_neural(ticks: u64, drag_px: f32) -> anyhow::Result<()> {
    let store = ContentStore::ready();
    let Some(content) = store.state().content().cloned() else {
        anyhow::bail!("sample content unavailable");
    };

    let mut lifecycle = SceneLifecycle::new();
    let mut listeners = ListenerRegistry::new();
    let mut context = lifecycle.acquire(
        &mut listeners,
        &canvas_for(Section::Skills),
        SurfaceSize::new(800, 600),
    )?;

    let (map, mut lines) =
        NeuralMap::new(&mut context.arena, &content.skills, MotionPreference::Full);
    for i in 0..ticks {
        map.update(&mut context.arena, &mut lines, frame(i));
    }
    if drag_px != 0.0 {
        let mut drag = PointerDrag::new();
        drag.begin(0.0);
        if let Some(delta) = drag.move_to(drag_px) {
            map.drag(&mut context.arena, delta);
        }
        drag.end();
    }
    context.lines = Some(lines);

    println!(
        "Neural map: {} nodes, {} edges, ticks={ticks}, drag={drag_px}px",
        map.node_count(),
        map.edge_count()
    );
    print!("{}", DebugTextRenderer::new().render(&context));

    let report = lifecycle.release(&mut listeners, context);
    println!(
        "Released: {} objects, {} line segments",
        report.objects_freed, report.line_segments_freed
    );
    Ok(())
}

fn run_drive(ticks: u64, hold: &str) -> anyhow::Result<()> {
    let mut lifecycle = SceneLifecycle::new();
    let mut listeners = ListenerRegistry::new();
    let mut context = lifecycle.acquire(
        &mut listeners,
        &canvas_for(Section::Drive),
        SurfaceSize::new(800, 600),
    )?;

    let mut scene = DriveScene::build(&mut context.arena, 7);
    let mut sim = DriveSim::new(DriveTuning::default(), MotionPreference::Full);
    let mut keys = KeyState::new();
    for token in hold.split(',').filter(|t| !t.is_empty()) {
        let id = if token.eq_ignore_ascii_case("space") {
            " "
        } else {
            token
        };
        if !keys.handle_identifier(id, true) {
            anyhow::bail!("unknown key '{token}'");
        }
    }
    tracing::debug!(hold, "drive keys held for the full run");

    println!("Drive: ticks={ticks}, holding [{hold}]");
    for i in 0..ticks {
        let hud = sim.step(keys.controls());
        scene.sync(&mut context.arena, sim.state());
        if i % 30 == 0 || i + 1 == ticks {
            println!(
                "  t={:4}  speed={:3} km/h  gear={}",
                i,
                hud.speed,
                hud.gear.label()
            );
        }
    }

    let state = sim.state();
    println!(
        "Final: pos=({:.2}, {:.2}, {:.2}) heading={:.2} rad raw_speed={:.3}",
        state.position.x, state.position.y, state.position.z, state.heading, state.speed
    );

    let report = lifecycle.release(&mut listeners, context);
    println!("Released: {} objects", report.objects_freed);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("folio-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", folio_common::crate_info());
            println!("scene: {}", folio_scene::crate_info());
            println!("content: {}", folio_content::crate_info());
            println!("input: {}", folio_input::crate_info());
            println!("orbit: {}", folio_orbit::crate_info());
            println!("neural: {}", folio_neural::crate_info());
            println!("drive: {}", folio_drive::crate_info());
            println!("sections: {}", folio_sections::crate_info());
            println!("render: {}", folio_render::crate_info());
        }
        Commands::Content { json } => {
            let content = SiteContent::sample();
            if json {
                println!("{}", serde_json::to_string_pretty(&content)?);
            } else {
                println!(
                    "Content: {} skills, {} projects, {} certificates, {} posts",
                    content.skills.len(),
                    content.projects.len(),
                    content.certificates.len(),
                    content.blog_posts.len()
                );
                for skill in &content.skills {
                    println!(
                        "  {:<12} {:?} {}",
                        skill.name,
                        skill.category,
                        skill.color.to_hex_string()
                    );
                }
            }
        }
        Commands::Orbit {
            ticks,
            seed,
            reduced_motion,
        } => {
            let motion = if reduced_motion {
                MotionPreference::Reduced
            } else {
                MotionPreference::Full
            };
            run_orbit(ticks, seed, motion)?;
        }
        Commands::Neural { ticks, drag } => run_neural(ticks, drag)?,
        Commands::Drive { ticks, hold } => run_drive(ticks, &hold)?,
    }

    Ok(())
}
