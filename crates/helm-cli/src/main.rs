//! Demo host for the helm steering stack.
//!
//! Builds a small tile world with one avatar and a few placed entities,
//! issues a single command, and drives the tick loop until the goal
//! completes or the tick budget runs out.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use helm_core::{TickContext, WorldMut, WorldView};
use helm_nav::{wrap_angle, Cell, Commander, EntityHit, Placement, TileWorldMut, TileWorldView, Vec2};

#[derive(Parser)]
#[command(name = "helm-cli")]
#[command(about = "Drive a demo avatar through steering commands", version)]
struct Cli {
    /// Maximum simulation ticks to run
    #[arg(long, default_value_t = 600)]
    max_ticks: u64,

    /// Simulation step in seconds
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Steer to a position
    Goto { x: f32, y: f32 },

    /// Rotate to a compass heading in degrees (clockwise from north)
    Rotate { degrees: f32 },

    /// Rotate to a compass direction letter (n/s/e/w)
    Heading { direction: String },

    /// Find the nearest entity of a kind and steer to it
    Nearest { kind: String },
}

const AVATAR: u32 = 1;

struct DemoWorld {
    position: Vec2,
    rotation: f32,
    desired_speed: f32,
    desired_left_rotation: f32,
    entities: Vec<(Cell, &'static str, Placement)>,
}

impl DemoWorld {
    fn new() -> Self {
        Self {
            position: Vec2::new(8.5, 8.5),
            rotation: 0.0,
            desired_speed: 0.0,
            desired_left_rotation: 0.0,
            entities: vec![
                (Cell::new(3, 12), "pinecone", Placement::Object),
                (Cell::new(14, 4), "rock", Placement::Object),
                (Cell::new(11, 11), "water", Placement::Tile),
            ],
        }
    }

    /// Integrate the actuators the way a host movement system would.
    fn integrate(&mut self, dt: f32) {
        const TURN_RATE: f32 = 2.6; // rad/s at full deflection
        const MOVE_SPEED: f32 = 4.0; // tiles/s at full drive

        self.rotation = wrap_angle(self.rotation + self.desired_left_rotation * TURN_RATE * dt);
        let facing = Vec2::new(-self.rotation.sin(), self.rotation.cos());
        self.position = self.position + facing * (self.desired_speed * MOVE_SPEED * dt);
    }
}

impl WorldView for DemoWorld {
    type Agent = u32;
}

impl WorldMut for DemoWorld {}

impl TileWorldView for DemoWorld {
    type Entity = &'static str;

    fn position(&self, _agent: u32) -> Option<Vec2> {
        Some(self.position)
    }

    fn rotation(&self, _agent: u32) -> Option<f32> {
        Some(self.rotation)
    }

    fn entities_at(&self, cell: Cell, out: &mut Vec<EntityHit<&'static str>>) {
        for (entity_cell, name, placement) in &self.entities {
            if *entity_cell == cell {
                let position = match placement {
                    Placement::Tile => Vec2::new(cell.x as f32, cell.y as f32),
                    Placement::Object => cell.center(),
                };
                out.push(EntityHit {
                    entity: *name,
                    kind: (*name).into(),
                    position,
                    placement: *placement,
                });
            }
        }
    }
}

impl TileWorldMut for DemoWorld {
    fn set_position(&mut self, _agent: u32, position: Vec2) {
        self.position = position;
    }

    fn set_rotation(&mut self, _agent: u32, rotation: f32) {
        self.rotation = rotation;
    }

    fn set_desired_speed(&mut self, _agent: u32, speed: f32) {
        self.desired_speed = speed.clamp(0.0, 1.0);
    }

    fn set_desired_left_rotation(&mut self, _agent: u32, rate: f32) {
        self.desired_left_rotation = rate.clamp(-1.0, 1.0);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let mut world = DemoWorld::new();
    let mut commander = Commander::new(AVATAR);

    let ctx0 = TickContext {
        tick: 0,
        dt_seconds: cli.dt,
    };
    match &cli.command {
        Commands::Goto { x, y } => commander.goto(&ctx0, &mut world, Vec2::new(*x, *y))?,
        Commands::Rotate { degrees } => commander.set_heading_degrees(&ctx0, &mut world, *degrees)?,
        Commands::Heading { direction } => commander.set_heading(&ctx0, &mut world, direction)?,
        Commands::Nearest { kind } => match commander.nearest(&world, kind) {
            Some(hit) => {
                tracing::info!(kind = %kind, x = hit.position.x, y = hit.position.y, "nearest match");
                commander.goto_nearest(&ctx0, &mut world, kind)?;
            }
            None => {
                tracing::info!(kind = %kind, "nothing found in range");
                return Ok(());
            }
        },
    }

    for tick in 0..cli.max_ticks {
        let ctx = TickContext {
            tick,
            dt_seconds: cli.dt,
        };
        if commander.advance(&ctx, &mut world).is_some() {
            tracing::info!(tick, "goal reached");
            break;
        }
        world.integrate(cli.dt);
    }

    tracing::info!(
        x = world.position.x,
        y = world.position.y,
        rotation = world.rotation,
        idle = commander.is_idle(),
        "final pose"
    );
    Ok(())
}
