use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context as _, Error};
use clap::{Parser, Subcommand};
use gjk2d_cli::LoadedScene;
use gjk2d_collision::{
    Collision, SupportMap as _, SupportMapExt as _, boundary, containment, gjk,
};
use gjk2d_math::Vec2;

#[derive(Parser)]
struct Cli {
    /// Scene file describing the named shapes.
    scene: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the point of a shape furthest in the direction (x, y).
    #[command(allow_negative_numbers = true)]
    Support { shape: String, x: f32, y: f32 },
    /// Print the counter-clockwise outline of a shape, one point per line.
    Trace {
        shape: String,
        #[arg(long)]
        epsilon: Option<f32>,
        #[arg(long)]
        max_depth: Option<u32>,
    },
    /// Test whether two shapes overlap.
    Collide {
        a: String,
        b: String,
        /// Also print the outline of the Minkowski difference and every triangle searched.
        #[arg(long)]
        trace: bool,
        #[arg(long)]
        max_iterations: Option<u32>,
        /// Shapes closer than this count as touching.
        #[arg(long)]
        tolerance: Option<f32>,
    },
    /// Print the axis aligned bounding box of a shape.
    Bounds { shape: String },
}

fn print_point(p: Vec2<f32>) {
    println!("{} {}", p.x(), p.y());
}

fn main() -> Result<ExitCode, Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let loaded = LoadedScene::load(&cli.scene)
        .with_context(|| format!("could not load scene {:?}", cli.scene))?;

    match cli.command {
        Command::Support { shape, x, y } => {
            print_point(loaded.shape(&shape)?.support_point(Vec2::new(x, y))?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Trace {
            shape,
            epsilon,
            max_depth,
        } => {
            let settings = boundary::Settings {
                epsilon: epsilon.unwrap_or(loaded.trace.epsilon),
                max_depth: max_depth.unwrap_or(loaded.trace.max_depth),
                ..loaded.trace
            };
            let outline = boundary::trace(settings, loaded.shape(&shape)?)?;
            for &p in &outline.points {
                print_point(p);
            }
            Ok(if outline.converged {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
        Command::Collide {
            a,
            b,
            trace,
            max_iterations,
            tolerance,
        } => {
            let settings = gjk::Settings {
                tolerance: tolerance.unwrap_or(loaded.collision.tolerance),
                max_iterations: max_iterations.unwrap_or(loaded.collision.max_iterations),
            };
            let (a_shape, b_shape) = (loaded.shape(&a)?, loaded.shape(&b)?);

            let collision = if trace {
                let (collision, collision_trace) =
                    gjk::test_collision_traced(settings, loaded.trace, a_shape, b_shape)?;
                log::info!(
                    "outline of {a} - {b} has {} points and {} contain the origin",
                    collision_trace.boundary.len(),
                    if containment::contains_origin(&collision_trace.boundary) {
                        "does"
                    } else {
                        "does not"
                    },
                );
                for p in collision_trace.points() {
                    print_point(p);
                }
                collision
            } else {
                gjk::intersects(settings, a_shape, b_shape)?
            };

            match collision {
                Collision::Intersecting => println!("intersecting"),
                Collision::Separated => println!("separated"),
                Collision::Unresolved => println!("unresolved"),
            }

            Ok(if collision == Collision::Unresolved {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Bounds { shape } => {
            let bound_box = loaded.shape(&shape)?.bound_box()?;
            print_point(bound_box.min);
            print_point(bound_box.max);
            let (size, center) = (bound_box.size(), bound_box.center());
            log::info!(
                "{shape} is {} by {}, centered on ({}, {})",
                size.x(),
                size.y(),
                center.x(),
                center.y(),
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
