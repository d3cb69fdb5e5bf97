//! Bouncy Balls headless driver
//!
//! Builds a field from settings and runs it at a fixed frame rate, logging
//! statistics. A window/renderer would drive `tick` the same way, once per
//! redraw, with the measured frame time.
//!
//! Usage: bouncy-balls [BALLS] [--config PATH] [--frames N] [--seed N]

use bouncy_balls::sim::{Slingshot, Spawner, TickInput, Vector2, World, tick};
use bouncy_balls::{Scenario, Settings, collision_precision_for};

/// Wall-clock seconds per frame of the headless run
const FRAME_SECONDS: f64 = 1.0 / 60.0;

struct Args {
    balls: Option<usize>,
    config: Option<String>,
    frames: u32,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        balls: None,
        config: None,
        frames: 600,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| iter.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--config" => args.config = Some(value("--config")?),
            "--frames" => {
                args.frames = value("--frames")?
                    .parse()
                    .map_err(|e| format!("bad --frames: {e}"))?
            }
            "--seed" => {
                args.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|e| format!("bad --seed: {e}"))?,
                )
            }
            count => {
                args.balls = Some(
                    count
                        .parse()
                        .map_err(|e| format!("bad ball count {count:?}: {e}"))?,
                )
            }
        }
    }
    Ok(args)
}

fn build_settings(args: &Args) -> bouncy_balls::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(count) = args.balls {
        settings.scenario = Scenario::Random { count };
        settings.collision_precision = collision_precision_for(count);
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    Ok(settings)
}

fn main() {
    env_logger::init();
    log::info!("Bouncy Balls (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };
    let mut settings = match build_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Field {}x{}, {:?}, {} collision passes per frame",
        settings.width,
        settings.height,
        settings.scenario,
        settings.collision_precision
    );

    let mut world = World::new();
    let mut spawner = Spawner::new(settings.seed);
    if let Err(e) = spawner.populate(&mut world, &settings) {
        log::warn!("Starting with {} balls: {e}", world.len());
    }

    // Scripted slingshot shot halfway through the run
    let mut sling = Slingshot::new();
    let launch_frame = args.frames / 2;
    let dt = settings.frame_dt(FRAME_SECONDS);

    for frame in 0..args.frames {
        let mut input = TickInput::default();
        if frame == launch_frame {
            let anchor = settings.bounds().clamp_center(
                Vector2::new(settings.width / 4.0, settings.height / 2.0),
                0.0,
            );
            sling.press(anchor);
            sling.drag(anchor - Vector2::new(40.0, -20.0));
            input.launch = sling.release(anchor - Vector2::new(60.0, -30.0));
        }

        let stats = tick(&mut world, &mut spawner, &mut settings, &input, dt);

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} balls, {} collisions, kinetic energy {:.1}",
                world.len(),
                stats.collisions,
                world.kinetic_energy()
            );
        }
    }

    let momentum = world.momentum();
    log::info!(
        "Done after {} frames: {} balls, momentum ({:.1}, {:.1})",
        args.frames,
        world.len(),
        momentum.x,
        momentum.y
    );
}
