use arboard::Clipboard;
use clap::Parser;
use log::{info, warn};
use macroquad::prelude::*;
use rayarena::config::{Config, DEFAULT_CONFIG_PATH};
use rayarena::input::{command_for_key, Command, CommandLog, FrameInput, BOUND_KEYS};
use rayarena::render::draw_world;
use rayarena::snapshot::FrameSnapshot;
use rayarena::WorldState;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D raycasting arena")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for the random world (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Step the world this many frames without drawing, report timing and exit
    #[arg(long)]
    bench: Option<u64>,
}

fn window_conf() -> Conf {
    let cli = Cli::parse();
    Conf {
        window_title: Config::window_title_at(&cli.config),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Arena size from config, falling back to the window per axis
fn arena_size(config: &Config) -> Vec2 {
    let width = if config.arena.width > 0.0 { config.arena.width } else { screen_width() };
    let height = if config.arena.height > 0.0 { config.arena.height } else { screen_height() };
    vec2(width, height)
}

/// Sample pointer and bound keys for this frame
fn poll_input() -> FrameInput {
    let (x, y) = mouse_position();
    let mut commands: Vec<Command> = BOUND_KEYS
        .iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| command_for_key(key))
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        commands.push(Command::ToggleMovingStructures);
    }

    FrameInput {
        pointer: vec2(x, y),
        commands,
    }
}

fn copy_snapshot(world: &WorldState) {
    let json = match FrameSnapshot::capture(world).to_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("{}", e);
            return;
        }
    };

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(json) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Frame {} snapshot copied to clipboard", world.frame());
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(Duration::from_millis(100));
            }
        }
        Err(e) => warn!("Failed to access clipboard: {}", e),
    }
}

/// Step the world with a pointer circling the arena center
fn run_bench(world: &mut WorldState, frames: u64) {
    let center = world.size / 2.0;
    let radius = world.size.min_element() / 4.0;
    let start = Instant::now();

    for i in 0..frames {
        let angle = i as f32 * 0.05;
        let input = FrameInput {
            pointer: center + Vec2::from_angle(angle) * radius,
            commands: Vec::new(),
        };
        world.update(&input);
    }

    let elapsed = start.elapsed();
    let per_frame = elapsed.as_secs_f64() * 1000.0 / frames.max(1) as f64;
    let hits = world.distance_buffer().len();
    info!(
        "{} frames in {:.1}ms ({:.3}ms/frame, {} walls, {} columns)",
        frames,
        elapsed.as_secs_f64() * 1000.0,
        per_frame,
        world.all_walls().len(),
        hits
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config);

    let seed = cli
        .seed
        .or(config.seed)
        .unwrap_or_else(|| macroquad::miniquad::date::now() as u64);
    macroquad::rand::srand(seed);
    info!("Seed: {}", seed);

    let mut world = WorldState::new(&config, arena_size(&config));

    if let Some(frames) = cli.bench {
        run_bench(&mut world, frames);
        return;
    }

    let mut command_log = CommandLog::new();

    loop {
        let input = poll_input();

        if input.commands.contains(&Command::Quit) {
            break;
        }
        if input.commands.contains(&Command::CopySnapshot) {
            copy_snapshot(&world);
        }
        if config.logging.enable_command_log {
            for &command in &input.commands {
                command_log.record(command);
            }
        }

        world.resize(arena_size(&config));
        world.update(&input);

        draw_world(&world, &config.visual);

        next_frame().await
    }

    if config.logging.enable_command_log {
        info!("{}", command_log.summary());
    }
}
