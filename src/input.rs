use macroquad::input::KeyCode;
use macroquad::math::Vec2;
use std::collections::HashMap;
use std::time::Instant;

/// Discrete user actions applied between frames
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch between top-down and pseudo-3D views
    Toggle3D,
    ToggleMovingStructures,
    ToggleRotatingStructures,
    RandomiseRenderingOptions,
    /// Copy a frame snapshot to the clipboard
    CopySnapshot,
    Quit,
}

/// Key bindings; mouse presses map to `ToggleMovingStructures` separately
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Key3 => Some(Command::Toggle3D),
        KeyCode::R => Some(Command::ToggleRotatingStructures),
        KeyCode::O => Some(Command::RandomiseRenderingOptions),
        KeyCode::C => Some(Command::CopySnapshot),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Every key `command_for_key` understands, for polling
pub const BOUND_KEYS: [KeyCode; 5] = [KeyCode::Key3, KeyCode::R, KeyCode::O, KeyCode::C, KeyCode::Escape];

/// Per-frame input sampled from the host
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    pub commands: Vec<Command>,
}

/// Command with the time it was applied
#[derive(Clone, Debug)]
pub struct LoggedCommand {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    pub command: Command,
}

/// In-memory record of the commands applied during a session
pub struct CommandLog {
    start_time: Instant,
    commands: Vec<LoggedCommand>,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    pub fn new() -> Self {
        CommandLog {
            start_time: Instant::now(),
            commands: Vec::new(),
        }
    }

    pub fn record(&mut self, command: Command) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.commands.push(LoggedCommand {
            timestamp_ms,
            command,
        });
    }

    pub fn commands(&self) -> &[LoggedCommand] {
        &self.commands
    }

    pub fn count(&self, command: Command) -> usize {
        self.commands.iter().filter(|c| c.command == command).count()
    }

    /// One-line summary of the session
    pub fn summary(&self) -> String {
        let mut counts: HashMap<Command, usize> = HashMap::new();
        for logged in &self.commands {
            *counts.entry(logged.command).or_default() += 1;
        }

        let duration = self.commands.last().map_or(0, |c| c.timestamp_ms);

        format!(
            "{} commands over {}ms: {} view toggles, {} move toggles, {} rotate toggles, {} option shuffles, {} snapshots",
            self.commands.len(),
            duration,
            counts.get(&Command::Toggle3D).copied().unwrap_or(0),
            counts.get(&Command::ToggleMovingStructures).copied().unwrap_or(0),
            counts.get(&Command::ToggleRotatingStructures).copied().unwrap_or(0),
            counts.get(&Command::RandomiseRenderingOptions).copied().unwrap_or(0),
            counts.get(&Command::CopySnapshot).copied().unwrap_or(0),
        )
    }
}
