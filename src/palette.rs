use macroquad::color::Color;
use macroquad::rand::ChooseRandom;

/// Structure colors
pub const PALETTE: [Color; 4] = [
    Color::new(250.0 / 255.0, 105.0 / 255.0, 0.0, 1.0),
    Color::new(105.0 / 255.0, 210.0 / 255.0, 231.0 / 255.0, 1.0),
    Color::new(167.0 / 255.0, 219.0 / 255.0, 216.0 / 255.0, 1.0),
    Color::new(243.0 / 255.0, 134.0 / 255.0, 48.0 / 255.0, 1.0),
];

/// Color of a wall that was not given one explicitly
pub const DEFAULT_WALL: Color = PALETTE[3];

/// Color of the arena boundary walls (CSS darkgray)
pub const BOUNDARY: Color = Color::new(169.0 / 255.0, 169.0 / 255.0, 169.0 / 255.0, 1.0);

/// Color of an agent that can see the player, before brightness is applied
pub const AGENT_LIT: Color = Color::new(224.0 / 255.0, 228.0 / 255.0, 204.0 / 255.0, 1.0);

/// Pick a palette color using macroquad's global PRNG
pub fn random_color() -> Color {
    PALETTE.choose().copied().unwrap_or(DEFAULT_WALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_is_from_palette() {
        for _ in 0..20 {
            assert!(PALETTE.contains(&random_color()));
        }
    }
}
