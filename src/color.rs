use colored::{ColoredString, Colorize};
use std::fmt;

/// Block fill color. The simulation core never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TOMATO: Color = Color::new(255, 99, 71);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    /// Darkest channel value a spawned block may get
    pub const SPAWN_MIN_CHANNEL: u8 = 30;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random spawn color, each channel uniform in `[30, 255]`
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut channel = || rng.u8(Self::SPAWN_MIN_CHANNEL..=u8::MAX);
        Self::new(channel(), channel(), channel())
    }

    /// Render `text` in this color on a truecolor terminal
    pub fn paint(&self, text: &str) -> ColoredString {
        text.truecolor(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
