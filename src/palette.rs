//! Channel color palette
//!
//! Each channel gets one of seven named colors, assigned in first-seen
//! order. The color name selects a material family in the external
//! `colormaps.mtl` library.

use crate::{Error, Result};

/// The fixed material color families, in assignment order
pub const COLOR_MAPS: [&str; 7] = ["red", "green", "blue", "grey", "pink", "purple", "orange"];

/// First-seen channel to color assignment.
///
/// Deterministic for a given input order; asking for an 8th distinct
/// channel is an error rather than an index overrun.
#[derive(Debug, Default)]
pub struct ChannelPalette {
    assigned: Vec<(String, &'static str)>,
}

impl ChannelPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `channel_id`, assigning the next free palette entry on
    /// first sight.
    pub fn color_for(&mut self, channel_id: &str) -> Result<&'static str> {
        if let Some((_, color)) = self.assigned.iter().find(|(id, _)| id == channel_id) {
            return Ok(*color);
        }
        let Some(&color) = COLOR_MAPS.get(self.assigned.len()) else {
            return Err(Error::PaletteExhausted(COLOR_MAPS.len()));
        };
        self.assigned.push((channel_id.to_string(), color));
        Ok(color)
    }

    /// Number of channels assigned so far
    pub fn channel_count(&self) -> usize {
        self.assigned.len()
    }

    /// Assignments in first-seen order
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.assigned.iter().map(|(id, color)| (id.as_str(), *color))
    }
}
