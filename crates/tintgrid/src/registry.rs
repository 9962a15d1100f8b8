//! The cell palette: a registry mapping cell names to their current colors.
//!
//! A [`Palette`] is an explicit context object passed to every operation;
//! there is no process-wide state. Entries are created when a name is first
//! declared and live as long as the palette. A declared-but-uncolored name
//! is distinct from an undeclared one, although color lookups on either
//! yield `None` rather than an error.

use std::collections::HashMap;

use log::warn;

use crate::color::{contrasting_text_color, Rgb};
use crate::error::{Result, TintError};

/// Registry of named cells and their assigned colors.
///
/// # Example
///
/// ```rust
/// use tintgrid::Palette;
///
/// let mut palette = Palette::new();
/// palette.declare("holmium plate");
/// palette.set_color("holmium plate", "c0929f").unwrap();
///
/// // Stored colors are normalized to lowercase #rrggbb.
/// assert_eq!(palette.color_hex("holmium plate").as_deref(), Some("#c0929f"));
///
/// // Uncolored and unknown names both read back as absent.
/// palette.declare("holmium ore");
/// assert!(palette.color("holmium ore").is_none());
/// assert!(palette.color("unobtainium").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    cells: HashMap<String, Option<Rgb>>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a cell name, creating an uncolored entry.
    ///
    /// Idempotent: re-declaring an existing name keeps its current color.
    pub fn declare(&mut self, name: &str) {
        self.cells.entry(name.to_string()).or_insert(None);
    }

    /// Whether the name has been declared (colored or not).
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// Number of declared cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells have been declared.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Assigns a color to a declared cell, replacing any prior color.
    ///
    /// Accepts 3- or 6-digit hex with an optional `#`; the stored form is
    /// always normalized `#rrggbb`. Unknown names and malformed hex are
    /// diagnosed and leave the palette untouched.
    pub fn set_color(&mut self, name: &str, hex: &str) -> Result<()> {
        let rgb = Rgb::from_hex(hex).ok_or_else(|| TintError::InvalidHex {
            input: hex.to_string(),
        })?;
        match self.cells.get_mut(name) {
            Some(slot) => {
                *slot = Some(rgb);
                Ok(())
            }
            None => {
                warn!("cannot color unknown cell {name:?}");
                Err(TintError::UnknownCell {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Clears a cell's color, leaving the entry declared but uncolored.
    pub fn clear_color(&mut self, name: &str) -> Result<()> {
        match self.cells.get_mut(name) {
            Some(slot) => {
                *slot = None;
                Ok(())
            }
            None => {
                warn!("cannot clear unknown cell {name:?}");
                Err(TintError::UnknownCell {
                    name: name.to_string(),
                })
            }
        }
    }

    /// The cell's current color, or `None` if uncolored or undeclared.
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.cells.get(name).copied().flatten()
    }

    /// The cell's current color as a `#rrggbb` hex string.
    pub fn color_hex(&self, name: &str) -> Option<String> {
        self.color(name).map(Rgb::to_hex)
    }

    /// Black or white, whichever reads best over the cell's color.
    ///
    /// Display layers pair this with the background when painting a cell.
    pub fn text_color(&self, name: &str) -> Rgb {
        contrasting_text_color(self.color(name))
    }

    /// Iterates over declared names and their colors, in no fixed order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, Option<Rgb>)> {
        self.cells.iter().map(|(name, rgb)| (name.as_str(), *rgb))
    }

    /// Stores a derived color, declaring the name if needed.
    pub(crate) fn store(&mut self, name: &str, rgb: Rgb) {
        self.cells.insert(name.to_string(), Some(rgb));
    }
}
