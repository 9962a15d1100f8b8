//! # Tintgrid - Color-Analogy Palette Design
//!
//! `tintgrid` assigns colors to grids of named cells — items and fluids in
//! a crafting game, say — from a handful of manual picks. Related cells get
//! visually consistent colors by proportional relationships in HSV space:
//! if you know how "ore" relates to "plate" for one metal, the same shift
//! derives the plate color for every other metal.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: registry mapping cell names to their current colors
//! - [`analogy4`] / [`analogy3`]: derive a color from an `A:B :: C:D`
//!   relationship; [`interpolate`]: blend two colors along the shorter
//!   hue arc
//! - [`Grid`] + [`complete_table`]: scan 2×2 squares of named cells and
//!   fill each corner whose three neighbors are already colored
//! - [`Scheme`]: YAML document bundling tables, manual colors, and ops
//!
//! Hex strings (`#rrggbb`, lowercase) are the interchange format; display
//! concerns such as building the actual tables stay with the caller, which
//! can ask [`Palette::text_color`] for a readable text color per cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use tintgrid::{complete_table, Grid, Palette};
//!
//! let mut palette = Palette::new();
//! let grid = Grid::from_rows([
//!     ["iron ore", "iron plate"],
//!     ["copper ore", "copper plate"],
//! ]);
//! grid.register(&mut palette);
//!
//! palette.set_color("iron ore", "#617b87").unwrap();
//! palette.set_color("iron plate", "#969696").unwrap();
//! palette.set_color("copper ore", "#ae6c47").unwrap();
//!
//! // copper plate gets the ore→plate shift observed on iron.
//! let completed = complete_table(&mut palette, &grid);
//! assert_eq!(completed, 1);
//! assert!(palette.color_hex("copper plate").is_some());
//! ```
//!
//! ## Failure Model
//!
//! Nothing here is fatal. Malformed hex parses to `None`, derivations with
//! missing source colors abort without touching their target, and unknown
//! cell lookups read back as absent. Diagnostics go through the [`log`]
//! facade at warn level.

pub mod analogy;
pub mod color;
pub mod error;
pub mod grid;
pub mod registry;
pub mod scheme;

pub use analogy::{analogy3, analogy4, interpolate};
pub use color::{contrasting_text_color, Hsv, Rgb};
pub use error::{Result, TintError};
pub use grid::{complete_table, Cell, Grid};
pub use registry::Palette;
pub use scheme::{Op, Scheme, SchemeReport, TableDef};
