//! Declarative scheme definitions: tables, manual colors, and derivation
//! ops, loaded from YAML and applied to a [`Palette`].
//!
//! A scheme is the data equivalent of a hand-written setup script: declare
//! the tables, pin down the colors you know, then let interpolation,
//! analogies, and completion passes fill in the rest.
//!
//! # Example
//!
//! ```rust
//! use tintgrid::{Palette, Scheme};
//!
//! let scheme = Scheme::from_yaml(r##"
//! tables:
//!   - id: rare-earths
//!     title: Rare earths
//!     rows:
//!       - [yerbium plate, yerbium ore]
//!       - [holmium plate, holmium ore]
//!
//! colors:
//!   holmium plate: "#c0929f"
//!   holmium ore: "#a16f77"
//!   yerbium plate: "#c4b39b"
//!
//! ops:
//!   - complete:
//!       table: rare-earths
//! "##).unwrap();
//!
//! let mut palette = Palette::new();
//! let report = scheme.apply(&mut palette).unwrap();
//! assert_eq!(report.completions, 1);
//! assert!(palette.color("yerbium ore").is_some());
//! ```
//!
//! Ops run in document order. A derivation whose source colors are missing
//! is diagnosed and skipped, never fatal; referencing a table id the scheme
//! does not define is a configuration error and fails the whole apply.

use std::collections::{BTreeMap, HashMap};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analogy::{analogy3, analogy4, interpolate};
use crate::error::{Result, TintError};
use crate::grid::{complete_table, Grid};
use crate::registry::Palette;

/// A full scheme document: table shapes, manual colors, derivation ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheme {
    /// Tables of named cells, registered before any color is assigned.
    #[serde(default)]
    pub tables: Vec<TableDef>,
    /// Manual color assignments, applied after registration.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// Derivation ops, run in order after manual colors.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub ops: Vec<Op>,
}

/// One table of cells. Rows may be ragged; they pad to rectangular.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    /// Unique id, referenced by `complete` ops.
    pub id: String,
    /// Display title for the rendering layer.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional column headers for the rendering layer.
    #[serde(default)]
    pub headers: Option<Vec<String>>,
    /// Rows of cell names; empty strings are blanks.
    pub rows: Vec<Vec<String>>,
}

impl TableDef {
    /// Builds the table's grid shape.
    pub fn grid(&self) -> Grid {
        Grid::from_rows(&self.rows)
    }
}

/// A single derivation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Color `target` so that `a` is to `b` as `b` is to `target`.
    Analogy3 { a: String, b: String, target: String },
    /// Color `target` so that `a` is to `b` as `c` is to `target`.
    Analogy4 {
        a: String,
        b: String,
        c: String,
        target: String,
    },
    /// Color `target` a fraction `t` of the way from `a` to `c`.
    Interpolate {
        a: String,
        target: String,
        c: String,
        t: f64,
    },
    /// Run one completion pass over a table.
    Complete { table: String },
    /// Run completion passes over a table until one reports zero.
    CompleteFully { table: String },
}

/// What a [`Scheme::apply`] run accomplished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeReport {
    /// Cells newly declared while registering tables.
    pub cells_declared: usize,
    /// Manual colors successfully assigned.
    pub colors_assigned: usize,
    /// Manual colors skipped (malformed hex or unknown cell).
    pub colors_skipped: usize,
    /// Derivation ops skipped for missing source colors.
    pub ops_skipped: usize,
    /// Cells colored by completion passes, across all `complete` ops.
    pub completions: usize,
}

impl Scheme {
    /// Parses a scheme from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Scheme> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Registers every table's cells, assigns manual colors, then runs the
    /// ops in order.
    ///
    /// Skippable failures (duplicate names, bad or misaddressed colors,
    /// derivations with missing sources) are diagnosed, counted in the
    /// report, and do not stop the run. Referencing an undefined table id
    /// returns [`TintError::UnknownTable`].
    pub fn apply(&self, palette: &mut Palette) -> Result<SchemeReport> {
        let mut report = SchemeReport::default();

        let mut grids: HashMap<&str, Grid> = HashMap::new();
        for table in &self.tables {
            if grids.contains_key(table.id.as_str()) {
                warn!("duplicate table id {:?}; keeping the first", table.id);
                continue;
            }
            let grid = table.grid();
            let before = palette.len();
            grid.register(palette);
            report.cells_declared += palette.len() - before;
            grids.insert(&table.id, grid);
        }

        for (name, hex) in &self.colors {
            match palette.set_color(name, hex) {
                Ok(()) => report.colors_assigned += 1,
                Err(err) => {
                    warn!("skipping color for {name:?}: {err}");
                    report.colors_skipped += 1;
                }
            }
        }

        for op in &self.ops {
            let result = match op {
                Op::Analogy3 { a, b, target } => analogy3(palette, a, b, target),
                Op::Analogy4 { a, b, c, target } => analogy4(palette, a, b, c, target),
                Op::Interpolate { a, target, c, t } => interpolate(palette, a, target, c, *t),
                Op::Complete { table } => {
                    let grid = Self::grid_for(&grids, table)?;
                    report.completions += complete_table(palette, grid);
                    Ok(())
                }
                Op::CompleteFully { table } => {
                    let grid = Self::grid_for(&grids, table)?;
                    loop {
                        let pass = complete_table(palette, grid);
                        report.completions += pass;
                        if pass == 0 {
                            break;
                        }
                    }
                    Ok(())
                }
            };
            if let Err(err) = result {
                if matches!(err, TintError::MissingSourceColor { .. }) {
                    warn!("skipping op: {err}");
                    report.ops_skipped += 1;
                } else {
                    // Table lookups are configuration errors, not data gaps.
                    return Err(err);
                }
            }
        }

        Ok(report)
    }

    fn grid_for<'a>(grids: &'a HashMap<&str, Grid>, id: &str) -> Result<&'a Grid> {
        grids.get(id).ok_or_else(|| TintError::UnknownTable {
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Parsing
    // =====================================================================

    #[test]
    fn parses_tables_colors_and_ops() {
        let scheme = Scheme::from_yaml(
            r##"
tables:
  - id: acids
    title: Acids
    headers: [Acid, Salt, Gas]
    rows:
      - [nitric acid, niter, nox gas]
      - [sulfuric acid, salt cake, sulfur dioxide]
colors:
  nitric acid: "#e05950"
ops:
  - interpolate:
      a: nitric acid
      target: mid acid
      c: sulfuric acid
      t: 0.5
  - complete:
      table: acids
"##,
        )
        .unwrap();

        assert_eq!(scheme.tables.len(), 1);
        assert_eq!(scheme.tables[0].id, "acids");
        assert_eq!(scheme.tables[0].headers.as_ref().unwrap().len(), 3);
        assert_eq!(scheme.colors.len(), 1);
        assert_eq!(scheme.ops.len(), 2);
        assert!(matches!(scheme.ops[0], Op::Interpolate { t, .. } if t == 0.5));
        assert!(matches!(&scheme.ops[1], Op::Complete { table } if table == "acids"));
    }

    #[test]
    fn sections_are_optional() {
        let scheme = Scheme::from_yaml("tables: []").unwrap();
        assert!(scheme.colors.is_empty());
        assert!(scheme.ops.is_empty());

        assert!(Scheme::from_yaml("nonsense: [").is_err());
    }

    // =====================================================================
    // Application
    // =====================================================================

    #[test]
    fn apply_registers_colors_and_completes() {
        let scheme = Scheme::from_yaml(
            r##"
tables:
  - id: ores
    rows:
      - [iron ore, iron plate]
      - [copper ore, copper plate]
colors:
  iron ore: "#617b87"
  iron plate: "#969696"
  copper ore: "#ae6c47"
ops:
  - complete:
      table: ores
"##,
        )
        .unwrap();

        let mut palette = Palette::new();
        let report = scheme.apply(&mut palette).unwrap();
        assert_eq!(report.cells_declared, 4);
        assert_eq!(report.colors_assigned, 3);
        assert_eq!(report.completions, 1);
        assert!(palette.color("copper plate").is_some());
    }

    #[test]
    fn unknown_table_fails_apply() {
        let scheme = Scheme::from_yaml(
            r#"
ops:
  - complete:
      table: missing
"#,
        )
        .unwrap();
        let mut palette = Palette::new();
        let err = scheme.apply(&mut palette).unwrap_err();
        assert!(matches!(err, TintError::UnknownTable { ref id } if id == "missing"));
    }

    #[test]
    fn bad_colors_are_skipped_not_fatal() {
        let scheme = Scheme::from_yaml(
            r##"
tables:
  - id: t
    rows:
      - [a, b]
colors:
  a: "#c0929f"
  b: "zzz"
  nobody: "#ffffff"
"##,
        )
        .unwrap();
        let mut palette = Palette::new();
        let report = scheme.apply(&mut palette).unwrap();
        assert_eq!(report.colors_assigned, 1);
        assert_eq!(report.colors_skipped, 2);
        assert_eq!(palette.color_hex("a").as_deref(), Some("#c0929f"));
    }

    #[test]
    fn derivations_missing_sources_are_skipped() {
        let scheme = Scheme::from_yaml(
            r##"
tables:
  - id: t
    rows:
      - [a, b, c]
colors:
  a: "#ff0000"
ops:
  - analogy3:
      a: a
      b: b
      target: c
"##,
        )
        .unwrap();
        let mut palette = Palette::new();
        let report = scheme.apply(&mut palette).unwrap();
        assert_eq!(report.ops_skipped, 1);
        assert!(palette.color("c").is_none());
    }

    #[test]
    fn duplicate_table_ids_keep_the_first() {
        let scheme = Scheme::from_yaml(
            r#"
tables:
  - id: t
    rows:
      - [a, b]
  - id: t
    rows:
      - [x, y]
"#,
        )
        .unwrap();
        let mut palette = Palette::new();
        scheme.apply(&mut palette).unwrap();
        assert!(palette.contains("a"));
        // The shadowed table never registers its cells.
        assert!(!palette.contains("x"));
    }
}
