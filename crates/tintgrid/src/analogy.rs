//! Color derivation by proportional relationships in HSV space.
//!
//! The core operation is the 4-element analogy `A:B :: C:D` — the HSV shift
//! from A to B, applied starting at C, determines D. Hue deltas always take
//! the shorter way around the circle; saturation and value shift linearly
//! and clamp to `[0, 1]`.
//!
//! All operations read and write colors by cell name through a [`Palette`].
//! A missing source color aborts the operation and leaves the target
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use tintgrid::{analogy4, Palette};
//!
//! let mut palette = Palette::new();
//! for (name, hex) in [
//!     ("sulfur", "#d4c700"),
//!     ("sulfuric acid", "#fedb4f"),
//!     ("quicklime", "#99aabb"),
//! ] {
//!     palette.declare(name);
//!     palette.set_color(name, hex).unwrap();
//! }
//!
//! // sulfur : sulfuric acid :: quicklime : slaked lime
//! analogy4(&mut palette, "sulfur", "sulfuric acid", "quicklime", "slaked lime").unwrap();
//! assert!(palette.color("slaked lime").is_some());
//! ```

use log::{debug, warn};

use crate::color::Hsv;
use crate::error::{Result, TintError};
use crate::registry::Palette;

/// Normalizes the hue difference `to - from` into `[-0.5, 0.5]`.
///
/// Picks the shorter of the two arcs between the hues, so a shift from
/// 0.95 to 0.05 is +0.1, not -0.9.
pub(crate) fn hue_delta(from: f64, to: f64) -> f64 {
    let mut d = to - from;
    if d > 0.5 {
        d -= 1.0;
    }
    if d < -0.5 {
        d += 1.0;
    }
    d
}

/// Reads a cell's color as HSV, failing if it has none.
fn source_hsv(palette: &Palette, name: &str) -> Result<Hsv> {
    match palette.color(name) {
        Some(rgb) => Ok(rgb.to_hsv()),
        None => {
            warn!("color not set for cell {name:?} needed for derivation");
            Err(TintError::MissingSourceColor {
                name: name.to_string(),
            })
        }
    }
}

/// Colors cell `d` so that `a` is to `b` as `c` is to `d` in HSV space.
///
/// Requires colors for `a`, `b`, and `c`; otherwise fails with
/// [`TintError::MissingSourceColor`] and leaves `d` unmodified. The target
/// is declared on first use. Re-running with unchanged sources reproduces
/// the same result.
pub fn analogy4(palette: &mut Palette, a: &str, b: &str, c: &str, d: &str) -> Result<()> {
    let hsv_a = source_hsv(palette, a)?;
    let hsv_b = source_hsv(palette, b)?;
    let hsv_c = source_hsv(palette, c)?;

    let dh = hue_delta(hsv_a.h, hsv_b.h);
    let derived = Hsv {
        h: (hsv_c.h + dh).rem_euclid(1.0),
        s: (hsv_c.s + (hsv_b.s - hsv_a.s)).clamp(0.0, 1.0),
        v: (hsv_c.v + (hsv_b.v - hsv_a.v)).clamp(0.0, 1.0),
    };

    let rgb = derived.to_rgb();
    palette.store(d, rgb);
    debug!("set {d} ({}) from {a}:{b} :: {c}:{d}", rgb.to_hex());
    Ok(())
}

/// Colors cell `c` so that `a` is to `b` as `b` is to `c`.
///
/// Extrapolates the A→B trend one step past B; shorthand for
/// [`analogy4`]`(palette, a, b, b, c)`.
pub fn analogy3(palette: &mut Palette, a: &str, b: &str, c: &str) -> Result<()> {
    analogy4(palette, a, b, b, c)
}

/// Colors `target` a fraction `t` of the way from `a`'s color to `c`'s.
///
/// `t` is clamped to `[0, 1]`: 0 reproduces `a`'s color, 1 reproduces
/// `c`'s. Hue travels the shorter circular arc; saturation and value
/// interpolate linearly and clamp to `[0, 1]`. Requires colors for `a`
/// and `c`, else the target is left unmodified.
pub fn interpolate(palette: &mut Palette, a: &str, target: &str, c: &str, t: f64) -> Result<()> {
    let hsv_a = source_hsv(palette, a)?;
    let hsv_c = source_hsv(palette, c)?;

    let t = t.clamp(0.0, 1.0);
    let derived = Hsv {
        h: (hsv_a.h + hue_delta(hsv_a.h, hsv_c.h) * t).rem_euclid(1.0),
        s: (hsv_a.s + (hsv_c.s - hsv_a.s) * t).clamp(0.0, 1.0),
        v: (hsv_a.v + (hsv_c.v - hsv_a.v) * t).clamp(0.0, 1.0),
    };

    let rgb = derived.to_rgb();
    palette.store(target, rgb);
    debug!(
        "interpolated {target} ({}) between {a} and {c} at t={t}",
        rgb.to_hex()
    );
    Ok(())
}
