//! Motif builders. Each builder is a pure function of a center point, a
//! radius, an angle and the intensity [`Knobs`]; none of them reads the
//! pattern settings or shares state, so each can be exercised on its own.

pub mod dots;
pub mod mehndi;
pub mod ornaments;
pub mod paisley;
pub mod peacock;
pub mod petal;
pub mod ribbon;
pub mod star;

pub use dots::{bead, mehndi_border, ring_filler_dots};
pub use mehndi::mehndi_curve;
pub use ornaments::{cypress_tree, diya, elephant, interlaced_triangles, kalash, om_symbol};
pub use paisley::paisley_teardrop;
pub use peacock::peacock_motif;
pub use petal::{lotus_petal, mango_leaf};
pub use ribbon::ribbon_segment;
pub use star::rangoli_shape;

/// Intensity knobs read by the builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knobs {
    /// Bend of petal curves. Range: 0.0..1.0
    pub petal_curvature: f64,
    /// Secondary detail density. Range: 0.0..1.0
    pub detail_density: f64,
    /// Decorative dot density. Range: 0.0..1.0
    pub ornament_complexity: f64,
    /// Base stroke width, used to size dots and ticks.
    pub line_weight: f64,
    /// Global rotation in degrees, added to every motif angle.
    pub rotation_offset: f64,
}

impl Default for Knobs {
    fn default() -> Self {
        Self {
            petal_curvature: 0.5,
            detail_density: 0.5,
            ornament_complexity: 0.5,
            line_weight: 2.0,
            rotation_offset: 0.0,
        }
    }
}
