pub mod buffer;
pub mod centerpiece;
pub mod document;
pub mod generator;
pub mod presets;
pub mod registry;
pub mod ring;

pub mod lotus;
pub mod mehndi;
pub mod paisley;
pub mod peacock;
pub mod rangoli;
pub mod traditional;

pub use buffer::{PathBuffer, PathId};
pub use document::{compact_document, render_document};
pub use generator::{generate, generate_paths, knobs_for};
pub use presets::{find_preset, presets, Preset};
pub use registry::{find_pattern, find_pattern_by_id, PatternEntry};
pub use ring::Ring;
