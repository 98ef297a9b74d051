pub mod point;
pub mod path;
pub mod geometry;
pub mod settings;
pub mod project;

pub use point::Point;
pub use path::{Command, Path};
pub use geometry::{star_polygon, GOLDEN_RATIO};
pub use settings::{AsciiSettings, AsciiSettingsPatch, PatternType, Settings, SettingsPatch, StrokeDash};
pub use project::{load_project, save_project, ProjectFile};
