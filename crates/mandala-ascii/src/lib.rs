pub mod color;
pub mod encoder;
pub mod epoch;
pub mod export;
pub mod glyph;
pub mod luminance;
pub mod pipeline;
pub mod raster;
pub mod vectorize;

pub use encoder::{encode, encode_rows};
pub use epoch::{Epoch, Ticket};
pub use export::{export_png, strip_trailing_blank};
pub use glyph::{render_glyphs, GlyphConfig, GlyphRenderer};
pub use luminance::{grid_size, LuminanceGrid, Sample};
pub use pipeline::{output_slot, Artifact, AsciiPipeline, OutputSlot, Outcome};
pub use raster::{BitmapRasterizer, Rasterizer, SvgRasterizer};
pub use vectorize::{binarize, merge_rectangles, rectangles_path, vectorize, Bitmap, Rect};
