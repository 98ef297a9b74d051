//! Epoch-guarded ASCII and glyph-vector pipelines.
//!
//! Each run has exactly one suspension point: the blocking decode/render
//! step, executed on tokio's blocking pool. After it resumes, the run
//! commits to its stage's output slot only if no newer run of the same
//! stage has started meanwhile. The ASCII and glyph stages never cancel
//! each other.

use std::sync::Arc;

use crossbeam::channel::{bounded, Receiver, Sender};
use mandala_core::AsciiSettings;

use crate::encoder::encode;
use crate::epoch::{Epoch, Ticket};
use crate::export::strip_trailing_blank;
use crate::glyph::GlyphConfig;
use crate::raster::Rasterizer;
use crate::vectorize::vectorize;

/// A committed pipeline result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Ascii(String),
    Vector(String),
}

impl Artifact {
    pub fn text(&self) -> &str {
        match self {
            Artifact::Ascii(text) | Artifact::Vector(text) => text,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A non-empty artifact was committed.
    Committed,
    /// A newer run started before this one resumed; nothing was committed.
    Superseded,
    /// The empty-result sentinel was committed (empty input or failure).
    Empty,
}

/// Single-value output slot. A commit replaces any value the consumer has
/// not picked up yet.
#[derive(Debug, Clone)]
pub struct OutputSlot {
    tx: Sender<Artifact>,
    stale: Receiver<Artifact>,
}

/// Create an output slot and the receiver its consumer reads from.
pub fn output_slot() -> (OutputSlot, Receiver<Artifact>) {
    let (tx, rx) = bounded(1);
    (OutputSlot { tx, stale: rx.clone() }, rx)
}

impl OutputSlot {
    /// Non-blocking commit. Returns `true` if the artifact was stored.
    pub fn commit(&self, artifact: Artifact) -> bool {
        while self.stale.try_recv().is_ok() {}
        self.tx.try_send(artifact).is_ok()
    }
}

/// Generation counter and output of one stage.
struct Stage {
    epoch: Epoch,
    slot: OutputSlot,
}

impl Stage {
    fn new(slot: OutputSlot) -> Self {
        Self { epoch: Epoch::new(), slot }
    }

    fn commit(&self, ticket: &Ticket, artifact: Artifact) -> Outcome {
        if !ticket.is_current() {
            log::debug!("run {} superseded, discarding result", ticket.generation());
            return Outcome::Superseded;
        }
        let empty = artifact.text().is_empty();
        if !self.slot.commit(artifact) {
            log::warn!("output slot closed, dropping run {}", ticket.generation());
        }
        if empty {
            Outcome::Empty
        } else {
            Outcome::Committed
        }
    }
}

struct Shared<R> {
    rasterizer: R,
    ascii: Stage,
    glyphs: Stage,
}

/// Raster-to-ASCII and ASCII-to-vector conversion, each stage with its own
/// epoch and output slot.
///
/// Within a stage the latest run wins. Cloning is cheap; clones share both
/// epochs, so a run started on any clone supersedes runs of the same stage
/// in flight on the others.
pub struct AsciiPipeline<R> {
    shared: Arc<Shared<R>>,
}

impl<R> Clone for AsciiPipeline<R> {
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl<R: Rasterizer + Send + Sync + 'static> AsciiPipeline<R> {
    pub fn new(rasterizer: R, ascii_slot: OutputSlot, glyph_slot: OutputSlot) -> Self {
        Self {
            shared: Arc::new(Shared { rasterizer, ascii: Stage::new(ascii_slot), glyphs: Stage::new(glyph_slot) }),
        }
    }

    pub fn ascii_epoch(&self) -> &Epoch {
        &self.shared.ascii.epoch
    }

    pub fn glyph_epoch(&self) -> &Epoch {
        &self.shared.glyphs.epoch
    }

    /// Rasterize `document` and encode it as ASCII under `settings`.
    pub async fn generate(&self, document: String, settings: AsciiSettings) -> Outcome {
        let stage = &self.shared.ascii;
        let ticket = stage.epoch.begin();
        if settings.charset.is_empty() {
            return stage.commit(&ticket, Artifact::Ascii(String::new()));
        }

        let shared = self.shared.clone();
        let result = tokio::task::spawn_blocking(move || {
            let grid = shared.rasterizer.rasterize(document.as_bytes(), settings.columns)?;
            Ok::<_, String>(encode(&grid, &settings))
        })
        .await;

        let text = match result {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                log::warn!("ASCII generation produced no output: {e}");
                String::new()
            }
            Err(e) => {
                log::error!("ASCII worker failed: {e}");
                String::new()
            }
        };
        stage.commit(&ticket, Artifact::Ascii(text))
    }

    /// Render ASCII `text` as glyphs and merge them into one vector path.
    pub async fn vectorize(&self, text: String, config: GlyphConfig) -> Outcome {
        let stage = &self.shared.glyphs;
        let ticket = stage.epoch.begin();
        if text.is_empty() {
            return stage.commit(&ticket, Artifact::Vector(String::new()));
        }
        let rows: Vec<String> = strip_trailing_blank(&text).split('\n').map(str::to_string).collect();

        let result = tokio::task::spawn_blocking(move || vectorize(&rows, &config)).await;
        let svg = match result {
            Ok(Ok(svg)) => svg,
            Ok(Err(e)) => {
                log::warn!("glyph vectorization produced no output: {e}");
                String::new()
            }
            Err(e) => {
                log::error!("glyph worker failed: {e}");
                String::new()
            }
        };
        stage.commit(&ticket, Artifact::Vector(svg))
    }
}
