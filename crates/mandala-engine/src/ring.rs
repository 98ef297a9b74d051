use mandala_core::{Point, Settings};
use mandala_motifs::Knobs;

/// Everything a pattern handler needs to fill one ring.
#[derive(Debug, Clone, Copy)]
pub struct Ring<'a> {
    pub settings: &'a Settings,
    pub knobs: Knobs,
    pub center: Point,
    /// 1-based ring index.
    pub index: u32,
    pub radius: f64,
    /// Distance between consecutive rings before the center scale.
    pub step: f64,
    pub angle_step: f64,
    /// Half an angular step on even rings when segment offset is on.
    pub angle_offset: f64,
}

impl<'a> Ring<'a> {
    pub fn new(settings: &'a Settings, knobs: Knobs, center: Point, index: u32) -> Self {
        let angle_step = 360.0 / settings.segments as f64;
        let step = (settings.radius / settings.rings as f64) * settings.spacing_multiplier;
        let scale = if index == 1 { settings.center_scale } else { 1.0 };
        let angle_offset = if settings.segment_offset && index % 2 == 0 { angle_step / 2.0 } else { 0.0 };

        Self {
            settings,
            knobs,
            center,
            index,
            radius: step * index as f64 * scale,
            step,
            angle_step,
            angle_offset,
        }
    }

    pub fn segments(&self) -> u32 {
        self.settings.segments
    }

    /// Angle of `segment` on this ring, before the global rotation.
    pub fn segment_angle(&self, segment: u32) -> f64 {
        segment as f64 * self.angle_step + self.angle_offset
    }

    pub fn is_outermost(&self) -> bool {
        self.index == self.settings.rings
    }
}
