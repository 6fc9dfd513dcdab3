use crate::foundation::core::{FrameSpan, clamp01};

/// Maps frame numbers to image asset paths.
///
/// Pre-rendered asset sets are named with a zero-padded 6-digit suffix
/// (frame 42 of `images/carro3/carro3_*.jpg` is `carro3_000042.jpg`); the
/// padding is a compatibility contract, not a formatting choice.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FramePathTemplate {
    pub dir: String,
    pub stem: String,
    pub ext: String,
}

impl FramePathTemplate {
    pub fn new(dir: impl Into<String>, stem: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            ext: ext.into(),
        }
    }

    pub fn path_for(&self, frame: u32) -> String {
        format!("{}/{}_{:06}.{}", self.dir, self.stem, frame, self.ext)
    }
}

/// A pre-rendered image sequence animated by discrete frame substitution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSequence {
    pub span: FrameSpan,
    pub template: FramePathTemplate,
}

impl FrameSequence {
    pub fn new(span: FrameSpan, template: FramePathTemplate) -> Self {
        Self { span, template }
    }

    pub fn total_frames(&self) -> u32 {
        self.span.total_frames()
    }

    /// Map scroll progress to a frame number.
    ///
    /// Pure and deterministic: `floor(progress * (total - 1)) + start`, with
    /// progress clamped to `[0, 1]` first. The result is always within the
    /// span and monotonically non-decreasing in `progress`.
    pub fn compute_frame(&self, progress: f64) -> u32 {
        let last = f64::from(self.total_frames() - 1);
        (clamp01(progress) * last).floor() as u32 + self.span.start
    }

    /// Asset path for a frame number, clamped into the span.
    pub fn frame_path(&self, frame: u32) -> String {
        self.template.path_for(self.span.clamp(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
