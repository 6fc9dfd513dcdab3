//! Scroll-synchronized frame animation as a pure reducer.
//!
//! The hosting view owns an [`Animator`] for exactly one mounted sequence:
//! preload begins on mount, scroll/resize listeners are passive adapters that
//! feed [`AnimatorEvent`]s, and the whole state is discarded on unmount.
//! Rapid-fire viewport events coalesce: only the latest metrics are applied,
//! and only on [`AnimatorEvent::Tick`] (the animation-frame boundary).

use std::collections::BTreeSet;

use crate::{foundation::core::clamp01, sequence::frames::FrameSequence};

/// Geometry of the hosting scroll container relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    /// Container top edge relative to the viewport top (negative once the
    /// container has scrolled above it).
    pub element_top: f64,
    pub element_height: f64,
}

impl ScrollMetrics {
    /// Normalized `[0, 1]` measure of how far the container has traveled
    /// through the viewport: 0 when its top is about to enter from below,
    /// 1 once it has fully scrolled past.
    pub fn progress(self) -> f64 {
        if self.element_top + self.element_height < 0.0 {
            return 1.0;
        }
        let denom = self.viewport_height + self.element_height;
        if denom <= 0.0 {
            return 0.0;
        }
        clamp01((self.viewport_height - self.element_top) / denom)
    }
}

/// What the host view should draw for the current state.
///
/// Never a broken image: a frame is only named here when it (or a loaded
/// stand-in) actually decoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameDisplay {
    /// Gradient/spinner placeholder with preload progress in `[0, 1]`.
    Placeholder { progress: f64 },
    /// Render exactly this frame.
    Frame(u32),
}

/// Input to the reducer. Load completions and browser events are delivered
/// one at a time on the single UI thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatorEvent {
    /// A frame load settled, successfully or as a tolerated failure.
    FrameSettled { frame: u32, ok: bool },
    /// Scroll or resize reported fresh container geometry.
    Viewport(ScrollMetrics),
    /// Animation-frame tick; applies the latest stashed geometry.
    Tick,
}

/// State machine for one mounted frame sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    seq: FrameSequence,
    loaded: BTreeSet<u32>,
    failed: BTreeSet<u32>,
    pending: Option<ScrollMetrics>,
    current: u32,
    last_rendered: Option<u32>,
}

impl Animator {
    pub fn new(seq: FrameSequence) -> Self {
        let current = seq.span.start;
        Self {
            seq,
            loaded: BTreeSet::new(),
            failed: BTreeSet::new(),
            pending: None,
            current,
            last_rendered: None,
        }
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.seq
    }

    pub fn current_frame(&self) -> u32 {
        self.current
    }

    /// True once every frame in the span has settled (loaded or failed).
    pub fn is_fully_settled(&self) -> bool {
        self.loaded.len() + self.failed.len() == self.seq.total_frames() as usize
    }

    pub fn preload_progress(&self) -> f64 {
        let total = self.seq.total_frames();
        if total == 0 {
            return 1.0;
        }
        (self.loaded.len() + self.failed.len()) as f64 / f64::from(total)
    }

    /// Pure reducer: same state and event always produce the same state.
    ///
    /// Viewport events only stash metrics (latest wins); frame updates happen
    /// on `Tick`, and only once the full preload set has settled; partial
    /// availability must not flicker frames in.
    pub fn apply(mut self, event: AnimatorEvent) -> Self {
        match event {
            AnimatorEvent::FrameSettled { frame, ok } => {
                if !self.seq.span.contains(frame) {
                    return self;
                }
                if ok {
                    self.loaded.insert(frame);
                } else {
                    self.failed.insert(frame);
                }
                self
            }
            AnimatorEvent::Viewport(metrics) => {
                self.pending = Some(metrics);
                self
            }
            AnimatorEvent::Tick => {
                if !self.is_fully_settled() {
                    // Keep the stash so the first post-preload tick applies it.
                    return self;
                }
                let Some(metrics) = self.pending.take() else {
                    return self;
                };
                let frame = self.seq.compute_frame(metrics.progress());
                if frame != self.current && self.seq.span.contains(frame) {
                    self.current = frame;
                }
                if self.loaded.contains(&self.current) {
                    self.last_rendered = Some(self.current);
                }
                self
            }
        }
    }

    /// Display policy: placeholder until everything settles; then the current
    /// frame, falling back to the last rendered frame, then the nearest
    /// loaded one, and only then the placeholder again.
    pub fn display(&self) -> FrameDisplay {
        if !self.is_fully_settled() {
            return FrameDisplay::Placeholder {
                progress: self.preload_progress(),
            };
        }
        if self.loaded.contains(&self.current) {
            return FrameDisplay::Frame(self.current);
        }
        if let Some(prev) = self.last_rendered {
            return FrameDisplay::Frame(prev);
        }
        match self.nearest_loaded(self.current) {
            Some(frame) => FrameDisplay::Frame(frame),
            None => FrameDisplay::Placeholder { progress: 1.0 },
        }
    }

    fn nearest_loaded(&self, frame: u32) -> Option<u32> {
        self.loaded
            .iter()
            .copied()
            .min_by_key(|&f| (f.abs_diff(frame), f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/animator.rs"]
mod tests;
