use std::{
    collections::{BTreeSet, HashMap},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    foundation::error::ShowroomResult,
    sequence::frames::FrameSequence,
};

/// Prepared raster frame in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> ShowroomResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Source of frame images, keyed by sequence-relative asset path.
///
/// `Sync` so the preloader can fan requests out across worker threads.
pub trait FrameLoader: Sync {
    fn load(&self, path: &str) -> ShowroomResult<PreparedImage>;
}

/// Filesystem-backed loader rooted at an asset directory.
#[derive(Clone, Debug)]
pub struct FsFrameLoader {
    root: PathBuf,
}

impl FsFrameLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FrameLoader for FsFrameLoader {
    fn load(&self, path: &str) -> ShowroomResult<PreparedImage> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full)
            .with_context(|| format!("read frame bytes from '{}'", full.display()))?;
        decode_image(&bytes)
    }
}

/// Snapshot of preload completion, reported once per settled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadProgress {
    pub settled: u32,
    pub total: u32,
}

impl PreloadProgress {
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        f64::from(self.settled) / f64::from(self.total)
    }
}

/// Outcome of preloading every frame in a sequence.
///
/// Every frame settles exactly once, as a success or a tolerated failure:
/// `loaded_count() + failed_count() == total_frames()`.
#[derive(Clone, Debug, Default)]
pub struct PreloadReport {
    frames: HashMap<u32, PreparedImage>,
    failed: BTreeSet<u32>,
    total: u32,
}

impl PreloadReport {
    pub fn total_frames(&self) -> u32 {
        self.total
    }

    pub fn loaded_count(&self) -> u32 {
        self.frames.len() as u32
    }

    pub fn failed_count(&self) -> u32 {
        self.failed.len() as u32
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count() + self.failed_count() == self.total
    }

    pub fn is_loaded(&self, frame: u32) -> bool {
        self.frames.contains_key(&frame)
    }

    pub fn failed_frames(&self) -> &BTreeSet<u32> {
        &self.failed
    }

    pub fn image_for(&self, frame: u32) -> Option<&PreparedImage> {
        self.frames.get(&frame)
    }

    /// Closest successfully loaded frame, preferring the earlier one on ties.
    pub fn nearest_loaded(&self, frame: u32) -> Option<u32> {
        self.frames
            .keys()
            .copied()
            .min_by_key(|&f| (f.abs_diff(frame), f))
    }
}

/// Issue a load for every frame in the span concurrently and wait until each
/// one settles.
///
/// All requests go out up front without throttling; fine at the
/// dozens-of-frames scale these sequences use. A failing frame is logged and
/// skipped, never retried, and never blocks the others. `on_progress` fires
/// once per settled frame with the running count.
#[tracing::instrument(skip_all, fields(start = seq.span.start, end = seq.span.end))]
pub fn preload_all<L>(
    seq: &FrameSequence,
    loader: &L,
    on_progress: impl Fn(PreloadProgress) + Sync,
) -> PreloadReport
where
    L: FrameLoader + ?Sized,
{
    let total = seq.total_frames();
    let settled = AtomicU32::new(0);

    let results: Vec<(u32, Option<PreparedImage>)> = seq
        .span
        .iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|frame| {
            let path = seq.frame_path(frame);
            let image = match loader.load(&path) {
                Ok(image) => Some(image),
                Err(err) => {
                    tracing::warn!(frame, path = %path, %err, "failed to load sequence frame");
                    None
                }
            };
            let done = settled.fetch_add(1, Ordering::SeqCst) + 1;
            on_progress(PreloadProgress {
                settled: done,
                total,
            });
            (frame, image)
        })
        .collect();

    let mut report = PreloadReport {
        total,
        ..PreloadReport::default()
    };
    for (frame, image) in results {
        match image {
            Some(image) => {
                report.frames.insert(frame, image);
            }
            None => {
                report.failed.insert(frame);
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/preload.rs"]
mod tests;
