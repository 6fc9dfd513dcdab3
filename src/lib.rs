//! Showroom is a headless engine for scroll-driven car showcase experiences.
//!
//! Two loosely coupled subsystems sit side by side:
//!
//! 1. **Sequence**: maps vertical scroll position to a discrete frame index
//!    over a preloaded, pre-rendered image sequence (`Animator` and friends).
//!    Preload fans out up front, tolerates per-frame failures, and the
//!    display contract is "placeholder or a fully loaded frame".
//! 2. **Viewer**: takes a freshly loaded GLB hierarchy and classifies,
//!    simplifies, recolors, normalizes and attribute-fixes it as one atomic
//!    pass (`ViewerSession` / `process_model`). The contract is "placeholder
//!    or fully correct", never a partially processed model.
//!
//! Around them: the static vehicle catalog (the only data source), asset
//! availability probing, and offline optimization reporting.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure reducers**: scroll/load events drive plain `(state, event)`
//!   transitions, testable without any browser or renderer.
//! - **Supersession over locking**: everything is single-owner; re-entrant
//!   loads resolve by last-writer-wins tickets, not synchronization.
#![forbid(unsafe_code)]

mod catalog;
mod foundation;
mod optimize;
mod sequence;
mod viewer;

pub use catalog::model::{
    CarRecord, CarSpecs, CarType, PaintOption, builtin_catalog, find_car,
};
pub use catalog::probe::{Availability, FsModelProbe, ModelProbe, probe_catalog};
pub use foundation::color::Rgb;
pub use foundation::core::{FrameSpan, clamp01};
pub use foundation::error::{ShowroomError, ShowroomResult};
pub use optimize::compression::{
    CompressionEstimate, CompressionStrategy, ConnectionSpeed, ModelInfo,
    compression_recommendations, compression_strategies, estimate_compression, estimate_load_time,
};
pub use optimize::performance::{
    DeviceProfile, MobileOverrides, QualitySettings, QualityTier, TextureQuality, mobile_overrides,
    quality_tier_for,
};
pub use sequence::animator::{Animator, AnimatorEvent, FrameDisplay, ScrollMetrics};
pub use sequence::frames::{FramePathTemplate, FrameSequence};
pub use sequence::preload::{
    FrameLoader, FsFrameLoader, PreloadProgress, PreloadReport, PreparedImage, decode_image,
    preload_all,
};
pub use viewer::controls::{ControlsState, Environment, HOVER_SCALE, rotation_step};
pub use viewer::geometry::{Aabb, BoundingSphere, Geometry, ensure_shading_attributes};
pub use viewer::gltf::{MODEL_EXTENSION, is_valid_model_path, load_glb, placeholder_model};
pub use viewer::material::{
    Material, MaterialClass, PhysicalMaterial, StandardMaterial, TextureRef, apply_paint,
    classify_material, simplify_material,
};
pub use viewer::normalize::normalize_transform;
pub use viewer::pipeline::{
    LoadTicket, PaintSelection, ViewerPhase, ViewerSession, process_model,
};
pub use viewer::scene::{CarModel, Mesh, SceneNode};
