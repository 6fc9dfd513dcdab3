use std::path::Path;

use crate::{
    foundation::color::Rgb,
    foundation::error::ShowroomResult,
    viewer::geometry::ensure_shading_attributes,
    viewer::gltf::{is_valid_model_path, load_glb, placeholder_model},
    viewer::material::{MaterialClass, apply_paint, simplify_material},
    viewer::normalize::normalize_transform,
    viewer::scene::CarModel,
};

/// User-selected paint input: a hex-parsed color plus the metallic flag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaintSelection {
    pub color: Rgb,
    pub metallic: bool,
}

/// Lifecycle of one model-load cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerPhase {
    #[default]
    Idle,
    Loading,
    Processing,
    Ready,
    Failed,
}

/// Run the full processing pass over a freshly loaded hierarchy.
///
/// Stage order matters: classification reads material identity before
/// simplification rewrites it, recoloring touches body slots only, and
/// normalization sees the meshes' final vertex data. An error discards the
/// partially processed hierarchy whole; callers fall back to the placeholder,
/// never to a half-painted or unscaled model.
#[tracing::instrument(skip(model), fields(meshes = model.mesh_count()))]
pub fn process_model(
    mut model: CarModel,
    paint: PaintSelection,
    target_size: f32,
) -> ShowroomResult<CarModel> {
    let mut validation = Ok(());
    model.root.visit_meshes_mut(&mut |mesh| {
        if validation.is_ok() {
            validation = mesh.geometry.validate();
        }
    });
    validation?;

    model.root.visit_meshes_mut(&mut |mesh| {
        for material in &mut mesh.materials {
            let class = material.classify();
            *material = simplify_material(material.clone());
            if class == MaterialClass::Body {
                if let Some(standard) = material.as_standard_mut() {
                    apply_paint(standard, paint.color, paint.metallic);
                }
            }
        }
    });

    normalize_transform(&mut model, target_size);

    model
        .root
        .visit_meshes_mut(&mut |mesh| ensure_shading_attributes(&mut mesh.geometry));

    Ok(model)
}

/// Ticket identifying one in-flight load; stale tickets lose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Host-side session for the 3D viewer.
///
/// Owns the current model and phase, and resolves re-entrancy by
/// supersession: a newer `begin_load` wins, and results delivered for an
/// older ticket are discarded whole. Last-writer-wins, no locking: all
/// transitions happen on the single UI thread.
#[derive(Debug, Default)]
pub struct ViewerSession {
    phase: ViewerPhase,
    model: Option<CarModel>,
    generation: u64,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn model(&self) -> Option<&CarModel> {
        self.model.as_ref()
    }

    /// Begin a new load cycle, superseding any in-flight one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = ViewerPhase::Loading;
        LoadTicket(self.generation)
    }

    /// Deliver the raw hierarchy for `ticket` and run processing.
    ///
    /// Stale deliveries (a newer load began meanwhile) are discarded whole.
    /// On failure the placeholder replaces whatever was on screen.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        loaded: ShowroomResult<CarModel>,
        paint: PaintSelection,
        target_size: f32,
    ) -> ViewerPhase {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding superseded model load"
            );
            return self.phase();
        }

        self.phase = ViewerPhase::Processing;
        match loaded.and_then(|model| process_model(model, paint, target_size)) {
            Ok(model) => {
                self.model = Some(model);
                self.phase = ViewerPhase::Ready;
            }
            Err(err) => {
                tracing::error!(%err, "model processing failed; showing placeholder");
                self.model = Some(placeholder_model(paint.color, paint.metallic));
                self.phase = ViewerPhase::Failed;
            }
        }
        self.phase()
    }

    /// Immediately show the placeholder, superseding any in-flight load.
    /// Used for invalid model paths, which never get a load attempt.
    pub fn show_placeholder(&mut self, paint: PaintSelection) {
        self.generation += 1;
        self.model = Some(placeholder_model(paint.color, paint.metallic));
        self.phase = ViewerPhase::Ready;
    }

    /// Synchronous select-and-process path used by the CLI and tests.
    pub fn select_model(
        &mut self,
        path: &Path,
        paint: PaintSelection,
        target_size: f32,
    ) -> ViewerPhase {
        if !is_valid_model_path(&path.to_string_lossy()) {
            self.show_placeholder(paint);
            return self.phase();
        }
        let ticket = self.begin_load();
        let loaded = load_glb(path);
        self.finish_load(ticket, loaded, paint, target_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/pipeline.rs"]
mod tests;
