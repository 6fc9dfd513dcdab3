use glam::Vec3;

use crate::viewer::scene::CarModel;

/// Vertical lift applied after centering; asset origins are rarely at the
/// vehicle's visual center, and this keeps wheels near the ground plane.
const GROUND_LIFT_Y: f32 = 0.3;

/// Scale the model uniformly so its largest bounding-box dimension equals
/// `target_size`, recenter it on X/Z, and lift it slightly above the ground.
///
/// Runs after meshes are finalized so the box reflects final geometry.
/// Degenerate hierarchies (no vertices, zero extent) are left untouched.
pub fn normalize_transform(model: &mut CarModel, target_size: f32) {
    let aabb = model.world_aabb();
    if aabb.is_empty() {
        return;
    }
    let max_dim = aabb.max_dim();
    if max_dim <= 0.0 {
        return;
    }

    let scale = target_size / max_dim;
    let center = aabb.center();
    model.scale = scale;
    model.translation = Vec3::new(
        -center.x * scale,
        -center.y * scale + GROUND_LIFT_Y,
        -center.z * scale,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/normalize.rs"]
mod tests;
