use glam::{Mat4, Vec3};

use crate::viewer::{
    geometry::{Aabb, Geometry},
    material::Material,
};

/// One mesh: a geometry and its material slots (at least one).
#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Geometry,
    pub materials: Vec<Material>,
}

/// Node in the loaded model hierarchy.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    /// Local transform relative to the parent node.
    pub transform: Mat4,
    pub mesh: Option<Mesh>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Visit every mesh depth-first with its accumulated world transform.
    pub fn visit_meshes(&self, parent: Mat4, f: &mut impl FnMut(&Mesh, Mat4)) {
        let world = parent * self.transform;
        if let Some(mesh) = &self.mesh {
            f(mesh, world);
        }
        for child in &self.children {
            child.visit_meshes(world, f);
        }
    }

    /// Visit every mesh mutably, depth-first.
    pub fn visit_meshes_mut(&mut self, f: &mut impl FnMut(&mut Mesh)) {
        if let Some(mesh) = &mut self.mesh {
            f(mesh);
        }
        for child in &mut self.children {
            child.visit_meshes_mut(f);
        }
    }
}

/// A freshly loaded car model plus the root placement computed by
/// normalization.
///
/// Recreated from scratch for every load or selection change; the previous
/// hierarchy is discarded whole, never patched.
#[derive(Clone, Debug)]
pub struct CarModel {
    pub root: SceneNode,
    /// Uniform scale applied to the whole hierarchy.
    pub scale: f32,
    /// Root translation applied after scaling.
    pub translation: Vec3,
}

impl CarModel {
    pub fn new(root: SceneNode) -> Self {
        Self {
            root,
            scale: 1.0,
            translation: Vec3::ZERO,
        }
    }

    /// World-space box of the unscaled hierarchy, folded over every mesh.
    /// Uses cached per-geometry boxes when present, raw vertices otherwise.
    pub fn world_aabb(&self) -> Aabb {
        let mut out = Aabb::EMPTY;
        self.root.visit_meshes(Mat4::IDENTITY, &mut |mesh, world| {
            let local = match mesh.geometry.aabb {
                Some(aabb) if !aabb.is_empty() => aabb.transform(world),
                _ => Aabb::from_points(
                    mesh.geometry
                        .positions
                        .iter()
                        .map(|&p| world.transform_point3(p)),
                ),
            };
            out = out.union(local);
        });
        out
    }

    pub fn mesh_count(&self) -> usize {
        let mut n = 0;
        self.root.visit_meshes(Mat4::IDENTITY, &mut |_, _| n += 1);
        n
    }

    /// Material slots across the hierarchy, paired with their classification.
    pub fn material_slots(&self) -> Vec<(String, crate::viewer::material::MaterialClass)> {
        let mut out = Vec::new();
        self.root.visit_meshes(Mat4::IDENTITY, &mut |mesh, _| {
            for material in &mesh.materials {
                out.push((material.name().to_string(), material.classify()));
            }
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/scene.rs"]
mod tests;
