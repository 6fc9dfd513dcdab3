use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::foundation::error::{ShowroomError, ShowroomResult};

/// Minimal axis-aligned box enclosing geometry, used for scaling, centering
/// and culling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// Identity for [`Aabb::union`].
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |aabb, p| Self {
            min: aabb.min.min(p),
            max: aabb.max.max(p),
        })
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_empty(self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_dim(self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Box enclosing the transformed corners of this box.
    pub fn transform(self, matrix: Mat4) -> Self {
        if self.is_empty() {
            return self;
        }
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];
        Self::from_points(corners.into_iter().map(|c| matrix.transform_point3(c)))
    }
}

/// Sphere enclosing a geometry, derived from the box center and the farthest
/// vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Indexed triangle geometry with optional shading attributes.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub normals: Option<Vec<Vec3>>,
    pub uvs: Option<Vec<Vec2>>,
    pub tangents: Option<Vec<Vec4>>,
    pub aabb: Option<Aabb>,
    pub sphere: Option<BoundingSphere>,
}

impl Geometry {
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Structural checks before processing: triangle-list indices in range,
    /// attribute arrays aligned with positions.
    pub fn validate(&self) -> ShowroomResult<()> {
        if self.indices.len() % 3 != 0 {
            return Err(ShowroomError::model(format!(
                "index count {} is not a triangle list",
                self.indices.len()
            )));
        }
        let vertex_count = self.positions.len();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(ShowroomError::model(format!(
                "index {bad} out of bounds for {vertex_count} vertices"
            )));
        }
        for (attr, len) in [
            ("normals", self.normals.as_ref().map(Vec::len)),
            ("uvs", self.uvs.as_ref().map(Vec::len)),
            ("tangents", self.tangents.as_ref().map(Vec::len)),
        ] {
            if let Some(len) = len {
                if len != vertex_count {
                    return Err(ShowroomError::model(format!(
                        "{attr} length {len} does not match {vertex_count} vertices"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Fill in the attributes shading needs: vertex normals when absent, tangents
/// when UVs exist without them (normal mapping requires tangent frames), and
/// fresh bounding volumes afterwards.
pub fn ensure_shading_attributes(geometry: &mut Geometry) {
    if geometry.normals.is_none() {
        geometry.normals = Some(compute_vertex_normals(
            &geometry.positions,
            &geometry.indices,
        ));
    }
    if geometry.tangents.is_none() {
        if let (Some(uvs), Some(normals)) = (geometry.uvs.as_deref(), geometry.normals.as_deref()) {
            geometry.tangents = Some(compute_tangents(
                &geometry.positions,
                uvs,
                normals,
                &geometry.indices,
            ));
        }
    }

    let aabb = Aabb::from_points(geometry.positions.iter().copied());
    geometry.aabb = Some(aabb);
    geometry.sphere = Some(bounding_sphere(&geometry.positions, aabb));
}

/// Area-weighted vertex normals from triangle topology. Vertices not touched
/// by any triangle get +Y.
fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| {
            if n.length_squared() > 0.0 {
                n.normalize()
            } else {
                Vec3::Y
            }
        })
        .collect()
}

/// Per-vertex tangents accumulated from UV-space edge deltas, orthogonalized
/// against the vertex normal; `w` carries the bitangent handedness.
fn compute_tangents(
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
    indices: &[u32],
) -> Vec<Vec4> {
    let mut tan = vec![Vec3::ZERO; positions.len()];
    let mut bitan = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let e1 = positions[b] - positions[a];
        let e2 = positions[c] - positions[a];
        let d1 = uvs[b] - uvs[a];
        let d2 = uvs[c] - uvs[a];

        let det = d1.x * d2.y - d2.x * d1.y;
        if det.abs() < f32::EPSILON {
            continue; // degenerate UV mapping
        }
        let r = 1.0 / det;
        let t = (e1 * d2.y - e2 * d1.y) * r;
        let b_vec = (e2 * d1.x - e1 * d2.x) * r;
        for i in [a, b, c] {
            tan[i] += t;
            bitan[i] += b_vec;
        }
    }

    (0..positions.len())
        .map(|i| {
            let normal = normals.get(i).copied().unwrap_or(Vec3::Y);
            let ortho = tan[i] - normal * normal.dot(tan[i]);
            let ortho = if ortho.length_squared() > 0.0 {
                ortho.normalize()
            } else {
                normal.any_orthonormal_vector()
            };
            let w = if normal.cross(ortho).dot(bitan[i]) < 0.0 {
                -1.0
            } else {
                1.0
            };
            ortho.extend(w)
        })
        .collect()
}

fn bounding_sphere(positions: &[Vec3], aabb: Aabb) -> BoundingSphere {
    if positions.is_empty() {
        return BoundingSphere {
            center: Vec3::ZERO,
            radius: 0.0,
        };
    }
    let center = aabb.center();
    let radius = positions
        .iter()
        .map(|p| p.distance_squared(center))
        .fold(0.0f32, f32::max)
        .sqrt();
    BoundingSphere { center, radius }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/geometry.rs"]
mod tests;
