use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::{
    foundation::color::Rgb,
    foundation::error::{ShowroomError, ShowroomResult},
    viewer::geometry::{Aabb, Geometry},
    viewer::material::{Material, PhysicalMaterial, StandardMaterial, TextureRef},
    viewer::scene::{CarModel, Mesh, SceneNode},
};

/// Models ship as single self-contained binary scenes.
pub const MODEL_EXTENSION: &str = "glb";

/// Whether a catalog path points at a loadable model.
///
/// A mismatch is a predictable, non-exceptional condition: the caller renders
/// the placeholder shape without attempting a load.
pub fn is_valid_model_path(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(MODEL_EXTENSION))
}

/// Load a `.glb` scene into a fresh [`CarModel`] hierarchy.
///
/// Node transforms and the material tagged union are preserved as authored;
/// all processing (simplify/recolor/normalize) happens later in the pipeline.
#[tracing::instrument]
pub fn load_glb(path: &Path) -> ShowroomResult<CarModel> {
    let path_str = path.to_string_lossy();
    if !is_valid_model_path(&path_str) {
        return Err(ShowroomError::model(format!(
            "not a .{MODEL_EXTENSION} model path: '{path_str}'"
        )));
    }

    let gltf::Gltf { document, blob } = {
        let file =
            File::open(path).with_context(|| format!("open model '{}'", path.display()))?;
        gltf::Gltf::from_reader(BufReader::new(file)).context("read glb header")?
    };
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let buffers = gltf::import_buffers(&document, Some(dir), blob).context("read glb buffers")?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| ShowroomError::model("glb contains no scenes"))?;

    let mut root = SceneNode::empty(scene.name().unwrap_or("scene"));
    for node in scene.nodes() {
        root.children.push(convert_node(&node, &buffers)?);
    }
    Ok(CarModel::new(root))
}

fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> ShowroomResult<SceneNode> {
    let mut out = SceneNode::empty(node.name().unwrap_or_default());
    out.transform = Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let mut prims = convert_primitives(&mesh, buffers)?;
        if prims.len() == 1 {
            out.mesh = prims.pop();
        } else {
            // Multi-primitive meshes split into one child node per primitive.
            for (i, prim) in prims.into_iter().enumerate() {
                let mut child = SceneNode::empty(format!(
                    "{}#{i}",
                    mesh.name().unwrap_or("mesh")
                ));
                child.mesh = Some(prim);
                out.children.push(child);
            }
        }
    }

    for child in node.children() {
        out.children.push(convert_node(&child, buffers)?);
    }
    Ok(out)
}

fn convert_primitives(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
) -> ShowroomResult<Vec<Mesh>> {
    let mut out = Vec::new();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            return Err(ShowroomError::model(format!(
                "unsupported primitive mode {:?} in mesh '{}'",
                primitive.mode(),
                mesh.name().unwrap_or_default()
            )));
        }

        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .ok_or_else(|| ShowroomError::model("primitive has no positions"))?
            .map(Vec3::from)
            .collect();
        let indices = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals = reader
            .read_normals()
            .map(|nn| nn.map(Vec3::from).collect::<Vec<_>>());
        let uvs = reader
            .read_tex_coords(0)
            .map(|uv| uv.into_f32().map(Vec2::from).collect::<Vec<_>>());
        let tangents = reader
            .read_tangents()
            .map(|tt| tt.map(Vec4::from).collect::<Vec<_>>());

        let bbox = primitive.bounding_box();
        let geometry = Geometry {
            positions,
            indices,
            normals,
            uvs,
            tangents,
            aabb: Some(Aabb {
                min: Vec3::from(bbox.min),
                max: Vec3::from(bbox.max),
            }),
            sphere: None,
        };

        out.push(Mesh {
            geometry,
            materials: vec![convert_material(&primitive.material())],
        });
    }
    Ok(out)
}

fn convert_material(material: &gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let base = pbr.base_color_factor();

    let standard = StandardMaterial {
        name: material.name().unwrap_or_default().to_string(),
        color: Rgb::new(base[0], base[1], base[2]),
        metalness: pbr.metallic_factor(),
        roughness: pbr.roughness_factor(),
        base_color_texture: pbr.base_color_texture().map(|info| TextureRef {
            image_index: info.texture().source().index() as u32,
        }),
        normal_texture: material.normal_texture().map(|info| TextureRef {
            image_index: info.texture().source().index() as u32,
        }),
        needs_upload: false,
    };

    let transmission = material
        .transmission()
        .map(|t| t.transmission_factor());
    let ior = material.ior();
    if transmission.is_some() || ior.is_some() {
        Material::Physical(PhysicalMaterial {
            standard,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            transmission: transmission.unwrap_or(0.0),
            ior: ior.unwrap_or(1.5),
        })
    } else {
        Material::Standard(standard)
    }
}

/// Fallback shape shown when a model path is invalid or processing fails:
/// a simple car-proportioned box in the selected paint.
pub fn placeholder_model(color: Rgb, metallic: bool) -> CarModel {
    let mut node = SceneNode::empty("placeholder");
    node.mesh = Some(Mesh {
        geometry: box_geometry(Vec3::new(3.0, 1.5, 6.0)),
        materials: vec![Material::Standard(StandardMaterial {
            name: "placeholder".to_string(),
            color,
            metalness: if metallic { 0.8 } else { 0.2 },
            roughness: 0.3,
            base_color_texture: None,
            normal_texture: None,
            needs_upload: false,
        })],
    });
    let mut root = SceneNode::empty("placeholder_root");
    root.children.push(node);
    CarModel::new(root)
}

fn box_geometry(size: Vec3) -> Geometry {
    let h = size * 0.5;
    let positions = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 3, 2, 0, 2, 1, // back
        4, 5, 6, 4, 6, 7, // front
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
        0, 1, 5, 0, 5, 4, // bottom
        3, 7, 6, 3, 6, 2, // top
    ];
    Geometry {
        positions,
        indices,
        ..Geometry::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/gltf.rs"]
mod tests;
