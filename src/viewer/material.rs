use crate::foundation::color::Rgb;

/// Reference to an image slot in the source document, carried through
/// simplification untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureRef {
    pub image_index: u32,
}

/// One material slot on a mesh.
///
/// An explicit tagged union instead of renderer-class downcasting: the
/// physically-based variant carries advanced surface terms that some GPUs
/// fail to compile shaders for, so the pipeline rewrites it to the standard
/// variant before display.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Standard(StandardMaterial),
    Physical(PhysicalMaterial),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StandardMaterial {
    pub name: String,
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub base_color_texture: Option<TextureRef>,
    pub normal_texture: Option<TextureRef>,
    /// Set when parameters changed and the renderer copy is stale.
    pub needs_upload: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub standard: StandardMaterial,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub transmission: f32,
    pub ior: f32,
}

impl Material {
    pub fn name(&self) -> &str {
        &self.standard().name
    }

    pub fn base_color(&self) -> Rgb {
        self.standard().color
    }

    fn standard(&self) -> &StandardMaterial {
        match self {
            Self::Standard(m) => m,
            Self::Physical(m) => &m.standard,
        }
    }

    pub fn as_standard_mut(&mut self) -> Option<&mut StandardMaterial> {
        match self {
            Self::Standard(m) => Some(m),
            Self::Physical(_) => None,
        }
    }

    pub fn classify(&self) -> MaterialClass {
        classify_material(self.name(), self.base_color())
    }
}

/// Whether a material slot represents paintable exterior surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialClass {
    Body,
    NonBody,
}

const BODY_KEYWORDS: [&str; 6] = ["paint", "body", "exterior", "car", "hull", "panel"];

/// Channel threshold above which an unnamed material still counts as
/// paintable; most non-keyword trim/glass materials ship dark or neutral.
const BRIGHT_CHANNEL_MIN: f32 = 0.2;

/// Best-effort body-panel heuristic, deliberately permissive: over-painting
/// beats missed panels. Asset authors are expected to name body materials
/// descriptively; the brightness fallback catches the rest.
pub fn classify_material(name: &str, base_color: Rgb) -> MaterialClass {
    let name = name.to_lowercase();
    let has_keyword = BODY_KEYWORDS.iter().any(|k| name.contains(k));
    let bright = base_color.max_channel() > BRIGHT_CHANNEL_MIN;

    if has_keyword || (bright && !name.contains("wheel") && !name.contains("glass")) {
        MaterialClass::Body
    } else {
        MaterialClass::NonBody
    }
}

/// Replace the physically-based variant by the equivalent standard variant,
/// preserving color, metalness, roughness and both texture slots while
/// discarding clearcoat/transmission/IOR. Idempotent: a standard material
/// passes through unchanged.
pub fn simplify_material(material: Material) -> Material {
    match material {
        Material::Standard(m) => Material::Standard(m),
        Material::Physical(m) => Material::Standard(m.standard),
    }
}

/// Apply a user-selected paint to a body material slot.
pub fn apply_paint(material: &mut StandardMaterial, color: Rgb, metallic: bool) {
    material.color = color;
    material.metalness = if metallic { 0.8 } else { 0.1 };
    material.roughness = if metallic { 0.1 } else { 0.4 };
    material.needs_upload = true;
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/material.rs"]
mod tests;
