/// Render quality tier selected from device capability.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Ultra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureQuality {
    Low,
    Medium,
    High,
}

/// Renderer knobs for one quality tier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QualitySettings {
    pub shadow_map_size: u32,
    pub antialias: bool,
    pub msaa_samples: u32,
    /// Device-pixel-ratio ceiling; `None` renders at native DPR.
    pub pixel_ratio_cap: Option<f32>,
    pub post_processing: bool,
    pub max_lights: u32,
    pub full_geometry: bool,
    /// Triangle budget; `None` is unlimited.
    pub max_triangles: Option<u64>,
    pub texture_quality: TextureQuality,
}

impl QualityTier {
    pub fn settings(self) -> QualitySettings {
        match self {
            Self::Ultra => QualitySettings {
                shadow_map_size: 4096,
                antialias: true,
                msaa_samples: 16,
                pixel_ratio_cap: None,
                post_processing: true,
                max_lights: 20,
                full_geometry: true,
                max_triangles: None,
                texture_quality: TextureQuality::High,
            },
            Self::High => QualitySettings {
                shadow_map_size: 2048,
                antialias: true,
                msaa_samples: 8,
                pixel_ratio_cap: Some(2.0),
                post_processing: true,
                max_lights: 10,
                full_geometry: true,
                max_triangles: Some(200_000),
                texture_quality: TextureQuality::High,
            },
            Self::Medium => QualitySettings {
                shadow_map_size: 1024,
                antialias: true,
                msaa_samples: 4,
                pixel_ratio_cap: Some(1.5),
                post_processing: false,
                max_lights: 6,
                full_geometry: true,
                max_triangles: Some(100_000),
                texture_quality: TextureQuality::Medium,
            },
            Self::Low => QualitySettings {
                shadow_map_size: 512,
                antialias: false,
                msaa_samples: 0,
                pixel_ratio_cap: Some(1.0),
                post_processing: false,
                max_lights: 3,
                full_geometry: false,
                max_triangles: Some(50_000),
                texture_quality: TextureQuality::Low,
            },
        }
    }
}

/// Capability snapshot reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    pub memory_gb: u32,
    pub cpu_cores: u32,
}

/// Pick a tier from device memory and core count.
pub fn quality_tier_for(device: DeviceProfile) -> QualityTier {
    if device.memory_gb >= 8 && device.cpu_cores >= 8 {
        QualityTier::Ultra
    } else if device.memory_gb >= 4 && device.cpu_cores >= 4 {
        QualityTier::High
    } else if device.memory_gb >= 2 && device.cpu_cores >= 2 {
        QualityTier::Medium
    } else {
        QualityTier::Low
    }
}

/// Reductions applied on small viewports and slow connections, independently
/// of the device tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MobileOverrides {
    pub reduce_quality: bool,
    pub simplify_geometry: bool,
    pub disable_auto_rotate: bool,
    pub reduced_animations: bool,
}

pub fn mobile_overrides(viewport_width: u32, slow_connection: bool) -> MobileOverrides {
    MobileOverrides {
        reduce_quality: viewport_width < 768,
        simplify_geometry: viewport_width < 480,
        disable_auto_rotate: viewport_width < 768,
        reduced_animations: slow_connection,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/performance.rs"]
mod tests;
