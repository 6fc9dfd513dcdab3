use crate::{foundation::color::Rgb, viewer::pipeline::PaintSelection};

/// Vehicle class; drives the normalization target size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Supercar,
    Sports,
    Luxury,
}

impl CarType {
    /// Largest bounding-box dimension after normalization, in scene units.
    pub fn target_size(self) -> f32 {
        match self {
            Self::Supercar => 4.5,
            Self::Sports | Self::Luxury => 4.0,
        }
    }
}

/// One selectable paint finish.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaintOption {
    pub name: String,
    pub hex: Rgb,
    pub metallic: bool,
}

impl PaintOption {
    pub fn selection(&self) -> PaintSelection {
        PaintSelection {
            color: self.hex,
            metallic: self.metallic,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarSpecs {
    pub engine: String,
    pub horsepower: u32,
    /// 0-100 km/h time as displayed, e.g. "3.0s".
    pub acceleration: String,
    pub top_speed_kmh: u32,
    pub transmission: String,
}

/// Immutable catalog record; never mutated at runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price_usd: u32,
    pub colors: Vec<PaintOption>,
    pub specs: CarSpecs,
    pub image_paths: Vec<String>,
    pub model_path: String,
    pub car_type: CarType,
}

impl CarRecord {
    pub fn target_size(&self) -> f32 {
        self.car_type.target_size()
    }
}

fn paint(name: &str, r: u8, g: u8, b: u8, metallic: bool) -> PaintOption {
    PaintOption {
        name: name.to_string(),
        hex: Rgb::from_u8(r, g, b),
        metallic,
    }
}

/// The hardcoded read-only catalog; the only data source.
pub fn builtin_catalog() -> Vec<CarRecord> {
    vec![
        CarRecord {
            id: "ferrari-488".to_string(),
            brand: "Ferrari".to_string(),
            model: "488 GTB".to_string(),
            year: 2024,
            price_usd: 280_000,
            colors: vec![
                paint("Rosso Corsa", 0xD4, 0x00, 0x00, false),
                paint("Nero Daytona", 0x1C, 0x1C, 0x1C, true),
                paint("Bianco Avus", 0xF8, 0xF8, 0xFF, true),
                paint("Giallo Modena", 0xFF, 0xD7, 0x00, false),
            ],
            specs: CarSpecs {
                engine: "V8 Biturbo 3.9L".to_string(),
                horsepower: 661,
                acceleration: "3.0s".to_string(),
                top_speed_kmh: 330,
                transmission: "7-Speed Dual Clutch".to_string(),
            },
            image_paths: vec!["/cars/ferrari-488/main.jpg".to_string()],
            model_path: "/models/2016_ferrari_488_gtb.glb".to_string(),
            car_type: CarType::Supercar,
        },
        CarRecord {
            id: "lamborghini-huracan".to_string(),
            brand: "Lamborghini".to_string(),
            model: "Huracán EVO".to_string(),
            year: 2024,
            price_usd: 248_000,
            colors: vec![
                paint("Verde Mantis", 0x4C, 0xBB, 0x17, true),
                paint("Arancio Borealis", 0xFF, 0x8C, 0x00, false),
                paint("Nero Nemesis", 0x0A, 0x0A, 0x0A, true),
                paint("Bianco Icarus", 0xFF, 0xFF, 0xFF, true),
            ],
            specs: CarSpecs {
                engine: "V10 Naturally Aspirated 5.2L".to_string(),
                horsepower: 631,
                acceleration: "2.9s".to_string(),
                top_speed_kmh: 325,
                transmission: "7-Speed Dual Clutch".to_string(),
            },
            image_paths: vec!["/cars/lamborghini-huracan/main.jpg".to_string()],
            model_path: "/models/lamborghini_huracan_evo.glb".to_string(),
            car_type: CarType::Supercar,
        },
        CarRecord {
            id: "mclaren-720s".to_string(),
            brand: "McLaren".to_string(),
            model: "720S".to_string(),
            year: 2024,
            price_usd: 299_000,
            colors: vec![
                paint("McLaren Orange", 0xFF, 0x87, 0x00, false),
                paint("Storm Grey", 0x4A, 0x4A, 0x4A, true),
                paint("Volcano Red", 0xC2, 0x18, 0x07, true),
                paint("Silica White", 0xF5, 0xF5, 0xF5, true),
            ],
            specs: CarSpecs {
                engine: "V8 Biturbo 4.0L".to_string(),
                horsepower: 710,
                acceleration: "2.8s".to_string(),
                top_speed_kmh: 341,
                transmission: "7-Speed Seamless Shift".to_string(),
            },
            image_paths: vec!["/cars/mclaren-720s/main.jpg".to_string()],
            model_path: "/models/mclaren_720s.glb".to_string(),
            car_type: CarType::Supercar,
        },
    ]
}

/// Lookup by stable id.
pub fn find_car<'a>(catalog: &'a [CarRecord], id: &str) -> Option<&'a CarRecord> {
    catalog.iter().find(|car| car.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
