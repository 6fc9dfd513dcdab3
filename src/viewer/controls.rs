/// Lighting environment presets offered by the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Studio,
    City,
    Sunset,
    Forest,
    Warehouse,
}

impl Environment {
    pub const ALL: [Self; 5] = [
        Self::Studio,
        Self::City,
        Self::Sunset,
        Self::Forest,
        Self::Warehouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::City => "City",
            Self::Sunset => "Sunset",
            Self::Forest => "Forest",
            Self::Warehouse => "Warehouse",
        }
    }
}

/// Turntable speed in radians per second.
const ROTATE_SPEED_IDLE: f32 = 0.15;
const ROTATE_SPEED_HOVERED: f32 = 0.3;

/// Frame deltas at or above this stall the turntable entirely (tab was
/// backgrounded, long GC pause).
const DELTA_STALL_SECS: f32 = 0.1;

/// Per-frame delta cap; rotation never advances faster than 60 fps worth.
const DELTA_CAP_SECS: f32 = 1.0 / 60.0;

/// Scale applied to the model group while hovered.
pub const HOVER_SCALE: f32 = 1.015;

/// Y-rotation increment for one animation frame.
pub fn rotation_step(hovered: bool, delta_seconds: f32) -> f32 {
    if !(delta_seconds > 0.0) || delta_seconds >= DELTA_STALL_SECS {
        return 0.0;
    }
    let speed = if hovered {
        ROTATE_SPEED_HOVERED
    } else {
        ROTATE_SPEED_IDLE
    };
    speed * delta_seconds.min(DELTA_CAP_SECS)
}

/// Interactive viewer controls: environment, turntable and hover state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsState {
    pub environment: Environment,
    pub auto_rotate: bool,
    pub hovered: bool,
    pub rotation_y: f32,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            environment: Environment::Studio,
            auto_rotate: true,
            hovered: false,
            rotation_y: 0.0,
        }
    }
}

impl ControlsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn reset_camera(&mut self) {
        self.rotation_y = 0.0;
    }

    /// Advance the turntable by one animation frame.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.auto_rotate {
            self.rotation_y += rotation_step(self.hovered, delta_seconds);
        }
    }

    pub fn hover_scale(&self) -> f32 {
        if self.hovered { HOVER_SCALE } else { 1.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/controls.rs"]
mod tests;
