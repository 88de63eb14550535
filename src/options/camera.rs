use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{
    Projection, DEFAULT_LOOK_SENSITIVITY, DEFAULT_SPEED_MULTIPLIER,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Base movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.01, max = 100.0), extend("step" = 0.01))]
    pub move_speed: f32,
    /// Degrees of rotation per pixel of pointer motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_sensitivity: f32,
    /// Factor applied (fast) or divided out (slow) by the speed modifiers.
    #[schemars(skip)]
    pub speed_multiplier: f32,
    /// Initial camera position in world space.
    #[schemars(skip)]
    pub start_position: [f32; 3],
}

impl CameraOptions {
    /// Projection for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Projection {
        Projection::new(self.fovy, aspect, self.znear, self.zfar)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            move_speed: 5.0,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            start_position: [-7.0, 2.0, 0.0],
        }
    }
}
