use glam::{Mat4, Vec3};

/// Pitch limit in degrees. Stops short of ±90 so `front` never becomes
/// parallel to [`WORLD_UP`].
pub const PITCH_LIMIT: f32 = 89.0;

/// Fixed world up axis used for basis reconstruction and the view matrix.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Perspective projection parameters. Fixed for the lifetime of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Create projection parameters from a vertical FOV in degrees.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

/// Camera position and look angles.
///
/// Yaw is unbounded and wraps through the trig functions. Pitch only
/// changes through [`CameraPose::rotate`], which keeps it inside
/// `[-PITCH_LIMIT, PITCH_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position.
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl CameraPose {
    /// Pose at `position` looking down +X (yaw = 0, pitch = 0).
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Horizontal look angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical look angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Add `dx` degrees of yaw and subtract `dy` degrees of pitch, so a
    /// pointer moving up (negative screen dy) looks up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx;
        self.pitch = (self.pitch - dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Orthonormal, right-handed camera frame derived from yaw/pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Look direction.
    pub front: Vec3,
    /// Camera-local +X, `front × WORLD_UP`.
    pub right: Vec3,
    /// Camera-local +Y, `right × front`.
    pub up: Vec3,
}

impl CameraBasis {
    /// Rebuild the frame from angles in degrees.
    ///
    /// `right` depends on `front` and `up` on both, so the three are
    /// computed in that order.
    #[must_use]
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        let right = front.cross(WORLD_UP).normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }

    /// Frame for the given pose.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        Self::from_yaw_pitch(pose.yaw, pose.pitch)
    }

    /// World-to-view matrix for an eye at `eye` looking along `front`.
    #[must_use]
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::look_at_rh(eye, eye + self.front, WORLD_UP)
    }
}
