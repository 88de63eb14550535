use glam::{Mat4, Vec2, Vec3};

use crate::camera::command::CameraCommand;
use crate::camera::core::{CameraBasis, CameraPose, Projection};
use crate::camera::input::{CameraKey, InputState};
use crate::camera::uniform::{CameraUniform, UniformSink};
use crate::options::CameraOptions;

/// Base movement speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 0.03;
/// Degrees of rotation per pixel of pointer motion.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.15;
/// Factor applied by the fast modifier and divided out by the slow one.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 10.0;

/// First-person fly camera.
///
/// Input arrives at arbitrary times through the `on_*` methods (or
/// [`execute`](Self::execute)); once per tick the host calls
/// [`on_frame`](Self::on_frame), which applies the coalesced pointer motion,
/// moves the camera and uploads the packed [`CameraUniform`].
///
/// The projection is fixed at construction. Use
/// [`with_projection`](Self::with_projection) to rebuild the camera for a
/// new viewport while keeping its pose.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pose: CameraPose,
    basis: CameraBasis,
    projection: Projection,
    proj_matrix: Mat4,
    input: InputState,
    uniform: CameraUniform,

    move_speed: f32,
    look_sensitivity: f32,
    speed_multiplier: f32,
}

impl FlyCamera {
    /// Create a camera at `position` looking down +X with default tuning.
    #[must_use]
    pub fn new(position: Vec3, projection: Projection) -> Self {
        let mut camera = Self {
            pose: CameraPose::new(position),
            basis: CameraBasis::from_yaw_pitch(0.0, 0.0),
            projection,
            proj_matrix: projection.build_matrix(),
            input: InputState::new(),
            uniform: CameraUniform::new(),
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        };
        // Basis and uniform are valid before the first frame.
        camera.rotate(0.0, 0.0);
        camera.pack_uniform();
        log::debug!(
            "FlyCamera at {position} (fovy {}°, aspect {:.3}, near {}, far {})",
            projection.fovy,
            projection.aspect,
            projection.znear,
            projection.zfar,
        );
        camera
    }

    /// Create a camera from options for a viewport of the given aspect
    /// ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self::new(
            Vec3::from_array(options.start_position),
            options.projection(aspect),
        )
        .with_move_speed(options.move_speed)
        .with_look_sensitivity(options.look_sensitivity)
        .with_speed_multiplier(options.speed_multiplier)
    }

    /// A copy of this camera with a new projection. Pose, held keys,
    /// pending motion and tuning carry over.
    #[must_use]
    pub fn with_projection(&self, projection: Projection) -> Self {
        let mut camera = Self {
            projection,
            proj_matrix: projection.build_matrix(),
            ..self.clone()
        };
        camera.pack_uniform();
        camera
    }

    /// Set the base movement speed (world units per second).
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the pointer sensitivity (degrees per pixel).
    #[must_use]
    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    /// Set the fast/slow modifier factor.
    #[must_use]
    pub fn with_speed_multiplier(mut self, multiplier: f32) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Camera world-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Override the camera position, e.g. for scripted moves. Takes effect
    /// in the uniform on the next frame.
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    /// Position and look angles.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Current orthonormal frame.
    #[must_use]
    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    /// Look direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    /// Camera-local right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Camera-local up.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Horizontal look angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.pose.yaw()
    }

    /// Vertical look angle in degrees, within `[-89, 89]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pose.pitch()
    }

    /// Projection parameters this camera was built with.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Static projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj_matrix
    }

    /// World-to-view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.basis.view_matrix(self.pose.position)
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.proj_matrix * self.view_matrix()
    }

    /// Point one unit along `front` from the camera.
    #[must_use]
    pub fn look_target(&self) -> Vec3 {
        self.pose.position + self.basis.front
    }

    /// Uniform packed by the most recent frame.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Accumulated input state.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Base movement speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// Apply a command from the input layer.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::SetKey { key, pressed } => {
                self.on_key_changed(key, pressed);
            }
            CameraCommand::PointerMotion { delta } => {
                self.on_pointer_motion(delta.x, delta.y);
            }
            CameraCommand::SetPointerCaptured(captured) => {
                self.set_pointer_captured(captured);
            }
            CameraCommand::ReleaseAllKeys => self.release_all_keys(),
        }
    }

    /// Record a key going down or up.
    pub fn on_key_changed(&mut self, key: CameraKey, is_down: bool) {
        self.input.set_key(key, is_down);
    }

    /// Accumulate pointer motion in pixels. Only counted while the pointer
    /// is captured; the rotation itself happens on the next frame.
    pub fn on_pointer_motion(&mut self, dx: f32, dy: f32) {
        self.input
            .accumulate_motion(Vec2::new(dx, dy) * self.look_sensitivity);
    }

    /// Switch between "pointer free" and "pointer captured".
    pub fn set_pointer_captured(&mut self, captured: bool) {
        if captured != self.input.pointer_captured() {
            log::debug!("pointer captured: {captured}");
        }
        self.input.set_pointer_captured(captured);
    }

    /// Whether pointer motion currently rotates the camera.
    #[must_use]
    pub fn pointer_captured(&self) -> bool {
        self.input.pointer_captured()
    }

    /// Forget every held key.
    pub fn release_all_keys(&mut self) {
        self.input.release_all();
    }

    // ── Per-frame update ─────────────────────────────────────────────────

    /// Rotate by `dx` degrees of yaw and `-dy` degrees of pitch, clamp the
    /// pitch and rebuild the basis.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pose.rotate(dx, dy);
        self.basis = CameraBasis::from_pose(&self.pose);
    }

    /// Move the camera according to the held keys over `delta_time`
    /// seconds.
    ///
    /// The direction is normalized before scaling, so diagonal movement is
    /// no faster than straight movement. Fast multiplies by the speed
    /// multiplier and slow divides by it; holding both applies both.
    pub fn process_input(&mut self, delta_time: f32) {
        let direction = self.move_direction();

        let mut speed = self.move_speed * delta_time;
        if self.input.is_down(CameraKey::Fast) {
            speed *= self.speed_multiplier;
        }
        if self.input.is_down(CameraKey::Slow) {
            speed /= self.speed_multiplier;
        }

        if direction.length_squared() > 0.0 {
            self.pose.position += direction.normalize() * speed;
        }
    }

    /// Unnormalized sum of the held movement keys' directions.
    fn move_direction(&self) -> Vec3 {
        let b = &self.basis;
        [
            (CameraKey::Forward, b.front),
            (CameraKey::Back, -b.front),
            (CameraKey::Left, -b.right),
            (CameraKey::Right, b.right),
            (CameraKey::Up, b.up),
            (CameraKey::Down, -b.up),
        ]
        .into_iter()
        .filter(|(key, _)| self.input.is_down(*key))
        .map(|(_, dir)| dir)
        .sum()
    }

    /// Advance one tick without uploading: apply pending pointer motion,
    /// move, and repack the uniform.
    pub fn update(&mut self, delta_time: f32) -> &CameraUniform {
        let motion = self.input.take_motion();
        if motion != Vec2::ZERO {
            self.rotate(motion.x, motion.y);
        }
        self.process_input(delta_time);
        self.pack_uniform();
        &self.uniform
    }

    /// Per-tick entry point: [`update`](Self::update), then write the packed
    /// uniform at offset 0 of `sink`.
    pub fn on_frame(&mut self, delta_time: f32, sink: &mut impl UniformSink) {
        let bytes = self.update(delta_time).to_le_bytes();
        sink.write_uniform(0, &bytes);
    }

    fn pack_uniform(&mut self) {
        self.uniform = CameraUniform::pack(
            self.view_projection(),
            self.pose.position,
            self.look_target(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::PITCH_LIMIT;
    use crate::camera::uniform::CAMERA_UNIFORM_SIZE;

    const EPS: f32 = 1e-5;

    fn camera() -> FlyCamera {
        FlyCamera::new(Vec3::new(-7.0, 2.0, 0.0), Projection::default())
    }

    fn displacement_with(keys: &[CameraKey], dt: f32) -> Vec3 {
        let mut cam = camera();
        for key in keys {
            cam.on_key_changed(*key, true);
        }
        let start = cam.position();
        let _ = cam.update(dt);
        cam.position() - start
    }

    #[test]
    fn construction_sets_initial_basis() {
        let cam = camera();
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);
        assert!(cam.front().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::Z, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert!(cam.look_target().abs_diff_eq(Vec3::new(-6.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn uniform_is_valid_before_first_frame() {
        let cam = camera();
        let floats = cam.uniform().as_floats();
        assert_eq!(&floats[16..20], &[-7.0, 2.0, 0.0, 0.0]);
        assert_eq!(floats[23], 0.0);
        assert_eq!(
            floats[..16],
            cam.view_projection().to_cols_array()[..]
        );
    }

    #[test]
    fn forward_for_one_second_moves_base_speed_along_front() {
        let mut cam = camera();
        let front = cam.front();
        cam.on_key_changed(CameraKey::Forward, true);
        let mut sink: Vec<u8> = Vec::new();
        cam.on_frame(1.0, &mut sink);

        let expected = Vec3::new(-7.0, 2.0, 0.0) + front * 0.03;
        assert!(cam.position().abs_diff_eq(expected, EPS));
        assert_eq!(sink.len(), CAMERA_UNIFORM_SIZE);
        assert_eq!(sink, cam.uniform().to_le_bytes());
    }

    #[test]
    fn zero_delta_time_never_moves() {
        let mut cam = camera();
        let start = cam.position();
        let _ = cam.update(0.0);
        assert_eq!(cam.position(), start);

        for key in [CameraKey::Forward, CameraKey::Up, CameraKey::Fast] {
            cam.on_key_changed(key, true);
        }
        let _ = cam.update(0.0);
        assert_eq!(cam.position(), start);
    }

    #[test]
    fn diagonal_is_normalized_before_scaling() {
        let d = displacement_with(&[CameraKey::Forward, CameraKey::Left], 1.0);
        let cam = camera();
        let expected = (cam.front() - cam.right()).normalize() * 0.03;
        assert!(d.abs_diff_eq(expected, EPS));
        assert!((d.length() - 0.03).abs() < EPS);
    }

    #[test]
    fn opposing_keys_cancel() {
        let d = displacement_with(&[CameraKey::Forward, CameraKey::Back], 1.0);
        assert_eq!(d, Vec3::ZERO);
        let d = displacement_with(&[CameraKey::Up, CameraKey::Down], 1.0);
        assert_eq!(d, Vec3::ZERO);
    }

    #[test]
    fn vertical_keys_follow_camera_up() {
        let d = displacement_with(&[CameraKey::Up], 2.0);
        assert!(d.abs_diff_eq(Vec3::Y * 0.06, EPS));
        let d = displacement_with(&[CameraKey::Right], 2.0);
        assert!(d.abs_diff_eq(Vec3::Z * 0.06, EPS));
    }

    #[test]
    fn speed_modifiers_scale_displacement() {
        let (s, t) = (DEFAULT_MOVE_SPEED, 0.5);

        let fast = displacement_with(&[CameraKey::Forward, CameraKey::Fast], t);
        assert!((fast.length() - 10.0 * s * t).abs() < EPS);

        let slow = displacement_with(&[CameraKey::Forward, CameraKey::Slow], t);
        assert!((slow.length() - s * t / 10.0).abs() < EPS);
    }

    #[test]
    fn both_modifiers_multiply_then_divide() {
        let (s, t) = (DEFAULT_MOVE_SPEED, 0.5);
        let both = displacement_with(
            &[CameraKey::Forward, CameraKey::Fast, CameraKey::Slow],
            t,
        );
        assert!((both.length() - s * t).abs() < EPS);
    }

    #[test]
    fn modifiers_alone_do_not_move() {
        let d = displacement_with(&[CameraKey::Fast, CameraKey::Slow], 1.0);
        assert_eq!(d, Vec3::ZERO);
    }

    #[test]
    fn pointer_motion_requires_capture() {
        let mut cam = camera();
        cam.on_pointer_motion(100.0, 0.0);
        let _ = cam.update(0.016);
        assert_eq!(cam.yaw(), 0.0);

        cam.set_pointer_captured(true);
        cam.on_pointer_motion(100.0, 0.0);
        let _ = cam.update(0.016);
        assert!((cam.yaw() - 100.0 * DEFAULT_LOOK_SENSITIVITY).abs() < 1e-4);
    }

    #[test]
    fn pointer_motion_is_deferred_and_coalesced() {
        let mut cam = camera();
        cam.set_pointer_captured(true);
        cam.on_pointer_motion(10.0, 4.0);
        cam.on_pointer_motion(10.0, -2.0);

        // Nothing applied until the frame.
        assert_eq!(cam.yaw(), 0.0);
        assert!(cam.front().abs_diff_eq(Vec3::X, EPS));

        let _ = cam.update(0.0);
        assert!((cam.yaw() - 20.0 * 0.15).abs() < 1e-4);
        assert!((cam.pitch() + 2.0 * 0.15).abs() < 1e-4);
        assert_eq!(cam.input().pending_motion(), Vec2::ZERO);
    }

    #[test]
    fn pointer_up_looks_up() {
        let mut cam = camera();
        cam.set_pointer_captured(true);
        cam.on_pointer_motion(0.0, -50.0);
        let _ = cam.update(0.0);
        assert!(cam.pitch() > 0.0);
        assert!(cam.front().y > 0.0);
    }

    #[test]
    fn rotation_keeps_pitch_clamped() {
        let mut cam = camera();
        for (dx, dy) in [(0.0, -200.0), (15.0, 30.0), (-3.0, 500.0), (1.0, -1.0)]
        {
            cam.rotate(dx, dy);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&cam.pitch()));
        }
        cam.rotate(0.0, 1.0e6);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
        assert!((cam.front().length() - 1.0).abs() < 1e-5);
        assert!(cam.front().dot(cam.up()).abs() < 1e-5);
    }

    #[test]
    fn set_position_overrides_pose() {
        let mut cam = camera();
        cam.set_position(Vec3::new(1.0, 2.0, 3.0));
        let mut sink: Vec<u8> = Vec::new();
        cam.on_frame(0.0, &mut sink);
        assert_eq!(&cam.uniform().position, &[1.0, 2.0, 3.0]);
        assert!(cam
            .look_target()
            .abs_diff_eq(Vec3::new(1.0, 2.0, 3.0) + cam.front(), EPS));
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut cam = camera();
        cam.execute(CameraCommand::SetKey {
            key: CameraKey::Forward,
            pressed: true,
        });
        assert!(cam.input().is_down(CameraKey::Forward));

        cam.execute(CameraCommand::SetPointerCaptured(true));
        assert!(cam.pointer_captured());
        cam.execute(CameraCommand::PointerMotion {
            delta: Vec2::new(20.0, 0.0),
        });
        assert!(cam.input().pending_motion().x > 0.0);

        cam.execute(CameraCommand::ReleaseAllKeys);
        assert!(!cam.input().is_down(CameraKey::Forward));
    }

    #[test]
    fn camera_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<FlyCamera>();
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = camera();
        let b = camera();
        a.on_key_changed(CameraKey::Forward, true);
        let _ = a.update(1.0);
        assert!(!b.input().is_down(CameraKey::Forward));
        assert_eq!(b.position(), Vec3::new(-7.0, 2.0, 0.0));
    }

    #[test]
    fn with_projection_keeps_pose_and_input() {
        let mut cam = camera();
        cam.rotate(30.0, -10.0);
        cam.on_key_changed(CameraKey::Left, true);

        let wide = cam.with_projection(Projection::new(90.0, 2.0, 0.1, 500.0));
        assert_eq!(wide.pose(), cam.pose());
        assert!(wide.input().is_down(CameraKey::Left));
        assert_eq!(wide.projection().fovy, 90.0);
        assert_ne!(wide.projection_matrix(), cam.projection_matrix());
    }

    #[test]
    fn from_options_applies_tuning() {
        let mut options = CameraOptions::default();
        options.move_speed = 4.0;
        options.speed_multiplier = 2.0;
        let mut cam = FlyCamera::from_options(&options, 1.5);
        assert_eq!(cam.position(), Vec3::new(-7.0, 2.0, 0.0));
        assert_eq!(cam.projection().aspect, 1.5);

        cam.on_key_changed(CameraKey::Forward, true);
        cam.on_key_changed(CameraKey::Fast, true);
        let start = cam.position();
        let _ = cam.update(0.25);
        assert!(((cam.position() - start).length() - 2.0).abs() < 1e-5);
    }
}
