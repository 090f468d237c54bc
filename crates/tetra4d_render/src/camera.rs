//! Orbit camera for drawing the 4D wireframe on a 2D surface
//!
//! The projection is a w-weighted perspective: every spatial coordinate is
//! scaled by `0.1 * w`, so higher floors spread outward and the stack reads
//! as a funnel seen from above. The result is then orbited by pitch and yaw.

use tetra4d_math::IVec4;

/// Default projection scale (pixels per unit after the w weighting)
pub const DEFAULT_SCALE: f32 = 50.0;

/// Weight applied per unit of w before orbiting
const W_WEIGHT: f32 = 0.1;

/// Pitch/yaw orbit camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about the screen's horizontal axis, in degrees
    pub pitch: f32,
    /// Rotation about the vertical axis, in degrees
    pub yaw: f32,
    /// Output scale
    pub scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            scale: DEFAULT_SCALE,
        }
    }

    /// Set the output scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Orbit by the given angles, in degrees
    pub fn orbit(&mut self, dpitch: f32, dyaw: f32) {
        self.pitch += dpitch;
        self.yaw += dyaw;
    }

    /// Return to the initial orientation, keeping the scale
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.yaw = 0.0;
    }

    /// Project a 4D point to screen coordinates (y grows downward)
    pub fn project(&self, point: IVec4) -> [f32; 2] {
        let weight = W_WEIGHT * point.w as f32;
        let qx = weight * point.x as f32;
        let qy = weight * point.y as f32;
        let qz = weight * point.z as f32;

        let (sin_p, cos_p) = self.pitch.to_radians().sin_cos();
        let (sin_y, cos_y) = self.yaw.to_radians().sin_cos();

        let x = cos_y * qx + sin_y * qz;
        let y = sin_p * sin_y * qx + cos_p * qy - sin_p * cos_y * qz;

        [x * self.scale, -y * self.scale]
    }
}
