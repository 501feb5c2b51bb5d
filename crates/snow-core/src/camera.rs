//! Camera rig: perspective camera plus an orbit controller with damped
//! input and a distance-dependent polar-angle ceiling.

use crate::constants::{
    DAMPING_FACTOR, MAX_CAMERA_DISTANCE, POLAR_CEILING_FAR, POLAR_CEILING_MID, POLAR_CEILING_NEAR,
    POLAR_MID_DISTANCE, POLAR_NEAR_DISTANCE,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Ceiling on the polar angle as a step function of distance to target.
/// The three bands are contractual: crossing a threshold snaps the ceiling
/// instantly, with no transition.
#[inline]
pub fn polar_ceiling(distance: f32) -> f32 {
    if distance < POLAR_NEAR_DISTANCE {
        POLAR_CEILING_NEAR
    } else if distance < POLAR_MID_DISTANCE {
        POLAR_CEILING_MID
    } else {
        POLAR_CEILING_FAR
    }
}

const EPS: f32 = 1e-6;

/// Orbit controller: holds the camera on a sphere around a fixed target and
/// turns pointer/wheel input into damped rotation and dolly motion.
pub struct OrbitControls {
    pub target: Vec3,
    radius: f32,
    /// Polar angle from the +Y axis.
    phi: f32,
    /// Azimuth around the +Y axis.
    theta: f32,
    phi_delta: f32,
    theta_delta: f32,
    scale: f32,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(EPS);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let theta = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            phi,
            theta,
            phi_delta: 0.0,
            theta_delta: 0.0,
            scale: 1.0,
            damping_factor: DAMPING_FACTOR,
            min_distance: 0.0,
            max_distance: MAX_CAMERA_DISTANCE,
            min_polar_angle: 0.0,
            max_polar_angle: POLAR_CEILING_FAR,
        }
    }

    /// Queue a rotation from pointer drag, in radians.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32) {
        self.theta_delta -= d_theta;
        self.phi_delta -= d_phi;
    }

    /// Queue a dolly: factors below 1 move the camera closer.
    pub fn dolly(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Current distance from camera to target.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Re-derive the polar ceiling from the current distance. Called on every
    /// change notification; the new clamp applies on the next update.
    pub fn refresh_polar_ceiling(&mut self) {
        self.max_polar_angle = polar_ceiling(self.radius);
    }

    /// Apply damped deltas and clamps, then write the camera eye. Returns
    /// true when the camera actually moved, which is the rig's change
    /// notification.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        self.theta += self.theta_delta * self.damping_factor;
        self.phi += self.phi_delta * self.damping_factor;
        self.phi = self
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(EPS, std::f32::consts::PI - EPS);
        self.radius = (self.radius * self.scale).clamp(self.min_distance.max(EPS), self.max_distance);
        self.scale = 1.0;
        self.theta_delta *= 1.0 - self.damping_factor;
        self.phi_delta *= 1.0 - self.damping_factor;

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        let eye = self.target + offset;
        let moved = eye.distance_squared(camera.eye) > EPS;
        camera.eye = eye;
        camera.target = self.target;
        moved
    }
}
