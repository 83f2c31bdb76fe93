//! Camera state
//!
//! The interpreter keeps a single camera. Orbit keeps the camera aimed at
//! the origin; explicit moves and rotations leave any look-at target alone.

use lin_alg::f32::Vec3;

/// Perspective camera parameters
#[derive(Debug, Clone)]
pub struct CameraState {
    pub position: Vec3,
    /// Euler rotation in radians, ignored while a target is set
    pub rotation: Vec3,
    /// Vertical field of view, degrees
    pub fov: f32,
    pub target: Option<Vec3>,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            position: Vec3::new(0.0, 0.0, 10.0),
            rotation: Vec3::new(0.0, 0.0, 0.0),
            fov: 75.0,
            target: None,
        }
    }
}

impl CameraState {
    pub fn move_to(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn rotate_to(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
        self.target = None;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    /// Place the camera on a sphere of the given radius around the origin.
    /// Angles are in degrees; azimuth sweeps the XZ plane, elevation lifts
    /// toward +Y. The camera ends up looking at the origin.
    pub fn orbit(&mut self, radius: f32, azimuth_deg: f32, elevation_deg: f32) {
        let azimuth = azimuth_deg.to_radians();
        let elevation = elevation_deg.to_radians();

        self.position = Vec3::new(
            radius * elevation.cos() * azimuth.cos(),
            radius * elevation.sin(),
            radius * elevation.cos() * azimuth.sin(),
        );
        self.target = Some(Vec3::new(0.0, 0.0, 0.0));
    }

    /// Scale the camera's distance from the origin by `1 / factor`, so a
    /// factor of 2 halves the distance. Non-positive factors are ignored.
    pub fn zoom(&mut self, factor: f32) {
        if factor <= 0.0 {
            return;
        }
        self.position = self.position * (1.0 / factor);
    }

    pub fn distance_to_origin(&self) -> f32 {
        self.position.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_places_camera_on_sphere() {
        let mut cam = CameraState::default();
        cam.orbit(10.0, 0.0, 0.0);
        assert!((cam.position.x - 10.0).abs() < 1e-4);
        assert!(cam.position.y.abs() < 1e-4);
        assert!(cam.position.z.abs() < 1e-4);
        assert!(cam.target.is_some());

        cam.orbit(10.0, 0.0, 90.0);
        assert!((cam.position.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_halves_distance() {
        let mut cam = CameraState::default();
        cam.move_to(0.0, 0.0, 8.0);
        cam.zoom(2.0);
        assert!((cam.distance_to_origin() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_ignores_non_positive_factor() {
        let mut cam = CameraState::default();
        cam.zoom(0.0);
        assert!((cam.distance_to_origin() - 10.0).abs() < 1e-4);
    }
}
