/// Fixed-view projection for wireframe previews
use nalgebra::Point3;

/// View rotation angle in degrees: the model is turned 180+45 degrees
/// around y and then x, giving an orthogonal view from the top right.
///
/// The shading cues computed during coordinate fixup pre-apply the same
/// trig, so this constant must stay in sync with them: changing the angle
/// or the axis order here without re-deriving the cues breaks the
/// color/position correlation.
pub const VIEW_ANGLE_DEG: f32 = 180.0 + 45.0;

/// sin/cos of the fixed view angle, shared by cue derivation and projection.
pub(crate) fn view_angle_sin_cos() -> (f32, f32) {
    let rad = VIEW_ANGLE_DEG.to_radians();
    (rad.sin(), rad.cos())
}

/// Rotate a point around y and then x by the fixed view angle.
///
/// The resulting x/y are usable directly as screen-plane coordinates;
/// z is preserved for depth ordering.
pub fn project_point(p: &mut Point3<f32>) {
    let (s, c) = view_angle_sin_cos();

    // rotate around y
    let x1 = c * p.x + s * p.z;
    let z1 = -s * p.x + c * p.z;
    // rotate around x
    let y2 = c * p.y - s * z1;
    let z2 = s * p.y + c * z1;

    p.x = x1;
    p.y = y2;
    p.z = z2;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAC_SQRT2_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_view_angle_trig() {
        let (s, c) = view_angle_sin_cos();
        assert!((s + FRAC_SQRT2_2).abs() < 1e-6);
        assert!((c + FRAC_SQRT2_2).abs() < 1e-6);
    }

    #[test]
    fn test_origin_is_fixed() {
        let mut p = Point3::origin();
        project_point(&mut p);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let mut p: Point3<f32> = Point3::new(0.3, -0.8, 0.5);
        let before = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
        project_point(&mut p);
        let after = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn test_unit_x_projection() {
        // Ry(225) takes (1,0,0) to (c,0,-s); Rx(225) then takes the
        // z component to (-s*-s, c*-s) in y/z.
        let mut p = Point3::new(1.0, 0.0, 0.0);
        project_point(&mut p);
        assert!((p.x + FRAC_SQRT2_2).abs() < 1e-6);
        assert!((p.y - 0.5).abs() < 1e-6);
        assert!((p.z + 0.5).abs() < 1e-6);
    }
}
