//! Simple 3D shapes.

use std::f64::consts::PI;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// An axis-aligned rectangular box.
    Box { width: f64, length: f64, depth: f64 },
    Sphere { radius: f64 },
}

impl Shape {
    pub fn volume(&self) -> f64 {
        match *self {
            Self::Box {
                width,
                length,
                depth,
            } => width * length * depth,
            Self::Sphere { radius } => (4.0 / 3.0) * PI * radius.powi(3),
        }
    }

    pub fn surface_area(&self) -> f64 {
        match *self {
            Self::Box {
                width,
                length,
                depth,
            } => 2.0 * (width * length + width * depth + length * depth),
            Self::Sphere { radius } => 4.0 * PI * radius.powi(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn box_volume_and_area_are_correct() {
        let shape = Shape::Box {
            width: 3.0,
            length: 4.0,
            depth: 5.0,
        };
        assert_abs_diff_eq!(shape.volume(), 60.0);
        assert_abs_diff_eq!(shape.surface_area(), 94.0);
    }

    #[test]
    fn unit_sphere_volume_and_area_are_correct() {
        let shape = Shape::Sphere { radius: 1.0 };
        assert_abs_diff_eq!(shape.volume(), 4.0 * PI / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape.surface_area(), 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn sphere_scales_with_radius() {
        let small = Shape::Sphere { radius: 1.0 };
        let large = Shape::Sphere { radius: 2.0 };
        assert_abs_diff_eq!(large.volume(), 8.0 * small.volume(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            large.surface_area(),
            4.0 * small.surface_area(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn degenerate_box_has_zero_volume() {
        let shape = Shape::Box {
            width: 0.0,
            length: 2.0,
            depth: 3.0,
        };
        assert_abs_diff_eq!(shape.volume(), 0.0);
        assert_abs_diff_eq!(shape.surface_area(), 12.0);
    }
}
