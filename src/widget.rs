use serde::{Deserialize, Serialize};
use vector2d::Vec2;

/// Distance between the shape's top edge and the rotation handle, in
/// shape-local units (so the stem scales with the shape).
const ROTATOR_STEM: f64 = 32.0;

/// Which grab handle a pointer drag is acting through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragGesture {
    /// Dragging the shape body: translate.
    Move,
    /// Dragging the rotation handle: spin about the shape position.
    Rotate,
    /// Dragging a corner handle: uniform resize about the shape position.
    Scale,
}

/// Accumulated transform state of the dragged shape: where it sits, how far
/// it has been rotated and how much it has been resized relative to its
/// initial geometry.
///
/// Immutable value type; every drag produces a new state.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeTransform {
    /// Shape center in screen coordinates (y grows downward).
    pub position: Vec2,
    /// Accumulated rotation in radians, unnormalized.
    pub rotation: f64,
    /// Accumulated uniform scale factor.
    pub scale: f64,
}

/// World-space positions of the widget's grab handles.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleLayout {
    /// Corner resize handles: top-left, top-right, bottom-right, bottom-left.
    pub corners: [Vec2; 4],
    /// Rotation handle, floating above the top edge.
    pub rotator: Vec2,
}

impl FreeTransform {
    /// Untouched shape centered at `position`.
    pub fn at(position: Vec2) -> Self {
        FreeTransform {
            position,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Maps a shape-local point to screen coordinates: scale, then rotate
    /// about the shape position, then translate.
    pub fn to_world(self, local: Vec2) -> Vec2 {
        local.scale(self.scale).rotate(self.rotation).add(self.position)
    }

    /// Folds one pointer movement (from `previous` to `current`, both in
    /// screen coordinates) into the transform.
    ///
    /// No input validation: a rotate or scale sample placed exactly on the
    /// shape position yields a NaN heading or an infinite distance ratio,
    /// which propagates into the state like any other IEEE-754 value.
    pub fn apply_drag(self, gesture: DragGesture, previous: Vec2, current: Vec2) -> Self {
        match gesture {
            DragGesture::Move => FreeTransform {
                position: self.position.add(current.subtract(previous)),
                ..self
            },
            DragGesture::Rotate => {
                let from = previous.subtract(self.position).direction();
                let to = current.subtract(self.position).direction();
                FreeTransform {
                    rotation: self.rotation + (to - from),
                    ..self
                }
            }
            DragGesture::Scale => {
                let from = previous.subtract(self.position).length();
                let to = current.subtract(self.position).length();
                FreeTransform {
                    scale: self.scale * (to / from),
                    ..self
                }
            }
        }
    }

    /// Handle positions for a shape with the given local half extents.
    pub fn handle_layout(self, half_extent: Vec2) -> HandleLayout {
        let Vec2 { x: hx, y: hy } = half_extent;
        HandleLayout {
            corners: [
                self.to_world(Vec2::new(-hx, -hy)),
                self.to_world(Vec2::new(hx, -hy)),
                self.to_world(Vec2::new(hx, hy)),
                self.to_world(Vec2::new(-hx, hy)),
            ],
            rotator: self.to_world(Vec2::new(0.0, -(hy + ROTATOR_STEM))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f64 = 1e-12;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "expected {:?} ~= {:?}",
            a,
            b
        );
    }

    #[test]
    fn untouched_transform_is_identity() {
        let t = FreeTransform::at(Vec2::new(100.0, 50.0));
        assert_close(t.to_world(Vec2::new(7.0, -3.0)), Vec2::new(107.0, 47.0));
    }

    #[test]
    fn to_world_scales_then_rotates_then_translates() {
        let t = FreeTransform {
            position: Vec2::new(10.0, 20.0),
            rotation: FRAC_PI_2,
            scale: 2.0,
        };
        // (1, 0) -> scaled (2, 0) -> rotated (0, 2) -> translated (10, 22)
        assert_close(t.to_world(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 22.0));
    }

    #[test]
    fn move_drag_translates_by_pointer_delta() {
        let t = FreeTransform::at(Vec2::new(400.0, 300.0));
        let dragged = t.apply_drag(
            DragGesture::Move,
            Vec2::new(410.0, 310.0),
            Vec2::new(450.0, 330.0),
        );
        assert_eq!(dragged.position, Vec2::new(440.0, 320.0));
        assert_eq!(dragged.rotation, t.rotation);
        assert_eq!(dragged.scale, t.scale);
    }

    #[test]
    fn rotate_drag_adds_heading_difference() {
        let center = Vec2::new(200.0, 200.0);
        let t = FreeTransform::at(center);
        // Pointer swings an eighth of a turn below the shape.
        let dragged = t.apply_drag(
            DragGesture::Rotate,
            center.add(Vec2::new(0.0, 100.0)),
            center.add(Vec2::new(100.0, 100.0)),
        );
        assert!((dragged.rotation - FRAC_PI_4).abs() < EPS);
        assert_eq!(dragged.position, center);
    }

    #[test]
    fn scale_drag_multiplies_by_distance_ratio() {
        let center = Vec2::new(200.0, 200.0);
        let t = FreeTransform::at(center);
        let dragged = t.apply_drag(
            DragGesture::Scale,
            center.add(Vec2::new(60.0, 80.0)),
            center.add(Vec2::new(90.0, 120.0)),
        );
        assert!((dragged.scale - 1.5).abs() < EPS);
    }

    #[test]
    fn scale_drag_from_center_propagates_infinity() {
        let center = Vec2::new(200.0, 200.0);
        let t = FreeTransform::at(center);
        let dragged = t.apply_drag(DragGesture::Scale, center, center.add(Vec2::new(50.0, 0.0)));
        assert!(dragged.scale.is_infinite());
    }

    #[test]
    fn handle_layout_of_untouched_shape() {
        let t = FreeTransform::at(Vec2::new(100.0, 100.0));
        let layout = t.handle_layout(Vec2::new(50.0, 40.0));
        assert_close(layout.corners[0], Vec2::new(50.0, 60.0));
        assert_close(layout.corners[1], Vec2::new(150.0, 60.0));
        assert_close(layout.corners[2], Vec2::new(150.0, 140.0));
        assert_close(layout.corners[3], Vec2::new(50.0, 140.0));
        assert_close(layout.rotator, Vec2::new(100.0, 28.0));
    }

    #[test]
    fn corner_handles_stay_equidistant_under_rotation() {
        let half_extent = Vec2::new(120.0, 80.0);
        let expected = half_extent.length() * 1.5;
        let t = FreeTransform {
            position: Vec2::new(400.0, 300.0),
            rotation: 1.234,
            scale: 1.5,
        };
        for corner in t.handle_layout(half_extent).corners {
            let distance = corner.subtract(t.position).length();
            assert!((distance - expected).abs() < EPS);
        }
    }
}
