//! Pointer input mapping
//!
//! The canvas may be displayed at any size; clicks are scaled back into the
//! fixed logical playfield before they reach the simulation.

use glam::Vec2;

/// On-screen placement of the canvas (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub fn new(top: f32, width: f32, height: f32) -> Self {
        Self { top, width, height }
    }

    /// Read the canvas bounding rect
    #[cfg(target_arch = "wasm32")]
    pub fn from_dom_rect(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.top() as f32, rect.width() as f32, rect.height() as f32)
    }
}

/// Convert a pointer position (client coordinates) into logical coordinates
///
/// `x = x_device * W / display_width`, `y = (y_device - top) * H / display_height`.
/// Points outside the canvas map outside the playfield; they are not clamped.
/// Returns `None` while the canvas has no visible size.
pub fn to_logical(device: Vec2, display: &DisplayRect, playfield: Vec2) -> Option<Vec2> {
    if display.width <= 0.0 || display.height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        device.x * playfield.x / display.width,
        (device.y - display.top) * playfield.y / display.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYFIELD: Vec2 = Vec2::new(800.0, 450.0);

    #[test]
    fn test_identity_at_native_size() {
        let display = DisplayRect::new(0.0, 800.0, 450.0);
        let p = to_logical(Vec2::new(123.0, 321.0), &display, PLAYFIELD).unwrap();
        assert_eq!(p, Vec2::new(123.0, 321.0));
    }

    #[test]
    fn test_scaled_and_offset() {
        // Canvas shown at double size, 50px below the top of the viewport
        let display = DisplayRect::new(50.0, 1600.0, 900.0);
        let p = to_logical(Vec2::new(800.0, 500.0), &display, PLAYFIELD).unwrap();
        assert_eq!(p, Vec2::new(400.0, 225.0));
    }

    #[test]
    fn test_out_of_bounds_not_clamped() {
        let display = DisplayRect::new(100.0, 400.0, 225.0);
        let p = to_logical(Vec2::new(500.0, 20.0), &display, PLAYFIELD).unwrap();
        assert_eq!(p, Vec2::new(1000.0, -160.0));
    }

    #[test]
    fn test_hidden_canvas() {
        let display = DisplayRect::new(0.0, 0.0, 450.0);
        assert!(to_logical(Vec2::new(10.0, 10.0), &display, PLAYFIELD).is_none());
    }
}
