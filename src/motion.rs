/// Scroll offset in pixels past which the sticky header casts a shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 8.0;

/// Maximum rotation of the hero card in degrees on either axis.
pub const MAX_TILT_DEGREES: f64 = 10.0;

/// Keyframes for the hero glow as `(progress, value)` pairs.
pub const GLOW_OPACITY_STOPS: [(f64, f64); 3] = [(0.0, 0.2), (0.5, 0.6), (1.0, 0.15)];
pub const GLOW_SCALE_STOPS: [(f64, f64); 2] = [(0.0, 1.0), (1.0, 1.06)];

pub fn passed_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_SHADOW_THRESHOLD
}

/// Rotation applied to the hero card from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x` and `y` are pointer offsets inside the card, not page coordinates.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let mid_x = width / 2.0;
        let mid_y = height / 2.0;
        let percent_x = ((x - mid_x) / mid_x).clamp(-1.0, 1.0);
        let percent_y = ((y - mid_y) / mid_y).clamp(-1.0, 1.0);
        Self {
            rotate_x: -percent_y * MAX_TILT_DEGREES,
            rotate_y: percent_x * MAX_TILT_DEGREES,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "transform: perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }
}

/// How far an element has travelled through the viewport: 0.0 while its top
/// is still below the bottom edge, 1.0 once its bottom has passed the top edge.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let total = viewport_height + height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / total).clamp(0.0, 1.0)
}

/// Piecewise-linear interpolation over `(position, value)` stops, clamped to
/// the outer stops. Stops must be sorted by position.
pub fn interpolate(stops: &[(f64, f64)], t: f64) -> f64 {
    let first = match stops.first() {
        Some(first) => *first,
        None => return 0.0,
    };
    if stops.len() == 1 || t <= first.0 {
        return first.1;
    }
    let last = stops[stops.len() - 1];
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            if x1 == x0 {
                return y1;
            }
            let fraction = (t - x0) / (x1 - x0);
            return y0 + (y1 - y0) * fraction;
        }
    }
    last.1
}

pub fn glow_opacity(progress: f64) -> f64 {
    interpolate(&GLOW_OPACITY_STOPS, progress)
}

pub fn glow_scale(progress: f64) -> f64 {
    interpolate(&GLOW_SCALE_STOPS, progress)
}

pub fn glow_style(progress: f64) -> String {
    format!(
        "opacity: {:.3}; transform: scale({:.3});",
        glow_opacity(progress),
        glow_scale(progress)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_shadow_appears_only_past_the_threshold() {
        assert!(!passed_scroll_threshold(0.0));
        assert!(!passed_scroll_threshold(8.0));
        assert!(passed_scroll_threshold(8.1));
        assert!(passed_scroll_threshold(500.0));
    }

    #[test]
    fn test_pointer_at_center_leaves_the_card_flat() {
        let tilt = Tilt::from_pointer(160.0, 200.0, 320.0, 400.0);
        assert!(close(tilt.rotate_x, 0.0));
        assert!(close(tilt.rotate_y, 0.0));
    }

    #[test]
    fn test_corners_reach_the_maximum_rotation() {
        // bottom-right corner: full positive x, full positive y
        let tilt = Tilt::from_pointer(320.0, 400.0, 320.0, 400.0);
        assert!(close(tilt.rotate_y, MAX_TILT_DEGREES));
        assert!(close(tilt.rotate_x, -MAX_TILT_DEGREES));

        // top-left corner flips both signs
        let tilt = Tilt::from_pointer(0.0, 0.0, 320.0, 400.0);
        assert!(close(tilt.rotate_y, -MAX_TILT_DEGREES));
        assert!(close(tilt.rotate_x, MAX_TILT_DEGREES));
    }

    #[test]
    fn test_pointer_outside_the_card_is_clamped() {
        let tilt = Tilt::from_pointer(1000.0, -500.0, 320.0, 400.0);
        assert!(close(tilt.rotate_y, MAX_TILT_DEGREES));
        assert!(close(tilt.rotate_x, MAX_TILT_DEGREES));
    }

    #[test]
    fn test_degenerate_card_size_stays_neutral() {
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 400.0), Tilt::default());
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 320.0, 0.0), Tilt::default());
    }

    #[test]
    fn test_transform_renders_both_axes() {
        let style = Tilt {
            rotate_x: -2.5,
            rotate_y: 7.25,
        }
        .transform();
        assert!(style.contains("rotateX(-2.50deg)"));
        assert!(style.contains("rotateY(7.25deg)"));
        assert!(style.contains("perspective"));
    }

    #[test]
    fn test_scroll_progress_covers_the_full_travel() {
        // element top at the bottom edge of an 800px viewport
        assert!(close(scroll_progress(800.0, 400.0, 800.0), 0.0));
        // element bottom at the top edge
        assert!(close(scroll_progress(-400.0, 400.0, 800.0), 1.0));
        // halfway through
        assert!(close(scroll_progress(200.0, 400.0, 800.0), 0.5));
    }

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert!(close(scroll_progress(5000.0, 400.0, 800.0), 0.0));
        assert!(close(scroll_progress(-5000.0, 400.0, 800.0), 1.0));
        assert!(close(scroll_progress(0.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn test_interpolate_hits_stops_and_midpoints() {
        let stops = [(0.0, 0.2), (0.5, 0.6), (1.0, 0.15)];
        assert!(close(interpolate(&stops, 0.0), 0.2));
        assert!(close(interpolate(&stops, 0.5), 0.6));
        assert!(close(interpolate(&stops, 1.0), 0.15));
        assert!(close(interpolate(&stops, 0.25), 0.4));
        assert!(close(interpolate(&stops, 0.75), 0.375));
    }

    #[test]
    fn test_interpolate_clamps_outside_the_stops() {
        let stops = [(0.0, 1.0), (1.0, 1.06)];
        assert!(close(interpolate(&stops, -3.0), 1.0));
        assert!(close(interpolate(&stops, 2.0), 1.06));
    }

    #[test]
    fn test_interpolate_handles_thin_inputs() {
        assert!(close(interpolate(&[], 0.5), 0.0));
        assert!(close(interpolate(&[(0.0, 0.7)], 42.0), 0.7));
    }

    #[test]
    fn test_glow_follows_its_keyframes() {
        assert!(close(glow_opacity(0.0), 0.2));
        assert!(close(glow_opacity(0.5), 0.6));
        assert!(close(glow_opacity(1.0), 0.15));
        assert!(close(glow_scale(0.0), 1.0));
        assert!(close(glow_scale(1.0), 1.06));

        let style = glow_style(0.5);
        assert!(style.contains("opacity: 0.600"));
        assert!(style.contains("scale(1.030"));
    }
}
