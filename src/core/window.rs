use crate::core::vector::Point2;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Axis-aligned world window for drawing a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotWindow {
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn y_span(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Padded window around `points` and the launch origin, widened on one
    /// axis so that x:y keeps [`DISTANCE_TO_HEIGHT_RATIO`].
    ///
    /// Non-finite coordinates are skipped.
    pub fn fixed_ratio<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut min_x = 0.0f64;
        let mut max_x = 0.0f64;
        let mut min_y = 0.0f64;
        let mut max_y = 0.0f64;
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let raw_x_span = (max_x - min_x).max(MIN_SPAN);
        let raw_y_span = (max_y - min_y).max(MIN_SPAN);
        let x_pad = raw_x_span * X_PADDING_RATIO;
        let y_pad = raw_y_span * Y_PADDING_RATIO;

        let mut x_span = raw_x_span + (2.0 * x_pad);
        let mut y_span = raw_y_span + (2.0 * y_pad);
        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        let center_x = (min_x + max_x) * 0.5;
        let center_y = (min_y + max_y) * 0.5;
        // Keep the ground line visible at the bottom when nothing dips below it.
        let bottom = if min_y >= 0.0 {
            -y_pad
        } else {
            center_y - (y_span * 0.5)
        };
        Self {
            min_x: center_x - (x_span * 0.5),
            max_x: center_x + (x_span * 0.5),
            min_y: bottom,
            max_y: bottom + y_span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TO_HEIGHT_RATIO, PlotWindow};
    use crate::core::vector::Point2;

    #[test]
    fn keeps_fixed_ratio_for_flat_shot() {
        let window = PlotWindow::fixed_ratio([Point2::new(100.0, 0.0), Point2::new(50.0, 10.0)]);
        assert!((window.x_span() / window.y_span() - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
        assert!(window.min_x < 0.0 && window.max_x > 100.0);
        assert!(window.min_y < 0.0 && window.max_y > 10.0);
    }

    #[test]
    fn widens_x_for_tall_shot() {
        let window = PlotWindow::fixed_ratio([Point2::new(0.0, 50.0)]);
        assert!((window.x_span() - 2.0 * window.y_span()).abs() < 1e-9);
        assert!(window.max_y > 50.0);
    }

    #[test]
    fn degenerate_path_still_has_area() {
        let window = PlotWindow::fixed_ratio([Point2::ORIGIN, Point2::new(f64::NAN, 1.0)]);
        assert!(window.x_span() >= 1.0);
        assert!(window.y_span() > 0.0);
    }

    #[test]
    fn covers_points_below_ground() {
        let window = PlotWindow::fixed_ratio([Point2::new(-20.0, -5.0), Point2::new(-10.0, 2.0)]);
        assert!(window.min_x < -20.0);
        assert!(window.min_y < -5.0 && window.max_y > 2.0);
    }
}
