use nalgebra::{point, Point2};

/// Straight-line follower: computes the next position toward a destination
/// without ever overshooting it.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    pub destination: Point2<f64>,
    pub max_step: f64,
}

impl Navigator {
    pub fn new(destination: Point2<f64>, max_step: f64) -> Navigator {
        debug_assert!(max_step > 0.0, "navigator max_step must be positive");
        Navigator {
            destination,
            max_step,
        }
    }

    /// Next interpolated position. Snaps to the destination once it is
    /// within `max_step`, which is also the terminal case for
    /// destination == current.
    pub fn next_position(&self, current: Point2<f64>) -> Point2<f64> {
        let delta = self.destination - current;
        let distance = delta.norm();
        if distance <= self.max_step {
            return self.destination;
        }

        let angle = (delta.x.abs() / distance).clamp(0.0, 1.0).acos();
        let dx = (angle.cos() * self.max_step).min(self.max_step) * sign(delta.x);
        let dy = (angle.sin() * self.max_step).min(self.max_step) * sign(delta.y);
        point![
            current.x + round_away_from_zero(dx),
            current.y + round_away_from_zero(dy)
        ]
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

// Rounding toward zero here would systematically undershoot diagonal
// bearings, so ties go away from zero.
fn round_away_from_zero(v: f64) -> f64 {
    (v.abs() + 0.5).floor() * sign(v)
}

#[cfg(test)]
mod test {
    use super::Navigator;
    use nalgebra::point;

    #[test]
    fn test_snap_when_close() {
        let navigator = Navigator::new(point![10.0, 10.0], 5.0);
        assert_eq!(navigator.next_position(point![8.0, 10.0]), point![10.0, 10.0]);
        assert_eq!(navigator.next_position(point![10.0, 10.0]), point![10.0, 10.0]);
    }

    #[test]
    fn test_axis_aligned_step() {
        let navigator = Navigator::new(point![100.0, 0.0], 4.0);
        assert_eq!(navigator.next_position(point![0.0, 0.0]), point![4.0, 0.0]);

        let navigator = Navigator::new(point![0.0, -100.0], 4.0);
        assert_eq!(navigator.next_position(point![0.0, 0.0]), point![0.0, -4.0]);
    }
}
