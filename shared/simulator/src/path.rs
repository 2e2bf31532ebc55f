use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

fn initial_cursor() -> i32 {
    -1
}

/// Ordered, optionally cyclic waypoint sequence with a consumption cursor.
///
/// The cursor is transient: a deserialized path always starts before the
/// first waypoint, so a reloaded level never resumes mid-traversal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Point2<f64>>,
    cyclic: bool,
    #[serde(skip, default = "initial_cursor")]
    cursor: i32,
}

impl Path {
    pub fn new(waypoints: Vec<Point2<f64>>, cyclic: bool) -> Path {
        Path {
            waypoints,
            cyclic,
            cursor: -1,
        }
    }

    pub fn empty() -> Path {
        Path::new(Vec::new(), false)
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
    }

    pub fn waypoints(&self) -> &[Point2<f64>] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Advance the cursor and return the next waypoint. Cyclic paths wrap
    /// and never exhaust; non-cyclic paths return None once past the end.
    /// A zero-length path is always exhausted, cyclic or not.
    pub fn next(&mut self) -> Option<Point2<f64>> {
        if self.waypoints.is_empty() {
            return None;
        }
        if self.cyclic {
            self.cursor = (self.cursor + 1).rem_euclid(self.waypoints.len() as i32);
            Some(self.waypoints[self.cursor as usize])
        } else {
            self.cursor += 1;
            self.waypoints.get(self.cursor as usize).copied()
        }
    }

    pub fn reset(&mut self) {
        self.cursor = -1;
    }

    /// Shift every waypoint. Editor operation; the cursor is preserved.
    pub fn translate(&mut self, delta: Vector2<f64>) {
        for waypoint in self.waypoints.iter_mut() {
            *waypoint += delta;
        }
    }

    pub fn add_point(&mut self, point: Point2<f64>) {
        self.waypoints.push(point);
    }

    pub fn remove_last(&mut self) -> Option<Point2<f64>> {
        self.waypoints.pop()
    }

    pub fn remove_all(&mut self) {
        self.waypoints.clear();
        self.cursor = -1;
    }
}
