use crate::graphics::Canvas;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Base of every simulated object: a positioned, sized, visible/active
/// flagged drawable with rectangular hit-testing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sprite {
    pub position: Point2<f64>,
    pub width: i32,
    pub height: i32,
    pub visible: bool,
    pub active: bool,
    pub image: Option<String>,
}

impl Sprite {
    pub fn new(position: Point2<f64>, width: i32, height: i32, image: &str) -> Sprite {
        Sprite {
            position,
            width,
            height,
            visible: true,
            active: true,
            image: Some(image.to_string()),
        }
    }

    /// Axis-aligned containment of a point, measured from the sprite's
    /// top-left corner. The only collision primitive in the simulation.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.width as f64
            && point.y >= self.position.y
            && point.y <= self.position.y + self.height as f64
    }

    pub fn translate(&mut self, delta: Vector2<f64>) {
        self.position += delta;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.active = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.active = true;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        // A sprite whose image failed to load draws nothing.
        if let Some(image) = &self.image {
            canvas.blit(image, self.position.x, self.position.y);
        }
    }
}

#[cfg(test)]
mod test {
    use super::Sprite;
    use nalgebra::point;

    #[test]
    fn test_contains() {
        let sprite = Sprite::new(point![10.0, 20.0], 20, 10, "drone");
        assert!(sprite.contains(point![10.0, 20.0]));
        assert!(sprite.contains(point![30.0, 30.0]));
        assert!(sprite.contains(point![15.0, 25.0]));
        assert!(!sprite.contains(point![9.9, 25.0]));
        assert!(!sprite.contains(point![30.1, 25.0]));
        assert!(!sprite.contains(point![15.0, 30.1]));
    }
}
