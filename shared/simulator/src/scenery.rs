use crate::graphics::Canvas;
use nalgebra::{point, Point2};
use oorandom::Rand32;
use serde::{Deserialize, Serialize};

const STAR_LAYERS: [f64; 3] = [1.0, 2.0, 3.0];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneryDef {
    pub background: Option<String>,
    pub star_count: u32,
    pub star_seed: u64,
}

impl Default for SceneryDef {
    fn default() -> SceneryDef {
        SceneryDef {
            background: None,
            star_count: 64,
            star_seed: 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Star {
    position: Point2<f64>,
    speed: f64,
}

/// Decorative scrolling background. No gameplay effect.
#[derive(Clone, Debug)]
pub struct Scenery {
    def: SceneryDef,
    stars: Vec<Star>,
    view_width: f64,
}

impl Scenery {
    pub fn new(def: SceneryDef, view_width: f64, view_height: f64) -> Scenery {
        let mut rng = Rand32::new(def.star_seed);
        let stars = (0..def.star_count)
            .map(|_| Star {
                position: point![
                    rng.rand_float() as f64 * view_width,
                    rng.rand_float() as f64 * view_height
                ],
                speed: STAR_LAYERS[rng.rand_range(0..STAR_LAYERS.len() as u32) as usize],
            })
            .collect();
        Scenery {
            def,
            stars,
            view_width,
        }
    }

    pub fn def(&self) -> &SceneryDef {
        &self.def
    }

    pub fn update(&mut self) {
        for star in self.stars.iter_mut() {
            star.position.x -= star.speed;
            if star.position.x < 0.0 {
                star.position.x += self.view_width;
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(background) = &self.def.background {
            canvas.blit(background, 0.0, 0.0);
        }
        for star in self.stars.iter() {
            canvas.blit("star", star.position.x, star.position.y);
        }
    }
}
