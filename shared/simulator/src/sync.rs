use crate::graphics::Canvas;
use crate::level::Level;
use crate::ship::ShipData;
use std::sync::{Arc, Mutex};

/// Level shared between the fixed-interval update driver and the faster
/// render driver. One coarse lock covers the whole tick: a level is never
/// updated and drawn concurrently, nor updated twice concurrently.
#[derive(Clone)]
pub struct SharedLevel {
    inner: Arc<Mutex<Level>>,
}

impl SharedLevel {
    pub fn new(level: Level) -> SharedLevel {
        SharedLevel {
            inner: Arc::new(Mutex::new(level)),
        }
    }

    pub fn update(&self, player: &mut ShipData) {
        self.inner.lock().unwrap().update(player);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, player: &ShipData) {
        self.inner.lock().unwrap().draw(canvas, player);
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Level) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }
}
