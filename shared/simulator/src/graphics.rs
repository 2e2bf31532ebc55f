/// Rendering surface consumed by the draw pass. The simulation never owns
/// buffer swapping or window lifecycle; it only issues named blits.
pub trait Canvas {
    fn blit(&mut self, image: &str, x: f64, y: f64);
}

/// Discards every draw call. Used by headless drivers.
#[derive(Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn blit(&mut self, _image: &str, _x: f64, _y: f64) {}
}

/// Records draw calls in order, for tests that assert on the draw pass.
#[derive(Default)]
pub struct RecordingCanvas {
    pub blits: Vec<(String, f64, f64)>,
}

impl Canvas for RecordingCanvas {
    fn blit(&mut self, image: &str, x: f64, y: f64) {
        self.blits.push((image.to_string(), x, y));
    }
}
