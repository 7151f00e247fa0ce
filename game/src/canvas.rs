/// Drawing primitives the game needs from a rendering backend.
///
/// Coordinates are in field units with the origin at the top-left corner.
pub trait Canvas {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Circle whose bounding box has its top-left corner at `(x, y)`.
    fn circle(&mut self, x: f32, y: f32, diameter: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32);
}
