use crate::core::color::{Hsl, Paint};
use glam::Vec2;

/// 2D raster drawing target with a Canvas-like immediate-mode path API.
///
/// Coordinates are logical (CSS) pixels; implementations handle device pixel
/// ratio themselves. `logical_size` is queried every frame so resizes are
/// picked up without caching.
pub trait Surface {
    fn logical_size(&self) -> Vec2;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Hsl);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);

    fn set_alpha(&mut self, alpha: f32);
    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint, width: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Full circle around `center`.
    fn circle(&mut self, center: Vec2, radius: f32);
    fn bezier_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
    fn arc_to(&mut self, corner: Vec2, end: Vec2, radius: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}
