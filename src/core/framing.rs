use super::bounds::Aabb;

/// Camera distance that fits a box of `max_dimension` into a perspective view.
///
/// The vertical fit is `max_dimension / (2 * tan(fov / 2))`; the horizontal
/// fit divides that by the aspect ratio. The larger of the two is scaled by
/// `padding` so the object never touches the viewport edges.
#[inline]
pub fn fit_distance(max_dimension: f32, fov_deg: f32, aspect: f32, padding: f32) -> f32 {
    let fit_height = max_dimension / (2.0 * (std::f32::consts::PI * fov_deg / 360.0).tan());
    let fit_width = fit_height / aspect;
    padding * fit_height.max(fit_width)
}

/// [`fit_distance`] for a bounding box.
#[inline]
pub fn fit_box(bounds: &Aabb, fov_deg: f32, aspect: f32, padding: f32) -> f32 {
    fit_distance(bounds.max_dimension(), fov_deg, aspect, padding)
}
