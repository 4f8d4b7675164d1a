//! Vertex data helpers

use ld_core::Point;

/// Bytes per vertex: two tightly packed `f32`s
pub const VERTEX_STRIDE: i32 = 2 * std::mem::size_of::<f32>() as i32;

/// Flatten points into `[x0, y0, x1, y1, ...]`
pub fn flatten_points(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// View flattened coordinates as the bytes uploaded to the position buffer
pub fn as_bytes(coords: &[f32]) -> &[u8] {
    bytemuck::cast_slice(coords)
}

/// CPU mirror of the vertex stage: pixel space to clip space with Y flipped
pub fn to_clip_space(point: Point, resolution: [f32; 2]) -> [f32; 2] {
    let x = point.x / resolution[0] * 2.0 - 1.0;
    let y = point.y / resolution[1] * 2.0 - 1.0;
    [x, -y]
}
