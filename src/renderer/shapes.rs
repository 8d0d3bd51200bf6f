//! Shape generation for 2D primitives
//!
//! Output is in playfield pixels; `RenderState` maps to NDC on upload.

use super::vertex::{Vertex, colors};
use crate::sim::Rect;
use crate::ui::Snapshot;

/// Append two triangles covering `rect`
pub fn push_rect(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let (x0, y0) = (rect.x(), rect.y());
    let (x1, y1) = (rect.right(), rect.bottom());

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Player car: body plus two headlights along the front edge
pub fn push_player(out: &mut Vec<Vertex>, rect: &Rect) {
    push_rect(out, rect, colors::PLAYER);
    push_rect(out, &rect.inset(0.15, 0.0, 0.2, 0.1), colors::HEADLIGHT);
    push_rect(out, &rect.inset(0.65, 0.0, 0.2, 0.1), colors::HEADLIGHT);
}

/// Build the full frame: road lines, then player, then obstacles
pub fn scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let quads = snapshot.road_lines.len() + snapshot.obstacles.len() + 3;
    let mut vertices = Vec::with_capacity(quads * 6);

    for line in &snapshot.road_lines {
        push_rect(&mut vertices, line, colors::ROAD_LINE);
    }
    push_player(&mut vertices, &snapshot.player);
    for obstacle in &snapshot.obstacles {
        push_rect(&mut vertices, obstacle, colors::OBSTACLE);
    }

    vertices
}
