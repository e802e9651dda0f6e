//! Immediate-mode triangle builder.
//!
//! Every primitive is tessellated on the CPU into a flat triangle list of
//! [`ColorVertex`]. Positions are logical pixels; the renderer maps them to
//! clip space when uploading.

use bytemuck::{Pod, Zeroable};

use crate::layout::Rect;

/// Linear RGBA, each channel in `0.0..=1.0`.
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Segments used to approximate an ellipse.
pub const ELLIPSE_SEGMENTS: usize = 48;

/// Convert 8-bit RGB plus alpha to [`Rgba`].
#[must_use]
pub fn rgba(rgb: [u8; 3], alpha: u8) -> Rgba {
    [
        f32::from(rgb[0]) / 255.0,
        f32::from(rgb[1]) / 255.0,
        f32::from(rgb[2]) / 255.0,
        f32::from(alpha) / 255.0,
    ]
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 2],
    pub color: Rgba,
}

/// Accumulates triangles for one frame.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    vertices: Vec<ColorVertex>,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything drawn so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[must_use]
    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    fn triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: Rgba) {
        self.vertices.push(ColorVertex { pos: a, color });
        self.vertices.push(ColorVertex { pos: b, color });
        self.vertices.push(ColorVertex { pos: c, color });
    }

    fn quad(&mut self, q0: [f32; 2], q1: [f32; 2], q2: [f32; 2], q3: [f32; 2], color: Rgba) {
        self.triangle(q0, q1, q2, color);
        self.triangle(q0, q2, q3, color);
    }

    /// Filled rectangle.
    pub fn rect(&mut self, r: Rect, color: Rgba) {
        let (x0, y0, x1, y1) = (r.x, r.y, r.x + r.w, r.y + r.h);
        self.quad([x0, y0], [x1, y0], [x1, y1], [x0, y1], color);
    }

    /// Rectangle border of the given thickness, drawn inside `r`.
    pub fn rect_outline(&mut self, r: Rect, thickness: f32, color: Rgba) {
        let t = thickness.min(r.w / 2.0).min(r.h / 2.0);
        if t <= 0.0 {
            return;
        }
        self.rect(Rect::new(r.x, r.y, r.w, t), color);
        self.rect(Rect::new(r.x, r.y + r.h - t, r.w, t), color);
        self.rect(Rect::new(r.x, r.y + t, t, r.h - 2.0 * t), color);
        self.rect(Rect::new(r.x + r.w - t, r.y + t, t, r.h - 2.0 * t), color);
    }

    /// Filled ellipse inscribed in `r`.
    pub fn ellipse(&mut self, r: Rect, color: Rgba) {
        let center = [r.x + r.w / 2.0, r.y + r.h / 2.0];
        let ring = ellipse_points(center, r.w / 2.0, r.h / 2.0);
        for i in 0..ELLIPSE_SEGMENTS {
            let next = (i + 1) % ELLIPSE_SEGMENTS;
            self.triangle(center, ring[i], ring[next], color);
        }
    }

    /// Ellipse ring inscribed in `r`, `thickness` wide.
    pub fn ellipse_outline(&mut self, r: Rect, thickness: f32, color: Rgba) {
        let (rx, ry) = (r.w / 2.0, r.h / 2.0);
        let t = thickness.min(rx).min(ry);
        if t <= 0.0 {
            return;
        }
        let center = [r.x + rx, r.y + ry];
        let outer = ellipse_points(center, rx, ry);
        let inner = ellipse_points(center, rx - t, ry - t);
        for i in 0..ELLIPSE_SEGMENTS {
            let next = (i + 1) % ELLIPSE_SEGMENTS;
            self.quad(outer[i], outer[next], inner[next], inner[i], color);
        }
    }

    /// Filled convex polygon.
    pub fn polygon(&mut self, points: &[[f32; 2]], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        for i in 1..points.len() - 1 {
            self.triangle(points[0], points[i], points[i + 1], color);
        }
    }

    /// Closed polyline with strokes of the given thickness centred on each edge.
    ///
    /// Each stroke runs `thickness / 2` past both ends of its edge so
    /// neighbouring strokes overlap at the corners.
    pub fn polygon_outline(&mut self, points: &[[f32; 2]], thickness: f32, color: Rgba) {
        if points.len() < 2 || thickness <= 0.0 {
            return;
        }
        let half = thickness / 2.0;
        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            let (dx, dy) = (q[0] - p[0], q[1] - p[1]);
            let len = (dx * dx + dy * dy).sqrt();
            if len <= f32::EPSILON {
                continue;
            }
            let (tx, ty) = (dx / len * half, dy / len * half);
            let (nx, ny) = (-ty, tx);
            let p = [p[0] - tx, p[1] - ty];
            let q = [q[0] + tx, q[1] + ty];
            self.quad(
                [p[0] + nx, p[1] + ny],
                [q[0] + nx, q[1] + ny],
                [q[0] - nx, q[1] - ny],
                [p[0] - nx, p[1] - ny],
                color,
            );
        }
    }
}

fn ellipse_points(center: [f32; 2], rx: f32, ry: f32) -> [[f32; 2]; ELLIPSE_SEGMENTS] {
    let mut points = [[0.0; 2]; ELLIPSE_SEGMENTS];
    for (i, p) in points.iter_mut().enumerate() {
        let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
        *p = [center[0] + rx * angle.cos(), center[1] + ry * angle.sin()];
    }
    points
}
