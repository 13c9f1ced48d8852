//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::NET_GAP;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn fill_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x, y) = (rect.min.x, rect.min.y);
    let (w, h) = (rect.size.x, rect.size.y);

    vec![
        Vertex::new(x, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a single-pixel point
pub fn point(x: f32, y: f32, color: [f32; 4]) -> Vec<Vertex> {
    fill_rect(&Rect::new(Vec2::new(x, y), Vec2::new(1.0, 1.0)), color)
}

/// Rows of the dotted center net: every row except each `NET_GAP`-th
pub fn net_rows(height: u32) -> impl Iterator<Item = u32> {
    (0..height).filter(|y| y % NET_GAP != 0)
}

/// Generate vertices for the dotted center net at `x = width / 2`
pub fn net(width: u32, height: u32, color: [f32; 4]) -> Vec<Vertex> {
    let x = (width / 2) as f32;

    let mut vertices = Vec::with_capacity(height as usize * 6);
    for y in net_rows(height) {
        vertices.extend(point(x, y as f32, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_fill_rect_covers_corners() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        let vertices = fill_rect(&rect, colors::FOREGROUND);
        assert_eq!(vertices.len(), 6);

        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(xs.contains(&10.0) && xs.contains(&40.0));
        assert!(ys.contains(&20.0) && ys.contains(&60.0));
    }

    #[test]
    fn test_point_is_one_pixel() {
        let vertices = point(5.0, 7.0, colors::FOREGROUND);
        let max_x = vertices.iter().map(|v| v.position[0]).fold(0.0, f32::max);
        let max_y = vertices.iter().map(|v| v.position[1]).fold(0.0, f32::max);
        assert_eq!(max_x, 6.0);
        assert_eq!(max_y, 8.0);
    }

    #[test]
    fn test_net_rows_skip_every_fifth() {
        let rows: Vec<u32> = net_rows(480).collect();

        // 4 of every 5 rows are marked
        assert_eq!(rows.len(), 384);
        assert!(rows.iter().all(|y| y % 5 != 0));

        // The skipped rows are exactly the multiples of 5
        let skipped: Vec<u32> = (0..480).filter(|y| !rows.contains(y)).collect();
        assert!(skipped.iter().all(|y| y % 5 == 0));
        assert_eq!(skipped.len(), 96);
    }

    #[test]
    fn test_net_is_centered() {
        let vertices = net(1020, 480, colors::FOREGROUND);
        assert!(vertices.iter().all(|v| v.position[0] >= 510.0));
        assert!(vertices.iter().all(|v| v.position[0] <= 511.0));
    }
}
