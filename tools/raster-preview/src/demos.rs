//! Built-in demo scenes, sized for a 128x64 page-addressed display.

use crate::scene::{Scene, Shape};

const WIDTH: u16 = 128;
const HEIGHT: u16 = 64;

/// Names accepted by [`demo_scene`].
pub fn available_demos() -> &'static [&'static str] {
    &["shapes", "star", "sectors", "rounded", "ellipses"]
}

/// Build the named demo scene, or `None` for an unknown name.
pub fn demo_scene(name: &str) -> Option<Scene> {
    let shapes = match name {
        "shapes" => shapes(),
        "star" => star(),
        "sectors" => sectors(),
        "rounded" => rounded(),
        "ellipses" => ellipses(),
        _ => return None,
    };
    Some(Scene::new(WIDTH, HEIGHT, shapes))
}

fn shapes() -> Vec<Shape> {
    vec![
        Shape::Rectangle {
            x: 0,
            y: 0,
            width: 128,
            height: 64,
            radius: 0,
            fill: false,
        },
        Shape::Triangle {
            points: [[8, 56], [24, 8], [40, 56]],
            fill: true,
        },
        Shape::Circle {
            x: 64,
            y: 32,
            radius: 20,
            fill: false,
            quadrants: 0,
        },
        Shape::Circle {
            x: 64,
            y: 32,
            radius: 12,
            fill: true,
            quadrants: 0,
        },
        Shape::Corners {
            x0: 96,
            y0: 10,
            x1: 119,
            y1: 53,
            fill: true,
        },
        Shape::Ink { on: false },
        Shape::Corners {
            x0: 100,
            y0: 14,
            x1: 115,
            y1: 49,
            fill: true,
        },
    ]
}

/// 16 spokes of growing length around the center.
fn star() -> Vec<Shape> {
    (0..16u8)
        .map(|i| Shape::LineAngle {
            x: 64,
            y: 32,
            length: 14 + i32::from(i % 4) * 5,
            angle: i * 16,
        })
        .collect()
}

/// Four sector fills with the arcs they cut out drawn around them.
fn sectors() -> Vec<Shape> {
    let mut shapes = Vec::new();
    for (i, (start, end)) in [(0u8, 64u8), (40, 200), (224, 32), (96, 160)]
        .into_iter()
        .enumerate()
    {
        let x = 16 + 32 * i as i32;
        shapes.push(Shape::Arc {
            x,
            y: 32,
            radius: 12,
            start,
            end,
            fill: true,
        });
        shapes.push(Shape::Arc {
            x,
            y: 32,
            radius: 14,
            start,
            end,
            fill: false,
        });
    }
    shapes
}

fn rounded() -> Vec<Shape> {
    (0..4)
        .map(|i| Shape::Rectangle {
            x: 2 + i * 31,
            y: 8,
            width: 29,
            height: 48,
            radius: i * 4 + 2,
            fill: i % 2 == 1,
        })
        .collect()
}

/// Ellipses of varying eccentricity, plus a single quadrant of each kind.
fn ellipses() -> Vec<Shape> {
    let mut shapes: Vec<Shape> = [(60, 30), (45, 20), (30, 12), (15, 6)]
        .into_iter()
        .map(|(rx, ry)| Shape::Ellipse {
            x: 64,
            y: 32,
            rx,
            ry,
            fill: false,
            quadrants: 0,
        })
        .collect();
    shapes.push(Shape::Ellipse {
        x: 64,
        y: 32,
        rx: 10,
        ry: 4,
        fill: true,
        quadrants: 0,
    });
    shapes.push(Shape::Circle {
        x: 4,
        y: 4,
        radius: 12,
        fill: true,
        quadrants: 4,
    });
    shapes
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_demo_renders() {
        for name in available_demos() {
            let scene = demo_scene(name).unwrap();
            let bm = scene.render().unwrap();
            assert_eq!(bm.size(), (WIDTH, HEIGHT));
            assert!(bm.count_on() > 0, "demo '{name}' is blank");
        }
    }

    #[test]
    fn test_unknown_demo() {
        assert!(demo_scene("nope").is_none());
    }

    #[test]
    fn test_shapes_demo_erases_inside_box() {
        use mono_raster::PixelSurface;

        let bm = demo_scene("shapes").unwrap().render().unwrap();
        assert!(bm.pixel(96, 10));
        assert!(!bm.pixel(107, 30));
        assert!(bm.pixel(0, 0));
    }
}
