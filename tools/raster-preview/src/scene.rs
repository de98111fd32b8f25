//! TOML scene descriptions.
//!
//! A scene is a surface size plus an ordered list of shapes:
//!
//! ```toml
//! width = 128
//! height = 64
//!
//! [[shape]]
//! kind = "rectangle"
//! x = 0
//! y = 0
//! width = 128
//! height = 64
//! radius = 6
//!
//! [[shape]]
//! kind = "arc"
//! x = 64
//! y = 32
//! radius = 20
//! start = 16
//! end = 112
//! fill = true
//! ```

use std::fs;
use std::path::Path;

use mono_raster::{Bitmap, PixelSurface, Quadrants, RendererPrimitives};
use serde::Deserialize;
use tracing::debug;

use crate::Result;

/// One drawing command. `quadrants` is the 4-bit mask where 0 (the default)
/// selects the whole shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Pixel {
        x: i32,
        y: i32,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    },
    Hline {
        x: i32,
        y: i32,
        length: i32,
    },
    Vline {
        x: i32,
        y: i32,
        length: i32,
    },
    LineAngle {
        x: i32,
        y: i32,
        length: i32,
        angle: u8,
    },
    /// Connected segments through `points`.
    Polyline {
        points: Vec<[i32; 2]>,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        #[serde(default)]
        radius: i32,
        #[serde(default)]
        fill: bool,
    },
    /// Rectangle given by two inclusive corners.
    Corners {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[serde(default)]
        fill: bool,
    },
    Triangle {
        points: [[i32; 2]; 3],
        #[serde(default)]
        fill: bool,
    },
    Circle {
        x: i32,
        y: i32,
        radius: i32,
        #[serde(default)]
        fill: bool,
        #[serde(default)]
        quadrants: u8,
    },
    Ellipse {
        x: i32,
        y: i32,
        rx: i32,
        ry: i32,
        #[serde(default)]
        fill: bool,
        #[serde(default)]
        quadrants: u8,
    },
    Arc {
        x: i32,
        y: i32,
        radius: i32,
        start: u8,
        end: u8,
        #[serde(default)]
        fill: bool,
    },
    /// Switch the ink for the following shapes (`false` erases).
    Ink {
        on: bool,
    },
}

impl Shape {
    pub fn draw<S: PixelSurface>(&self, prim: &mut RendererPrimitives<'_, S>) {
        match *self {
            Shape::Pixel { x, y } => prim.pixel(x, y),
            Shape::Line { x0, y0, x1, y1 } => prim.line(x0, y0, x1, y1),
            Shape::Hline { x, y, length } => prim.hline(x, y, length),
            Shape::Vline { x, y, length } => prim.vline(x, y, length),
            Shape::LineAngle {
                x,
                y,
                length,
                angle,
            } => prim.line_angle(x, y, length, angle),
            Shape::Polyline { ref points } => {
                if let Some((&[x, y], rest)) = points.split_first() {
                    prim.move_to(x, y);
                    if rest.is_empty() {
                        prim.pixel(x, y);
                    }
                    for &[x, y] in rest {
                        prim.line_to(x, y);
                    }
                }
            }
            Shape::Rectangle {
                x,
                y,
                width,
                height,
                radius,
                fill,
            } => match (fill, radius > 0) {
                (false, false) => prim.rectangle(x, y, width, height),
                (true, false) => prim.solid_rectangle(x, y, width, height),
                (false, true) => prim.rounded_rectangle(x, y, width, height, radius),
                (true, true) => prim.solid_rounded_rectangle(x, y, width, height, radius),
            },
            Shape::Corners {
                x0,
                y0,
                x1,
                y1,
                fill,
            } => {
                if fill {
                    prim.solid_rectangle_corners(x0, y0, x1, y1);
                } else {
                    prim.rectangle_corners(x0, y0, x1, y1);
                }
            }
            Shape::Triangle {
                points: [[x1, y1], [x2, y2], [x3, y3]],
                fill,
            } => {
                if fill {
                    prim.solid_triangle(x1, y1, x2, y2, x3, y3);
                } else {
                    prim.triangle(x1, y1, x2, y2, x3, y3);
                }
            }
            Shape::Circle {
                x,
                y,
                radius,
                fill,
                quadrants,
            } => {
                let q = Quadrants::from_mask(quadrants);
                if fill {
                    prim.solid_circle(x, y, radius, q);
                } else {
                    prim.circle(x, y, radius, q);
                }
            }
            Shape::Ellipse {
                x,
                y,
                rx,
                ry,
                fill,
                quadrants,
            } => {
                let q = Quadrants::from_mask(quadrants);
                if fill {
                    prim.solid_ellipse(x, y, rx, ry, q);
                } else {
                    prim.ellipse(x, y, rx, ry, q);
                }
            }
            Shape::Arc {
                x,
                y,
                radius,
                start,
                end,
                fill,
            } => {
                if fill {
                    prim.solid_arc(x, y, radius, start, end);
                } else {
                    prim.arc(x, y, radius, start, end);
                }
            }
            Shape::Ink { on } => prim.set_ink(on),
        }
    }
}

// ============================================================================
// Scene
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: u16,
    pub height: u16,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u16, height: u16, shapes: Vec<Shape>) -> Self {
        Self {
            width,
            height,
            shapes,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let scene = Self::from_toml_str(&fs::read_to_string(path)?)?;
        debug!(
            "loaded scene {}: {}x{}, {} shapes",
            path.display(),
            scene.width,
            scene.height,
            scene.shapes.len()
        );
        Ok(scene)
    }

    /// Draw every shape in order onto a fresh bitmap. Ink starts on.
    pub fn render(&self) -> Result<Bitmap> {
        let mut bm = Bitmap::new(self.width, self.height)?;
        let mut prim = RendererPrimitives::new(&mut bm);
        for shape in &self.shapes {
            shape.draw(&mut prim);
        }
        Ok(bm)
    }
}

// ============================================================================
// Tests
// ============================================================================
