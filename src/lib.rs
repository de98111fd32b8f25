//! # mono-raster
//!
//! Integer-only 2D rasterization onto monochrome pixel surfaces.
//!
//! Lines, rectangles, rounded rectangles, triangles, circles, ellipses, arcs
//! and sectors are drawn with midpoint and Bresenham decision variables,
//! without floating point, so the crate runs on targets with no FPU.
//!
//! ## Architecture
//!
//! 1. **Geometry**: points, rectangles, the 256-unit angle scale and its
//!    integer arctangent
//! 2. **Steppers**: Bresenham line, midpoint circle and two-region ellipse
//!    iterators producing offsets
//! 3. **Span accumulation**: one min/max run per scanline, used to fill
//!    triangles and sectors without gaps
//! 4. **Renderer**: [`RendererPrimitives`] turning offsets into pixels on
//!    any [`PixelSurface`]
//!
//! ```
//! use mono_raster::{Bitmap, PixelSurface, Quadrants, RendererPrimitives};
//!
//! let mut bm = Bitmap::new(64, 32).unwrap();
//! let mut prim = RendererPrimitives::new(&mut bm);
//! prim.rounded_rectangle(0, 0, 64, 32, 6);
//! prim.solid_circle(32, 16, 8, Quadrants::All);
//! prim.solid_arc(32, 16, 12, 16, 48);
//! assert!(bm.pixel(32, 16));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Phase 1: Foundation Types & Math
pub mod angle;
pub mod basics;
pub mod quadrants;

// Phase 2: Steppers & Span Accumulation
pub mod circle_midpoint;
pub mod ellipse_midpoint;
pub mod line_bresenham;
pub mod scan_span;

// Phase 3: Surfaces
pub mod bitmap;
pub mod pixel_surface;

// Phase 4: Renderer
pub mod renderer_arc;
pub mod renderer_circle;
pub mod renderer_primitives;

pub use angle::Angle;
pub use basics::{Point, Rect};
pub use bitmap::{Bitmap, BitmapError};
pub use pixel_surface::PixelSurface;
pub use quadrants::{Quadrant, QuadrantSet, Quadrants};
pub use renderer_primitives::RendererPrimitives;
