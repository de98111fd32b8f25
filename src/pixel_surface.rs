//! The pixel surface consumed by the rasterizers.
//!
//! Every shape reduces to `set_pixel` calls on a [`PixelSurface`]. The
//! rasterizers compute geometrically correct coordinates and never clip;
//! discarding coordinates outside the surface is the surface's job.

/// A monochrome pixel store.
pub trait PixelSurface {
    /// Turn the pixel at (x, y) on or off. Coordinates outside the surface
    /// are silently ignored.
    fn set_pixel(&mut self, x: i16, y: i16, on: bool);

    /// State of the pixel at (x, y); `false` outside the surface.
    fn pixel(&self, x: i16, y: i16) -> bool;
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    #[inline]
    fn set_pixel(&mut self, x: i16, y: i16, on: bool) {
        (**self).set_pixel(x, y, on);
    }

    #[inline]
    fn pixel(&self, x: i16, y: i16) -> bool {
        (**self).pixel(x, y)
    }
}
