//! Data-space and pixel-space geometry shared by every visual module.
//!
//! Each plot declares a logical [`Domain`] and a padded [`PixelRect`]. The
//! [`SpaceMapper`] converts between the two with the y axis inverted, so that
//! larger data values sit higher on the drawing surface.
//!
//! # Examples
//!
//! ```rust
//! use mlplayground::geometry::{Domain, PixelRect, Point2D, SpaceMapper};
//!
//! let domain = Domain::new(0.0, 10.0, 0.0, 20.0).unwrap();
//! let rect = PixelRect::new(600.0, 400.0, 50.0).unwrap();
//! let mapper = SpaceMapper::new(domain, rect);
//!
//! let (px, py) = mapper.to_pixel(Point2D::new(5.0, 10.0));
//! assert_eq!((px, py), (300.0, 200.0));
//!
//! let back = mapper.to_data(px, py);
//! assert!((back.x - 5.0).abs() < 1e-12);
//! ```

mod mapper;

pub use mapper::{in_domain, to_data, to_pixel, SpaceMapper};

use crate::{PlaygroundError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Inclusive logical range `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        if !(x_max > x_min) || !(y_max > y_min) {
            return Err(PlaygroundError::InvalidGeometry(format!(
                "domain [{x_min}, {x_max}] x [{y_min}, {y_max}] has no area"
            )));
        }

        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// The regression simulator's plot range.
    pub const fn regression() -> Self {
        Self { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 20.0 }
    }

    /// The classifier playground's plot range.
    pub const fn classifier() -> Self {
        Self { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, p: Point2D) -> bool {
        in_domain(p, self)
    }
}

/// A `width × height` surface whose plot area is inset by `padding` on
/// every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PixelRect {
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self> {
        if padding < 0.0 {
            return Err(PlaygroundError::InvalidGeometry(format!(
                "padding must be >= 0, got {padding}"
            )));
        }
        if !(width > 2.0 * padding) || !(height > 2.0 * padding) {
            return Err(PlaygroundError::InvalidGeometry(format!(
                "{width}x{height} surface leaves no room inside padding {padding}"
            )));
        }

        Ok(Self { width, height, padding })
    }

    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

impl Default for PixelRect {
    fn default() -> Self {
        Self { width: 600.0, height: 400.0, padding: 50.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_rejects_empty_range() {
        assert!(Domain::new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(Domain::new(0.0, 1.0, 5.0, 2.0).is_err());
        assert!(Domain::new(0.0, f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_pixel_rect_requires_inner_area() {
        assert!(PixelRect::new(100.0, 100.0, 50.0).is_err());
        assert!(PixelRect::new(100.0, 100.0, -1.0).is_err());

        let rect = PixelRect::new(600.0, 400.0, 50.0).unwrap();
        assert_eq!(rect.inner_width(), 500.0);
        assert_eq!(rect.inner_height(), 300.0);
    }

    #[test]
    fn test_preset_domains() {
        assert_eq!(Domain::regression().height(), 20.0);
        assert_eq!(Domain::classifier().width(), 10.0);
        assert!(Domain::classifier().contains(Point2D::new(10.0, 0.0)));
    }
}
