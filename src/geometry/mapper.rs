use super::{Domain, PixelRect, Point2D};

/// Maps a data point to pixel coordinates inside the padded rectangle.
pub fn to_pixel(p: Point2D, domain: &Domain, rect: &PixelRect) -> (f64, f64) {
    let px = rect.padding + (p.x - domain.x_min) / domain.width() * rect.inner_width();
    let py = rect.height - rect.padding - (p.y - domain.y_min) / domain.height() * rect.inner_height();
    (px, py)
}

/// Inverse of [`to_pixel`].
pub fn to_data(px: f64, py: f64, domain: &Domain, rect: &PixelRect) -> Point2D {
    let x = domain.x_min + (px - rect.padding) / rect.inner_width() * domain.width();
    let y = domain.y_min + (rect.height - rect.padding - py) / rect.inner_height() * domain.height();
    Point2D { x, y }
}

/// Inclusive on both axes. NaN coordinates are never inside.
pub fn in_domain(p: Point2D, domain: &Domain) -> bool {
    p.x >= domain.x_min && p.x <= domain.x_max && p.y >= domain.y_min && p.y <= domain.y_max
}

/// A domain paired with the rectangle it is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceMapper {
    pub domain: Domain,
    pub rect: PixelRect,
}

impl SpaceMapper {
    pub fn new(domain: Domain, rect: PixelRect) -> Self {
        Self { domain, rect }
    }

    pub fn to_pixel(&self, p: Point2D) -> (f64, f64) {
        to_pixel(p, &self.domain, &self.rect)
    }

    pub fn to_data(&self, px: f64, py: f64) -> Point2D {
        to_data(px, py, &self.domain, &self.rect)
    }

    pub fn in_domain(&self, p: Point2D) -> bool {
        in_domain(p, &self.domain)
    }

    /// Converts a click and returns the data point only if it lands inside
    /// the plotted axes.
    pub fn admit_click(&self, px: f64, py: f64) -> Option<Point2D> {
        let p = self.to_data(px, py);
        self.in_domain(p).then_some(p)
    }
}
