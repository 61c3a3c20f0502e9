use super::Point;

/// `BoundingBox` defines an axis-aligned rectangular region in path-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, point: Point) -> &Self {
        let pbox = BoundingBox::new(point.x, point.y, point.x, point.y);
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&pbox);
        } else {
            self.bbox = Some(pbox);
        }
        self
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bounding box of all given points; `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut builder = BoundingBoxBuilder::new();
        for p in points {
            builder.extend(*p);
        }
        builder.build()
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Map a path-space point into 0..=100 percentage-space relative
    /// to this box. An axis with zero extent maps to 50.
    pub fn to_percent(&self, p: Point) -> Point {
        fn scale(v: f64, min: f64, extent: f64) -> f64 {
            if extent == 0. {
                50.
            } else {
                (v - min) / extent * 100.
            }
        }
        Point::new(
            scale(p.x, self.x1, self.width()),
            scale(p.y, self.y1, self.height()),
        )
    }
}
