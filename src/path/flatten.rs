//! Fixed-segment flattening of curved path segments.
//!
//! Each function returns the sampled points *after* the start point, ending
//! with the segment's end point; the start point is the caller's current
//! position and has already been emitted.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Evaluate a cubic Bézier at `t_k = k / segments` for `k = 1..=segments`.
pub fn cubic(start: Point, cp1: Point, cp2: Point, end: Point, segments: u32) -> Vec<Point> {
    fn bezier(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    (1..=segments)
        .map(|k| {
            let t = f64::from(k) / f64::from(segments);
            Point::new(
                bezier(t, start.x, cp1.x, cp2.x, end.x),
                bezier(t, start.y, cp1.y, cp2.y, end.y),
            )
        })
        .collect()
}

/// Evaluate a quadratic Bézier at `t_k = k / segments` for `k = 1..=segments`.
pub fn quadratic(start: Point, cp: Point, end: Point, segments: u32) -> Vec<Point> {
    fn bezier(t: f64, p0: f64, p1: f64, p2: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
    }

    (1..=segments)
        .map(|k| {
            let t = f64::from(k) / f64::from(segments);
            Point::new(
                bezier(t, start.x, cp.x, end.x),
                bezier(t, start.y, cp.y, end.y),
            )
        })
        .collect()
}

/// Parameters of an SVG elliptical arc segment, in endpoint form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub end: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis-rotation in degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Center form of an elliptical arc; angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CenterArc {
    center: Point,
    rx: f64,
    ry: f64,
    phi: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl CenterArc {
    fn point(&self, t: f64) -> Point {
        let (cos_t, sin_t) = (t.cos(), t.sin());
        let (cos_phi, sin_phi) = (self.phi.cos(), self.phi.sin());

        Point::new(
            self.center.x + self.rx * cos_t * cos_phi - self.ry * sin_t * sin_phi,
            self.center.y + self.rx * cos_t * sin_phi + self.ry * sin_t * cos_phi,
        )
    }
}

impl Arc {
    /// Zero radii reduce the arc to a straight segment to the end point.
    pub fn is_degenerate(&self) -> bool {
        self.rx == 0. || self.ry == 0.
    }

    // Implements https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter
    fn to_center(self) -> CenterArc {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let (rx, ry) = (self.rx.abs(), self.ry.abs());
        let phi = self.rotation.to_radians();
        let cos_phi = phi.cos();
        let sin_phi = phi.sin();

        // Step 1: Compute (x1', y1')
        let x1_prime = cos_phi * (x1 - x2) / 2.0 + sin_phi * (y1 - y2) / 2.0;
        let y1_prime = -sin_phi * (x1 - x2) / 2.0 + cos_phi * (y1 - y2) / 2.0;

        // Scale radii if required to reach the endpoint
        // https://www.w3.org/TR/SVG2/implnote.html#ArcCorrectionOutOfRangeRadii
        let lambda = (x1_prime * x1_prime) / (rx * rx) + (y1_prime * y1_prime) / (ry * ry);
        let (rx, ry) = if lambda > 1.0 {
            (rx * lambda.sqrt(), ry * lambda.sqrt())
        } else {
            (rx, ry)
        };

        // Step 2: Compute (cx', cy')
        let sign = if self.large_arc != self.sweep {
            1.0
        } else {
            -1.0
        };
        let coeff_sq = ((rx * ry).powi(2) - (rx * y1_prime).powi(2) - (ry * x1_prime).powi(2))
            / ((rx * y1_prime).powi(2) + (ry * x1_prime).powi(2));
        let coeff = sign * coeff_sq.max(0.0).sqrt();
        let cx_prime = coeff * (rx * y1_prime) / ry;
        let cy_prime = coeff * -(ry * x1_prime) / rx;

        // Step 3: Compute (cx, cy) from (cx', cy')
        let cx = cos_phi * cx_prime - sin_phi * cy_prime + (x1 + x2) / 2.0;
        let cy = sin_phi * cx_prime + cos_phi * cy_prime + (y1 + y2) / 2.0;

        // Step 4: Compute theta1 and delta_theta angles
        fn angle_between(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
            let dot = ux * vx + uy * vy;
            let det = ux * vy - uy * vx;
            // atan2 is more robust than the arccos approach
            det.atan2(dot)
        }

        // theta1 = angle((1,0), ((x1'-cx')/rx, (y1'-cy')/ry))
        let theta1 = angle_between(
            1.0,
            0.0,
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
        );

        // delta_theta = angle(((x1'-cx')/rx, (y1'-cy')/ry), ((-x1'-cx')/rx, (-y1'-cy')/ry))
        let mut delta_theta = angle_between(
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
            (-x1_prime - cx_prime) / rx,
            (-y1_prime - cy_prime) / ry,
        );

        if self.sweep && delta_theta < 0.0 {
            delta_theta += 2.0 * PI;
        } else if !self.sweep && delta_theta > 0.0 {
            delta_theta -= 2.0 * PI;
        }

        CenterArc {
            center: Point::new(cx, cy),
            rx,
            ry,
            phi,
            start_angle: theta1,
            sweep_angle: delta_theta,
        }
    }

    /// Sample the arc at `segments` equal angular steps after the start.
    ///
    /// The final point is always exactly `self.end`. An arc ending where it
    /// starts is omitted entirely.
    pub fn flatten(&self, segments: u32) -> Vec<Point> {
        if self.start == self.end {
            return Vec::new();
        }
        if self.is_degenerate() {
            return vec![self.end];
        }
        let arc = self.to_center();
        let mut points: Vec<Point> = (1..segments)
            .map(|k| {
                let t = arc.start_angle + arc.sweep_angle * f64::from(k) / f64::from(segments);
                arc.point(t)
            })
            .collect();
        points.push(self.end);
        points
    }
}
