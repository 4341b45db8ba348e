#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }

    /// Zip two equally long slices into points; the shorter length wins.
    pub fn zip(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
        xs.iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }
}
