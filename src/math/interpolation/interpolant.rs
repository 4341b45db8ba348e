pub trait Interpolant {
    fn value(&self, x: f64) -> f64;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    fn contains(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}
