/// Points of one derived metric, in table row order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y should have the same length");
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_points() {
        let series: Series = vec![(1.0, 0.5), (2.0, f64::NAN)].into_iter().collect();
        assert_eq!(series.len(), 2);
        assert_eq!(series.x(), &[1.0, 2.0]);
        assert_eq!(series.y()[0], 0.5);
        assert!(series.y()[1].is_nan());
    }

    #[test]
    #[should_panic]
    fn unequal_lengths() {
        Series::new(vec![1.0], vec![]);
    }
}
