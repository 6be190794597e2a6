/// running arithmetic mean computed in one pass. the mean is updated
/// incrementally so that large finite values cannot overflow a running sum.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeanAccumulator {
    mean: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// the mean of all added values, or None if nothing was added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}
