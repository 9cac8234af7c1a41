//! Single-pass moment accumulators (Welford's algorithm).

/// Running mean, variance and extremes of a numeric sample.
///
/// Deviations are accumulated relative to the largest magnitude seen so far,
/// so any finite input yields a finite mean and standard deviation.
#[derive(Debug, Clone)]
pub(crate) struct Moments {
    count: usize,
    mean: f64,
    scale: f64,     // Largest |value| seen
    m2_scaled: f64, // Sum of squared differences from mean, divided by scale^2
    min: f64,
    max: f64,
}

impl Moments {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            scale: 0.0,
            m2_scaled: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn add(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let magnitude = value.abs();
        if magnitude > self.scale {
            if self.scale > 0.0 {
                let ratio = self.scale / magnitude;
                self.m2_scaled *= ratio * ratio;
            }
            self.scale = magnitude;
        }
        if self.scale == 0.0 {
            return;
        }

        // Both terms are within [-1, 1], so neither delta can overflow
        let n = self.count as f64;
        let delta = value / self.scale - self.mean / self.scale;
        self.mean += delta / n * self.scale;
        let delta2 = value / self.scale - self.mean / self.scale;
        self.m2_scaled += delta * delta2;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> f64 {
        self.mean
    }

    pub(crate) fn min(&self) -> f64 {
        self.min
    }

    pub(crate) fn max(&self) -> f64 {
        self.max
    }

    /// Sample (n - 1) standard deviation; 0 with fewer than two values.
    pub(crate) fn sample_std(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.scale * (self.m2_scaled / (self.count - 1) as f64).sqrt()
        }
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = Moments::new();
        for value in iter {
            moments.add(value);
        }
        moments
    }
}

/// Running co-moments of paired observations, for Pearson correlation.
#[derive(Debug, Clone, Default)]
pub(crate) struct CoMoments {
    count: usize,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    c_xy: f64,
}

impl CoMoments {
    pub(crate) fn add(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;

        let dx = x - self.mean_x;
        self.mean_x += dx / n;
        let dy = y - self.mean_y;
        self.mean_y += dy / n;

        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    /// Pearson's r, or `None` when undefined (fewer than two pairs or a
    /// constant side).
    pub(crate) fn pearson(&self) -> Option<f64> {
        if self.count < 2 || self.m2_x <= 0.0 || self.m2_y <= 0.0 {
            return None;
        }
        let r = self.c_xy / (self.m2_x.sqrt() * self.m2_y.sqrt());
        // Overflow on extreme magnitudes leaves the coefficient undefined
        r.is_finite().then(|| r.clamp(-1.0, 1.0))
    }
}
