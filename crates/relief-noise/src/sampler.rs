//! Height sampling by smooth interpolation of lattice gradients

use relief_core::Vec2;

use crate::gradient::GradientField;

/// Anything that can be sampled as a continuous height over the XY plane
pub trait HeightField {
    fn height(&self, x: f32, y: f32) -> f32;
}

impl<F> HeightField for F
where
    F: Fn(f32, f32) -> f32,
{
    fn height(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Cubic Hermite ease `3t² - 2t³`.
///
/// Value and slope are 0 at `t = 0`, value 1 and slope 0 at `t = 1`.
pub fn ease(t: f32) -> f32 {
    3.0 * t * t - 2.0 * t * t * t
}

/// Evaluates lattice-gradient noise at any real coordinate.
///
/// Heights are exactly zero at integer coordinates and bounded by the
/// field's amplitude everywhere else. Non-finite input is not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSampler {
    field: GradientField,
}

impl HeightSampler {
    pub fn new(field: GradientField) -> Self {
        Self { field }
    }

    /// Shorthand for a sampler over a fresh `GradientField`
    pub fn with_amplitude(amplitude: f32) -> Self {
        Self::new(GradientField::new(amplitude))
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    /// Height at `(x, y)`
    pub fn height(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let x1 = x0 + 1.0;
        let y1 = y0 + 1.0;

        // Corners past the i32 range saturate and wrap, like `lattice_seed`
        let (ix, iy) = (x0 as i32, y0 as i32);
        let (ix1, iy1) = (ix.wrapping_add(1), iy.wrapping_add(1));
        let bl = self.field.gradient(ix, iy);
        let br = self.field.gradient(ix1, iy);
        let tl = self.field.gradient(ix, iy1);
        let tr = self.field.gradient(ix1, iy1);

        // Influence of each corner: its gradient dotted with the offset from it
        let p = Vec2::new(x, y);
        let s = bl.dot(&(p - Vec2::new(x0, y0)));
        let t = br.dot(&(p - Vec2::new(x1, y0)));
        let u = tl.dot(&(p - Vec2::new(x0, y1)));
        let v = tr.dot(&(p - Vec2::new(x1, y1)));

        let sx = ease(x - x0);
        let a = s + sx * (t - s);
        let b = u + sx * (v - u);

        let sy = ease(y - y0);
        a + sy * (b - a)
    }
}

impl HeightField for HeightSampler {
    fn height(&self, x: f32, y: f32) -> f32 {
        HeightSampler::height(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(0.5), 0.5);
        // Monotonic on [0, 1]
        let mut prev = 0.0;
        for k in 1..=100 {
            let e = ease(k as f32 / 100.0);
            assert!(e >= prev);
            prev = e;
        }
    }

    #[test]
    fn height_is_zero_on_lattice_points() {
        let sampler = HeightSampler::with_amplitude(2.0);
        for (p, q) in [(0, 0), (3, 2), (-4, 5), (-1, -1), (17, -9)] {
            assert_eq!(sampler.height(p as f32, q as f32), 0.0, "at ({p}, {q})");
        }
    }

    #[test]
    fn height_is_deterministic() {
        let sampler = HeightSampler::with_amplitude(2.0);
        let points = [(0.25, 0.75), (-3.3, 1.9), (4.05, -4.95)];
        let first: Vec<f32> = points.iter().map(|&(x, y)| sampler.height(x, y)).collect();

        // Interleaved with unrelated samples
        for (k, &(x, y)) in points.iter().enumerate() {
            sampler.height(x + 10.0, y - 7.0);
            assert_eq!(sampler.height(x, y), first[k]);
        }
        let other = HeightSampler::with_amplitude(2.0);
        assert_eq!(other.height(0.25, 0.75), first[0]);
    }

    #[test]
    fn continuous_across_cell_edges() {
        let sampler = HeightSampler::with_amplitude(2.0);
        let eps = 1e-4;
        for y in [-2.0_f32, 0.0, 1.0, 3.0] {
            for x in [-3.0_f32, 0.0, 2.0, 4.0] {
                let below = sampler.height(x - eps, y);
                let above = sampler.height(x + eps, y);
                assert!((below - above).abs() < 1e-2, "jump at x={x}, y={y}");
            }
        }
        // Off the lattice lines too
        for x in [-1.0_f32, 2.0] {
            let y = 0.37;
            let below = sampler.height(x - eps, y);
            let above = sampler.height(x + eps, y);
            assert!((below - above).abs() < 1e-2, "jump at x={x}, y={y}");
        }
    }

    #[test]
    fn slope_is_continuous_across_cell_edges() {
        let sampler = HeightSampler::with_amplitude(2.0);
        let h = 1e-4;
        let (x, y) = (2.0_f32, 0.6_f32);
        let left = (sampler.height(x - h, y) - sampler.height(x - 2.0 * h, y)) / h;
        let right = (sampler.height(x + 2.0 * h, y) - sampler.height(x + h, y)) / h;
        assert!((left - right).abs() < 0.05, "slope jump {left} vs {right}");
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let sampler = HeightSampler::with_amplitude(0.0);
        for k in 0..50 {
            let x = -5.0 + k as f32 * 0.213;
            let y = 4.0 - k as f32 * 0.177;
            assert_eq!(sampler.height(x, y), 0.0);
        }
    }

    #[test]
    fn heights_bounded_by_amplitude() {
        for amplitude in [0.5_f32, 2.0, 8.0] {
            let sampler = HeightSampler::with_amplitude(amplitude);
            let mut max_seen = 0.0_f32;
            for i in 0..=80 {
                for j in 0..=80 {
                    let x = -10.0 + i as f32 * 0.25;
                    let y = -10.0 + j as f32 * 0.25;
                    max_seen = max_seen.max(sampler.height(x, y).abs());
                }
            }
            assert!(max_seen <= amplitude, "amplitude {amplitude}: saw {max_seen}");
            assert!(max_seen > 0.0);
        }
    }

    #[test]
    fn far_coordinates_still_sample() {
        let sampler = HeightSampler::with_amplitude(2.0);
        for (x, y) in [
            (3.0e9_f32, 0.5_f32),
            (-3.0e9, 0.5),
            (0.5, 3.0e9),
            (0.5, -3.0e9),
            (3.0e9, 3.0e9),
            (2_147_483_520.0, 2_147_483_520.0),
        ] {
            let h = sampler.height(x, y);
            assert!(h.is_finite(), "height at ({x}, {y}) is {h}");
            assert!(h.abs() <= 2.0);
        }
    }

    #[test]
    fn closures_are_height_fields() {
        let tilted = |x: f32, y: f32| 0.5 * x - y;
        assert_eq!(HeightField::height(&tilted, 2.0, 1.0), 0.0);
        assert_eq!(HeightField::height(&tilted, 4.0, 1.0), 1.0);
    }
}
