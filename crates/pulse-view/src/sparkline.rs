//! Axis-free sparkline traces.

/// Stroke width of the trace, in SVG user units.
const STROKE_WIDTH: f64 = 2.0;

/// An ordered series of samples drawn as a single polyline.
#[derive(Debug, Clone, Copy)]
pub struct Sparkline<'a> {
    samples: &'a [f64],
}

impl<'a> Sparkline<'a> {
    /// Creates a sparkline over `samples`.
    pub fn new(samples: &'a [f64]) -> Self {
        Self { samples }
    }

    /// Maps samples onto a `width` x `height` box.
    ///
    /// Samples are spaced evenly from x = 0 to x = `width`. The minimum sits
    /// on the bottom edge and the maximum on the top edge. A flat series,
    /// including a single sample, runs across the vertical middle.
    pub fn points(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let finite: Vec<f64> = self
            .samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        let (min, max) = match finite.split_first() {
            Some((&first, rest)) => rest
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
            None => return Vec::new(),
        };

        if finite.len() == 1 {
            return vec![(0.0, height / 2.0), (width, height / 2.0)];
        }

        let step = width / (finite.len() - 1) as f64;
        let range = max - min;

        finite
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = step * i as f64;
                let y = if range == 0.0 {
                    height / 2.0
                } else {
                    height - (v - min) / range * height
                };
                (x, y)
            })
            .collect()
    }

    /// Renders the trace as an inline SVG element.
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let coords = self
            .points(width, height)
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            r#"<svg class="sparkline" viewBox="0 0 {width} {height}" preserveAspectRatio="none" aria-hidden="true"><polyline points="{coords}" fill="none" stroke="currentColor" stroke-width="{STROKE_WIDTH}" vector-effect="non-scaling-stroke"/></svg>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spans_the_box() {
        let samples = [94.0, 85.0, 88.0, 83.0];
        let points = Sparkline::new(&samples).points(120.0, 32.0);

        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0].0, 0.0);
        assert_relative_eq!(points[3].0, 120.0);
        assert_relative_eq!(points[1].0, 40.0);
        // max on top, min on the bottom
        assert_relative_eq!(points[0].1, 0.0);
        assert_relative_eq!(points[3].1, 32.0);
    }

    #[test]
    fn test_intermediate_sample() {
        let samples = [0.0, 5.0, 10.0];
        let points = Sparkline::new(&samples).points(10.0, 20.0);
        assert_relative_eq!(points[1].1, 10.0);
    }

    #[test]
    fn test_flat_series_runs_through_middle() {
        let samples = [1.5, 1.5, 1.5];
        let points = Sparkline::new(&samples).points(60.0, 10.0);
        assert!(points.iter().all(|&(_, y)| (y - 5.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_single_sample() {
        let points = Sparkline::new(&[42.0]).points(60.0, 10.0);
        assert_eq!(points, vec![(0.0, 5.0), (60.0, 5.0)]);
    }

    #[test]
    fn test_empty_series() {
        assert!(Sparkline::new(&[]).points(60.0, 10.0).is_empty());
        assert!(Sparkline::new(&[]).to_svg(60.0, 10.0).contains(r#"points="""#));
    }

    #[test]
    fn test_non_finite_samples_are_skipped() {
        let samples = [1.0, f64::NAN, 3.0];
        let points = Sparkline::new(&samples).points(10.0, 10.0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_svg_coordinates() {
        let svg = Sparkline::new(&[0.0, 10.0]).to_svg(100.0, 32.0);
        assert!(svg.contains(r#"points="0.00,32.00 100.00,0.00""#), "{svg}");
    }

    #[test]
    fn test_svg_has_no_axes() {
        let svg = Sparkline::new(&[1.86, 1.85, 1.84, 1.85]).to_svg(100.0, 32.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<text"));
    }
}
