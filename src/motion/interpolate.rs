/// Piecewise-linear map from `input` through matching keyframes.
///
/// `domain` must be ascending. Inputs outside it clamp to the first or last
/// output. Extra entries in the longer slice are ignored.
pub fn interpolate(input: f64, domain: &[f64], range: &[f64]) -> f64 {
    let len = domain.len().min(range.len());
    if len == 0 {
        return input;
    }
    if len == 1 || input <= domain[0] {
        return range[0];
    }
    if input >= domain[len - 1] {
        return range[len - 1];
    }
    for i in 1..len {
        if input <= domain[i] {
            let (d0, d1) = (domain[i - 1], domain[i]);
            let (r0, r1) = (range[i - 1], range[i]);
            if d1 == d0 {
                return r1;
            }
            let t = (input - d0) / (d1 - d0);
            return r0 + (r1 - r0) * t;
        }
    }
    range[len - 1]
}

/// Fraction of a tall container scrolled past, in `[0, 1]`.
///
/// `top` is the container's top edge relative to the viewport, so it goes
/// negative as the page scrolls down.
pub fn scroll_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    (-top / travel).clamp(0.0, 1.0)
}

/// Which of `count` equal slices a progress value falls in.
pub fn active_slice(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let slice = (progress.clamp(0.0, 1.0) * count as f64).floor() as usize;
    slice.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_keyframes() {
        let domain = [0.0, 0.25, 0.5, 0.75, 1.0];
        let hue = [0.0, 30.0, 60.0, 90.0, 120.0];
        assert_eq!(interpolate(0.125, &domain, &hue), 15.0);
        assert_eq!(interpolate(0.5, &domain, &hue), 60.0);
        assert_eq!(interpolate(0.875, &domain, &hue), 105.0);
    }

    #[test]
    fn clamps_outside_the_domain() {
        assert_eq!(interpolate(-0.5, &[0.0, 0.95], &[1.0, -72.0]), 1.0);
        assert_eq!(interpolate(0.99, &[0.0, 0.95], &[1.0, -72.0]), -72.0);
    }

    #[test]
    fn output_stays_inside_the_declared_range() {
        let mut p = -0.2;
        while p <= 1.2 {
            let x = interpolate(p, &[0.0, 1.0], &[0.0, -300.0]);
            assert!((-300.0..=0.0).contains(&x));
            p += 0.01;
        }
    }

    #[test]
    fn degenerate_keyframes() {
        assert_eq!(interpolate(0.4, &[], &[]), 0.4);
        assert_eq!(interpolate(0.4, &[0.0], &[7.0]), 7.0);
        assert_eq!(interpolate(0.5, &[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 2.0, 3.0]), 1.0);
    }

    #[test]
    fn scroll_fraction_covers_the_travel() {
        assert_eq!(scroll_fraction(100.0, 4000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(-1500.0, 4000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(-9000.0, 4000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn active_slice_caps_at_the_last_section() {
        assert_eq!(active_slice(0.0, 4), 0);
        assert_eq!(active_slice(0.26, 4), 1);
        assert_eq!(active_slice(0.999, 4), 3);
        assert_eq!(active_slice(1.0, 4), 3);
        assert_eq!(active_slice(0.5, 0), 0);
    }
}
