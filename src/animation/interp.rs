use crate::foundation::core::Point;

/// How [`interpolate`] treats input outside its first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the first/last output value.
    #[default]
    Clamp,
    /// Keep extending the outermost segment.
    Extend,
}

/// Linear interpolation of `progress` onto `[out_min, out_max]`.
///
/// Not clamped: spring overshoot above 1 maps past `out_max`, which is what pop-in scaling wants.
#[inline]
pub fn lerp(progress: f64, out: [f64; 2]) -> f64 {
    out[0] + (out[1] - out[0]) * progress
}

#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    a.lerp(b, t)
}

/// `elapsed / duration` clamped to `[0, 1]`. A zero duration counts as already complete.
pub fn clamp_progress(elapsed: i64, duration: u64) -> f64 {
    if duration == 0 {
        return if elapsed >= 0 { 1.0 } else { 0.0 };
    }
    ((elapsed as f64) / (duration as f64)).clamp(0.0, 1.0)
}

/// Piecewise-linear mapping over strictly increasing `input` breakpoints.
///
/// Mismatched or non-increasing breakpoint lists return `output[0]` (or `0.0` when empty).
pub fn interpolate(x: f64, input: &[f64], output: &[f64], extrapolate: Extrapolate) -> f64 {
    let Some(&first_out) = output.first() else {
        return 0.0;
    };
    if input.len() != output.len() || input.len() < 2 {
        return first_out;
    }
    if input
        .windows(2)
        .any(|w| w[0].partial_cmp(&w[1]) != Some(std::cmp::Ordering::Less))
    {
        return first_out;
    }

    let last = input.len() - 1;
    let seg = if x <= input[0] {
        if extrapolate == Extrapolate::Clamp {
            return output[0];
        }
        0
    } else if x >= input[last] {
        if extrapolate == Extrapolate::Clamp {
            return output[last];
        }
        last - 1
    } else {
        input.partition_point(|&b| b <= x) - 1
    };

    let t = (x - input[seg]) / (input[seg + 1] - input[seg]);
    lerp(t, [output[seg], output[seg + 1]])
}

/// Trapezoid envelope over a window of `duration` frames.
///
/// 0 at frame 0, ramps to 1 over `fade` frames, holds, and reaches 0 again at `duration`.
/// Windows shorter than two fades shrink the ramps to half the window each.
pub fn fade_window(local_frame: i64, duration: u64, fade: u64) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let d = duration as f64;
    let f = (fade as f64).min(d / 2.0);
    if f <= 0.0 {
        return if (0..duration as i64).contains(&local_frame) {
            1.0
        } else {
            0.0
        };
    }
    let x = local_frame as f64;
    if f * 2.0 >= d {
        return interpolate(x, &[0.0, f, d], &[0.0, 1.0, 0.0], Extrapolate::Clamp);
    }
    interpolate(
        x,
        &[0.0, f, d - f, d],
        &[0.0, 1.0, 1.0, 0.0],
        Extrapolate::Clamp,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
