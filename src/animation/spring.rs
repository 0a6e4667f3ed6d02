use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Physical parameters of a damped harmonic oscillator released from rest at 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Once progress reaches 1 it stays there instead of overshooting.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SpringConfig {
    /// Bouncy default (damping ratio 0.5).
    pub const DEFAULT: Self = Self {
        stiffness: 100.0,
        damping: 10.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Critically damped: fastest approach to 1 with no overshoot.
    pub const CRITICAL: Self = Self {
        stiffness: 100.0,
        damping: 20.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Heavily over-damped, slow ease-out.
    pub const GENTLE: Self = Self {
        stiffness: 100.0,
        damping: 200.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> ReelResult<Self> {
        let cfg = Self {
            stiffness,
            damping,
            mass,
            overshoot_clamping: false,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build from a damping ratio (`1.0` = critical, `< 1` bouncy, `> 1` sluggish).
    pub fn from_damping_ratio(ratio: f64, stiffness: f64, mass: f64) -> ReelResult<Self> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(ReelError::animation(
                "spring damping ratio must be finite and >= 0",
            ));
        }
        let critical = 2.0 * (stiffness.max(0.0) * mass.max(0.0)).sqrt();
        Self::new(stiffness, ratio * critical, mass)
    }

    pub fn with_overshoot_clamping(self, on: bool) -> Self {
        Self {
            overshoot_clamping: on,
            ..self
        }
    }

    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(self) -> ReelResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(ReelError::animation("spring stiffness must be finite and > 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be finite and > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ReelError::animation("spring damping must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Spring progress after `elapsed_frames` frames at `fps`.
///
/// The oscillator is re-simulated from rest on every call, one exact analytic step per frame, so
/// the result depends on the arguments only. `elapsed_frames <= 0` is exactly `0.0`. Invalid
/// parameters degrade to a hard step (`1.0` for any positive elapsed time).
pub fn spring(elapsed_frames: i64, fps: Fps, config: SpringConfig) -> f64 {
    if elapsed_frames <= 0 {
        return 0.0;
    }
    if config.validate().is_err() {
        return 1.0;
    }

    let dt = fps.frame_duration_secs();
    let mut state = SpringState::at_rest();
    for _ in 0..elapsed_frames {
        state = state.advance(config, dt);
        if state.is_settled() {
            break;
        }
    }
    state.progress()
}

/// Spring progress mapped onto `[from, to]` (unclamped, so overshoot carries through).
pub fn spring_between(
    elapsed_frames: i64,
    fps: Fps,
    config: SpringConfig,
    from: f64,
    to: f64,
) -> f64 {
    from + (to - from) * spring(elapsed_frames, fps, config)
}

/// First frame from which progress stays within `threshold` of 1 for good.
///
/// Gives up after ten minutes of simulated time and returns that frame count.
pub fn settle_frames(fps: Fps, config: SpringConfig, threshold: f64) -> u64 {
    let limit = fps.secs_to_frames_floor(600.0).max(1);
    if config.validate().is_err() {
        return 1;
    }
    let threshold = threshold.abs().max(f64::EPSILON);

    let dt = fps.frame_duration_secs();
    let mut state = SpringState::at_rest();
    let mut last_outside = 0u64;
    for frame in 1..=limit {
        state = state.advance(config, dt);
        if (1.0 - state.progress()).abs() > threshold {
            last_outside = frame;
        } else if state.displacement.abs() < threshold * 1e-3 && state.velocity.abs() < threshold {
            break;
        }
    }
    (last_outside + 1).min(limit)
}

/// Oscillator state relative to the target: `displacement = position - 1`.
#[derive(Clone, Copy, Debug)]
struct SpringState {
    displacement: f64,
    velocity: f64,
    clamped: bool,
}

impl SpringState {
    const REST_EPSILON: f64 = 1e-12;

    fn at_rest() -> Self {
        Self {
            displacement: -1.0,
            velocity: 0.0,
            clamped: false,
        }
    }

    fn progress(self) -> f64 {
        1.0 + self.displacement
    }

    fn is_settled(self) -> bool {
        self.clamped
            || (self.displacement.abs() < Self::REST_EPSILON
                && self.velocity.abs() < Self::REST_EPSILON)
    }

    /// Exact solution of `m x'' + c x' + k x = 0` over one step of `dt` seconds.
    fn advance(self, cfg: SpringConfig, dt: f64) -> Self {
        let d0 = self.displacement;
        let v0 = self.velocity;
        let omega0 = (cfg.stiffness / cfg.mass).sqrt();
        let zeta = cfg.damping / (2.0 * (cfg.stiffness * cfg.mass).sqrt());

        let (d, v) = if (zeta - 1.0).abs() <= f64::from(f32::EPSILON) {
            let beta = omega0;
            let b = v0 + beta * d0;
            let env = (-beta * dt).exp();
            (env * (d0 + b * dt), env * (v0 - beta * b * dt))
        } else if zeta < 1.0 {
            let beta = zeta * omega0;
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + beta * d0) / omega_d;
            let env = (-beta * dt).exp();
            let (sin, cos) = (omega_d * dt).sin_cos();
            let d = env * (d0 * cos + b * sin);
            let v = env * (v0 * cos - (beta * b + omega_d * d0) * sin);
            (d, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            let c1 = (v0 - r2 * d0) / (r1 - r2);
            let c2 = d0 - c1;
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if cfg.overshoot_clamping && d >= 0.0 {
            return Self {
                displacement: 0.0,
                velocity: 0.0,
                clamped: true,
            };
        }
        Self {
            displacement: d,
            velocity: v,
            clamped: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
