//! Decorative hero particles: small, randomly sized dots drifting upwards.

use dioxus::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

const HOME_PALETTE: &[&str] = &[
    "rgba(26,158,143,.55)",
    "rgba(214,40,57,.45)",
    "rgba(255,255,255,.35)",
    "rgba(10,44,90,.25)",
];

const HERO_PALETTE: &[&str] = &[
    "rgba(42, 157, 143, 0.6)",
    "rgba(230, 57, 70, 0.6)",
    "rgba(255, 255, 255, 0.4)",
    "rgba(10, 44, 90, 0.3)",
];

/// Randomization ranges for one particle field. Ranges are half-open `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size_px: (f64, f64),
    pub duration_s: (f64, f64),
    pub max_delay_s: f64,
    pub palette: &'static [&'static str],
    /// Name of the `@keyframes` rule in the theme.
    pub animation: &'static str,
}

impl ParticleConfig {
    pub const HOME: Self = Self {
        count: 50,
        size_px: (1.0, 5.0),
        duration_s: (10.0, 30.0),
        max_delay_s: 5.0,
        palette: HOME_PALETTE,
        animation: "particleFloat",
    };
    pub const SERVICES: Self = Self {
        count: 25,
        size_px: (1.0, 4.0),
        duration_s: (10.0, 25.0),
        max_delay_s: 5.0,
        palette: HERO_PALETTE,
        animation: "float",
    };
    pub const CAPABILITIES: Self = Self {
        count: 30,
        ..Self::SERVICES
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn style(&self, animation: &str) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; top: {top:.2}%; \
             background-color: {color}; animation: {animation} {duration:.2}s {delay:.2}s infinite linear;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            color = self.color,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

pub fn generate<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Vec<Particle> {
    (0..config.count)
        .map(|_| Particle {
            size_px: sample(rng, config.size_px),
            left_pct: sample(rng, (0.0, 100.0)),
            top_pct: sample(rng, (0.0, 100.0)),
            duration_s: sample(rng, config.duration_s),
            delay_s: sample(rng, (0.0, config.max_delay_s)),
            color: config.palette.choose(rng).copied().unwrap_or("transparent"),
        })
        .collect()
}

/// Absolutely positioned particle layer for a hero section. Particles are
/// generated once per mount.
#[component]
pub fn ParticleField(config: ParticleConfig) -> Element {
    let particles = use_hook(|| generate(&config, &mut rand::thread_rng()));
    let animation = config.animation;

    rsx! {
        div { class: "hero-particles", aria_hidden: "true",
            for (index, particle) in particles.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "particle",
                    style: particle.style(animation),
                }
            }
        }
    }
}
