//! Visual effects: scroll reveals, count-up statistics, particle fields,
//! connector geometry, click pulses and scroll helpers.

pub mod connectors;
pub mod counter;
pub mod particles;
pub mod pulse;
pub mod reveal;
pub mod scroll;

pub use counter::{AnimatedCounter, CounterTiming};
pub use particles::{ParticleConfig, ParticleField};
pub use pulse::{use_pulse, Pulse};
pub use reveal::{Reveal, RevealConfig, RevealStyle};
pub use scroll::AnchorLink;
