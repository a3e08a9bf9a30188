//! Count-up animation for headline statistics.

use dioxus::prelude::*;

use super::reveal::{use_in_view, RevealConfig};
use crate::core::timing::sleep_ms;

/// Fixed-step schedule: `steps` equal ticks of `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    pub steps: u32,
    pub interval_ms: u64,
}

impl CounterTiming {
    /// ~2 s driven at roughly one tick per animation frame.
    pub const FRAME_DRIVEN: Self = Self::over_duration(2000, 16);
    /// 50 ticks, 30 ms apart.
    pub const STEPPED: Self = Self {
        steps: 50,
        interval_ms: 30,
    };

    pub const fn over_duration(duration_ms: u64, interval_ms: u64) -> Self {
        let steps = if interval_ms == 0 {
            0
        } else {
            duration_ms / interval_ms
        };
        Self {
            steps: if steps == 0 { 1 } else { steps as u32 },
            interval_ms,
        }
    }
}

/// Values shown while counting from 0 to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u64,
    pub steps: u32,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
        }
    }

    /// Displayed value after `step` ticks: `ceil(target * step / steps)`,
    /// clamped so it never passes the target.
    pub fn value_at(&self, step: u32) -> u64 {
        let step = u128::from(step.min(self.steps));
        let steps = u128::from(self.steps);
        let scaled = u128::from(self.target) * step;
        let value = scaled.div_ceil(steps);
        value.min(u128::from(self.target)) as u64
    }

    /// Every displayed value, first tick through the final one.
    pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.steps).map(move |step| self.value_at(step))
    }
}

/// A statistic such as `"500+"`: the number to count to and the text kept after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// Split a leading run of digits from the rest. Returns `None` when the
    /// text does not start with a number (e.g. `"24/7"` still parses as 24).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits_end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        if digits_end == 0 {
            return None;
        }
        let value = text[..digits_end].parse().ok()?;
        Some(Self {
            value,
            suffix: text[digits_end..].to_string(),
        })
    }

    pub fn display(&self, current: u64) -> String {
        format!("{current}{}", self.suffix)
    }
}

/// Counts up once, the first time the element is at least half visible.
#[component]
pub fn AnimatedCounter(
    target: u64,
    #[props(default, into)] suffix: String,
    #[props(default = CounterTiming::FRAME_DRIVEN)] timing: CounterTiming,
    #[props(default = "counter".to_string(), into)] class: String,
) -> Element {
    let mut shown = use_signal(|| 0u64);
    let mut started = use_signal(|| false);
    let in_view = use_in_view(RevealConfig::COUNTER);
    let visible = in_view.visible;

    use_effect(move || {
        if !visible() || *started.peek() {
            return;
        }
        started.set(true);
        let animation = CounterAnimation::new(target, timing.steps);
        spawn(async move {
            for value in animation.frames() {
                sleep_ms(timing.interval_ms).await;
                shown.set(value);
            }
        });
    });

    rsx! {
        span {
            class: "{class}",
            "data-target": "{target}",
            onmounted: move |evt| in_view.attach(&evt.data()),
            "{shown}{suffix}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_exactly_on_target_without_overshoot() {
        for target in [1u64, 2, 7, 99, 125, 500, 1_000, 12_345, 9_999_999] {
            for steps in [1u32, 3, 50, 125, 1_000] {
                let animation = CounterAnimation::new(target, steps);
                let frames: Vec<u64> = animation.frames().collect();
                assert_eq!(frames.len(), steps as usize);
                assert_eq!(*frames.last().unwrap(), target, "target={target} steps={steps}");
                assert!(frames.iter().all(|v| *v <= target));
                assert!(frames.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    #[test]
    fn rounds_up_each_step() {
        let animation = CounterAnimation::new(10, 4);
        assert_eq!(animation.value_at(0), 0);
        assert_eq!(animation.value_at(1), 3);
        assert_eq!(animation.value_at(2), 5);
        assert_eq!(animation.value_at(3), 8);
        assert_eq!(animation.value_at(4), 10);
        assert_eq!(animation.value_at(40), 10);
    }

    #[test]
    fn zero_target_stays_zero() {
        let animation = CounterAnimation::new(0, 0);
        assert_eq!(animation.steps, 1);
        assert_eq!(animation.frames().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn frame_driven_timing_matches_two_seconds() {
        assert_eq!(CounterTiming::FRAME_DRIVEN.steps, 125);
        assert_eq!(CounterTiming::FRAME_DRIVEN.interval_ms, 16);
        assert_eq!(CounterTiming::over_duration(10, 0).steps, 1);
    }

    #[test]
    fn parses_suffixed_statistics() {
        assert_eq!(
            CounterTarget::parse("500+"),
            Some(CounterTarget {
                value: 500,
                suffix: "+".into()
            })
        );
        assert_eq!(CounterTarget::parse(" 98% ").unwrap().display(42), "42%");
        assert_eq!(CounterTarget::parse("24/7").unwrap().value, 24);
        assert_eq!(CounterTarget::parse("+5"), None);
        assert_eq!(CounterTarget::parse(""), None);
    }
}
