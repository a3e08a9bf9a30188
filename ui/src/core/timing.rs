//! Timer utilities shared by animations, reveals and the mail simulator.

use std::cell::Cell;

/// Sleep without blocking the event loop.
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let clamped = ms.min(u64::from(u32::MAX)) as u32;
        gloo_timers::future::TimeoutFuture::new(clamped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Trailing-edge debounce by generation: every trigger bumps the generation and
/// only the task holding the latest one is allowed to fire.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: Cell<u64>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_trigger_fires() {
        let debounce = Debounce::new();
        let first = debounce.bump();
        let second = debounce.bump();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }

    #[test]
    fn zero_sleep_resolves_immediately() {
        futures::executor::block_on(sleep_ms(0));
    }
}
