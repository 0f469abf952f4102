//! Delayed hide - a visibility flag that turns off some time after it is released
//!
//! Hover affordances use it to avoid flicker: entering shows immediately,
//! leaving hides only after a fixed delay, and re-entering in between
//! cancels the hide. Chat sessions use the same utility as an idle timer.
//!
//! At most one hide is pending at a time. Every `show`, `hide_later` and
//! `cancel` bumps a generation counter, and a timer only hides if its
//! generation is still current, so a superseded timer can never fire late.
//! Dropping the value cancels the pending hide.
//!
//! `hide_later` spawns onto the current tokio runtime and must be called from
//! within one.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Hover-out delay used by the portfolio's hover affordances
pub const HOVER_HIDE_DELAY: Duration = Duration::from_millis(2000);

pub struct DelayedHide {
    delay: Duration,
    inner: Arc<Inner>,
}

struct Inner {
    visible: watch::Sender<bool>,
    pending: Mutex<Pending>,
}

#[derive(Default)]
struct Pending {
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Inner {
    fn pending(&self) -> MutexGuard<'_, Pending> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Pending {
    /// Invalidate any scheduled hide. Returns the new generation.
    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation
    }
}

impl DelayedHide {
    pub fn new(delay: Duration, visible: bool) -> Self {
        let (tx, _rx) = watch::channel(visible);
        Self {
            delay,
            inner: Arc::new(Inner {
                visible: tx,
                pending: Mutex::new(Pending::default()),
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_visible(&self) -> bool {
        *self.inner.visible.borrow()
    }

    /// Watch visibility changes. The channel closes when this value drops.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.visible.subscribe()
    }

    /// Cancel any pending hide and become visible (pointer enter)
    pub fn show(&self) {
        let mut pending = self.inner.pending();
        pending.supersede();
        self.inner.visible.send_replace(true);
    }

    /// Hide after the delay unless shown again first (pointer leave).
    /// Replaces any hide that is already pending.
    pub fn hide_later(&self) {
        let mut pending = self.inner.pending();
        let generation = pending.supersede();
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.delay;

        pending.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let pending = inner.pending();
            if pending.generation == generation {
                inner.visible.send_replace(false);
            }
        }));
    }

    /// Cancel any pending hide, leaving visibility as it is
    pub fn cancel(&self) {
        self.inner.pending().supersede();
    }
}

impl Drop for DelayedHide {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_hides_after_delay() {
        let hover = DelayedHide::new(HOVER_HIDE_DELAY, false);
        hover.show();
        hover.hide_later();

        sleep(ms(1990)).await;
        assert!(hover.is_visible());

        sleep(ms(20)).await;
        assert!(!hover.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenter_cancels_pending_hide() {
        let hover = DelayedHide::new(HOVER_HIDE_DELAY, false);
        hover.show();
        hover.hide_later();
        sleep(ms(1000)).await;
        hover.show();
        assert!(hover.is_visible());

        sleep(ms(5000)).await;
        assert!(hover.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_hide_replaces_first() {
        let hover = DelayedHide::new(HOVER_HIDE_DELAY, true);
        hover.hide_later();
        sleep(ms(1500)).await;
        hover.hide_later();

        // The first timer would have fired at 2000ms
        sleep(ms(1000)).await;
        assert!(hover.is_visible());

        sleep(ms(1100)).await;
        assert!(!hover.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_visibility() {
        let hover = DelayedHide::new(HOVER_HIDE_DELAY, true);
        hover.hide_later();
        hover.cancel();
        sleep(ms(3000)).await;
        assert!(hover.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_before_delay_is_safe() {
        let hover = DelayedHide::new(HOVER_HIDE_DELAY, true);
        let mut rx = hover.subscribe();
        hover.hide_later();
        drop(hover);

        sleep(ms(3000)).await;
        assert!(*rx.borrow());
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_hide() {
        let hover = DelayedHide::new(ms(500), true);
        let mut rx = hover.subscribe();
        hover.hide_later();

        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());
    }
}
