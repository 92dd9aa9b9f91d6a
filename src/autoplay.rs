//! Timer-driven auto-advance for carousels.
//!
//! [`AutoCarousel`] is the owned handle a mounted page holds for each of its
//! carousels. For auto-advancing carousels it spawns one tokio task that
//! ticks the controller on a fixed interval; arrow-only carousels get no
//! task at all and behave like a plain [`Carousel`] behind a lock.
//!
//! ## Teardown
//!
//! ```text
//! mount    AutoCarousel::start(carousel)   spawn interval task
//! tick     lock → live? → carousel.tick() → publish index
//! unmount  cancel() / drop                 live = false, cancel token, abort task
//! ```
//!
//! `cancel()` clears the live flag under the same lock a tick takes before
//! mutating. A tick that was already scheduled when the handle is cancelled
//! finds the flag cleared and does nothing, so once `cancel()` returns the
//! index is frozen. Dropping the handle cancels it, which covers every way
//! a page can go away.

use crate::carousel::{Carousel, CarouselError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

struct Slot {
    carousel: Carousel,
    live: bool,
    updates: watch::Sender<usize>,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    // The critical sections never panic mid-update, so a poisoned slot
    // still holds a valid index.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Apply one scheduled tick. Returns `None` once the carousel is cancelled.
fn apply_tick(slot: &Mutex<Slot>) -> Option<usize> {
    let mut slot = lock(slot);
    if !slot.live {
        return None;
    }
    let index = slot.carousel.tick();
    slot.updates.send_replace(index);
    Some(index)
}

/// A mounted carousel: shared rotation state plus its scheduled ticks.
pub struct AutoCarousel {
    slot: Arc<Mutex<Slot>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for AutoCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = lock(&self.slot);
        f.debug_struct("AutoCarousel")
            .field("carousel", &slot.carousel)
            .field("live", &slot.live)
            .field("scheduled", &self.task.is_some())
            .finish()
    }
}

impl AutoCarousel {
    /// Mount a carousel. Auto-advancing carousels start ticking one full
    /// interval from now.
    ///
    /// # Panics
    ///
    /// Auto-advancing carousels spawn onto the current tokio runtime, so this
    /// panics if called outside one. Manual carousels need no runtime.
    pub fn start(carousel: Carousel) -> Self {
        let (updates, _) = watch::channel(carousel.current());
        let period = carousel.interval();
        let slot = Arc::new(Mutex::new(Slot {
            carousel,
            live: true,
            updates,
        }));
        let cancel = CancellationToken::new();

        let task = period.map(|period| {
            debug!(?period, "scheduling carousel auto-advance");
            tokio::spawn(advance_task(
                Arc::clone(&slot),
                Instant::now() + period,
                period,
                cancel.clone(),
            ))
        });

        Self { slot, cancel, task }
    }

    pub fn current(&self) -> usize {
        lock(&self.slot).carousel.current()
    }

    pub fn len(&self) -> usize {
        lock(&self.slot).carousel.len()
    }

    /// Always false: a carousel never has zero slides.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Copy of the rotation state as it is right now.
    pub fn snapshot(&self) -> Carousel {
        lock(&self.slot).carousel.clone()
    }

    pub fn is_live(&self) -> bool {
        lock(&self.slot).live
    }

    /// Receiver that sees the index after every tick or manual step.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        lock(&self.slot).updates.subscribe()
    }

    pub fn next(&self) -> Result<usize, CarouselError> {
        self.apply(|c| Ok(c.next()))
    }

    pub fn previous(&self) -> Result<usize, CarouselError> {
        self.apply(|c| Ok(c.previous()))
    }

    pub fn jump_to(&self, index: i64) -> Result<usize, CarouselError> {
        self.apply(|c| c.jump_to(index))
    }

    /// Manual steps apply immediately; they do not wait for or reset the
    /// tick schedule.
    fn apply(
        &self,
        op: impl FnOnce(&mut Carousel) -> Result<usize, CarouselError>,
    ) -> Result<usize, CarouselError> {
        let mut slot = lock(&self.slot);
        if !slot.live {
            return Err(CarouselError::Cancelled);
        }
        let index = op(&mut slot.carousel)?;
        slot.updates.send_replace(index);
        Ok(index)
    }

    /// Stop all future mutation. Safe to call any number of times.
    pub fn cancel(&self) {
        {
            let mut slot = lock(&self.slot);
            if !slot.live {
                return;
            }
            slot.live = false;
        }
        self.cancel.cancel();
        if let Some(task) = &self.task {
            task.abort();
        }
        debug!("carousel cancelled");
    }
}

impl Drop for AutoCarousel {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn advance_task(
    slot: Arc<Mutex<Slot>>,
    first_tick: Instant,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval_at(first_tick, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                match apply_tick(&slot) {
                    Some(index) => debug!(index, "carousel tick"),
                    None => break,
                }
            }
        }
    }
}
