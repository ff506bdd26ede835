//! Cancelable repeating timer.
//!
//! DESIGN
//! ======
//! A `spawn_local` loop sleeping between ticks, kept alive by an atomic
//! flag. The returned handle is the only way to stop the loop; the owner
//! releases it from `on_cleanup` or when the driven feature turns off, so
//! the timer's lifetime is exactly the feature's lifetime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Owner's handle on a running interval. Cancel is idempotent.
pub struct IntervalHandle {
    alive: Arc<AtomicBool>,
}

impl IntervalHandle {
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Start a repeating timer that calls `tick` every `period` until the
/// returned handle is canceled. Outside the browser this is inert: the
/// handle is returned but no loop runs.
pub fn spawn_interval(period: Duration, tick: impl Fn() + 'static) -> IntervalHandle {
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "csr")]
    {
        let flag = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (period, tick);
    }

    IntervalHandle { alive }
}
