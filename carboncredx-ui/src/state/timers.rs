//! Deadline wake-ups
//!
//! The state machines in `carboncredx` report when they next need attention.
//! A [`Wakeup`] holds at most one pending browser timeout for that deadline
//! and cancels it when the owning component unmounts.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use leptos::*;

use carboncredx::clock::{Clock, SystemClock};

/// One re-armable timeout tied to the current reactive owner
#[derive(Clone, Copy)]
pub struct Wakeup {
    slot: StoredValue<Option<Timeout>>,
}

impl Wakeup {
    pub fn new() -> Self {
        let slot = store_value(None::<Timeout>);

        // Dropping a Timeout cancels it
        on_cleanup(move || {
            slot.try_update_value(|pending| pending.take());
        });

        Self { slot }
    }

    /// Run `callback` once `deadline` has passed, replacing any pending one.
    /// `None` just cancels.
    pub fn arm<F>(&self, deadline: Option<DateTime<Utc>>, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = deadline.map(|due| Timeout::new(delay_ms(due), callback));
        self.slot.try_update_value(|pending| *pending = timeout);
    }
}

/// Milliseconds from now until `due`, clamped to what `setTimeout` accepts
fn delay_ms(due: DateTime<Utc>) -> u32 {
    let wait = (due - SystemClock.now()).num_milliseconds();
    wait.clamp(0, i64::from(i32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn test_past_deadline_fires_immediately() {
        let due = SystemClock.now() - Duration::seconds(5);
        assert_eq!(delay_ms(due), 0);
    }

    #[test]
    fn test_far_deadline_is_clamped() {
        let due = SystemClock.now() + Duration::days(365);
        assert_eq!(delay_ms(due), i32::MAX as u32);
    }

    #[test]
    fn test_near_deadline() {
        let due = SystemClock.now() + Duration::milliseconds(3000);
        let wait = delay_ms(due);
        assert!(wait > 2500 && wait <= 3000);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod owner_tests {
    use super::*;
    use chrono::Duration;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    /// Mount a wakeup under its own owner, due in 20 ms
    fn mount(fired: Rc<Cell<bool>>) -> Disposer {
        let mount = as_child_of_current_owner(|fired: Rc<Cell<bool>>| {
            let due = SystemClock.now() + Duration::milliseconds(20);
            Wakeup::new().arm(Some(due), move || fired.set(true));
        });
        let ((), disposer) = mount(fired);
        disposer
    }

    #[wasm_bindgen_test]
    async fn test_wakeup_fires_while_owner_lives() {
        let runtime = create_runtime();
        let fired = Rc::new(Cell::new(false));

        let disposer = mount(fired.clone());
        TimeoutFuture::new(80).await;
        assert!(fired.get());

        drop(disposer);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_disposed_owner_cancels_wakeup() {
        let runtime = create_runtime();
        let fired = Rc::new(Cell::new(false));

        drop(mount(fired.clone()));
        TimeoutFuture::new(80).await;
        assert!(!fired.get());

        runtime.dispose();
    }
}
