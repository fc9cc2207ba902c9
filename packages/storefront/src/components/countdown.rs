use dioxus::prelude::*;
use std::time::Duration;

use crate::state::use_services;

const TICK: Duration = Duration::from_secs(1);

/// Whole seconds still to wait, rounded up.
pub fn seconds_left(total: Duration, elapsed: Duration) -> u64 {
    let remaining = total.saturating_sub(elapsed);
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}

/// Visible countdown for a redirect that is scheduled elsewhere. Display
/// only: it never navigates.
#[component]
pub fn RedirectCountdown(total: Duration, label: String) -> Element {
    let services = use_services();
    let mut elapsed = use_signal(|| Duration::ZERO);

    use_hook(move || {
        spawn(async move {
            while *elapsed.peek() < total {
                services.timer.sleep(TICK).await;
                elapsed.with_mut(|e| *e += TICK);
            }
        });
    });

    let left = seconds_left(total, elapsed());

    rsx! {
        p { class: "muted", "{label} in {left}s" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_left_rounds_up_and_saturates() {
        let total = Duration::from_millis(5000);
        assert_eq!(seconds_left(total, Duration::ZERO), 5);
        assert_eq!(seconds_left(total, Duration::from_millis(1)), 5);
        assert_eq!(seconds_left(total, Duration::from_millis(4001)), 1);
        assert_eq!(seconds_left(total, Duration::from_millis(5000)), 0);
        assert_eq!(seconds_left(total, Duration::from_secs(9)), 0);
    }
}
