//! Payment gateway return page

use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

use crate::components::{LoadingSpinner, RedirectCountdown};
use crate::flows::payment::{CallbackQuery, PaymentEffects, PaymentEvent, PaymentMachine, PaymentState};
use crate::machine::{drive, Machine};
use crate::routes::RouterNavigator;
use crate::state::use_services;

/// Verifies the transaction named in the callback query once per mount.
#[component]
pub fn PaymentCallback(query: CallbackQuery) -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let redirect_delay = services.config.payment_redirect_delay;
    let mut machine = use_signal(|| PaymentMachine::new(redirect_delay));
    let effects = use_hook(|| {
        Rc::new(PaymentEffects {
            verifier: services.client.clone(),
            timer: services.timer.clone(),
            navigator: Arc::new(RouterNavigator(navigator)),
            verify_delay: services.config.payment_verify_delay,
        })
    });

    let send = use_callback(move |event: PaymentEvent| {
        let effects = effects.clone();
        spawn(async move {
            drive(|ev| machine.write().decide(ev), &*effects, event).await;
        });
    });

    // The query is read once; later prop changes do not re-verify.
    use_hook(move || send.call(PaymentEvent::Mounted { query }));

    let state = machine.read().state().clone();

    rsx! {
        div {
            class: "card payment-result",
            match state {
                PaymentState::Loading => rsx! {
                    h1 { "Verifying your payment" }
                    LoadingSpinner { label: "Checking with the payment service..." }
                },
                PaymentState::Success { track_id, order_id, ref_number } => rsx! {
                    h1 { "Payment successful" }
                    div { class: "alert alert-success", "Your order has been placed." }
                    dl {
                        dt { "Tracking code" }
                        dd { "{track_id}" }
                        if let Some(order_id) = order_id {
                            dt { "Order" }
                            dd { "#{order_id}" }
                        }
                        if let Some(ref_number) = ref_number {
                            dt { "Reference" }
                            dd { "{ref_number}" }
                        }
                    }
                    RedirectCountdown {
                        total: redirect_delay,
                        label: "Taking you to your orders",
                    }
                    button {
                        class: "btn",
                        onclick: move |_| send.call(PaymentEvent::ViewOrders),
                        "View orders"
                    }
                },
                PaymentState::Error { message } => rsx! {
                    h1 { "Payment failed" }
                    div { class: "alert alert-error", "{message}" }
                    div {
                        class: "actions",
                        button {
                            class: "btn",
                            onclick: move |_| send.call(PaymentEvent::BackToCart),
                            "Back to cart"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| send.call(PaymentEvent::ViewOrders),
                            "View orders"
                        }
                    }
                },
            }
        }
    }
}
