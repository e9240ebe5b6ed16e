//! Confirmation shown right after a booking is created.
//!
//! The booking and office come from the confirmation context set by
//! `BookOfficePage`; a direct visit has nothing to show.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::config::ApiConfig;
use crate::state::booking::BookingConfirmation;

/// `/success-booking`
#[component]
pub fn SuccessBookingPage() -> impl IntoView {
    let confirmation = expect_context::<RwSignal<Option<BookingConfirmation>>>();

    move || match confirmation.get() {
        Some(confirmation) => view! { <ConfirmationCard confirmation=confirmation/> }.into_any(),
        None => view! {
            <section class="success">
                <div class="success__card card">
                    <p class="notice">"No recent booking to show."</p>
                    <A href="/check-booking" attr:class="button button--primary">
                        <span>"Check Booking Status"</span>
                    </A>
                </div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn ConfirmationCard(confirmation: BookingConfirmation) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let thumbnail = config.storage_url(&confirmation.office.thumbnail);
    log::info!("showing confirmation for {}", confirmation.trx_id());

    view! {
        <section class="success">
            <div class="success__card card">
                <div class="success__heading">
                    <img class="icon icon--xl" src="/assets/images/icons/tick-circle-green.svg" alt="icon"/>
                    <h1>"Booking Finished"</h1>
                </div>
                <hr/>
                <div class="office-summary">
                    <img class="office-summary__thumbnail" src=thumbnail alt="thumbnail"/>
                    <div>
                        <p class="office-summary__name">{confirmation.office.name.clone()}</p>
                        <div class="office-summary__city">
                            <img class="icon" src="/assets/images/icons/location.svg" alt="icon"/>
                            <p>{confirmation.office.city.name.clone()}</p>
                        </div>
                    </div>
                </div>
                <hr/>
                <div class="success__code">
                    <img class="icon" src="/assets/images/icons/receipt-text-black.svg" alt="icon"/>
                    <div>
                        <p class="success__trx">{confirmation.trx_id().to_owned()}</p>
                        <p>"Salin kode untuk melihat status pemesanan"</p>
                    </div>
                </div>
                <hr/>
                <p class="success__note">
                    "Pesanan Anda sedang kami proses, kami akan menginformasikan status Anda melalui SMS"
                </p>
                <A href="/check-booking" attr:class="button button--primary">
                    <span>"View Booking Details"</span>
                </A>
            </div>
        </section>
    }
}
