//! Booking status lookup by transaction code and phone number.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::bonus_packages::BonusPackages;
use crate::components::navbar::Navbar;
use crate::components::notices::{FieldError, NotFoundNotice};
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::BookingDetails;
use crate::state::booking::BookingConfirmation;
use crate::state::check_booking::CheckBookingForm;
use crate::state::fetch::FetchState;
use crate::util::format::{duration_label, payment_status_label, rupiah};
use crate::util::validation::{FIELD_BOOKING_TRX_ID, FIELD_PHONE_NUMBER, FieldErrors};

#[cfg(feature = "hydrate")]
const SUBMIT_FALLBACK: &str = "An unexpected error occurred";

/// `/check-booking`
#[component]
pub fn CheckBookingPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let confirmation = expect_context::<RwSignal<Option<BookingConfirmation>>>();

    let form = RwSignal::new(confirmation.with_untracked(|c| CheckBookingForm::prefilled(c.as_ref())));
    let field_errors = RwSignal::new(FieldErrors::default());
    // `None` until the first valid submission.
    let lookup = RwSignal::new(None::<FetchState<BookingDetails>>);
    let submitting = move || lookup.with(|l| l.as_ref().is_some_and(FetchState::is_loading));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if lookup.with_untracked(|l| l.as_ref().is_some_and(FetchState::is_loading)) {
            return;
        }
        let mut next = lookup.get_untracked();
        let prepared = form.with_untracked(|f| f.start_lookup(&mut next));
        lookup.set(next);
        let request = match prepared {
            Ok(request) => request,
            Err(errors) => {
                log::warn!("check-booking form rejected: {} field(s) invalid", errors.len());
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::default());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = api::check_booking(&config, &request).await;
                if let Err(err) = &result {
                    log::error!("error checking booking: {err}");
                }
                lookup.set(Some(FetchState::from_result(result, SUBMIT_FALLBACK)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, request);
        }
    };

    view! {
        <Navbar/>
        <div class="banner" id="Banner">
            <h1>"View Your Booking Details"</h1>
            <img src="/assets/images/thumbnails/thumbnail-details-5.png" alt=""/>
        </div>
        <section class="check-booking" id="Check-Booking">
            <form class="check-booking__form card" on:submit=on_submit>
                <div class="form-field">
                    <label for="booking_trx_id">"Booking TRX ID"</label>
                    <input
                        id="booking_trx_id"
                        name="booking_trx_id"
                        type="text"
                        placeholder="Write your booking trx id"
                        prop:value=move || form.with(|f| f.booking_trx_id.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_field(FIELD_BOOKING_TRX_ID, event_target_value(&ev)));
                        }
                    />
                    <FieldError message=move || field_errors.with(|e| e.message_for(FIELD_BOOKING_TRX_ID))/>
                </div>
                <div class="form-field">
                    <label for="phone_number">"Phone Number"</label>
                    <input
                        id="phone_number"
                        name="phone_number"
                        type="tel"
                        placeholder="Write your valid number"
                        prop:value=move || form.with(|f| f.phone_number.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_field(FIELD_PHONE_NUMBER, event_target_value(&ev)));
                        }
                    />
                    <FieldError message=move || field_errors.with(|e| e.message_for(FIELD_PHONE_NUMBER))/>
                </div>
                <button class="button button--primary" type="submit" disabled=submitting>
                    <span>{move || if submitting() { "Loading..." } else { "Check Booking" }}</span>
                </button>
            </form>
            {move || match lookup.get() {
                None | Some(FetchState::Loading) => ().into_any(),
                Some(FetchState::Failed(message)) => {
                    view! { <p class="notice notice--error">{message}</p> }.into_any()
                }
                Some(FetchState::Missing) => view! { <NotFoundNotice what="Booking"/> }.into_any(),
                Some(FetchState::Ready(details)) => view! { <BookingResult details=details/> }.into_any(),
            }}
            <h4 class="check-booking__hint">"*hubungi call service jika anda lupa kode dan nomer handpone"</h4>
        </section>
    }
}

#[component]
fn BookingResult(details: BookingDetails) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let thumbnail = config.storage_url(&details.office.thumbnail);
    let status_class = if details.is_paid { "badge badge--success" } else { "badge badge--pending" };
    let customer_rows = [
        ("/assets/images/icons/security-user-black.svg", "Full Name", details.name.clone()),
        ("/assets/images/icons/call-black.svg", "Phone Number", details.phone_number.clone()),
        ("/assets/images/icons/calendar-black.svg", "Started At", details.started_at.clone()),
        ("/assets/images/icons/calendar-black.svg", "Ended At", details.ended_at.clone()),
    ];

    view! {
        <div class="booking-result" id="Result">
            <div class="card">
                <div class="office-summary">
                    <img class="office-summary__thumbnail" src=thumbnail alt="thumbnail"/>
                    <div>
                        <p class="office-summary__name">{details.office.name.clone()}</p>
                        <div class="office-summary__city">
                            <img class="icon" src="/assets/images/icons/location.svg" alt="icon"/>
                            <p>{details.office.city.name.clone()}</p>
                        </div>
                    </div>
                </div>
                <hr/>
                <h2>"Customer Details"</h2>
                {customer_rows
                    .into_iter()
                    .map(|(icon, label, value)| {
                        view! {
                            <div class="detail-row">
                                <h3>{label}</h3>
                                <div class="detail-row__value">
                                    <img class="icon" src=icon alt="icon"/>
                                    <p>{value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <hr/>
                <p class="booking-result__privacy">"Privasi Anda aman bersama kami."</p>
            </div>
            <div class="card">
                <h2>"Order Details"</h2>
                <div class="order-row">
                    <p>"Status Pembayaran"</p>
                    <p class=status_class>{payment_status_label(details.is_paid)}</p>
                </div>
                <div class="order-row">
                    <p>"Booking TRX ID"</p>
                    <p class="order-row__value">{details.booking_trx_id.clone()}</p>
                </div>
                <div class="order-row">
                    <p>"Duration"</p>
                    <p class="order-row__value">{duration_label(details.duration)}</p>
                </div>
                <div class="order-row">
                    <p>"Total Amount"</p>
                    <p class="order-row__value order-row__value--total">{rupiah(details.total_amount)}</p>
                </div>
                <hr/>
                <BonusPackages/>
                <hr/>
                <a class="button button--outline" href="">
                    <img class="icon" src="/assets/images/icons/call-black.svg" alt="icon"/>
                    <span>"Call Customer Service"</span>
                </a>
            </div>
        </div>
    }
}
