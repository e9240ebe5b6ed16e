//! Booking form for a single office.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the office, draws a fresh unique code for the order summary, and
//! submits `POST /booking-transaction`. Validation runs before any request;
//! on success the confirmation is published through context and the user
//! lands on the success route.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::bonus_packages::BonusPackages;
use crate::components::navbar::Navbar;
use crate::components::notices::{ErrorNotice, FieldError, LoadingNotice, NotFoundNotice};
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::Office;
#[cfg(feature = "hydrate")]
use crate::state::booking::SUCCESS_ROUTE;
use crate::state::booking::{BookingConfirmation, BookingForm, BookingQuote};
use crate::state::fetch::FetchState;
use crate::util::fetch::{install_fetch, slug_param};
use crate::util::format::{duration_label, rupiah, unique_code_deduction};
use crate::util::validation::{FIELD_NAME, FIELD_OFFICE_SPACE_ID, FIELD_PHONE_NUMBER, FIELD_STARTED_AT, FieldErrors};

const FETCH_FALLBACK: &str = "An unknown error occurred while fetching office data";
#[cfg(feature = "hydrate")]
const SUBMIT_FALLBACK: &str = "An unexpected error occurred while submitting the form";

const PAYMENT_BANK_LOGO: &str = "/assets/images/logos/bri.svg";
const PAYMENT_ACCOUNT_NAME: &str = "Kopi Mbah O";
const PAYMENT_ACCOUNT_NUMBER: &str = "1283008822";

/// `/office/{slug}/booking`
#[component]
pub fn BookOfficePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let confirmation = expect_context::<RwSignal<Option<BookingConfirmation>>>();
    let navigate = use_navigate();

    let office = RwSignal::new(FetchState::<Office>::Loading);
    let quote = RwSignal::new(None::<BookingQuote>);
    let form = RwSignal::new(BookingForm::default());
    let field_errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);

    install_fetch(office, slug_param(), FETCH_FALLBACK, |config, slug| async move {
        api::fetch_office(&config, &slug).await
    });

    // A new code per loaded office; the form carries the discounted total.
    Effect::new(move || {
        if let FetchState::Ready(loaded) = office.get() {
            let next = BookingQuote::generate(loaded.price, &mut rand::thread_rng());
            log::info!("office {} quoted at {} (unique code {})", loaded.slug, next.grand_total, next.unique_code);
            form.update(|f| f.attach(&loaded, &next));
            quote.set(Some(next));
        } else {
            quote.set(None);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match form.with_untracked(BookingForm::prepare) {
            Ok(request) => request,
            Err(errors) => {
                log::warn!("booking form rejected: {} field(s) invalid", errors.len());
                field_errors.set(errors);
                return;
            }
        };
        let Some(booked_office) = office.with_untracked(|s| s.ready().cloned()) else {
            return;
        };
        field_errors.set(FieldErrors::default());
        submit_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::create_booking(&config, &request).await {
                    Ok(booking) => {
                        log::info!("booking created: {}", booking.booking_trx_id);
                        confirmation.set(Some(BookingConfirmation { office: booked_office, booking }));
                        navigate(SUCCESS_ROUTE, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("error submitting booking: {err}");
                        submit_error.set(Some(err.page_message(SUBMIT_FALLBACK)));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, request, booked_office, confirmation);
        }
    };

    move || match office.get() {
        FetchState::Loading => view! { <LoadingNotice/> }.into_any(),
        FetchState::Failed(message) => view! { <ErrorNotice message=message/> }.into_any(),
        FetchState::Missing => view! { <NotFoundNotice what="Office"/> }.into_any(),
        FetchState::Ready(loaded) => {
            let thumbnail = expect_context::<ApiConfig>().storage_url(&loaded.thumbnail);
            let field_message = move |field: &'static str| move || field_errors.with(|e| e.message_for(field));
            view! {
                <Navbar/>
                <div class="banner" id="Banner">
                    <h1>"Start Booking Your Office"</h1>
                    <img src="/assets/images/thumbnails/thumbnail-details-4.png" alt=""/>
                </div>
                <form class="booking" on:submit=on_submit.clone()>
                    <div class="booking__details card">
                        <div class="office-summary">
                            <img class="office-summary__thumbnail" src=thumbnail alt="thumbnail"/>
                            <div>
                                <p class="office-summary__name">{loaded.name.clone()}</p>
                                <div class="office-summary__city">
                                    <img class="icon" src="/assets/images/icons/location.svg" alt="icon"/>
                                    <p>{loaded.city.name.clone()}</p>
                                </div>
                            </div>
                        </div>
                        <hr/>
                        <h2>"Complete The Details"</h2>
                        <div class="form-field">
                            <label for="name">"Full Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                placeholder="Write your complete name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.set_field(FIELD_NAME, event_target_value(&ev)))
                            />
                            <FieldError message=field_message(FIELD_NAME)/>
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
                            <FieldError message=field_message(FIELD_PHONE_NUMBER)/>
                        </div>
                        <div class="form-field">
                            <label for="started_at">"Started At"</label>
                            <input
                                id="started_at"
                                name="started_at"
                                type="date"
                                prop:value=move || form.with(|f| f.started_at.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FIELD_STARTED_AT, event_target_value(&ev)));
                                }
                            />
                            <FieldError message=field_message(FIELD_STARTED_AT)/>
                        </div>
                        <hr/>
                        <p class="booking__privacy">
                            "Kami akan melindungi privasi Anda sebaik mungkin sehingga dapat fokus bekerja"
                        </p>
                        <hr/>
                        <BonusPackages/>
                    </div>
                    <div class="booking__order card">
                        <h2>"Your Order Details"</h2>
                        <div class="order-row">
                            <p>"Duration"</p>
                            <p class="order-row__value">{duration_label(loaded.duration)}</p>
                        </div>
                        <div class="order-row">
                            <p>"Sub Total"</p>
                            <p class="order-row__value">{rupiah(loaded.price)}</p>
                        </div>
                        <div class="order-row">
                            <p>"Unique Code"</p>
                            <p class="order-row__value order-row__value--deduction">
                                {move || quote.get().map(|q| unique_code_deduction(q.unique_code)).unwrap_or_default()}
                            </p>
                        </div>
                        <div class="order-row">
                            <p>"Grand Total"</p>
                            <p class="order-row__value order-row__value--total">
                                {move || quote.get().map(|q| rupiah(q.grand_total)).unwrap_or_default()}
                            </p>
                        </div>
                        <p class="booking__code-hint">
                            "Tolong perhatikan kode unik berikut ketika melakukan pembayaran kantor"
                        </p>
                        <hr/>
                        <h2>"Send Payment to"</h2>
                        <div class="payment-account">
                            <img class="payment-account__logo" src=PAYMENT_BANK_LOGO alt="bank logo"/>
                            <div>
                                <p class="payment-account__name">{PAYMENT_ACCOUNT_NAME}</p>
                                <p>{PAYMENT_ACCOUNT_NUMBER}</p>
                            </div>
                        </div>
                        <hr/>
                        <FieldError message=field_message(FIELD_OFFICE_SPACE_ID)/>
                        <Show when=move || submit_error.get().is_some()>
                            <p class="notice notice--error">{move || submit_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                            <span>{move || if submitting.get() { "Loading..." } else { "Check Out" }}</span>
                        </button>
                    </div>
                </form>
            }
            .into_any()
        }
    }
}
