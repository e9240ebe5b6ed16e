//! Card summarising an office in city listings.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ApiConfig;
use crate::net::types::Office;
use crate::util::format::rupiah;

#[component]
pub fn OfficeCard(office: Office) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let href = format!("/office/{}", office.slug);
    let thumbnail = config.storage_url(&office.thumbnail);

    view! {
        <A href=href attr:class="office-card">
            <div class="office-card__thumbnail">
                <p class="office-card__badge">"Popular"</p>
                <img src=thumbnail alt="thumbnail"/>
            </div>
            <div class="office-card__body">
                <h3 class="office-card__name">{office.name}</h3>
                <div class="office-card__meta">
                    <p class="office-card__price">{rupiah(office.price)}</p>
                    <p class="office-card__duration">{format!("{} days", office.duration)}</p>
                </div>
                <hr/>
                <div class="office-card__meta">
                    <div class="office-card__city">
                        <img class="icon" src="/assets/images/icons/location.svg" alt="icon"/>
                        <p>{office.city.name}</p>
                    </div>
                    <div class="office-card__rating">
                        <img class="icon" src="/assets/images/icons/Star 1.svg" alt="icon"/>
                        <p>"4.5/5"</p>
                    </div>
                </div>
            </div>
        </A>
    }
}
