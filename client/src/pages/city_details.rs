//! City page listing the offices located in a city.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::FETCH_FALLBACK;
use crate::components::navbar::Navbar;
use crate::components::notices::{ErrorNotice, LoadingNotice, NotFoundNotice};
use crate::components::office_card::OfficeCard;
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::City;
use crate::state::fetch::FetchState;
use crate::util::fetch::{install_fetch, slug_param};

/// `/city/{slug}`
#[component]
pub fn CityDetailsPage() -> impl IntoView {
    let city = RwSignal::new(FetchState::<City>::Loading);
    install_fetch(city, slug_param(), FETCH_FALLBACK, |config, slug| async move {
        api::fetch_city(&config, &slug).await
    });

    move || match city.get() {
        FetchState::Loading => view! { <LoadingNotice/> }.into_any(),
        FetchState::Failed(message) => view! { <ErrorNotice message=message/> }.into_any(),
        FetchState::Missing => view! { <NotFoundNotice what="City"/> }.into_any(),
        FetchState::Ready(city) => view! { <CityView city=city/> }.into_any(),
    }
}

#[component]
fn CityView(city: City) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let hero_photo = config.storage_url(&city.photo);

    view! {
        <Navbar/>
        <header class="city-hero">
            <section class="city-hero__banner">
                <div class="city-hero__text">
                    <h1>"Great Space in " <br/> <span class="accent">{format!("{} City", city.name)}</span></h1>
                    <p>
                        "Ruang yang tepat dapat memberikan impact pekerjaan menjadi lebih baik dan sehat dalam tumbuhkan karir."
                    </p>
                </div>
                <div class="city-hero__image">
                    <img src=hero_photo alt="hero background"/>
                </div>
            </section>
        </header>
        <section class="office-grid" id="Fresh-Space">
            <h2>"Browse Offices"</h2>
            <div class="office-grid__cards">
                {city.office_spaces.into_iter().map(|office| view! { <OfficeCard office=office/> }).collect_view()}
            </div>
        </section>
    }
}
