//! Office detail page with gallery, features, pricing, and booking entry.

#[cfg(test)]
#[path = "office_details_test.rs"]
mod office_details_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use super::FETCH_FALLBACK;
use crate::components::navbar::Navbar;
use crate::components::notices::{ErrorNotice, LoadingNotice, NotFoundNotice};
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::Office;
use crate::state::fetch::FetchState;
use crate::util::fetch::{install_fetch, slug_param};
use crate::util::format::rupiah;

const FEATURES: &[(&str, &str, &str)] = &[
    ("/assets/images/icons/security-user.svg", "Privacy", "For Yourself"),
    ("/assets/images/icons/cup.svg", "Global Event", "Startup Contest"),
    ("/assets/images/icons/home-trend-up.svg", "Sustainability", "Long-term Goals"),
    ("/assets/images/icons/coffee-2.svg", "Extra Snacks", "Work-Life Balance"),
    ("/assets/images/icons/3dcube.svg", "Compact", "Good for Focus"),
    ("/assets/images/icons/group.svg", "Free Move", "Anytime 24/7"),
];

const SALES_CONTACTS: &[(&str, &str)] = &[
    ("/assets/images/photos/hanan.jpg", "Hanan"),
    ("/assets/images/photos/heni.jpg", "Esmeray"),
];

/// Map search link for an office, or `None` if the URL cannot be built.
fn map_search_url(name: &str, address: &str) -> Option<String> {
    let query = if address.trim().is_empty() { name.to_owned() } else { format!("{name}, {address}") };
    url::Url::parse_with_params("https://www.google.com/maps/search/", &[("api", "1"), ("query", query.as_str())])
        .ok()
        .map(String::from)
}

fn booking_href(slug: &str) -> String {
    format!("/office/{slug}/booking")
}

/// `/office/{slug}`
#[component]
pub fn OfficeDetailsPage() -> impl IntoView {
    let office = RwSignal::new(FetchState::<Office>::Loading);
    install_fetch(office, slug_param(), FETCH_FALLBACK, |config, slug| async move {
        api::fetch_office(&config, &slug).await
    });

    move || match office.get() {
        FetchState::Loading => view! { <LoadingNotice/> }.into_any(),
        FetchState::Failed(message) => view! { <ErrorNotice message=message/> }.into_any(),
        FetchState::Missing => view! { <NotFoundNotice what="Office"/> }.into_any(),
        FetchState::Ready(office) => view! { <OfficeView office=office/> }.into_any(),
    }
}

#[component]
fn OfficeView(office: Office) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let gallery: Vec<String> = std::iter::once(office.thumbnail.as_str())
        .chain(office.photos.iter().map(|p| p.photo.as_str()))
        .map(|path| config.storage_url(path))
        .collect();
    let map_url = map_search_url(&office.name, &office.address);

    view! {
        <Navbar/>
        <section class="gallery" id="Gallery">
            <div class="gallery__track">
                {gallery
                    .into_iter()
                    .map(|src| view! { <div class="gallery__slide"><img src=src alt="thumbnail"/></div> })
                    .collect_view()}
            </div>
        </section>
        <section class="office-details" id="Details">
            <div class="office-details__main card">
                <p class="badge badge--success">"Popular"</p>
                <div class="office-details__heading">
                    <div>
                        <h1>{office.name.clone()}</h1>
                        <div class="office-details__city">
                            <img class="icon" src="/assets/images/icons/location.svg" alt="icon"/>
                            <p>{office.city.name.clone()}</p>
                        </div>
                    </div>
                    <p class="office-details__rating">"4.5/5 (19,384)"</p>
                </div>
                <p class="office-details__about">{office.about.clone()}</p>
                <hr/>
                <h2>"You Get What You Need Most"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, subtitle)| {
                            view! {
                                <div class="feature-grid__item">
                                    <img class="icon icon--lg" src=*icon alt="icon"/>
                                    <div>
                                        <p class="feature-grid__title">{*title}</p>
                                        <p class="feature-grid__subtitle">{*subtitle}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <hr/>
                <div class="office-details__address">
                    <h2>"Office Address"</h2>
                    <p>{office.name.clone()}</p>
                    <p>{office.address.clone()}</p>
                    {map_url.map(|href| view! { <a class="office-details__map" href=href target="_blank" rel="noopener">"Open in Maps"</a> })}
                </div>
            </div>
            <aside class="office-details__side">
                <div class="card">
                    <p class="office-details__price">{rupiah(office.price)}</p>
                    <p class="office-details__duration">{format!("For {} days working", office.duration)}</p>
                    <hr/>
                    <div class="office-details__benefits">
                        {office
                            .benefits
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <div class="office-details__benefit">
                                        <img class="icon" src="/assets/images/icons/verify.svg" alt="icon"/>
                                        <p>{benefit.name.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <hr/>
                    <div class="office-details__actions">
                        <A href=booking_href(&office.slug) attr:class="button button--primary">
                            <span>"Book This Office"</span>
                        </A>
                        <button class="button button--outline" type="button">
                            <span>"Save for Later"</span>
                        </button>
                    </div>
                </div>
                <div class="card">
                    <h2>"Contact Our Sales"</h2>
                    {SALES_CONTACTS
                        .iter()
                        .map(|(photo, name)| {
                            view! {
                                <div class="sales-contact">
                                    <img class="sales-contact__photo" src=*photo alt="photo"/>
                                    <div>
                                        <p class="sales-contact__name">{*name}</p>
                                        <p class="sales-contact__role">"Sales Manager"</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>
        </section>
    }
}
