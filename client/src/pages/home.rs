//! Landing page at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <header class="hero">
            <div class="hero__text">
                <h1>"All Great Offices." <br/> "Grow Your Business."</h1>
                <p>
                    "Kantor yang tepat dapat memberikan impact pekerjaan menjadi lebih baik dan sehat dalam tumbuhkan karir."
                </p>
                <div class="hero__actions">
                    <A href="/check-booking" attr:class="button button--primary">
                        <span>"Check My Booking"</span>
                    </A>
                </div>
            </div>
            <div class="hero__image">
                <img src="/assets/images/thumbnails/thumbnail-details-1.png" alt="hero background"/>
            </div>
        </header>
    }
}
