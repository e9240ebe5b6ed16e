//! Top navigation bar shown on every browsing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__logo">
                    <img src="/assets/images/logos/logo.svg" alt="logo"/>
                </A>
                <ul class="navbar__links">
                    <li><A href="/">"Browse"</A></li>
                    <li><a href="">"Popular"</a></li>
                    <li><a href="">"Categories"</a></li>
                    <li><a href="">"Events"</a></li>
                    <li><A href="/check-booking">"My Booking"</A></li>
                </ul>
                <a class="navbar__contact" href="#">
                    <img class="icon" src="/assets/images/icons/call.svg" alt="icon"/>
                    <span>"Contact Us"</span>
                </a>
            </div>
        </nav>
    }
}
