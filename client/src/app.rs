//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::config::ApiConfig;
use crate::pages::{
    book_office::BookOfficePage, check_booking::CheckBookingPage, city_details::CityDetailsPage, home::HomePage,
    office_details::OfficeDetailsPage, success_booking::SuccessBookingPage,
};
use crate::state::booking::BookingConfirmation;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the last booking confirmation, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    // Written by the booking page, read by the success and check pages.
    provide_context(RwSignal::new(None::<BookingConfirmation>));

    view! {
        <Stylesheet id="leptos" href="/pkg/officehub.css"/>
        <Title text="OfficeHub"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("city"), ParamSegment("slug")) view=CityDetailsPage/>
                    <Route path=(StaticSegment("office"), ParamSegment("slug")) view=OfficeDetailsPage/>
                    <Route
                        path=(StaticSegment("office"), ParamSegment("slug"), StaticSegment("booking"))
                        view=BookOfficePage
                    />
                    <Route path=StaticSegment("check-booking") view=CheckBookingPage/>
                    <Route path=StaticSegment("success-booking") view=SuccessBookingPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
