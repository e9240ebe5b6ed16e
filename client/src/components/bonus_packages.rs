//! "Bonus Packages For You" block shared by the booking and status pages.

use leptos::prelude::*;

const PACKAGES: &[(&str, &str, &str)] = &[
    ("/assets/images/icons/coffee.svg", "Extra Snacks", "Work-Life Balance"),
    ("/assets/images/icons/group.svg", "Free Move", "Anytime 24/7"),
];

#[component]
pub fn BonusPackages() -> impl IntoView {
    view! {
        <div class="bonus-packages">
            <h2>"Bonus Packages For You"</h2>
            <div class="bonus-packages__grid">
                {PACKAGES
                    .iter()
                    .map(|(icon, title, subtitle)| {
                        view! {
                            <div class="bonus-packages__item">
                                <img class="icon icon--lg" src=*icon alt="icon"/>
                                <div>
                                    <p class="bonus-packages__title">{*title}</p>
                                    <p class="bonus-packages__subtitle">{*subtitle}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
