//! Site footer with static link columns.

use leptos::prelude::*;

const LINK_COLUMNS: &[(&str, &[&str])] = &[
    ("For Business", &["Employer", "Health Plan", "Individual"]),
    ("Resource", &["Resource Center", "Testimonial", "Employer"]),
    ("Partner", &["Swing Tech"]),
    ("Company", &["About", "Press", "Career", "Contact"]),
];

const LEGAL_LINKS: &[&str] = &["Terms & Condition", "Privacy", "Security", "Cookie Declaration"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                {LINK_COLUMNS
                    .iter()
                    .map(|(title, links)| {
                        view! {
                            <div class="footer__column">
                                <h4>{*title}</h4>
                                {links.iter().map(|label| view! { <a href=""><p>{*label}</p></a> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="footer__column">
                    <h4>"Hit me on"</h4>
                    <div class="footer__social">
                        <img src="/assets/images/icons/smartphone.svg" alt="whatsapp"/>
                        <img src="/assets/images/icons/twitter.svg" alt="twitter"/>
                        <img src="/assets/images/icons/instagram.svg" alt="instagram"/>
                        <img src="/assets/images/icons/linkedin.svg" alt="linkedin"/>
                    </div>
                </div>
            </div>
            <hr/>
            <div class="footer__below">
                <p class="footer__copyright">"CodeInn. All Right Reserved."</p>
                <div class="footer__legal">
                    {LEGAL_LINKS.iter().map(|label| view! { <a href="#"><p>{*label}</p></a> }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
