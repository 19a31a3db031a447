use yew::prelude::*;

use crate::confetti::scroll_with_confetti;
use crate::content::{CELEBRATION_TITLE, COPYRIGHT, FAMILY_PHONE};
use crate::sections::Section;

const ICON_LINKS: &[(Section, &str, &str)] = &[
    (Section::MilestoneReflection, "★", "Milestone Reflection"),
    (Section::Gallery, "🖼", "Memory Gallery"),
    (Section::Countdown, "📅", "Countdown Timer"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="section-inner footer-grid">
                <div class="footer-brand">
                    <div class="nav-brand large" onclick={scroll_with_confetti(Section::Hero)}>
                        <span class="brand-mark">{"♥"}</span>
                        <span class="brand-text">{"Happy "}<span class="gold">{"Birthday"}</span></span>
                    </div>
                    <p>{"Celebrating sixty-three golden years of a life lived with purpose, love, and unwavering integrity."}</p>
                    <div class="footer-icons">
                        { for ICON_LINKS.iter().map(|&(section, icon, title)| html! {
                            <button class="icon-button" title={title} onclick={scroll_with_confetti(section)}>
                                {icon}
                            </button>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Access"}</h4>
                    <ul class="footer-links">
                        { for Section::QUICK_ACCESS.iter().map(|&section| html! {
                            <li key={section.id()}>
                                <button onclick={scroll_with_confetti(section)}>{section.nav_label()}</button>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Reach Family"}</h4>
                    <div class="footer-contact">
                        <div>{"☎ "}{FAMILY_PHONE}</div>
                        <div class="footer-date">{"📅 "}{CELEBRATION_TITLE}</div>
                    </div>
                </div>
            </div>

            <div class="footer-copyright">{COPYRIGHT}</div>
        </footer>
    }
}
