use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;

use crate::browser::{self, BrowserStorage};
use crate::config::CelebrationConfig;
use crate::confetti::{birthday_confetti, scroll_with_confetti, trigger_confetti};
use crate::content::{photo, BIRTH_NOTE};
use crate::reveal::{CelebrationEffects, RevealGate};
use crate::sections::Section;

type BrowserGate = RevealGate<BrowserStorage, BrowserStorage>;

struct HeroEffects {
    overlay_open: UseStateHandle<bool>,
}

impl CelebrationEffects for HeroEffects {
    fn burst(&self) {
        birthday_confetti();
    }

    fn show_overlay_after(&self, delay_ms: u32) {
        let overlay_open = self.overlay_open.clone();
        Timeout::new(delay_ms, move || overlay_open.set(true)).forget();
    }

    fn scroll_to(&self, section: Section) {
        trigger_confetti();
        browser::scroll_to(section);
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_context::<CelebrationConfig>().unwrap_or_default();
    let overlay_open = use_state(|| false);

    let gate = {
        let config = config.clone();
        use_mut_ref(move || -> BrowserGate {
            RevealGate::activate(
                BrowserStorage::Local,
                BrowserStorage::Session,
                browser::navigation_kind(),
                &config,
            )
        })
    };
    let initial_label = gate.borrow().label();
    let label = use_state(move || initial_label);

    let on_trigger = {
        let gate = gate.clone();
        let label = label.clone();
        let effects = HeroEffects { overlay_open: overlay_open.clone() };
        Callback::from(move |_: MouseEvent| {
            let mut gate = gate.borrow_mut();
            let outcome = gate.press(&effects);
            debug!("Hero trigger pressed: {:?}, gate now {:?}", outcome, gate.state());
            label.set(gate.label());
        })
    };

    let on_close = {
        let gate = gate.clone();
        let label = label.clone();
        let overlay_open = overlay_open.clone();
        Callback::from(move |_: MouseEvent| {
            overlay_open.set(false);
            let mut gate = gate.borrow_mut();
            gate.dismiss_overlay();
            label.set(gate.label());
        })
    };

    html! {
        <section id={Section::Hero.id()} class="hero">
            <style>
                {r#"
                    @keyframes scale-in {
                        0% { transform: scale(0); opacity: 0; }
                        100% { transform: scale(1); opacity: 1; }
                    }
                    @keyframes overlay-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .birthday-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 99999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                        animation: overlay-fade 0.3s ease-out;
                    }
                    .birthday-card-frame {
                        background: linear-gradient(135deg, #B8860B, #D4AF37, #FFD700);
                        padding: 4px;
                        border-radius: 24px;
                        max-width: 28rem;
                        margin: 0 1rem;
                        animation: scale-in 0.5s ease-out;
                    }
                    .birthday-card {
                        background: #000;
                        border-radius: 20px;
                        padding: 3rem;
                        text-align: center;
                    }
                    .birthday-card .party {
                        font-size: 4rem;
                        margin-bottom: 1rem;
                    }
                    .birthday-card h2 {
                        color: #fff;
                        font-family: serif;
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .birthday-card p {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                    }
                "#}
            </style>

            {
                if *overlay_open {
                    html! {
                        <div class="birthday-overlay">
                            <div class="birthday-card-frame">
                                <div class="birthday-card">
                                    <div class="party">{"🎉"}</div>
                                    <h2>{format!("Happy Birthday {}!", config.honoree)}</h2>
                                    <p>{"Wishing you a day filled with joy, love, and blessings!"}</p>
                                    <button class="gold-button" onclick={on_close}>
                                        {"Continue Celebration"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="hero-glow"></div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="eyebrow">{"★ A Golden Celebration of Life"}</div>
                    <h1>
                        {"Honoring a "}<br />
                        <span class="gold-text">{"Golden Soul."}</span>
                    </h1>
                    <p>
                        {format!(
                            "Join us as we celebrate the life and legacy of our dear Father. \
                             A man of immense strength, grace, and eternal wisdom, {}.",
                            BIRTH_NOTE
                        )}
                    </p>
                    <div class="hero-actions">
                        <button class="gold-button" onclick={on_trigger}>
                            {label.text(&config.labels).to_string()}{" ›"}
                        </button>
                        <button class="outline-button" onclick={scroll_with_confetti(Section::Timeline)}>
                            {"See His History"}
                        </button>
                    </div>
                </div>

                <div class="hero-photos">
                    <div class="hero-portrait">
                        <img src={photo("dad1")} alt="Father Profile" />
                    </div>
                    <div class="hero-moment">
                        <img src={photo("dad7")} alt="Father Moment" />
                    </div>
                    <div class="hero-family">
                        <img src={photo("dad2")} alt="Family" />
                    </div>
                </div>
            </div>
        </section>
    }
}
