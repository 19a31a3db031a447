use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use gloo_timers::callback::Timeout;

mod browser;
mod clock;
mod config;
mod confetti;
mod content;
mod countdown;
mod error;
mod reveal;
mod sections;
mod pages {
    pub mod home;
}
mod components {
    pub mod countdown;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod legacy;
    pub mod milestone;
    pub mod timeline;
    pub mod tributes;
    pub mod wisdom;
}

use config::CelebrationConfig;
use confetti::{scroll_with_confetti, trigger_confetti, CONFETTI_STYLES};
use pages::home::Home;
use sections::Section;

// Delay between the "See More" confetti and the scroll.
const SEE_MORE_DELAY_MS: u32 = 100;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            trigger_confetti();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            let scroll = scroll_with_confetti(section);
            Callback::from(move |e: MouseEvent| {
                scroll.emit(e);
                menu_open.set(false);
            })
        }
    };

    let see_more = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            trigger_confetti();
            menu_open.set(false);
            Timeout::new(SEE_MORE_DELAY_MS, || browser::scroll_to(Section::About)).forget();
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-brand" onclick={go_to(Section::Hero)}>
                    <span class="brand-mark">{"♥"}</span>
                    <span class="brand-text">{"Happy "}<span class="gold">{"Birthday"}</span></span>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                <div class="nav-links">
                    { for Section::NAV.iter().map(|&section| html! {
                        <button class="nav-link" onclick={go_to(section)}>
                            {section.nav_label()}
                        </button>
                    }) }
                </div>

                <button class="see-more-button" onclick={see_more.clone()}>
                    {"See More ★"}
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::NAV.iter().map(|&section| html! {
                                <button class="mobile-link" onclick={go_to(section)}>
                                    {section.nav_label()}
                                </button>
                            }) }
                            <button class="mobile-see-more" onclick={see_more}>
                                {"See More"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| CelebrationConfig::load(), ());

    html! {
        <ContextProvider<CelebrationConfig> context={(*config).clone()}>
            <style>{CONFETTI_STYLES}</style>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<CelebrationConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting celebration page");
    yew::Renderer::<App>::new().render();
}
