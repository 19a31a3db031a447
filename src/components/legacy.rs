use yew::prelude::*;

use crate::confetti::confetti_click;
use crate::content::{photo, ACHIEVEMENTS, MILESTONE_ORDINAL, VIRTUES};
use crate::sections::Section;

#[function_component(Legacy)]
pub fn legacy() -> Html {
    html! {
        <section id={Section::About.id()} class="legacy">
            <div class="section-inner">
                <div class="legacy-grid">
                    <div class="legacy-photo">
                        <div class="legacy-frame">
                            <img src={photo("dad1")} alt="About Dad" />
                            <div class="legacy-award" onclick={confetti_click()}>{"🏅"}</div>
                        </div>
                        <div class="legacy-badge" onclick={confetti_click()}>
                            <div class="badge-value">{MILESTONE_ORDINAL}</div>
                            <div class="badge-label">{"Milestone Birthday"}</div>
                        </div>
                    </div>

                    <div class="legacy-copy">
                        <div class="eyebrow rule">{"The Hero"}</div>
                        <h2 class="gold-text">
                            {"A Life Defined "}<br />{"by Pure Excellence."}
                        </h2>
                        <p>
                            {"Our Father is the foundation of every success we share. \
                              His story is one of absolute perseverance and a kind of love that defines our family."}
                        </p>
                        <div class="virtues">
                            { for VIRTUES.iter().map(|virtue| html! {
                                <div class="card virtue" onclick={confetti_click()}>
                                    <div class="virtue-icon">{"★"}</div>
                                    <h4>{virtue.title}</h4>
                                    <p>{virtue.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="achievements">
                    { for ACHIEVEMENTS.iter().map(|item| html! {
                        <div class="card achievement" key={item.label} onclick={confetti_click()}>
                            <div class="achievement-value">{item.value}</div>
                            <div class="achievement-label">{item.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
