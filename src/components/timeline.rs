use yew::prelude::*;

use crate::content::MILESTONES;
use crate::sections::Section;

#[function_component(Timeline)]
pub fn timeline() -> Html {
    html! {
        <section id={Section::Timeline.id()} class="timeline">
            <div class="section-inner narrow">
                <div class="section-heading">
                    <div class="eyebrow">{"A Life's Journey"}</div>
                    <h2 class="gold-text">{"Timeline of Greatness"}</h2>
                </div>
                <div class="timeline-track">
                    { for MILESTONES.iter().map(|m| html! {
                        <div class="timeline-entry">
                            <div class="timeline-dot"></div>
                            <div class="card">
                                <div class="timeline-year">{m.year}</div>
                                <h4>{m.title}</h4>
                                <p>{m.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
