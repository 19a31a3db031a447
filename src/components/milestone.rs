use yew::prelude::*;

use crate::confetti::confetti_click;
use crate::content::photo;
use crate::sections::Section;

#[function_component(MilestoneReflection)]
pub fn milestone_reflection() -> Html {
    html! {
        <section id={Section::MilestoneReflection.id()} class="reflection" onclick={confetti_click()}>
            <div class="reflection-backdrop">
                <img src={photo("dad5")} alt="Sophisticated celebration background" />
                <div class="reflection-shade-side"></div>
                <div class="reflection-shade-vertical"></div>
            </div>

            <div class="reflection-copy">
                <div class="eyebrow wide">{"★ Milestone Reflection"}</div>
                <h2>
                    {"Honoring the Best "}<br />
                    <span class="gold-text">{"of the Best."}</span>
                </h2>
                <div class="reflection-rule"></div>
                <p class="reflection-lead">
                    {"His life is a beacon of light for all of us. Sixty-three golden years \
                      of wisdom, laughter, and a legacy that continues to grow brighter \
                      with every passing day."}
                </p>
                <p class="reflection-quote">
                    {"\"A father's legacy is the path he clears for his children, \
                      built on a foundation of unyielding love and quiet strength.\""}
                </p>
            </div>
        </section>
    }
}
