use yew::prelude::*;

use crate::confetti::confetti_click;
use crate::content::WISDOM;
use crate::sections::Section;

#[function_component(WisdomVault)]
pub fn wisdom_vault() -> Html {
    html! {
        <section id={Section::Wisdom.id()} class="wisdom">
            <div class="section-inner">
                <div class="wisdom-heading">
                    <div>
                        <div class="eyebrow">{"Golden Advice"}</div>
                        <h2 class="gold-text">{"The Wisdom Vault"}</h2>
                    </div>
                    <p>{"Timeless principles and lessons passed down through sixty-three golden years."}</p>
                </div>
                <div class="wisdom-grid">
                    { for WISDOM.iter().map(|w| html! {
                        <div class="card wisdom-card" onclick={confetti_click()}>
                            <div class="wisdom-icon">{"💡"}</div>
                            <div class="wisdom-category">{w.category}</div>
                            <p class="wisdom-text">{format!("\"{}\"", w.text)}</p>
                            <div class="wisdom-reference">{w.reference}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
