use yew::prelude::*;

use crate::confetti::confetti_click;
use crate::content::TRIBUTES;
use crate::sections::Section;

const STARS: usize = 5;

fn star_rating() -> String {
    "★".repeat(STARS)
}

#[function_component(Tributes)]
pub fn tributes() -> Html {
    let stars = star_rating();

    html! {
        <section id={Section::Tributes.id()} class="tributes">
            <div class="section-inner tributes-grid">
                <div class="tributes-intro">
                    <div class="eyebrow">{"The Guest Book"}</div>
                    <h2 class="gold-text">{"Messages of Love"}</h2>
                    <p>{"Heartfelt messages from the people whose lives he has touched the most over the years."}</p>
                    <div class="tributes-quote" onclick={confetti_click()}>{"❝"}</div>
                </div>

                <div class="tribute-cards">
                    { for TRIBUTES.iter().map(|tribute| html! {
                        <div class="card tribute" key={tribute.name} onclick={confetti_click()}>
                            <div class="tribute-stars">{stars.clone()}</div>
                            <p class="tribute-message">{format!("\"{}\"", tribute.message)}</p>
                            <div class="tribute-author">
                                <div class="tribute-avatar">{tribute.initial()}</div>
                                <div>
                                    <div class="tribute-name">{tribute.name}</div>
                                    <div class="tribute-relation">{tribute.relation}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tribute_gets_five_stars() {
        assert_eq!(star_rating(), "★★★★★");
    }
}
