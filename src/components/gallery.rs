use yew::prelude::*;

use crate::content::{marquee, photo, GALLERY_ROW_ONE, GALLERY_ROW_TWO};
use crate::sections::Section;

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    images: &'static [&'static str],
    direction: &'static str,
}

#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    html! {
        <div class="marquee">
            <div class={classes!("marquee-track", props.direction)}>
                { for marquee(props.images).into_iter().enumerate().map(|(i, name)| html! {
                    <div class="marquee-tile">
                        <img src={photo(name)} alt={format!("Memory {}", i)} />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id={Section::Gallery.id()} class="gallery">
            <div class="section-heading">
                <div class="eyebrow">{"Visual Legacy"}</div>
                <h2 class="gold-text">{"A Lifetime Captured"}</h2>
            </div>
            <MarqueeRow images={GALLERY_ROW_ONE} direction="ltr" />
            <MarqueeRow images={GALLERY_ROW_TWO} direction="rtl" />
        </section>
    }
}
