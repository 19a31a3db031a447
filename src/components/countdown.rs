use yew::prelude::*;

use crate::clock::{BrowserScheduler, LocalClock};
use crate::config::CelebrationConfig;
use crate::content::CELEBRATION_TITLE;
use crate::countdown::{AnnualTarget, CountdownTicker};
use crate::sections::Section;

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let config = use_context::<CelebrationConfig>().unwrap_or_default();
    let target = AnnualTarget::new(config.target_month, config.target_day);
    let remaining = use_state(move || CountdownTicker::new(LocalClock, target).current());

    {
        let remaining = remaining.setter();
        use_effect_with_deps(
            move |(target, period_ms)| {
                let interval = CountdownTicker::new(LocalClock, *target)
                    .start(&BrowserScheduler, *period_ms, move |breakdown| remaining.set(breakdown));
                move || drop(interval)
            },
            (target, config.tick_interval_ms),
        );
    }

    html! {
        <div id={Section::Countdown.id()} class="countdown">
            <div class="countdown-panel">
                <div class="countdown-heading">
                    <h3>{"Counting Down To"}</h3>
                    <p>{CELEBRATION_TITLE}</p>
                </div>
                <div class="countdown-cells">
                    { for remaining.cells().into_iter().map(|(label, value)| html! {
                        <div class="countdown-cell" key={label}>
                            <div class="countdown-value">{value}</div>
                            <div class="countdown-label">{label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
