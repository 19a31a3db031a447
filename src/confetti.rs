//! Decorative confetti. Pieces are plain `div`s animated by the
//! `confetti-fly` keyframes in [`CONFETTI_STYLES`] and removed once their
//! animation is over.

use gloo_timers::callback::{Interval, Timeout};
use web_sys::window;
use yew::{Callback, MouseEvent};

use crate::browser;
use crate::sections::Section;

const GOLD_PALETTE: &[&str] = &["#B8860B", "#F4D03F", "#7A5C12", "#FFFFFF", "#FFD700"];
const PARTY_PALETTE: &[&str] = &["#B8860B", "#F4D03F", "#FFD700", "#FFFFFF", "#FF6B6B", "#45B7D1"];

const STREAM_DURATION_MS: u32 = 3000;
const STREAM_PERIOD_MS: u32 = 50;
const STREAM_BATCH: usize = 5;
const BIRTHDAY_PIECES: usize = 200;

pub const CONFETTI_STYLES: &str = r#"
    @keyframes confetti-fly {
        from {
            transform: translate(0, 0) rotate(0deg);
            opacity: 1;
        }
        to {
            transform: translate(var(--dx), var(--dy)) rotate(var(--spin));
            opacity: 0;
        }
    }
    .confetti-piece {
        position: fixed;
        pointer-events: none;
        animation-name: confetti-fly;
        animation-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
        animation-fill-mode: forwards;
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Burst {
    /// Rises from the bottom edge. Used for every click on the page.
    Rising,
    /// Falls from the top edge. Used once when the present is unveiled.
    Falling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub burst: Burst,
    pub size_px: f64,
    pub color: &'static str,
    pub left_vw: f64,
    pub round: bool,
    pub tilt_deg: f64,
    pub dx_px: f64,
    pub dy_vh: f64,
    pub spin_deg: f64,
    pub duration_ms: u32,
}

impl ConfettiPiece {
    /// Draws a piece from `random`, which yields values in `[0, 1)`.
    pub fn draw(burst: Burst, random: &mut impl FnMut() -> f64) -> Self {
        let palette = match burst {
            Burst::Rising => GOLD_PALETTE,
            Burst::Falling => PARTY_PALETTE,
        };
        let color = palette[((random() * palette.len() as f64) as usize).min(palette.len() - 1)];

        match burst {
            Burst::Rising => Self {
                burst,
                size_px: random() * 10.0 + 5.0,
                color,
                left_vw: random() * 100.0,
                round: random() > 0.5,
                tilt_deg: random() * 360.0,
                dx_px: (random() - 0.5) * 400.0,
                dy_vh: -100.0 - random() * 100.0,
                spin_deg: random() * 1000.0,
                duration_ms: (1500.0 + random() * 1500.0) as u32,
            },
            Burst::Falling => Self {
                burst,
                size_px: random() * 12.0 + 8.0,
                color,
                left_vw: random() * 100.0,
                round: random() > 0.5,
                tilt_deg: random() * 360.0,
                dx_px: (random() - 0.5) * 300.0,
                dy_vh: 100.0 + random() * 100.0,
                spin_deg: random() * 720.0,
                duration_ms: (2000.0 + random() * 2000.0) as u32,
            },
        }
    }

    pub fn style(&self) -> String {
        let (edge, z_index, corner) = match self.burst {
            Burst::Rising => ("bottom", 9999, "2px"),
            Burst::Falling => ("top", 99999, "3px"),
        };
        format!(
            "width: {size:.1}px; height: {size:.1}px; background-color: {color}; {edge}: -20px; \
             left: {left:.2}vw; z-index: {z_index}; border-radius: {radius}; \
             transform: rotate({tilt:.0}deg); animation-duration: {duration}ms; \
             --dx: {dx:.1}px; --dy: {dy:.1}vh; --spin: {spin:.0}deg;",
            size = self.size_px,
            color = self.color,
            left = self.left_vw,
            radius = if self.round { "50%" } else { corner },
            tilt = self.tilt_deg,
            duration = self.duration_ms,
            dx = self.dx_px,
            dy = self.dy_vh,
            spin = self.spin_deg,
        )
    }
}

/// Styles a piece, then puts it on the page. A piece whose style could not
/// be set is never appended.
fn attach<E>(
    set_style: impl FnOnce() -> Result<(), E>,
    append: impl FnOnce() -> Result<(), E>,
) -> bool {
    set_style().is_ok() && append().is_ok()
}

fn spawn(burst: Burst) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("div") else {
        return;
    };

    let piece = ConfettiPiece::draw(burst, &mut js_sys::Math::random);
    element.set_class_name("confetti-piece");
    let attached = attach(
        || element.set_attribute("style", &piece.style()),
        || body.append_child(&element).map(drop),
    );
    if !attached {
        return;
    }

    Timeout::new(piece.duration_ms, move || element.remove()).forget();
}

/// Streams rising confetti in small batches for a few seconds.
pub fn trigger_confetti() {
    let interval = Interval::new(STREAM_PERIOD_MS, || {
        for _ in 0..STREAM_BATCH {
            spawn(Burst::Rising);
        }
    });
    Timeout::new(STREAM_DURATION_MS, move || drop(interval)).forget();
}

/// Drops a single heavy shower of party confetti from the top of the page.
pub fn birthday_confetti() {
    for _ in 0..BIRTHDAY_PIECES {
        spawn(Burst::Falling);
    }
}

/// Click handler for decorative cards: confetti and nothing else.
pub fn confetti_click() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| trigger_confetti())
}

pub fn scroll_with_confetti(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        trigger_confetti();
        browser::scroll_to(section);
    })
}
