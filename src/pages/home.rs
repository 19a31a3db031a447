use yew::prelude::*;

use crate::components::{
    countdown::Countdown,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    legacy::Legacy,
    milestone::MilestoneReflection,
    timeline::Timeline,
    tributes::Tributes,
    wisdom::WisdomVault,
};

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="celebration-page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    ::selection { background: #B8860B; color: #000; }
                    section, .countdown { scroll-margin-top: 6rem; }
                    button { font: inherit; cursor: pointer; }

                    .gold { color: #B8860B; }
                    .gold-text {
                        background: linear-gradient(90deg, #B8860B, #F4D03F, #B8860B);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .eyebrow {
                        color: #B8860B;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .eyebrow.wide { letter-spacing: 0.4em; }
                    .eyebrow.rule::before {
                        content: '';
                        display: inline-block;
                        width: 4rem;
                        height: 2px;
                        margin-right: 0.75rem;
                        vertical-align: middle;
                        background: #B8860B;
                    }
                    .section-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .section-inner.narrow { max-width: 64rem; }
                    .section-heading { text-align: center; margin-bottom: 5rem; }
                    h2 { font-family: serif; font-weight: 900; font-size: clamp(2rem, 5vw, 3.75rem); margin: 0; }

                    .card {
                        background: #111;
                        border: 1px solid rgba(184, 134, 11, 0.2);
                        border-radius: 2rem;
                        padding: 2.5rem;
                        transition: all 0.5s ease;
                        cursor: pointer;
                    }
                    .card:hover { border-color: rgba(184, 134, 11, 0.6); }

                    .gold-button {
                        background: #B8860B;
                        color: #000;
                        border: none;
                        border-radius: 999px;
                        padding: 1rem 2rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        box-shadow: 0 10px 25px rgba(184, 134, 11, 0.3);
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .gold-button:hover { background: #C5A028; transform: scale(1.05); }
                    .gold-button:active { transform: scale(0.95); }
                    .outline-button {
                        background: transparent;
                        color: #B8860B;
                        border: 1px solid rgba(184, 134, 11, 0.4);
                        border-radius: 999px;
                        padding: 1rem 2rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .outline-button:hover { background: rgba(184, 134, 11, 0.1); transform: scale(1.05); }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.95);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(184, 134, 11, 0.3);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-brand { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; }
                    .brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        background: #B8860B;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brand-text { font-family: serif; font-weight: 700; font-size: 1.25rem; }
                    .nav-brand.large .brand-text { font-size: 2.25rem; }
                    .nav-brand.large .brand-mark { width: 3.5rem; height: 3.5rem; font-size: 1.75rem; }
                    .nav-links { display: flex; gap: 2rem; }
                    .nav-link, .mobile-link {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .mobile-link:hover { color: #B8860B; }
                    .see-more-button {
                        background: #B8860B;
                        color: #000;
                        border: none;
                        border-radius: 999px;
                        padding: 0.6rem 1.5rem;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }
                    .burger-menu { display: none; background: none; border: none; color: #B8860B; font-size: 1.5rem; }
                    .mobile-menu { padding: 1.5rem; border-top: 1px solid rgba(184, 134, 11, 0.2); background: #000; }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.75rem 0;
                        font-size: 1.125rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .mobile-see-more {
                        width: 100%;
                        margin-top: 1rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 999px;
                        background: #B8860B;
                        color: #000;
                        font-weight: 700;
                    }

                    .hero { position: relative; overflow: hidden; padding: 10rem 1.5rem 6rem; }
                    .hero-glow {
                        position: absolute;
                        top: -16rem;
                        right: -16rem;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        background: rgba(184, 134, 11, 0.1);
                        filter: blur(120px);
                    }
                    .hero-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-copy { position: relative; z-index: 10; }
                    .hero-copy h1 { font-family: serif; font-weight: 800; font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; margin: 0 0 1.5rem; }
                    .hero-copy p { color: #d1d5db; font-size: 1.25rem; line-height: 1.7; max-width: 32rem; }
                    .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem; }
                    .hero-photos { position: relative; }
                    .hero-photos img { width: 100%; height: 100%; object-fit: cover; display: block; }
                    .hero-portrait {
                        position: relative;
                        z-index: 10;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        border: 8px solid rgba(255, 255, 255, 0.05);
                        transform: rotate(2deg);
                        aspect-ratio: 4 / 5;
                    }
                    .hero-moment, .hero-family {
                        position: absolute;
                        z-index: 20;
                        overflow: hidden;
                        border: 4px solid #B8860B;
                    }
                    .hero-moment { bottom: -2.5rem; left: -2.5rem; width: 14rem; height: 14rem; border-radius: 1rem; transform: rotate(-6deg); }
                    .hero-family { top: -1.5rem; right: -1.5rem; width: 10rem; height: 10rem; border-radius: 50%; }

                    .countdown { position: relative; z-index: 30; max-width: 80rem; margin: -3rem auto 5rem; padding: 0 1.5rem; }
                    .countdown-panel {
                        background: #111;
                        border: 1px solid rgba(184, 134, 11, 0.4);
                        border-radius: 2.5rem;
                        padding: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        flex-wrap: wrap;
                    }
                    .countdown-heading h3 { font-family: serif; font-size: 1.875rem; margin: 0 0 0.5rem; }
                    .countdown-heading p { color: #B8860B; margin: 0; }
                    .countdown-cells { display: grid; grid-template-columns: repeat(4, 1fr); gap: 3.5rem; }
                    .countdown-cell { text-align: center; }
                    .countdown-value { font-size: clamp(1.875rem, 6vw, 4.5rem); font-weight: 900; }
                    .countdown-label, .achievement-label {
                        color: #B8860B;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .legacy, .timeline, .wisdom, .tributes, .gallery { padding: 8rem 0; }
                    .wisdom { background: #050505; }
                    .tributes { background: #080808; }
                    .legacy-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6rem; align-items: center; }
                    .legacy-photo { position: relative; }
                    .legacy-frame { position: relative; border-radius: 3rem; overflow: hidden; border: 1px solid rgba(184, 134, 11, 0.4); }
                    .legacy-frame img { width: 100%; display: block; object-fit: cover; }
                    .legacy-award {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                        background: #B8860B;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        font-size: 1.5rem;
                    }
                    .legacy-badge {
                        position: absolute;
                        bottom: -3rem;
                        right: -2rem;
                        width: 18rem;
                        background: #111;
                        border: 1px solid rgba(184, 134, 11, 0.4);
                        border-radius: 2.5rem;
                        padding: 2.5rem;
                        cursor: pointer;
                    }
                    .badge-value { color: #B8860B; font-size: 3rem; font-weight: 900; }
                    .badge-label { color: #6b7280; font-size: 0.875rem; font-weight: 700; text-transform: uppercase; }
                    .legacy-copy p { color: #d1d5db; font-size: 1.25rem; line-height: 1.7; font-weight: 300; }
                    .virtues { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 2rem; }
                    .virtue-icon { color: #B8860B; font-size: 1.75rem; }
                    .virtue h4 { font-size: 1.5rem; margin: 1rem 0 0.5rem; }
                    .virtue p { color: #6b7280; font-size: 1rem; }
                    .achievements { margin-top: 10rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2.5rem; }
                    .achievement { text-align: center; }
                    .achievement:hover { transform: translateY(-0.5rem); }
                    .achievement-value { font-size: clamp(1.875rem, 5vw, 3.75rem); font-weight: 900; margin-bottom: 0.75rem; }

                    .timeline-track { position: relative; border-left: 2px solid rgba(184, 134, 11, 0.4); max-width: 42rem; margin: 0 auto; }
                    .timeline-entry { position: relative; margin: 0 0 4rem 3rem; }
                    .timeline-dot {
                        position: absolute;
                        left: -3.45rem;
                        top: 0;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: #000;
                        border: 2px solid #B8860B;
                        box-shadow: 0 0 20px #B8860B;
                    }
                    .timeline-year { color: #B8860B; font-weight: 900; font-size: 1.875rem; }
                    .timeline-entry h4 { font-family: serif; font-size: 1.5rem; margin: 0.25rem 0 0.75rem; }
                    .timeline-entry p { color: #9ca3af; font-size: 1.125rem; line-height: 1.7; margin: 0; }

                    @keyframes marquee-ltr {
                        from { transform: translateX(-33.333%); }
                        to { transform: translateX(0); }
                    }
                    @keyframes marquee-rtl {
                        from { transform: translateX(0); }
                        to { transform: translateX(-33.333%); }
                    }
                    .gallery { overflow: hidden; }
                    .marquee { display: flex; overflow: hidden; }
                    .marquee-track { display: flex; white-space: nowrap; }
                    .marquee-track.ltr { animation: marquee-ltr 40s linear infinite; }
                    .marquee-track.rtl { animation: marquee-rtl 40s linear infinite; }
                    .marquee-tile { flex-shrink: 0; width: 24rem; height: 24rem; overflow: hidden; }
                    .marquee-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border: 1px solid rgba(184, 134, 11, 0.1);
                        transition: border-color 0.7s ease;
                    }
                    .marquee-tile img:hover { border-color: rgba(184, 134, 11, 0.4); }

                    .wisdom-heading { display: flex; justify-content: space-between; align-items: flex-end; gap: 2rem; margin-bottom: 6rem; }
                    .wisdom-heading p { color: #9ca3af; max-width: 24rem; font-size: 1.125rem; }
                    .wisdom-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .wisdom-card:hover { background: #B8860B; color: #000; }
                    .wisdom-icon { font-size: 2.5rem; margin-bottom: 2rem; }
                    .wisdom-category { color: #B8860B; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 1rem; }
                    .wisdom-card:hover .wisdom-category, .wisdom-card:hover .wisdom-text { color: #000; }
                    .wisdom-text { color: #e5e7eb; font-family: serif; font-style: italic; font-size: 1.25rem; line-height: 1.7; }
                    .wisdom-reference { color: #6b7280; font-size: 0.875rem; margin-top: 1rem; }

                    .reflection { position: relative; height: 800px; display: flex; align-items: center; overflow: hidden; cursor: pointer; }
                    .reflection-backdrop { position: absolute; inset: 0; }
                    .reflection-backdrop img { width: 100%; height: 100%; object-fit: cover; opacity: 0.5; transition: transform 10s ease; }
                    .reflection-backdrop img:hover { transform: scale(1.1); }
                    .reflection-shade-side { position: absolute; inset: 0; background: linear-gradient(90deg, #000, rgba(0, 0, 0, 0.9), transparent); }
                    .reflection-shade-vertical { position: absolute; inset: 0; background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), transparent, rgba(0, 0, 0, 0.6)); }
                    .reflection-copy { position: relative; z-index: 10; max-width: 48rem; margin: 0 auto 0 max(3rem, calc((100vw - 80rem) / 2 + 3rem)); }
                    .reflection-copy h2 { color: #fff; font-size: clamp(2.5rem, 7vw, 6rem); line-height: 1.1; }
                    .reflection-rule { height: 0.5rem; width: 12rem; background: #B8860B; border-radius: 999px; margin: 3rem 0; box-shadow: 0 0 30px rgba(184, 134, 11, 0.5); }
                    .reflection-lead { color: #e5e7eb; font-family: serif; font-weight: 300; font-size: clamp(1.125rem, 2.5vw, 1.875rem); line-height: 1.6; }
                    .reflection-quote { color: #9ca3af; font-family: serif; font-style: italic; font-size: 1.25rem; border-left: 4px solid #B8860B; padding: 0.5rem 0 0.5rem 1.5rem; opacity: 0.8; }

                    .tributes-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 6rem; align-items: start; }
                    .tributes-intro p { color: #9ca3af; font-size: 1.25rem; font-weight: 300; }
                    .tributes-quote {
                        margin-top: 1.5rem;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        background: #B8860B;
                        color: #000;
                        font-size: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    .tribute-cards { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .tribute { border-radius: 3.5rem; padding: 3.5rem; }
                    .tribute-stars { color: #B8860B; letter-spacing: 0.25rem; }
                    .tribute-message { color: #e5e7eb; font-family: serif; font-style: italic; font-size: 1.5rem; line-height: 1.6; }
                    .tribute-author { display: flex; align-items: center; gap: 1.25rem; padding-top: 1rem; }
                    .tribute-avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: #B8860B;
                        color: #000;
                        font-weight: 900;
                        font-size: 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.3s ease;
                    }
                    .tribute:hover .tribute-avatar { transform: scale(1.1); }
                    .tribute-name { font-weight: 700; font-size: 1.25rem; }
                    .tribute-relation { color: #B8860B; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em; }

                    .footer { padding: 8rem 0; border-top: 1px solid rgba(184, 134, 11, 0.3); }
                    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 4rem; }
                    .footer-brand p { color: #6b7280; font-size: 1.25rem; line-height: 1.7; max-width: 24rem; font-weight: 300; }
                    .footer-icons { display: flex; gap: 1.5rem; }
                    .icon-button {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 1.25rem;
                        transition: background 0.2s ease;
                    }
                    .icon-button:hover { background: #B8860B; color: #000; }
                    .footer h4 { font-family: serif; font-size: 1.5rem; }
                    .footer-links { list-style: none; padding: 0; }
                    .footer-links li { margin-bottom: 1.5rem; }
                    .footer-links button { background: none; border: none; color: #9ca3af; font-size: 1.25rem; font-weight: 300; }
                    .footer-links button:hover { color: #B8860B; }
                    .footer-contact { color: #9ca3af; font-size: 1.25rem; font-weight: 300; display: grid; gap: 1.5rem; }
                    .footer-date { color: #fff; text-decoration: underline; text-decoration-color: #B8860B; text-decoration-thickness: 2px; }
                    .footer-copyright {
                        margin: 6rem auto 0;
                        padding-top: 2.5rem;
                        max-width: 80rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        text-align: center;
                        color: #4b5563;
                        letter-spacing: 0.2em;
                    }

                    @media (max-width: 1024px) {
                        .nav-links, .see-more-button { display: none; }
                        .burger-menu { display: block; }
                        .hero-grid, .legacy-grid, .tributes-grid { grid-template-columns: 1fr; }
                        .hero-copy { text-align: center; }
                        .hero-actions { justify-content: center; }
                        .hero-moment, .hero-family { display: none; }
                        .achievements { grid-template-columns: 1fr 1fr; }
                        .wisdom-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (max-width: 768px) {
                        .hero { padding-top: 7rem; }
                        .countdown-panel { padding: 1.5rem; border-radius: 1.5rem; }
                        .countdown-cells { gap: 1rem; }
                        .virtues, .tribute-cards, .wisdom-grid { grid-template-columns: 1fr; }
                        .wisdom-heading { flex-direction: column; align-items: center; text-align: center; }
                        .footer-grid { grid-template-columns: 1fr; text-align: center; }
                        .footer-icons, .nav-brand.large { justify-content: center; }
                        .marquee-tile { width: 14rem; height: 14rem; }
                        .reflection { height: 650px; }
                    }
                "#}
            </style>
            <main>
                <Hero />
                <Countdown />
                <Legacy />
                <Timeline />
                <Gallery />
                <WisdomVault />
                <MilestoneReflection />
                <Tributes />
            </main>
            <Footer />
        </div>
    }
}
