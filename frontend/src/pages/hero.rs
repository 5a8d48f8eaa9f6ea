use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::scroll::scroll_to;
use crate::content::site;
use crate::reveal::hook::use_reveal;
use crate::reveal::sections;

/// Past this many px of scroll the "discover" hint goes away.
const SCROLL_HINT_LIMIT: f64 = 100.0;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = &site().hero;
    let section_ref = use_node_ref();
    let background_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let text_ref = use_node_ref();
    let cta_ref = use_node_ref();

    use_reveal(
        section_ref.clone(),
        vec![
            background_ref.clone(),
            overlay_ref.clone(),
            text_ref.clone(),
            cta_ref.clone(),
        ],
        sections::hero(),
    );

    let (_, scroll_y) = use_window_scroll();
    let show_scroll_hint = scroll_y <= SCROLL_HINT_LIMIT;

    html! {
        <section ref={section_ref} class="hero-section">
            <div
                ref={background_ref}
                class="hero-background"
                style={format!("background-image: url({});", content.background_image)}
            />
            <div ref={overlay_ref} class="hero-overlay" />

            <div class="hero-content">
                <div ref={text_ref} class="hero-text">
                    <h1 class="hero-title">
                        <span class="hero-title-lead">{&content.title_lead}</span>
                        <span class="hero-title-accent">{&content.title_accent}</span>
                    </h1>
                    <p class="hero-subtitle">{&content.subtitle}</p>
                    <div class="hero-social-proof">
                        <div class="hero-stars">
                            { for (0..5).map(|i| html! {
                                <svg key={i} class="hero-star" viewBox="0 0 20 20">
                                    <path d={STAR_PATH} />
                                </svg>
                            }) }
                        </div>
                        <p>{&content.social_proof}</p>
                    </div>

                    <div ref={cta_ref} class="hero-cta">
                        <button class="hero-primary-btn" onclick={scroll_to("pricing")}>
                            {&content.primary_cta}
                        </button>
                        <button class="hero-secondary-btn" onclick={scroll_to("about")}>
                            {&content.secondary_cta}
                        </button>
                    </div>
                </div>
            </div>

            {
                if show_scroll_hint {
                    html! {
                        <div class="hero-scroll-hint" onclick={scroll_to("about")}>
                            <div class="hero-scroll-label">{&content.scroll_hint}</div>
                            <div class="hero-scroll-chevron">{"⌄"}</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        overflow: hidden;
                        min-height: 100vh;
                        color: #faf8f3;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center center;
                        background-repeat: no-repeat;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(17, 17, 17, 0.4), rgba(17, 17, 17, 0.6), rgba(17, 17, 17, 0.8));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                        text-align: center;
                    }
                    .hero-text {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero-title {
                        font-size: clamp(2.25rem, 7vw, 6rem);
                        font-weight: 300;
                        line-height: 1.1;
                    }
                    .hero-title span {
                        display: block;
                    }
                    .hero-title-accent {
                        color: #d4af37;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.1rem, 2.5vw, 1.8rem);
                        opacity: 0.9;
                        font-weight: 300;
                        max-width: 48rem;
                        margin: 1rem auto;
                    }
                    .hero-social-proof {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .hero-star {
                        width: 1.25rem;
                        height: 1.25rem;
                        fill: #d4af37;
                    }
                    .hero-cta {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding-top: 2rem;
                        align-items: center;
                    }
                    .hero-primary-btn, .hero-secondary-btn {
                        width: 100%;
                        max-width: 24rem;
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-primary-btn {
                        background: linear-gradient(135deg, #d4af37, #f1d67a);
                        color: #111;
                        font-weight: 600;
                        border: none;
                    }
                    .hero-primary-btn:hover {
                        transform: scale(1.05);
                    }
                    .hero-secondary-btn {
                        background: rgba(250, 248, 243, 0.1);
                        color: #faf8f3;
                        border: 2px solid rgba(250, 248, 243, 0.8);
                    }
                    .hero-secondary-btn:hover {
                        background: #faf8f3;
                        color: #111;
                    }
                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        cursor: pointer;
                        text-align: center;
                        opacity: 0.8;
                    }
                    .hero-scroll-chevron {
                        font-size: 1.5rem;
                        animation: hero-bounce 1s infinite;
                    }
                    @keyframes hero-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(25%); }
                    }
                "#}
            </style>
        </section>
    }
}
