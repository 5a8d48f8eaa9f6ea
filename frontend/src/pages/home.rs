use yew::prelude::*;

use crate::pages::{about::About, contact::Contact, hero::Hero, pricing::Pricing};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="piano-page">
            <Hero />
            <About />
            <Pricing />
            <Contact />
            <style>
                {r#"
                    .piano-page {
                        overflow-x: hidden;
                        font-family: "Poppins", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        color: #111;
                        background: #fff;
                    }
                    .piano-page * {
                        box-sizing: border-box;
                    }
                    .section-title {
                        font-size: clamp(1.9rem, 5vw, 3.75rem);
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .section-title-accent {
                        display: block;
                        color: #d4af37;
                    }
                    .section-intro {
                        max-width: 42rem;
                        margin: 1rem auto 0;
                        font-size: 1.1rem;
                        color: #6b6b6b;
                    }
                    .muted {
                        color: #6b6b6b;
                    }
                    .bullet-list {
                        list-style: none;
                        padding: 0;
                    }
                    .bullet-list li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .bullet {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #d4af37;
                        flex-shrink: 0;
                    }
                    .gold-button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, #d4af37, #f1d67a);
                        color: #111;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .gold-button:hover {
                        transform: scale(1.05);
                    }
                    .outline-button {
                        width: 100%;
                        padding: 0.75rem;
                        border: 2px solid #111;
                        border-radius: 0.5rem;
                        background: transparent;
                        color: #111;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .outline-button:hover:not(:disabled) {
                        background: #111;
                        color: #faf8f3;
                    }
                    .outline-button:disabled {
                        border-color: #e5e5e5;
                        color: #6b6b6b;
                        cursor: not-allowed;
                    }
                "#}
            </style>
        </main>
    }
}
