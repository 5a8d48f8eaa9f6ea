use yew::prelude::*;

use crate::components::scroll::scroll_to;
use crate::content::site;
use crate::reveal::hook::use_reveal;
use crate::reveal::sections;

#[function_component(About)]
pub fn about() -> Html {
    let content = &site().about;
    let section_ref = use_node_ref();
    let text_ref = use_node_ref();
    let video_ref = use_node_ref();

    use_reveal(
        section_ref.clone(),
        vec![text_ref.clone(), video_ref.clone()],
        sections::about(),
    );

    html! {
        <section id="about" ref={section_ref} class="about-section">
            <div class="about-grid">
                <div ref={text_ref} class="about-text">
                    <h2 class="section-title">
                        {&content.heading}
                        <span class="section-title-accent">{&content.heading_accent}</span>
                    </h2>
                    <div class="about-paragraphs">
                        { for content.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                    </div>

                    <h3 class="about-offer-heading">{&content.offer_heading}</h3>
                    <ul class="bullet-list">
                        { for content.offers.iter().map(|offer| html! {
                            <li><span class="bullet" />{offer}</li>
                        }) }
                    </ul>

                    <button class="gold-button" onclick={scroll_to("pricing")}>
                        {&content.cta}
                    </button>
                </div>

                <div ref={video_ref} class="about-video">
                    <div class="about-video-frame">
                        <iframe
                            src={content.video_url.clone()}
                            title={content.video_title.clone()}
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        />
                    </div>
                    <p class="about-video-caption">{&content.video_caption}</p>
                </div>
            </div>

            <style>
                {r#"
                    .about-section {
                        padding: 5rem 1.5rem;
                        background: #faf8f3;
                    }
                    .about-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 5rem;
                        }
                    }
                    .about-paragraphs p {
                        font-size: 1.1rem;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .about-offer-heading {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 1.5rem 0 0.75rem;
                    }
                    .about-video {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .about-video-frame {
                        width: 100%;
                        max-width: 24rem;
                        aspect-ratio: 9 / 16;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #111;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .about-video-frame iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                    }
                    .about-video-caption {
                        margin-top: 1rem;
                        font-style: italic;
                        font-size: 0.875rem;
                        color: #6b6b6b;
                    }
                "#}
            </style>
        </section>
    }
}
