use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::booking::on_action;
use crate::content::{site, PricingTier};
use crate::reveal::hook::use_reveal;
use crate::reveal::sections;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let content = &site().pricing;
    let links = &site().links;
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let card_refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        content.tiers.len(),
    );

    let mut targets = vec![title_ref.clone()];
    targets.extend(card_refs.iter().cloned());
    use_reveal(section_ref.clone(), targets, sections::pricing(card_refs.len()));

    let card = |tier: &PricingTier, card_ref: &NodeRef| {
        let button = if tier.bookable {
            html! {
                <button
                    class="outline-button"
                    onclick={on_action::<MouseEvent>(&tier.key, links, &content.package_notice)}
                >
                    {&content.book_label}
                </button>
            }
        } else {
            html! {
                <button class="outline-button" disabled={true}>
                    {&content.unavailable_label}
                </button>
            }
        };

        html! {
            <div
                key={tier.key.clone()}
                ref={card_ref.clone()}
                class={classes!(
                    "pricing-card",
                    tier.featured.then_some("featured"),
                    (!tier.bookable).then_some("unavailable"),
                )}
            >
                {
                    if let Some(badge) = &tier.badge {
                        html! { <div class="pricing-badge">{badge}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="pricing-card-head">
                    <h3>{&tier.name}</h3>
                    <p class="muted">{&tier.sessions}</p>
                </div>
                <div class="pricing-card-price">
                    <div class="pricing-amount">{&tier.price}</div>
                    <div class="muted">{&tier.unit_price}</div>
                </div>
                <ul class="bullet-list pricing-features">
                    { for tier.features.iter().map(|feature| html! {
                        <li><span class="bullet" />{feature}</li>
                    }) }
                </ul>
                {button}
            </div>
        }
    };

    html! {
        <section id="pricing" ref={section_ref} class="pricing-section">
            <div class="pricing-header">
                <h2 ref={title_ref} class="section-title">
                    {&content.heading}
                    <span class="section-title-accent">{&content.heading_accent}</span>
                </h2>
                <p class="section-intro">{&content.intro}</p>
            </div>

            <div class="pricing-banner">
                <h3>{&content.how_it_works}</h3>
                { for content.steps.iter().map(|step| html! {
                    <p><strong>{&step.title}</strong>{" - "}{&step.text}</p>
                }) }
            </div>

            <div class="pricing-cards">
                { for content.tiers.iter().zip(card_refs.iter()).map(|(tier, card_ref)| card(tier, card_ref)) }
            </div>

            <div class="pricing-footer">
                <p class="section-intro">{&content.location_note}</p>
                <button
                    class="gold-button"
                    onclick={on_action::<MouseEvent>("trial", links, &content.package_notice)}
                >
                    {&content.book_label}
                </button>
                <p class="muted">{&content.footnote}</p>
            </div>

            <style>
                {r#"
                    .pricing-section {
                        padding: 5rem 1.5rem;
                    }
                    .pricing-header, .pricing-footer {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .pricing-footer {
                        margin: 4rem 0 0;
                    }
                    .pricing-banner {
                        max-width: 56rem;
                        margin: 0 auto 3rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        line-height: 1.7;
                    }
                    .pricing-banner h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .pricing-cards {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 1024px) {
                        .pricing-cards {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .pricing-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    }
                    .pricing-card.featured {
                        border: 2px solid #d4af37;
                    }
                    .pricing-card.unavailable > * {
                        opacity: 0.75;
                    }
                    .pricing-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #d4af37;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .pricing-card-head, .pricing-card-price {
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .pricing-card-head h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .pricing-amount {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .pricing-features {
                        flex-grow: 1;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
        </section>
    }
}
