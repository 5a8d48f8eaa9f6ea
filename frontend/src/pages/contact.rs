use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::booking::on_action;
use crate::content::site;
use crate::reveal::hook::use_reveal;
use crate::reveal::sections;

const PHONE_ICON: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const MAIL_ICON: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const CHAT_ICON: &str = "M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z";

#[derive(Properties, PartialEq)]
struct MethodCardProps {
    action: &'static str,
    icon: &'static str,
    label: String,
    detail: String,
}

#[function_component(MethodCard)]
fn method_card(props: &MethodCardProps) -> Html {
    let links = &site().links;
    html! {
        <div
            class="contact-card"
            onclick={on_action::<MouseEvent>(props.action, links, &links.fallback_notice)}
        >
            <div class="contact-card-icon">
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={props.icon} />
                </svg>
            </div>
            <h3>{&props.label}</h3>
            <p class="muted">{&props.detail}</p>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let content = &site().contact;
    let links = &site().links;
    let section_ref = use_node_ref();
    let blocks = [
        use_node_ref(),
        use_node_ref(),
        use_node_ref(),
        use_node_ref(),
    ];
    let [heading_ref, methods_ref, cta_ref, footer_ref] = blocks.clone();

    use_reveal(
        section_ref.clone(),
        blocks.to_vec(),
        sections::contact(blocks.len()),
    );

    html! {
        <section id="contact" ref={section_ref} class="contact-section">
            <div class="contact-column">
                <div ref={heading_ref}>
                    <h2 class="section-title">
                        {&content.heading}
                        <span class="section-title-accent">{&content.heading_accent}</span>
                    </h2>
                    <p class="section-intro">{&content.intro}</p>
                </div>

                <div ref={methods_ref} class="contact-methods">
                    <MethodCard
                        action="phone"
                        icon={PHONE_ICON}
                        label={content.phone_label.clone()}
                        detail={content.phone_display.clone()}
                    />
                    <MethodCard
                        action="email"
                        icon={MAIL_ICON}
                        label={content.email_label.clone()}
                        detail={content.email_display.clone()}
                    />
                    <MethodCard
                        action="whatsapp"
                        icon={CHAT_ICON}
                        label={content.whatsapp_label.clone()}
                        detail={content.whatsapp_hint.clone()}
                    />
                </div>

                <div ref={cta_ref}>
                    <button
                        class="gold-button"
                        onclick={on_action::<MouseEvent>("book", links, &links.fallback_notice)}
                    >
                        {&content.cta}
                    </button>
                </div>

                <div ref={footer_ref} class="contact-footer">
                    <p class="muted">
                        {format!("© {} {}.", Utc::now().year(), content.copyright_holder)}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1.5rem;
                        background: #faf8f3;
                    }
                    .contact-column {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .contact-methods {
                        max-width: 42rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 640px) {
                        .contact-methods {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .contact-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                        cursor: pointer;
                        transition: transform 0.2s ease;
                        word-break: break-all;
                    }
                    .contact-card:hover {
                        transform: scale(1.05);
                    }
                    .contact-card-icon {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        background: #d4af37;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .contact-card-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #111;
                    }
                    .contact-card h3 {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .contact-footer {
                        padding-top: 3rem;
                        border-top: 1px solid #e5e5e5;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </section>
    }
}
