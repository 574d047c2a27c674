use gloo_console::log;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::components::newsletter::NewsletterForm;
use crate::components::reveal::RevealOnView;
use crate::components::room::Room;
use crate::components::room_modal::RoomModal;
use crate::components::testimonials::TestimonialCarousel;
use crate::content::{FeatureIcon, FAQ_ENTRIES, FEATURES, LOGOS, MAX_RATING, PRICING_PLANS, STATS};

/// Vertical offset after which the page counts as scrolled. Nothing styles
/// off the resulting class yet; the flag is kept for the sticky-header
/// treatment it was built for.
const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

fn feature_icon(icon: FeatureIcon) -> Html {
    match icon {
        FeatureIcon::Code => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </svg>
        },
        FeatureIcon::Mentor => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="2" y="3" width="20" height="14" rx="2" ry="2" />
                <line x1="8" y1="21" x2="16" y2="21" />
                <line x1="12" y1="17" x2="12" y2="21" />
            </svg>
        },
        FeatureIcon::Collaboration => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </svg>
        },
        FeatureIcon::Insights => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="23 6 13.5 15.5 8.5 10.5 1 18" />
                <polyline points="17 6 23 6 23 12" />
            </svg>
        },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_scrolled = use_state(|| false);
    let room_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > SCROLL_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let open_room = {
        let room_open = room_open.clone();
        Callback::from(move |_: MouseEvent| room_open.set(true))
    };
    let close_room = {
        let room_open = room_open.clone();
        Callback::from(move |_: ()| room_open.set(false))
    };

    // Stand-in for the email-capture service.
    let on_subscribe = Callback::from(|email: String| {
        log!("Subscribed with email:", email);
    });

    html! {
        <div class={classes!("landing-page", (*is_scrolled).then(|| "scrolled"))}>

            <section class="hero">
                <div class="hero-blobs">
                    <div class="hero-blob blob-1"></div>
                    <div class="hero-blob blob-2"></div>
                    <div class="hero-blob blob-3"></div>
                </div>

                <div class="hero-content">
                    <h1>
                        {"Master Coding Interviews with "}
                        <span class="highlight">{"CodeQuest"}</span>
                    </h1>
                    <p class="hero-tagline">
                        {"Collaborate, Conquer, Code: Your Path to Interview Success"}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_room.clone()}>
                            {"🚀 Start Your Journey"}
                        </button>
                        <button class="hero-secondary">
                            {"▶ View Demo"}
                        </button>
                    </div>
                    <div class="hero-rating">
                        <span class="hero-stars">
                            { for (0..MAX_RATING).map(|_| html! { <span class="star filled">{"★"}</span> }) }
                        </span>
                        <span>{"4.9/5 from 2,500+ developers"}</span>
                    </div>
                </div>

                <div class="scroll-indicator">
                    <div class="scroll-wheel">
                        <div class="scroll-dot"></div>
                    </div>
                </div>
            </section>

            <section class="logos-section">
                <h3>{"Trusted by developers at"}</h3>
                <div class="logos-grid">
                    { for LOGOS.iter().map(|company| html! {
                        <div class="logo-item">{company}</div>
                    }) }
                </div>
            </section>

            <section id="features" class="features-section">
                <RevealOnView class="features-reveal">
                    <div class="section-header">
                        <h2>{"Unleash Your "}<span class="accent">{"Potential"}</span></h2>
                        <p>{"Everything you need to prepare for technical interviews in one powerful platform"}</p>
                    </div>
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature_icon(feature.icon)}</div>
                            <h3>{feature.title}</h3>
                            <p class="feature-description">{feature.description}</p>
                            <p class="feature-extended">{feature.extended_desc}</p>
                        </div>
                    }) }
                </RevealOnView>
            </section>

            <section class="stats-section">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <div class="stat-number">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-header">
                    <h2>{"What Our Users Say"}</h2>
                    <p>{"Join thousands of developers who have accelerated their career with CodeQuest"}</p>
                </div>
                <TestimonialCarousel />
            </section>

            <section id="pricing" class="pricing-section">
                <div class="section-header">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <p>{"Choose the plan that works best for you and your interview preparation needs"}</p>
                </div>
                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
                            if plan.popular {
                                <div class="popular-badge">{"Most Popular"}</div>
                            }
                            <h3>{plan.name}</h3>
                            <div class="plan-price">
                                <span class="price-amount">{plan.price}</span>
                                if plan.period != "forever" {
                                    <span class="price-period">{format!("/{}", plan.period)}</span>
                                }
                            </div>
                            <p class="plan-description">{plan.description}</p>
                            <ul class="plan-features">
                                { for plan.features.iter().map(|feature| html! {
                                    <li>{feature}</li>
                                }) }
                            </ul>
                            <button class={classes!("plan-cta", plan.popular.then(|| "primary"))}>
                                {plan.cta}
                            </button>
                        </div>
                    }) }
                </div>
            </section>

            <section id="faq" class="faq-section">
                <div class="section-header">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Everything you need to know about the platform"}</p>
                </div>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().map(|entry| html! {
                        <FaqItem
                            question={entry.question.to_string()}
                            answer={entry.answer.to_string()}
                        />
                    }) }
                </div>
            </section>

            <section class="cta-section">
                <h2>{"Ready to Elevate Your Interview Journey?"}</h2>
                <p>
                    {"CodeQuest empowers you with live collaboration, mock interviews, analytics, \
                      and a vast problem library — everything you need to crack top tech interviews \
                      with confidence."}
                </p>
                <div class="cta-buttons">
                    <button class="cta-primary" onclick={open_room.clone()}>
                        {"🔥 Start Your CodeQuest"}
                    </button>
                    <button class="cta-secondary">
                        {"Schedule a Demo"}
                    </button>
                </div>
            </section>

            <section class="newsletter-section">
                <h2>{"Stay Updated with CodeQuest"}</h2>
                <p>{"Get the latest interview tips, product updates, and exclusive offers directly to your inbox."}</p>
                <NewsletterForm on_subscribe={on_subscribe} />
            </section>

            if *room_open {
                <RoomModal on_close={close_room}>
                    <Room />
                </RoomModal>
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #111827;
                    overflow-x: hidden;
                }

                .section-header {
                    text-align: center;
                    max-width: 760px;
                    margin: 0 auto 4rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .section-header p {
                    font-size: 1.2rem;
                    color: #6b7280;
                }

                .section-header .accent {
                    color: #4f46e5;
                }

                /* Hero */

                .hero {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 10rem 1.5rem 8rem;
                    background: linear-gradient(135deg, #4ade80 0%, #6366f1 50%, #9333ea 100%);
                    overflow: hidden;
                    color: #ffffff;
                }

                .hero-content {
                    position: relative;
                    z-index: 2;
                    max-width: 900px;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                    line-height: 1.15;
                }

                .hero .highlight {
                    color: #fde047;
                }

                .hero-tagline {
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }

                .hero-cta {
                    padding: 1rem 2rem;
                    background: #ffffff;
                    color: #4338ca;
                    font-weight: 700;
                    font-size: 1.05rem;
                    border: none;
                    border-radius: 10px;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .hero-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 25px -5px rgba(99, 102, 241, 0.4);
                }

                .hero-secondary {
                    padding: 1rem 2rem;
                    background: transparent;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.05rem;
                    border: 2px solid #ffffff;
                    border-radius: 10px;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .hero-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                }

                .hero-rating {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-top: 4rem;
                    padding: 0.75rem 1.25rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(6px);
                    border-radius: 10px;
                }

                .hero-stars .star {
                    color: #fde047;
                    margin: 0 1px;
                }

                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    z-index: 1;
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(24px);
                }

                .blob-1 {
                    width: 8rem;
                    height: 8rem;
                    top: 25%;
                    left: 25%;
                    background: rgba(134, 239, 172, 0.3);
                    animation: blob-drift-1 15s linear infinite;
                }

                .blob-2 {
                    width: 10rem;
                    height: 10rem;
                    bottom: 25%;
                    right: 25%;
                    background: rgba(216, 180, 254, 0.3);
                    animation: blob-drift-2 20s linear infinite;
                }

                .blob-3 {
                    width: 6rem;
                    height: 6rem;
                    top: 66%;
                    left: 33%;
                    background: rgba(255, 255, 255, 0.2);
                    animation: blob-drift-3 12s ease-in-out infinite;
                }

                @keyframes blob-drift-1 {
                    0%   { transform: scale(1) translateY(0) rotate(0deg); }
                    50%  { transform: scale(1.2) translateY(-20px) rotate(180deg); }
                    100% { transform: scale(1) translateY(0) rotate(360deg); }
                }

                @keyframes blob-drift-2 {
                    0%   { transform: scale(1) translateY(0) rotate(0deg); }
                    50%  { transform: scale(1.3) translateY(30px) rotate(-180deg); }
                    100% { transform: scale(1) translateY(0) rotate(-360deg); }
                }

                @keyframes blob-drift-3 {
                    0%, 100% { transform: scale(1) translateY(0); }
                    50%      { transform: scale(1.5) translateY(-40px); }
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                    animation: indicator-bounce 2s infinite;
                }

                .scroll-wheel {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #ffffff;
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                }

                .scroll-dot {
                    width: 4px;
                    height: 12px;
                    margin-top: 8px;
                    background: #ffffff;
                    border-radius: 999px;
                    animation: dot-fade 2s infinite;
                }

                @keyframes indicator-bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50%      { transform: translate(-50%, 10px); }
                }

                @keyframes dot-fade {
                    0%, 100% { opacity: 0; }
                    50%      { opacity: 1; }
                }

                /* Logo cloud */

                .logos-section {
                    padding: 3rem 1.5rem;
                    background: #f3f4f6;
                    text-align: center;
                }

                .logos-section h3 {
                    color: #6b7280;
                    font-size: 0.85rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 2rem;
                }

                .logos-grid {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    align-items: center;
                }

                .logo-item {
                    font-weight: 600;
                    color: #9ca3af;
                    opacity: 0.6;
                    transition: opacity 0.3s ease;
                }

                .logo-item:hover {
                    opacity: 1;
                }

                /* Features + reveal animation */

                .features-section {
                    padding: 5rem 1.5rem;
                    background: #f9fafb;
                }

                .features-reveal {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .features-reveal .section-header {
                    grid-column: 1 / -1;
                    margin-bottom: 1rem;
                }

                .reveal > * {
                    opacity: 0;
                    transform: translateY(40px);
                }

                .reveal.revealed > * {
                    opacity: 1;
                    transform: translateY(0);
                    transition: opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                                transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }

                .reveal.revealed > *:nth-child(2) { transition-delay: 0.2s; }
                .reveal.revealed > *:nth-child(3) { transition-delay: 0.4s; }
                .reveal.revealed > *:nth-child(4) { transition-delay: 0.6s; }
                .reveal.revealed > *:nth-child(5) { transition-delay: 0.8s; }

                .feature-card {
                    position: relative;
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 16px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                    overflow: hidden;
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }

                .feature-card::before {
                    content: '';
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(90deg, #4ade80, #4f46e5);
                }

                .feature-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12);
                }

                .feature-icon {
                    display: inline-flex;
                    padding: 0.75rem;
                    background: #e0e7ff;
                    border-radius: 10px;
                    margin-bottom: 1.25rem;
                }

                .feature-icon svg {
                    width: 1.75rem;
                    height: 1.75rem;
                    color: #4f46e5;
                }

                .feature-card h3 {
                    font-size: 1.2rem;
                    margin-bottom: 0.75rem;
                }

                .feature-description {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .feature-extended {
                    font-size: 0.85rem;
                    color: #9ca3af;
                }

                /* Stats */

                .stats-section {
                    padding: 4rem 1.5rem;
                    background: #ffffff;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .stat-card {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: #f9fafb;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
                }

                .stat-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #4f46e5;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    color: #6b7280;
                }

                /* Testimonials */

                .testimonials-section {
                    padding: 5rem 1.5rem;
                    background: #f3f4f6;
                }

                .testimonial-carousel {
                    position: relative;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .testimonial-track {
                    position: relative;
                    overflow: hidden;
                    min-height: 280px;
                }

                .testimonial-card {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    background: #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    padding: 3rem;
                }

                .card-enter {
                    animation: card-in 0.5s ease both;
                }

                .card-exit {
                    position: absolute;
                    inset: 0;
                    animation: card-out 0.5s ease forwards;
                    pointer-events: none;
                }

                @keyframes card-in {
                    from { opacity: 0; transform: translateX(100px); }
                    to   { opacity: 1; transform: translateX(0); }
                }

                @keyframes card-out {
                    from { opacity: 1; transform: translateX(0); }
                    to   { opacity: 0; transform: translateX(-100px); }
                }

                .testimonial-avatar {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    object-fit: cover;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    flex-shrink: 0;
                }

                .testimonial-stars {
                    margin-bottom: 1rem;
                }

                .star {
                    color: #d1d5db;
                    margin: 0 2px;
                }

                .star.filled {
                    color: #facc15;
                }

                .testimonial-quote {
                    font-size: 1.1rem;
                    font-style: italic;
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                    line-height: 1.7;
                }

                .testimonial-name {
                    font-weight: 600;
                }

                .testimonial-role {
                    color: #6b7280;
                }

                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: #ffffff;
                    color: #4f46e5;
                    font-size: 1.5rem;
                    line-height: 1;
                    cursor: pointer;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    transition: box-shadow 0.3s ease;
                }

                .carousel-arrow:hover {
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
                }

                .carousel-prev { left: -1.25rem; }
                .carousel-next { right: -1.25rem; }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 50%;
                    background: #d1d5db;
                    cursor: pointer;
                    padding: 0;
                }

                .carousel-dot.active {
                    background: #4f46e5;
                }

                /* Pricing */

                .pricing-section {
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    align-items: start;
                }

                .pricing-card {
                    position: relative;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                }

                .pricing-card.popular {
                    border: 2px solid #4f46e5;
                    transform: scale(1.05);
                }

                .popular-badge {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    background: #4f46e5;
                    color: #ffffff;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                    white-space: nowrap;
                }

                .pricing-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }

                .plan-price {
                    margin-bottom: 1.5rem;
                }

                .price-amount {
                    font-size: 2.5rem;
                    font-weight: 800;
                }

                .price-period {
                    color: #6b7280;
                }

                .plan-description {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                }

                .plan-features li {
                    position: relative;
                    padding: 0.5rem 0 0.5rem 1.75rem;
                }

                .plan-features li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #22c55e;
                    font-weight: 700;
                }

                .plan-cta {
                    width: 100%;
                    padding: 0.85rem 1rem;
                    border: none;
                    border-radius: 10px;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    background: #f3f4f6;
                    color: #111827;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .plan-cta:hover {
                    background: #e5e7eb;
                    transform: scale(1.02);
                }

                .plan-cta.primary {
                    background: #4f46e5;
                    color: #ffffff;
                }

                .plan-cta.primary:hover {
                    background: #4338ca;
                }

                /* FAQ */

                .faq-section {
                    padding: 5rem 1.5rem;
                    background: #f9fafb;
                }

                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: #ffffff;
                    border-radius: 12px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #111827;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #4f46e5;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #4f46e5;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.7;
                }

                /* CTA */

                .cta-section {
                    padding: 5rem 1.5rem;
                    text-align: center;
                    background: linear-gradient(90deg, #4f46e5, #9333ea);
                    color: #ffffff;
                }

                .cta-section h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }

                .cta-section p {
                    font-size: 1.2rem;
                    color: #e0e7ff;
                    max-width: 760px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.7;
                }

                .cta-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }

                .cta-primary {
                    padding: 1rem 2rem;
                    background: #ffffff;
                    color: #4338ca;
                    font-weight: 700;
                    font-size: 1.05rem;
                    border: none;
                    border-radius: 10px;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }

                .cta-primary:hover {
                    transform: scale(1.05);
                }

                .cta-secondary {
                    padding: 1rem 2rem;
                    background: transparent;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.05rem;
                    border: 2px solid #ffffff;
                    border-radius: 10px;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .cta-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                }

                /* Newsletter */

                .newsletter-section {
                    padding: 4rem 1.5rem;
                    background: #f3f4f6;
                    text-align: center;
                }

                .newsletter-section h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .newsletter-section > p {
                    color: #6b7280;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }

                .newsletter-form form {
                    display: flex;
                    gap: 1rem;
                    max-width: 560px;
                    margin: 0 auto;
                }

                .newsletter-form input {
                    flex: 1;
                    padding: 0.85rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 10px;
                    font-size: 1rem;
                }

                .newsletter-form input:focus {
                    outline: 2px solid #6366f1;
                    border-color: transparent;
                }

                .newsletter-form button {
                    padding: 0.85rem 1.5rem;
                    background: #4f46e5;
                    color: #ffffff;
                    font-weight: 500;
                    font-size: 1rem;
                    border: none;
                    border-radius: 10px;
                    cursor: pointer;
                    box-shadow: 0 4px 12px rgba(79, 70, 229, 0.3);
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .newsletter-form button:hover {
                    background: #4338ca;
                    transform: scale(1.05);
                }

                .subscribe-confirmation {
                    max-width: 560px;
                    margin: 1rem auto 0;
                    padding: 0.85rem;
                    background: #dcfce7;
                    color: #15803d;
                    border-radius: 10px;
                    animation: card-in 0.3s ease both;
                }

                /* Room modal */

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                }

                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 900px;
                    max-height: 90vh;
                    background: #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.4);
                    overflow: hidden;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 10;
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 50%;
                    background: #f3f4f6;
                    font-size: 1.25rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .modal-close:hover {
                    background: #e5e7eb;
                }

                .modal-body {
                    max-height: 90vh;
                    overflow-y: auto;
                }

                .room-surface {
                    padding: 3rem 2.5rem;
                }

                .room-header {
                    display: flex;
                    align-items: baseline;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }

                .room-session-clock {
                    font-family: monospace;
                    font-size: 1.1rem;
                    color: #4f46e5;
                }

                .room-status {
                    color: #6b7280;
                    margin-bottom: 2rem;
                }

                .room-editor-placeholder {
                    background: #111827;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                }

                .room-editor-line {
                    height: 0.75rem;
                    background: #374151;
                    border-radius: 4px;
                    margin-bottom: 0.75rem;
                    animation: dot-fade 2s infinite;
                }

                .room-editor-line.short {
                    width: 60%;
                }

                .room-hint {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }

                /* Responsive */

                @media (max-width: 960px) {
                    .features-reveal { grid-template-columns: repeat(2, 1fr); }
                    .pricing-grid { grid-template-columns: 1fr; }
                    .pricing-card.popular { transform: none; }
                    .logos-grid { grid-template-columns: repeat(3, 1fr); }
                }

                @media (max-width: 640px) {
                    .hero h1 { font-size: 2.25rem; }
                    .hero-tagline { font-size: 1.15rem; }
                    .features-reveal { grid-template-columns: 1fr; }
                    .stats-grid { grid-template-columns: repeat(2, 1fr); }
                    .logos-grid { grid-template-columns: repeat(2, 1fr); }
                    .testimonial-card {
                        flex-direction: column;
                        text-align: center;
                        padding: 2rem 1.5rem;
                    }
                    .carousel-prev { left: 0.25rem; }
                    .carousel-next { right: 0.25rem; }
                    .newsletter-form form { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}
