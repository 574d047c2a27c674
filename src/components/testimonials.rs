use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::{Testimonial, MAX_RATING, TESTIMONIALS};
use crate::state::{Rotator, RotatorAction};

/// Automatic rotation period. Manual navigation does not reset it.
const ROTATION_INTERVAL_MS: u32 = 5_000;

/// Testimonial carousel: auto-advances every five seconds, with chevron and
/// pagination-dot navigation. The card being left behind animates out to the
/// left while the new one slides in from the right; only the active card is
/// interactive.
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let rotator = use_reducer(|| Rotator::new(TESTIMONIALS.len()));

    {
        let rotator = rotator.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATION_INTERVAL_MS, move || {
                    rotator.dispatch(RotatorAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_prev = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Prev))
    };
    let on_next = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Next))
    };

    let active = rotator.index();

    html! {
        <div class="testimonial-carousel">
            <div class="testimonial-track">
                {
                    for rotator
                        .previous()
                        .filter(|prev| *prev != active)
                        .map(|prev| testimonial_card(&TESTIMONIALS[prev], prev, true))
                }
                { testimonial_card(&TESTIMONIALS[active], active, false) }
            </div>

            <button class="carousel-arrow carousel-prev" onclick={on_prev} aria-label="Previous testimonial">
                {"‹"}
            </button>
            <button class="carousel-arrow carousel-next" onclick={on_next} aria-label="Next testimonial">
                {"›"}
            </button>

            <div class="carousel-dots">
                {
                    for (0..TESTIMONIALS.len()).map(|i| {
                        let rotator = rotator.clone();
                        html! {
                            <button
                                class={classes!("carousel-dot", (i == active).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    rotator.dispatch(RotatorAction::JumpTo(i))
                                })}
                                aria-label={format!("Go to testimonial {}", i + 1)}
                            />
                        }
                    })
                }
            </div>
        </div>
    }
}

fn testimonial_card(testimonial: &Testimonial, index: usize, exiting: bool) -> Html {
    html! {
        <div
            key={index.to_string()}
            class={classes!("testimonial-card", if exiting { "card-exit" } else { "card-enter" })}
        >
            <img
                class="testimonial-avatar"
                src={testimonial.avatar_url}
                alt={testimonial.name}
            />
            <div class="testimonial-body">
                <div class="testimonial-stars">
                    {
                        for (0..MAX_RATING).map(|i| html! {
                            <span class={classes!("star", (i < testimonial.rating).then(|| "filled"))}>
                                {"★"}
                            </span>
                        })
                    }
                </div>
                <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", testimonial.content)}</p>
                <p class="testimonial-name">{testimonial.name}</p>
                <p class="testimonial-role">{testimonial.role}</p>
            </div>
        </div>
    }
}
