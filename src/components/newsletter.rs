use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{Newsletter, NewsletterAction};

/// How long the "thanks for subscribing" note stays on screen.
const CONFIRMATION_VISIBLE_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    /// Email-capture collaborator. Receives the submitted address; the page
    /// decides what capturing actually means.
    pub on_subscribe: Callback<String>,
}

/// Newsletter signup form. The input is `required`, so the browser blocks
/// empty or malformed addresses before the submit handler runs; the state
/// machine rejects empty submissions again as a backstop. A successful submit
/// clears the field and shows a confirmation that expires after three
/// seconds. The pending expiry timeout is dropped on unmount so it cannot
/// fire against a torn-down view.
#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let newsletter = use_reducer(Newsletter::new);
    let expiry_handle: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let expiry_handle = expiry_handle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    expiry_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let oninput = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter.dispatch(NewsletterAction::Edit(input.value()));
        })
    };

    let onsubmit = {
        let newsletter = newsletter.clone();
        let on_subscribe = props.on_subscribe.clone();
        let expiry_handle = expiry_handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if newsletter.email().is_empty() {
                return;
            }
            on_subscribe.emit(newsletter.email().to_string());
            newsletter.dispatch(NewsletterAction::Submit);

            let handle = newsletter.clone();
            let timeout = Timeout::new(CONFIRMATION_VISIBLE_MS, move || {
                handle.dispatch(NewsletterAction::ExpireConfirmation);
            });
            // Replacing the slot cancels any expiry still pending from an
            // earlier submission.
            *expiry_handle.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <div class="newsletter-form">
            <form onsubmit={onsubmit}>
                <input
                    type="email"
                    required=true
                    placeholder="Enter your email"
                    value={newsletter.email().to_string()}
                    oninput={oninput}
                />
                <button type="submit">{"Subscribe"}</button>
            </form>
            if newsletter.is_confirmed() {
                <div class="subscribe-confirmation">
                    {"Thanks for subscribing! Check your email for confirmation."}
                </div>
            }
        </div>
    }
}
