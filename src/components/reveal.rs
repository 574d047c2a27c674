use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::RevealLatch;

/// Fraction of the wrapped section that must be visible before the entrance
/// animation fires.
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct RevealOnViewProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps a section and latches a `revealed` class onto it the first time it
/// scrolls into view. One-shot: the observer disconnects after the first
/// intersection, so leaving and re-entering the viewport never hides the
/// section again. The stagger of the child animations is pure CSS.
#[function_component(RevealOnView)]
pub fn reveal_on_view(props: &RevealOnViewProps) -> Html {
    let node = use_node_ref();
    let latch = use_state(RevealLatch::new);

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node| {
                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        if intersecting {
                            let mut next = *latch;
                            next.observe(true);
                            latch.set(next);
                            observer.disconnect();
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let observer = node.cast::<Element>().map(|element| {
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .unwrap();
                    observer.observe(&element);
                    observer
                });

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node.clone(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), latch.is_visible().then(|| "revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}
