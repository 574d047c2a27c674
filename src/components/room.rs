use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Placeholder for the collaboration surface the modal hosts. The page treats
/// it as a black box; the only contract is that everything it starts on mount
/// stops on unmount, which the session clock below holds itself to.
#[function_component(Room)]
pub fn room() -> Html {
    let elapsed = use_state(|| 0u32);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                let seconds = Rc::new(Cell::new(0u32));
                let interval = Interval::new(1_000, move || {
                    seconds.set(seconds.get() + 1);
                    elapsed.set(seconds.get());
                });
                move || drop(interval)
            },
            (),
        );
    }

    let minutes = *elapsed / 60;
    let seconds = *elapsed % 60;

    html! {
        <div class="room-surface">
            <div class="room-header">
                <h2>{"Interview Room"}</h2>
                <span class="room-session-clock">{format!("{:02}:{:02}", minutes, seconds)}</span>
            </div>
            <p class="room-status">{"Setting up your collaborative coding session..."}</p>
            <div class="room-editor-placeholder">
                <div class="room-editor-line"></div>
                <div class="room-editor-line short"></div>
                <div class="room-editor-line"></div>
                <div class="room-editor-line short"></div>
            </div>
            <p class="room-hint">
                {"Invite a partner or start a solo practice session once the editor loads."}
            </p>
        </div>
    }
}
