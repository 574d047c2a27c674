use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoomModalProps {
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Full-screen dimmed overlay with a centered panel. The page renders this
/// component only while the modal is open, so the hosted surface mounts and
/// unmounts exactly with the open flag. Clicking the backdrop or the close
/// button dismisses; clicks inside the panel do not.
#[function_component(RoomModal)]
pub fn room_modal(props: &RoomModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop}>
            <div class="modal-panel" onclick={on_panel}>
                <button class="modal-close" onclick={on_close_button} aria-label="Close">
                    {"×"}
                </button>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
