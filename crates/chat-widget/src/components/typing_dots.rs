use yew::prelude::*;

use crate::styles::{TYPING_DOT, TYPING_WRAP};

/// Three pulsing dots shown while a reply is pending.
#[function_component(TypingDots)]
pub fn typing_dots() -> Html {
    html! {
        <div class={TYPING_WRAP}>
            <span class={TYPING_DOT} style="animation-delay: -0.32s;"></span>
            <span class={TYPING_DOT} style="animation-delay: -0.16s;"></span>
            <span class={TYPING_DOT}></span>
        </div>
    }
}
