use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles::{INPUT, INPUT_ROW, SEND_BUTTON};

#[derive(Properties, Clone, PartialEq)]
pub struct ChatInputProps {
    /// Controlled value; the controller clears it through the view ports.
    pub value: String,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            on_input.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class={INPUT_ROW} {onsubmit}>
            <input
                class={INPUT}
                type="text"
                placeholder="Ask about listings, cities, budgets..."
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
            />
            <button type="submit" class={SEND_BUTTON} disabled={props.disabled}>
                {"Send"}
            </button>
        </form>
    }
}
