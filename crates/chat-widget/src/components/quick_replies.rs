use yew::prelude::*;

use crate::styles::{CHIP, CHIP_ROW};

#[derive(Properties, Clone, PartialEq)]
pub struct QuickRepliesProps {
    pub chips: Vec<String>,
    /// Activating a chip is equivalent to typing its label and submitting.
    pub on_pick: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(QuickReplies)]
pub fn quick_replies(props: &QuickRepliesProps) -> Html {
    if props.chips.is_empty() {
        return Html::default();
    }
    html! {
        <div class={CHIP_ROW}>
            {for props.chips.iter().map(|chip| {
                let on_pick = props.on_pick.clone();
                let label = chip.clone();
                let onclick = Callback::from(move |_| on_pick.emit(label.clone()));
                html! {
                    <button
                        type="button"
                        key={chip.clone()}
                        class={CHIP}
                        disabled={props.disabled}
                        {onclick}
                    >
                        {chip}
                    </button>
                }
            })}
        </div>
    }
}
