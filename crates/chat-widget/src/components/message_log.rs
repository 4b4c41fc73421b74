use realty_chat_core::ViewNode;
use web_sys::Element;
use yew::prelude::*;

use crate::components::{ReplyView, TypingDots};
use crate::styles::LOG;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageLogProps {
    pub nodes: Vec<ViewNode>,
    #[prop_or_default]
    pub typing: bool,
}

#[function_component(MessageLog)]
pub fn message_log(props: &MessageLogProps) -> Html {
    let container_ref = use_node_ref();

    // Keep the newest entry in view.
    use_effect_with((props.nodes.len(), props.typing), {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    html! {
        <div ref={container_ref} class={LOG}>
            {for props.nodes.iter().enumerate().map(|(index, node)| html! {
                <ReplyView key={index} node={node.clone()} />
            })}
            if props.typing {
                <TypingDots />
            }
        </div>
    }
}
