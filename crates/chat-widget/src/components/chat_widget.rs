use std::rc::Rc;

use realty_chat_core::{ChatController, FirstOpenMarker, SessionStore, TypingIndicator};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ChatInput, MessageLog, QuickReplies};
use crate::config::ChatConfig;
use crate::ports::{Transcript, WidgetPorts};
use crate::storage::WebStorage;
use crate::styles::{CLOSE_BUTTON, PANEL, PANEL_HEADER, TOGGLE_BUTTON};
use crate::transport::HttpChatTransport;

type Controller = ChatController<HttpChatTransport>;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct ChatWidgetProps {
    /// Assistant endpoint; defaults to [`ChatConfig::ENDPOINT`].
    #[prop_or_default]
    pub endpoint: Option<String>,
}

/// The floating chat panel plus its round toggle button.
///
/// Owns the controller and all view state; the controller writes back
/// through [`WidgetPorts`]. On the first open in a browsing session it
/// auto-opens and fires the synthetic greeting send.
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let open = use_state(|| false);
    let typing = use_state(|| false);
    let transcript = use_reducer(Transcript::default);
    let input = use_state(String::new);

    let controller = {
        let typing = typing.clone();
        let endpoint = props
            .endpoint
            .clone()
            .unwrap_or_else(|| ChatConfig::ENDPOINT.to_string());
        use_state(move || build_controller(endpoint, typing))
    };
    let chips = {
        let controller = controller.clone();
        use_state(move || controller.initial_chips())
    };

    let ports = WidgetPorts {
        transcript: transcript.clone(),
        chips: chips.clone(),
        input: input.clone(),
    };

    // First open in this browsing session: show the panel and greet once.
    {
        let open = open.clone();
        let controller = controller.clone();
        let ports = ports.clone();
        use_effect_with((), move |_| {
            let controller = (*controller).clone();
            if controller.greeting_pending() {
                open.set(true);
                spawn_local(async move {
                    controller
                        .greet_on_first_open(ChatConfig::GREETING_TRIGGER, &ports)
                        .await;
                });
            }
        });
    }

    let submit = {
        let controller = controller.clone();
        let input = input.clone();
        let ports = ports.clone();
        Callback::from(move |_: ()| {
            let controller = (*controller).clone();
            let text = (*input).clone();
            let ports = ports.clone();
            spawn_local(async move {
                controller.submit(&text, &ports).await;
            });
        })
    };

    let pick_chip = {
        let controller = controller.clone();
        let ports = ports.clone();
        Callback::from(move |label: String| {
            let controller = (*controller).clone();
            let ports = ports.clone();
            spawn_local(async move {
                controller.submit(&label, &ports).await;
            });
        })
    };

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(value))
    };

    html! {
        <>
            if *open {
                <div class={PANEL} role="dialog" aria-label="RealtyAI assistant">
                    <div class={PANEL_HEADER}>
                        <div>
                            <div class="font-semibold text-sm">{"RealtyAI"}</div>
                            <div class="text-xs opacity-80">{"Property & investment assistant"}</div>
                        </div>
                        <button type="button" class={CLOSE_BUTTON} aria-label="Close chat" onclick={close}>
                            {"\u{2715}"}
                        </button>
                    </div>
                    <MessageLog nodes={(*transcript).nodes.clone()} typing={*typing} />
                    <QuickReplies chips={(*chips).clone()} on_pick={pick_chip} disabled={*typing} />
                    <ChatInput
                        value={(*input).clone()}
                        on_input={on_input}
                        on_submit={submit}
                        disabled={*typing}
                    />
                </div>
            }
            <button
                type="button"
                class={TOGGLE_BUTTON}
                aria-label="Chat with RealtyAI"
                aria-expanded={(*open).to_string()}
                onclick={toggle_open}
            >
                {"\u{1F4AC}"}
            </button>
        </>
    }
}

fn build_controller(endpoint: String, typing: UseStateHandle<bool>) -> Rc<Controller> {
    Rc::new(ChatController::new(
        HttpChatTransport::new(endpoint),
        SessionStore::new(WebStorage::local(), ChatConfig::SESSION_KEY),
        FirstOpenMarker::new(WebStorage::session(), ChatConfig::GREETED_KEY),
        TypingIndicator::new(move |visible| typing.set(visible)),
    ))
}
