use realty_chat_core::{Card, Role, ViewNode};
use yew::prelude::*;

use crate::styles::{
    BOT_BUBBLE, CARD, CARD_BADGE, CARD_GRID, CARD_PRICE, CARD_SUBTITLE, CARD_TITLE, USER_BUBBLE,
    combine_styles,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ReplyViewProps {
    pub node: ViewNode,
}

/// Renders one view node: a chat bubble or a card grid. All text goes
/// through Yew text nodes, so markup in reply content stays literal.
#[function_component(ReplyView)]
pub fn reply_view(props: &ReplyViewProps) -> Html {
    match &props.node {
        ViewNode::Bubble { role, text } => {
            let class = match role {
                Role::User => USER_BUBBLE,
                Role::Assistant => BOT_BUBBLE,
            };
            html! { <div class={class}>{text}</div> }
        }
        ViewNode::Cards(cards) => html! {
            <div class={CARD_GRID}>
                {for cards.iter().enumerate().map(|(index, card)| render_card(index, card))}
            </div>
        },
    }
}

fn render_card(index: usize, card: &Card) -> Html {
    html! {
        <div key={index} class={CARD}>
            if let Some(badge) = &card.badge {
                <span class={CARD_BADGE}>{badge}</span>
            }
            <div class={CARD_TITLE}>{&card.title}</div>
            if let Some(subtitle) = &card.subtitle {
                <div class={CARD_SUBTITLE}>{subtitle}</div>
            }
            if let Some(price) = &card.price {
                <div class={CARD_PRICE}>{price}</div>
            }
            if let Some(footnote) = &card.footnote {
                <div class={combine_styles(&[CARD_SUBTITLE, "italic"])}>{footnote}</div>
            }
        </div>
    }
}
