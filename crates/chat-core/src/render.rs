//! Pure reply rendering: envelope in, view nodes out.
//!
//! This is the single dispatch table for every reply kind the endpoint can
//! return. It never panics; unknown kinds degrade to a readable bubble. The
//! nodes carry text verbatim; the view layer inserts it through framework
//! text nodes, which escape markup by construction.

use crate::types::{InvestmentItem, ListingItem, ReplyEnvelope, Role};

/// Bubble shown for a `"text"` reply with no usable content.
pub const BLANK_REPLY_TEXT: &str = "Okay.";
/// Bubble shown for a `"cards"` reply carrying zero items.
pub const EMPTY_RESULTS_TEXT: &str =
    "No matching listings right now. Try another city, property type, or budget.";
/// Bubble shown for an `"investments"` reply carrying zero items.
pub const EMPTY_PLANS_TEXT: &str = "No open investment plans right now. Check back soon.";

/// A renderable fragment of the conversation log.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewNode {
    Bubble { role: Role, text: String },
    Cards(Vec<Card>),
}

impl ViewNode {
    pub fn bubble(role: Role, text: impl Into<String>) -> Self {
        Self::Bubble {
            role,
            text: text.into(),
        }
    }
}

/// One card in a grid: listing or investment plan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Card {
    pub badge: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub price: Option<String>,
    pub footnote: Option<String>,
}

/// Turns a reply envelope into view nodes, purely.
pub fn render(envelope: &ReplyEnvelope) -> Vec<ViewNode> {
    let mut nodes = Vec::new();
    if let Some(preface) = non_empty(envelope.preface.as_deref()) {
        nodes.push(ViewNode::bubble(Role::Assistant, preface));
    }
    nodes.push(match envelope.kind.as_deref() {
        Some("text") => text_bubble(envelope),
        Some("cards") => listing_cards(envelope),
        Some("investments") => investment_cards(envelope),
        _ => unknown_fallback(envelope),
    });
    nodes
}

fn text_bubble(envelope: &ReplyEnvelope) -> ViewNode {
    let content = non_empty(envelope.content.as_deref()).unwrap_or(BLANK_REPLY_TEXT);
    ViewNode::bubble(Role::Assistant, content)
}

fn listing_cards(envelope: &ReplyEnvelope) -> ViewNode {
    if envelope.items.is_empty() {
        return ViewNode::bubble(Role::Assistant, EMPTY_RESULTS_TEXT);
    }
    ViewNode::Cards(
        envelope
            .items
            .iter()
            .map(ListingItem::from_value)
            .map(listing_card)
            .collect(),
    )
}

fn listing_card(item: ListingItem) -> Card {
    Card {
        badge: item.badge,
        title: if item.title.is_empty() {
            "Listing".to_string()
        } else {
            item.title
        },
        subtitle: item.subtitle,
        price: item.price_lkr.map(format_lkr),
        footnote: item.code.map(|code| format!("Code: {code}")),
    }
}

fn investment_cards(envelope: &ReplyEnvelope) -> ViewNode {
    if envelope.items.is_empty() {
        return ViewNode::bubble(Role::Assistant, EMPTY_PLANS_TEXT);
    }
    ViewNode::Cards(
        envelope
            .items
            .iter()
            .map(InvestmentItem::from_value)
            .map(investment_card)
            .collect(),
    )
}

fn investment_card(item: InvestmentItem) -> Card {
    let base_title = if item.title.is_empty() {
        "Investment Plan".to_string()
    } else {
        item.title
    };
    let title = match item.yield_pct {
        Some(pct) => format!("{base_title} (Yield ~{}%)", format_pct(pct)),
        None => base_title,
    };

    let mut bits = Vec::new();
    if let Some(subtitle) = item.subtitle.filter(|s| !s.trim().is_empty()) {
        bits.push(subtitle);
    }
    if let Some(summary) = item.summary.filter(|s| !s.trim().is_empty()) {
        bits.push(summary);
    }
    if let Some(pct) = item.yield_pct {
        bits.push(format!("Yield ~{}%", format_pct(pct)));
    }
    if let Some(pct) = item.roi_pct {
        bits.push(format!("ROI ~{}%", format_pct(pct)));
    }

    Card {
        badge: Some(item.badge.unwrap_or_else(|| "Investment".to_string())),
        title,
        subtitle: (!bits.is_empty()).then(|| bits.join(" · ")),
        price: item
            .min_investment_lkr
            .map(|min| format!("Min investment {}", format_lkr(min))),
        footnote: None,
    }
}

fn unknown_fallback(envelope: &ReplyEnvelope) -> ViewNode {
    let text = match non_empty(envelope.content.as_deref()) {
        Some(content) => content.to_string(),
        None => serde_json::to_string(envelope)
            .unwrap_or_else(|_| BLANK_REPLY_TEXT.to_string()),
    };
    ViewNode::bubble(Role::Assistant, text)
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// `50000000.0` becomes `"LKR 50,000,000"`. Whole rupees, comma grouping.
pub fn format_lkr(amount: f64) -> String {
    format!("LKR {}", group_thousands(amount.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Percentages print without a trailing `.0` (`8.0` as `"8"`, `8.5` as `"8.5"`).
fn format_pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(raw: serde_json::Value) -> ReplyEnvelope {
        serde_json::from_value(raw).unwrap()
    }

    fn only_bubble(nodes: &[ViewNode]) -> (&Role, &str) {
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            ViewNode::Bubble { role, text } => (role, text),
            other => panic!("expected a bubble, got {other:?}"),
        }
    }

    fn only_cards(nodes: &[ViewNode]) -> &[Card] {
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            ViewNode::Cards(cards) => cards,
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn text_reply_renders_one_bubble() {
        let nodes = render(&envelope(json!({"type": "text", "content": "Hello"})));
        let (role, text) = only_bubble(&nodes);
        assert_eq!(*role, Role::Assistant);
        assert_eq!(text, "Hello");
    }

    #[test]
    fn empty_text_content_falls_back_to_okay() {
        let nodes = render(&envelope(json!({"type": "text", "content": ""})));
        assert_eq!(only_bubble(&nodes).1, BLANK_REPLY_TEXT);
    }

    #[test]
    fn preface_renders_first_regardless_of_kind() {
        let nodes = render(&envelope(json!({
            "type": "cards",
            "preface": "Based on your budget:",
            "items": [{"title": "Flat A"}]
        })));
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes[0],
            ViewNode::bubble(Role::Assistant, "Based on your budget:")
        );
        assert!(matches!(nodes[1], ViewNode::Cards(_)));
    }

    #[test]
    fn listing_card_carries_price_badge_and_code() {
        let nodes = render(&envelope(json!({
            "type": "cards",
            "items": [{
                "title": "Flat A",
                "subtitle": "Colombo 5 · 3BR",
                "price_lkr": 50000000,
                "badge": "Featured",
                "code": "LA-102"
            }]
        })));
        let cards = only_cards(&nodes);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Flat A");
        assert_eq!(cards[0].badge.as_deref(), Some("Featured"));
        assert!(cards[0].price.as_deref().unwrap().contains("50,000,000"));
        assert_eq!(cards[0].footnote.as_deref(), Some("Code: LA-102"));
    }

    #[test]
    fn listing_card_title_defaults_when_missing() {
        let nodes = render(&envelope(json!({"type": "cards", "items": [{}]})));
        assert_eq!(only_cards(&nodes)[0].title, "Listing");
    }

    #[test]
    fn empty_cards_render_a_no_results_bubble() {
        let nodes = render(&envelope(json!({"type": "cards", "items": []})));
        assert_eq!(only_bubble(&nodes).1, EMPTY_RESULTS_TEXT);
    }

    #[test]
    fn investment_card_composes_title_subtitle_and_minimum() {
        let nodes = render(&envelope(json!({
            "type": "investments",
            "items": [{
                "title": "Fund A",
                "summary": "Serviced apartments",
                "yield_pct": 8,
                "roi_pct": 12.5,
                "min_investment_lkr": 100000
            }]
        })));
        let card = &only_cards(&nodes)[0];
        assert!(card.title.contains("Fund A"));
        assert!(card.title.contains('8'));
        assert_eq!(card.badge.as_deref(), Some("Investment"));
        let subtitle = card.subtitle.as_deref().unwrap();
        assert!(subtitle.contains("Serviced apartments"));
        assert!(subtitle.contains("Yield ~8%"));
        assert!(subtitle.contains("ROI ~12.5%"));
        assert!(card.price.as_deref().unwrap().contains("100,000"));
    }

    #[test]
    fn empty_investments_render_a_no_plans_bubble() {
        let nodes = render(&envelope(json!({"type": "investments", "items": []})));
        assert_eq!(only_bubble(&nodes).1, EMPTY_PLANS_TEXT);
    }

    #[test]
    fn unknown_kind_with_content_renders_the_content() {
        let nodes = render(&envelope(json!({
            "type": "unknown_future_type",
            "content": "fallback text"
        })));
        assert_eq!(only_bubble(&nodes).1, "fallback text");
    }

    #[test]
    fn unknown_kind_without_content_renders_the_raw_envelope() {
        let nodes = render(&envelope(json!({"type": "mystery", "weight": 3})));
        let (_, text) = only_bubble(&nodes);
        assert!(text.contains("mystery"));
    }

    #[test]
    fn markup_in_reply_text_is_preserved_verbatim() {
        // Escaping happens at the view boundary (framework text nodes); the
        // node itself must carry the literal characters untouched.
        let nodes = render(&envelope(json!({
            "type": "text",
            "content": "<script>alert('x')</script>"
        })));
        assert_eq!(only_bubble(&nodes).1, "<script>alert('x')</script>");
    }

    #[test]
    fn lkr_amounts_group_thousands() {
        assert_eq!(format_lkr(50_000_000.0), "LKR 50,000,000");
        assert_eq!(format_lkr(950.0), "LKR 950");
        assert_eq!(format_lkr(1_000.0), "LKR 1,000");
    }
}
