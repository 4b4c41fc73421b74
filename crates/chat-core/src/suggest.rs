//! Quick-reply chips derived from the last reply seen.
//!
//! The filter-prompt detection is a deliberate substring heuristic keyed to
//! the assistant's exact wording. It is brittle by construction and isolated
//! here so it can be swapped for a structured hint from the endpoint without
//! touching the controller.

use crate::types::ReplyEnvelope;

const DISCOVERY_CHIPS: &[&str] = &[
    "What services do you offer?",
    "What cities do you cover?",
    "Show me apartments",
    "Reset",
];

const REFINE_CHIPS: &[&str] = &[
    "Apartments in Colombo 5 under 50M",
    "3BR houses in Galle under 80M",
    "Show investment plans",
    "Reset",
];

const INVESTMENT_CHIPS: &[&str] = &[
    "What is the minimum investment?",
    "Tell me more about these plans",
    "Contact an advisor",
    "Show me apartments",
    "Reset",
];

const ONBOARDING_CHIPS: &[&str] = &[
    "3BR apartments in Galle under 80M",
    "Houses in Kandy under 100M",
    "Land in Kandy under 30M",
    "Reset",
];

/// Phrases the assistant uses when it still needs city/type/budget filters.
const FILTER_PROMPT_MARKERS: &[&str] = &["tell me city", "tell me a city"];

/// Chips to offer after `last`. `None` means nothing has been seen yet.
/// Output is fixed and order-stable for each branch.
pub fn suggest(last: Option<&ReplyEnvelope>) -> Vec<String> {
    let chips = match last {
        Some(envelope) => match envelope.kind.as_deref() {
            Some("cards") => REFINE_CHIPS,
            Some("investments") => INVESTMENT_CHIPS,
            Some("text") if asks_for_filters(envelope.content.as_deref().unwrap_or_default()) => {
                ONBOARDING_CHIPS
            }
            _ => DISCOVERY_CHIPS,
        },
        None => DISCOVERY_CHIPS,
    };
    chips.iter().map(|chip| (*chip).to_string()).collect()
}

fn asks_for_filters(content: &str) -> bool {
    let lowered = content.to_lowercase();
    FILTER_PROMPT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
