//! Yew implementation of the controller's view ports.
//!
//! The transcript is a reducer rather than plain state so that the user
//! bubble and the reply nodes, dispatched within the same turn, both land on
//! the latest state instead of a stale snapshot.

use std::rc::Rc;

use realty_chat_core::{ChatMessage, ViewNode, ViewPorts};
use yew::prelude::*;

/// Append-only conversation log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub nodes: Vec<ViewNode>,
}

pub enum TranscriptAction {
    Append(ViewNode),
    Extend(Vec<ViewNode>),
}

impl Reducible for Transcript {
    type Action = TranscriptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut nodes = self.nodes.clone();
        match action {
            TranscriptAction::Append(node) => nodes.push(node),
            TranscriptAction::Extend(more) => nodes.extend(more),
        }
        Rc::new(Self { nodes })
    }
}

/// Bridges the controller's writes onto Yew state handles.
#[derive(Clone)]
pub struct WidgetPorts {
    pub transcript: UseReducerHandle<Transcript>,
    pub chips: UseStateHandle<Vec<String>>,
    pub input: UseStateHandle<String>,
}

impl ViewPorts for WidgetPorts {
    fn append_message(&self, message: ChatMessage) {
        self.transcript
            .dispatch(TranscriptAction::Append(ViewNode::bubble(
                message.role,
                message.text,
            )));
    }

    fn append_reply(&self, nodes: Vec<ViewNode>) {
        self.transcript.dispatch(TranscriptAction::Extend(nodes));
    }

    fn set_chips(&self, chips: Vec<String>) {
        self.chips.set(chips);
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }
}
