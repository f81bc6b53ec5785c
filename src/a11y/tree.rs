//! Accessibility tree snapshot
//!
//! Derives the ARIA-equivalent semantics of the current UI state: roles,
//! accessible names and states such as `expanded`, `activedescendant`,
//! `invalid` or `modal`. The inspector panel renders it and
//! `inclusive inspect` prints it as JSON.

use super::dialog::{self, Dialog};
use super::focus::FocusTarget;
use super::listbox::{self, Listbox};
use super::{announcer, LiveRegion};
use crate::form::{ContactForm, Field};
use serde::Serialize;
use std::collections::BTreeMap;

pub const INTRO_HEADING_ID: &str = "intro-heading";
pub const INTRO_HEADING: &str = "Build accessible experiences with intention";
pub const CONTACT_HEADING_ID: &str = "contact-heading";
pub const CONTACT_HEADING: &str = "Stay in touch";
pub const CONTACT_DESCRIPTION_ID: &str = "contact-description";
pub const MODAL_SECTION_HEADING_ID: &str = "modal-demo-heading";
pub const MODAL_SECTION_HEADING: &str = "Custom modal dialog";
pub const SUBSCRIBE_LABEL: &str = "Email me curated accessibility updates each month.";
pub const SUBMIT_LABEL: &str = "Send request";
pub const OPEN_DIALOG_LABEL: &str = "Learn how we plan rollouts";
pub const STATUS_ID: &str = "sr-announcement";

/// One node of the tree
#[derive(Debug, Clone, Serialize)]
pub struct AccessibleNode {
    pub id: String,
    pub role: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AccessibleNode>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl AccessibleNode {
    fn new(id: impl Into<String>, role: &'static str, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            name: name.into(),
            states: BTreeMap::new(),
            focused: false,
            children: Vec::new(),
        }
    }

    fn state(mut self, key: &'static str, value: impl ToString) -> Self {
        self.states.insert(key, value.to_string());
        self
    }

    fn focused_if(mut self, focus: FocusTarget, target: FocusTarget) -> Self {
        self.focused = focus == target;
        self
    }

    fn child(mut self, node: AccessibleNode) -> Self {
        self.children.push(node);
        self
    }

    fn children(mut self, nodes: impl IntoIterator<Item = AccessibleNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    #[cfg(test)]
    pub fn get_state(&self, key: &str) -> Option<&str> {
        self.states.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessibilityTree {
    /// Element id of the focused control
    pub focused: &'static str,
    pub nodes: Vec<AccessibleNode>,
}

impl AccessibilityTree {
    pub fn snapshot(
        form: &ContactForm,
        listbox: &Listbox,
        dialog: &Dialog,
        focus: FocusTarget,
        live: &LiveRegion,
    ) -> Self {
        let intro_heading = AccessibleNode::new(INTRO_HEADING_ID, "heading", INTRO_HEADING)
            .state("level", 1);
        let intro = AccessibleNode::new("intro", "banner", INTRO_HEADING)
            .state("labelledby", INTRO_HEADING_ID)
            .child(intro_heading);

        let contact = AccessibleNode::new("contact", "region", CONTACT_HEADING)
            .state("labelledby", CONTACT_HEADING_ID)
            .child(
                AccessibleNode::new("contact-form", "form", CONTACT_HEADING)
                    .state("describedby", CONTACT_DESCRIPTION_ID)
                    .children(Field::ALL.into_iter().flat_map(|f| field_nodes(form, f, focus)))
                    .child(topic_trigger(listbox, focus))
                    .children(topic_list(listbox, focus))
                    .child(
                        AccessibleNode::new(
                            FocusTarget::SubscribeCheckbox.element_id(),
                            "checkbox",
                            SUBSCRIBE_LABEL,
                        )
                        .state("checked", form.subscribe)
                        .focused_if(focus, FocusTarget::SubscribeCheckbox),
                    )
                    .child(
                        AccessibleNode::new(
                            FocusTarget::SubmitButton.element_id(),
                            "button",
                            SUBMIT_LABEL,
                        )
                        .focused_if(focus, FocusTarget::SubmitButton),
                    ),
            );

        let modal_section = AccessibleNode::new("modal-section", "region", MODAL_SECTION_HEADING)
            .state("labelledby", MODAL_SECTION_HEADING_ID)
            .child(
                AccessibleNode::new(
                    FocusTarget::OpenDialogButton.element_id(),
                    "button",
                    OPEN_DIALOG_LABEL,
                )
                .focused_if(focus, FocusTarget::OpenDialogButton),
            )
            .children(dialog_node(dialog, focus));

        let status = AccessibleNode::new(STATUS_ID, "status", live.text())
            .state("live", announcer::POLITENESS);

        Self {
            focused: focus.element_id(),
            nodes: vec![intro, contact, modal_section, status],
        }
    }

    /// Depth-first search by element id
    pub fn find(&self, id: &str) -> Option<&AccessibleNode> {
        fn walk<'a>(nodes: &'a [AccessibleNode], id: &str) -> Option<&'a AccessibleNode> {
            nodes
                .iter()
                .find_map(|n| (n.id == id).then_some(n).or_else(|| walk(&n.children, id)))
        }
        walk(&self.nodes, id)
    }

    /// Nodes in document order with their depth
    pub fn flatten(&self) -> Vec<(usize, &AccessibleNode)> {
        fn walk<'a>(
            nodes: &'a [AccessibleNode],
            depth: usize,
            out: &mut Vec<(usize, &'a AccessibleNode)>,
        ) {
            for node in nodes {
                out.push((depth, node));
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, 0, &mut out);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Text field plus its inline error (an alert) when invalid
fn field_nodes(form: &ContactForm, field: Field, focus: FocusTarget) -> Vec<AccessibleNode> {
    let target = FocusTarget::from_field(field);
    let error = form.errors().get(field);

    let mut input = AccessibleNode::new(field.input_id(), "textbox", field.label())
        .state("invalid", error.is_some())
        .state("value", form.input(field).value())
        .focused_if(focus, target);
    if field.is_multiline() {
        input = input.state("multiline", true);
    }

    match error {
        Some(message) => vec![
            input.state("describedby", field.error_id()),
            AccessibleNode::new(field.error_id(), "alert", message),
        ],
        None => vec![input],
    }
}

fn topic_trigger(listbox: &Listbox, focus: FocusTarget) -> AccessibleNode {
    let label = listbox.selected_option().label;
    let mut node = AccessibleNode::new(listbox::BUTTON_ID, "button", label)
        .state("haspopup", "listbox")
        .state("expanded", listbox.is_open())
        .state("labelledby", format!("{} {}", listbox::BUTTON_ID, listbox::LABEL_ID))
        .focused_if(focus, FocusTarget::TopicTrigger);
    if listbox.is_open() {
        node = node.state("controls", listbox::LIST_ID);
    }
    node
}

fn topic_list(listbox: &Listbox, focus: FocusTarget) -> Option<AccessibleNode> {
    let active = listbox.active_descendant()?;
    let options = listbox.options().iter().enumerate().map(|(i, option)| {
        AccessibleNode::new(option.element_id(), "option", option.label)
            .state("selected", i == listbox.selected())
    });

    Some(
        AccessibleNode::new(listbox::LIST_ID, "listbox", listbox::LABEL)
            .state("labelledby", listbox::LABEL_ID)
            .state("activedescendant", active)
            .state("tabindex", -1)
            .focused_if(focus, FocusTarget::TopicListbox)
            .children(options),
    )
}

fn dialog_node(dialog: &Dialog, focus: FocusTarget) -> Option<AccessibleNode> {
    if !dialog.is_open() {
        return None;
    }

    let button = |target: FocusTarget, label: &str| {
        AccessibleNode::new(target.element_id(), "button", label).focused_if(focus, target)
    };

    let heading = AccessibleNode::new(dialog::HEADING_ID, "heading", dialog::TITLE)
        .state("level", 3);

    Some(
        AccessibleNode::new("modal", "dialog", dialog::TITLE)
            .state("modal", true)
            .state("labelledby", dialog::HEADING_ID)
            .state("describedby", dialog::DESCRIPTION_ID)
            .child(heading)
            .child(button(FocusTarget::DialogClose, dialog::CLOSE_LABEL))
            .child(AccessibleNode::new(dialog::DESCRIPTION_ID, "paragraph", dialog::DESCRIPTION))
            .child(button(FocusTarget::DialogSoundsGood, dialog::SOUNDS_GOOD_LABEL))
            .child(button(FocusTarget::DialogContinue, dialog::CONTINUE_LABEL)),
    )
}
