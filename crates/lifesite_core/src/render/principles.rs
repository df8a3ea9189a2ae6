use super::html::{element_id, empty_state, escape_html};
use super::RenderContext;
use crate::filter::ViewState;
use crate::hierarchy::{build_hierarchy, PrincipleNode};
use crate::model::Principle;

pub fn render_principles(
    principles: &[Principle],
    view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    let forest = build_hierarchy(principles);
    if forest.is_empty() {
        return empty_state("No principles yet.");
    }
    let mut html = String::from("<div class=\"space-y-4 principles\">");
    let mut steps: Vec<Step<'_, '_>> = forest.iter().rev().map(Step::Open).collect();
    while let Some(step) = steps.pop() {
        match step {
            Step::Close => html.push_str("</div></details>"),
            Step::Open(node) => {
                if open_node(node, view, &mut html) {
                    steps.push(Step::Close);
                    steps.extend(node.children.iter().rev().map(Step::Open));
                }
            }
        }
    }
    html.push_str("</div>");
    html
}

enum Step<'t, 'a> {
    Open(&'t PrincipleNode<'a>),
    Close,
}

/// Writes a node's opening markup. Returns whether children follow and a
/// closing step is owed.
fn open_node(node: &PrincipleNode<'_>, view: &ViewState, html: &mut String) -> bool {
    let principle = node.record;
    let id = element_id("principle", &principle.id);
    let focused = if view.is_focused(&id) {
        " hash-highlighted"
    } else {
        ""
    };
    let body = format!(
        "<div class=\"p-4\"><p class=\"text-subtext1\">{}</p></div>",
        escape_html(&principle.content)
    );

    if node.children.is_empty() {
        html.push_str(&format!(
            "<div id=\"{}\" class=\"principle depth-{}{focused}\">\
             <h3 class=\"text-lg font-semibold\">{}</h3>{body}</div>",
            escape_html(&id),
            node.depth,
            escape_html(&principle.title)
        ));
        return false;
    }

    let open = if view.is_expanded(&principle.id) || view.is_expanded(&id) {
        " open"
    } else {
        ""
    };
    html.push_str(&format!(
        "<details id=\"{}\" class=\"principle depth-{}{focused}\"{open}>\
         <summary class=\"text-lg font-semibold cursor-pointer\">{}</summary>{body}\
         <div class=\"pl-4\">",
        escape_html(&id),
        node.depth,
        escape_html(&principle.title)
    ));
    true
}
