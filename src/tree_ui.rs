//! Terminal rendering and interactive pieces of the content-tree editor.

use dialoguer::Select;

use eduhub_core::types::NodeId;
use eduhub_core::{AppError, AppResult};
use eduhub_entity::node::{Node, SelectState};
use eduhub_tree::{collect_selected, toggle_open, toggle_select, visible_rows};

/// Indentation per tree level, in spaces.
const INDENT: usize = 2;

/// One line of a rendered node row: disclosure marker, checkbox (picker
/// only), kind icon, lock marker, name.
fn row_label(depth: usize, node: &Node, with_checkbox: bool) -> String {
    let disclosure = if node.is_folder() {
        if node.is_open { "▼" } else { "▶" }
    } else {
        " "
    };
    // Glyph precedence matches the picker: partial beats everything, then
    // the node's own flag. A fully-covered but unselected folder still
    // draws the empty box.
    let checkbox = if with_checkbox {
        match (node.state, node.selected) {
            (SelectState::Partial, _) => "[-] ",
            (_, true) => "[x] ",
            _ => "[ ] ",
        }
    } else {
        ""
    };
    let icon = if node.is_folder() { "📁" } else { "📄" };
    let lock = if node.is_locked { "🔒 " } else { "" };
    format!(
        "{}{} {}{} {}{}",
        " ".repeat(depth * INDENT),
        disclosure,
        checkbox,
        icon,
        lock,
        node.name
    )
}

/// Print every node of a forest regardless of disclosure state.
pub fn print_tree_expanded(forest: &[Node]) {
    if forest.is_empty() {
        println!("(empty)");
        return;
    }
    fn walk(forest: &[Node], depth: usize) {
        for node in forest {
            let icon = if node.is_folder() { "📁" } else { "📄" };
            let lock = if node.is_locked { "🔒 " } else { "" };
            println!(
                "{}{} {}{}",
                " ".repeat(depth * INDENT),
                icon,
                lock,
                node.name
            );
            walk(&node.children, depth + 1);
        }
    }
    walk(forest, 0);
}

/// Flatten the whole forest (disclosure ignored) for node pickers.
pub fn all_rows(forest: &[Node]) -> Vec<(usize, &Node)> {
    fn walk<'a>(forest: &'a [Node], depth: usize, out: &mut Vec<(usize, &'a Node)>) {
        for node in forest {
            out.push((depth, node));
            walk(&node.children, depth + 1, out);
        }
    }
    let mut rows = Vec::new();
    walk(forest, 0, &mut rows);
    rows
}

/// Let the operator pick one node out of the forest, or nothing.
pub fn pick_node(forest: &[Node], prompt: &str) -> AppResult<Option<NodeId>> {
    let rows = all_rows(forest);
    if rows.is_empty() {
        return Ok(None);
    }
    let mut items: Vec<String> = rows
        .iter()
        .map(|(depth, node)| row_label(*depth, node, false))
        .collect();
    items.push("(none)".to_string());

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(rows.get(choice).map(|(_, node)| node.id))
}

/// The file-manager picker: tri-state selection over a tree with
/// expand/collapse, returning the minimal covering set of picked nodes.
pub fn run_picker(mut forest: Vec<Node>, prompt: &str) -> AppResult<Vec<Node>> {
    loop {
        let rows = visible_rows(&forest);
        let mut items: Vec<String> = rows
            .iter()
            .map(|row| row_label(row.depth, row.node, true))
            .collect();
        let done_index = items.len();
        items.push("── Add selected".to_string());
        items.push("── Cancel".to_string());

        // Borrowed ids before the forest is replaced below.
        let row_ids: Vec<(NodeId, bool)> = rows
            .iter()
            .map(|row| (row.node.id, row.node.is_folder()))
            .collect();

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        if choice == done_index {
            return Ok(collect_selected(&forest));
        }
        if choice == done_index + 1 {
            return Ok(Vec::new());
        }

        let (id, is_folder) = row_ids[choice];
        if is_folder {
            let action = Select::new()
                .with_prompt("Folder action")
                .items(&["Toggle selection", "Open/close", "Back"])
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            match action {
                0 => forest = toggle_select(&forest, id),
                1 => forest = toggle_open(&forest, id),
                _ => {}
            }
        } else {
            forest = toggle_select(&forest, id);
        }
    }
}

/// Map a prompt failure into the application error type.
pub fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {err}"))
}
