//! Render an error tree into display lines.
//!
//! The formatter is a pure function of the tree: same tree in, same lines
//! out, with no display or I/O concern mixed in. Each node that carries at
//! least one message becomes one line of the form
//!
//! ```text
//! <indent><path> -- <messages joined by ", ">
//! ```
//!
//! where the indent is one fixed four-space unit per level of nesting and the
//! path is the dotted field path from the root ("colors.primary"). The root's
//! own messages have no field name, so they render under the fixed label
//! "Global". Nodes that only connect deeper failures to the root emit
//! nothing; the failure is reported once, at its own path.

use crate::validator::ErrorTree;

const INDENT: &str = "    ";
const SEPARATOR: &str = " -- ";
const ROOT_LABEL: &str = "Global";

// A node that is present in the tree but carries no text should not occur,
// but a report must never crash over one.
const EMPTY_MARKER: &str = "No error";

/// Format `tree` into ordered display lines.
///
/// Lines appear in depth-first pre-order, children in the field declaration
/// order inherited from the schema.
pub fn lines(tree: &ErrorTree) -> Vec<String> {
    let mut out = Vec::new();
    walk(tree, 0, "", &mut out);
    out
}

/// Format `tree` as a single newline-joined report.
pub fn render(tree: &ErrorTree) -> String {
    lines(tree).join("\n")
}

fn walk(tree: &ErrorTree, depth: usize, path: &str, out: &mut Vec<String>) {
    let label = if depth == 0 { ROOT_LABEL } else { path };

    if !tree.messages().is_empty() {
        out.push(format!(
            "{}{}{}{}",
            INDENT.repeat(depth),
            label,
            SEPARATOR,
            tree.messages().join(", ")
        ));
    } else if tree.children().is_empty() {
        out.push(format!(
            "{}{}{}{}",
            INDENT.repeat(depth),
            label,
            SEPARATOR,
            EMPTY_MARKER
        ));
    }

    for (name, child) in tree.children() {
        let child_path = if path.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", path, name)
        };
        walk(child, depth + 1, &child_path, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_messages_use_the_global_label() {
        let tree = ErrorTree::leaf("expected an object, found array");
        assert_eq!(lines(&tree), vec!["Global -- expected an object, found array"]);
    }

    #[test]
    fn messages_on_one_node_share_a_line() {
        let mut tree = ErrorTree::default();
        tree.push("first problem".to_owned());
        tree.push("second problem".to_owned());
        assert_eq!(lines(&tree), vec!["Global -- first problem, second problem"]);
    }

    #[test]
    fn nested_failures_indent_by_depth_with_dotted_paths() {
        let mut colors = ErrorTree::default();
        colors.attach("primary", ErrorTree::leaf("not a valid color"));

        let mut tree = ErrorTree::default();
        tree.attach("fonts", ErrorTree::leaf("required key missing"));
        tree.attach("colors", colors);

        assert_eq!(
            lines(&tree),
            vec![
                "    fonts -- required key missing",
                "        colors.primary -- not a valid color",
            ]
        );
    }

    #[test]
    fn connector_nodes_emit_no_line() {
        // "colors" itself has no message above; only the deep failure shows.
        let mut inner = ErrorTree::default();
        inner.attach("deep", ErrorTree::leaf("unknown key"));
        let mut tree = ErrorTree::default();
        tree.attach("outer", inner);

        assert_eq!(lines(&tree), vec!["        outer.deep -- unknown key"]);
    }

    #[test]
    fn empty_node_degrades_to_a_placeholder() {
        assert_eq!(lines(&ErrorTree::default()), vec!["Global -- No error"]);
    }

    #[test]
    fn formatting_is_idempotent() {
        let mut tree = ErrorTree::default();
        tree.push("expected an object, found string".to_owned());
        tree.attach("a", ErrorTree::leaf("required key missing"));

        assert_eq!(lines(&tree), lines(&tree));
        assert_eq!(render(&tree), render(&tree));
    }
}
