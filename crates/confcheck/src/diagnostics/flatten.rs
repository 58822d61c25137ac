//! Flattening of outcome trees.

use crate::foundation::{Outcome, OutcomeKind};

/// One node of a flattened outcome tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic<'a> {
    /// Dot-joined keys and indices from the base path to this node.
    pub path: String,
    pub outcome: &'a Outcome,
    /// Verdict of `outcome`, computed once while flattening.
    pub ok: bool,
}

/// Flattens `outcome` into path-qualified entries.
///
/// Each item of a collection is flattened at `base_path.<item>` (or just
/// `<item>` when `base_path` is empty). All descendants are emitted before
/// the node itself, so the last entry is always `outcome` at `base_path`.
#[must_use]
pub fn flatten<'a>(outcome: &'a Outcome, base_path: &str) -> Vec<Diagnostic<'a>> {
    let mut entries = Vec::new();
    flatten_into(outcome, base_path.to_owned(), &mut entries);
    entries
}

// Returns the verdict of `outcome` so parents never re-walk their subtree.
fn flatten_into<'a>(outcome: &'a Outcome, path: String, entries: &mut Vec<Diagnostic<'a>>) -> bool {
    let ok = match outcome.kind() {
        OutcomeKind::Passed => true,
        OutcomeKind::Failed(_) => false,
        OutcomeKind::Collection(items) => {
            let mut all_ok = true;
            for item in items {
                let child = if path.is_empty() {
                    item.path.to_string()
                } else {
                    format!("{path}.{}", item.path)
                };
                all_ok &= flatten_into(&item.outcome, child, entries);
            }
            all_ok
        }
    };
    entries.push(Diagnostic { path, outcome, ok });
    ok
}
