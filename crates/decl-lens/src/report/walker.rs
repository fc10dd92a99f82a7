use crate::{error::ReportError, report::node::DeclNode};

/// Pre-order walk over every declaration below a translation unit.
///
/// Parents are visited before their children and siblings in source order.
/// Non-declaration nodes (function bodies, statements, expressions) are not
/// visited but are descended into, so local variables and nested records
/// are reached. The root itself is never visited.
///
/// Implicit declarations are skipped together with everything below them.
/// Below a template declaration only the template parameters and the first
/// templated declaration (the pattern) are walked; instantiations that the
/// dump lists after the pattern are not.
pub struct TreeWalker;

impl TreeWalker {
    pub fn walk<N, F>(
        root: &N,
        mut visit: F,
    ) -> Result<(), ReportError>
    where
        N: DeclNode,
        F: FnMut(&N) -> Result<(), ReportError>,
    {
        if !root.is_translation_unit() {
            return Err(ReportError::InvalidTree("root is not a translation unit".to_string()));
        }

        // Explicit stack so deeply nested expressions cannot exhaust the
        // call stack.
        let mut stack: Vec<&N> = root.children().iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.is_implicit() {
                continue;
            }
            match node.decl_kind() {
                Some(kind) if kind.is_template() => {
                    visit(node)?;
                    stack.extend(template_children(node).into_iter().rev());
                }
                Some(_) => {
                    visit(node)?;
                    stack.extend(node.children().iter().rev());
                }
                None => stack.extend(node.children().iter().rev()),
            }
        }
        Ok(())
    }
}

fn template_children<N: DeclNode>(template: &N) -> Vec<&N> {
    let mut pattern_seen = false;
    template
        .children()
        .iter()
        .filter(|child| match child.decl_kind() {
            Some(kind) if kind.is_template_parameter() => true,
            Some(_) if !pattern_seen => {
                pattern_seen = true;
                true
            }
            _ => false,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/report/walker_tests.rs"]
mod tests;
