mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Count every element in the tree, root included.
pub fn count_elements(root: &Element) -> usize {
    match &root.content {
        Content::Children(children) => 1 + children.iter().map(count_elements).sum::<usize>(),
        _ => 1,
    }
}
