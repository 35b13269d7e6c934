use serde::{Deserialize, Serialize};

/// Visualization tag attached to an array slot for the duration of one
/// recorded step. The tag is rewritten constantly while a recorder runs and
/// carries no meaning outside the step that holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
}

/// One array slot: the value under inspection plus its current tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: i32,
    pub state: ElementState,
}

impl Element {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            state: ElementState::Default,
        }
    }
}

/// Normalises raw input values into the element representation every
/// recorder works on. All elements start out untagged.
pub fn element_array(values: &[i32]) -> Vec<Element> {
    values.iter().copied().map(Element::new).collect()
}
