//! Rendering surface abstraction
//!
//! Elements never talk to the DOM directly. They mutate a [`ButtonSurface`]
//! (the internal subtree an element owns) and read slot state through
//! [`SlotContent`]. The browser implementation lives in `platform::web`;
//! [`VirtualButton`] and [`VirtualSlot`] keep the same state in memory.

/// Marker class carried by visually hidden accessibility text
pub const SCREEN_READER_CLASS: &str = "sr-only";

/// Mutations an element may apply to the internal button it owns
pub trait ButtonSurface {
    /// Set the button's id; the empty string clears it
    fn set_id(&mut self, id: &str);

    /// Set the button's disabled state
    fn set_disabled(&mut self, disabled: bool);

    /// Add a class; adding a present class is a no-op
    fn add_class(&mut self, class: &str);

    /// Remove a class; removing an absent class is a no-op
    fn remove_class(&mut self, class: &str);

    /// Set the button's own label text, leaving child nodes in place
    fn set_label_text(&mut self, text: &str);

    /// Append the accessibility node with its initial text
    fn create_accessibility_node(&mut self, text: &str);

    /// Update the text of the existing accessibility node
    fn set_accessibility_text(&mut self, text: &str);

    /// Insert the icon node with its initial classes
    fn create_icon_node(&mut self, classes: &[String]);

    /// Replace the classes of the existing icon node
    fn set_icon_classes(&mut self, classes: &[String]);
}

/// Read-only view of a content slot
pub trait SlotContent {
    /// Number of light-DOM nodes currently assigned to the slot
    fn assigned_node_count(&self) -> usize;
}

/// A mutation recorded by [`VirtualButton`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    AddClass(String),
    RemoveClass(String),
    SetLabel(String),
    CreateAccessibilityNode,
    CreateIconNode,
}

/// A child element of a [`VirtualButton`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualNode {
    /// Tag name
    pub tag: &'static str,
    /// Class list
    pub classes: Vec<String>,
    /// Text content
    pub text: String,
}

/// In-memory button element
#[derive(Debug, Clone, Default)]
pub struct VirtualButton {
    id: String,
    disabled: bool,
    classes: Vec<String>,
    label: String,
    children: Vec<VirtualNode>,
    ops: Vec<SurfaceOp>,
}

impl VirtualButton {
    /// Create an empty button
    pub fn new() -> Self {
        Self::default()
    }

    /// The button's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the button is disabled
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Class list in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the class list contains a class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The button's own label text
    pub fn label_text(&self) -> &str {
        &self.label
    }

    /// Concatenated text of the button and its children, like `Node.textContent`
    pub fn text_content(&self) -> String {
        let mut text = self.label.clone();
        for child in &self.children {
            text.push_str(&child.text);
        }
        text
    }

    /// Child elements
    pub fn children(&self) -> &[VirtualNode] {
        &self.children
    }

    /// The accessibility node, if created
    pub fn accessibility_node(&self) -> Option<&VirtualNode> {
        self.children
            .iter()
            .find(|child| child.classes.iter().any(|c| c == SCREEN_READER_CLASS))
    }

    /// The icon node, if created
    pub fn icon_node(&self) -> Option<&VirtualNode> {
        self.children.iter().find(|child| child.tag == "i")
    }

    /// Every recorded mutation, oldest first
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded mutations
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl ButtonSurface for VirtualButton {
    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
            self.ops.push(SurfaceOp::AddClass(class.to_string()));
        }
    }

    fn remove_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.classes.retain(|c| c != class);
            self.ops.push(SurfaceOp::RemoveClass(class.to_string()));
        }
    }

    fn set_label_text(&mut self, text: &str) {
        self.label = text.to_string();
        self.ops.push(SurfaceOp::SetLabel(text.to_string()));
    }

    fn create_accessibility_node(&mut self, text: &str) {
        self.children.push(VirtualNode {
            tag: "span",
            classes: vec![SCREEN_READER_CLASS.to_string()],
            text: text.to_string(),
        });
        self.ops.push(SurfaceOp::CreateAccessibilityNode);
    }

    fn set_accessibility_text(&mut self, text: &str) {
        if let Some(node) = self
            .children
            .iter_mut()
            .find(|child| child.classes.iter().any(|c| c == SCREEN_READER_CLASS))
        {
            node.text = text.to_string();
        }
    }

    fn create_icon_node(&mut self, classes: &[String]) {
        self.children.insert(
            0,
            VirtualNode {
                tag: "i",
                classes: classes.to_vec(),
                text: String::new(),
            },
        );
        self.ops.push(SurfaceOp::CreateIconNode);
    }

    fn set_icon_classes(&mut self, classes: &[String]) {
        if let Some(node) = self.children.iter_mut().find(|child| child.tag == "i") {
            node.classes = classes.to_vec();
        }
    }
}

/// In-memory content slot
#[derive(Debug, Clone, Default)]
pub struct VirtualSlot {
    assigned: Vec<String>,
}

impl VirtualSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a light-DOM node, identified by a description
    pub fn assign(&mut self, node: impl Into<String>) {
        self.assigned.push(node.into());
    }

    /// Remove every assigned node
    pub fn clear(&mut self) {
        self.assigned.clear();
    }

    /// Assigned nodes
    pub fn assigned(&self) -> &[String] {
        &self.assigned
    }
}

impl SlotContent for VirtualSlot {
    fn assigned_node_count(&self) -> usize {
        self.assigned.len()
    }
}
