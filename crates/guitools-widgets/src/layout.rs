//! Geometry and layout constraints handed to the host layout engine.

/// Position and size of a control within its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }
}

/// Edge of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// What a constraint is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The page or dialog owning the control.
    Owner,
    /// A companion control of the same bundle, by name.
    Sibling(&'static str),
}

/// Keeps `edge` at `offset` from `anchor_edge` of `anchor` when the owner is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub edge: Edge,
    pub anchor: Anchor,
    pub anchor_edge: Edge,
    pub offset: i32,
}

/// State shared by all the host widgets: geometry, visibility and constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rect: Rect,
    visible: bool,
    constraints: Vec<Constraint>,
}

impl Frame {
    /// Create a visible frame without constraints.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            visible: true,
            constraints: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, show: bool) {
        self.visible = show;
    }

    /// Declare a constraint, replacing any previous one on the same edge.
    pub fn set_constraint(&mut self, edge: Edge, anchor: Anchor, anchor_edge: Edge, offset: i32) {
        self.constraints.retain(|c| c.edge != edge);
        self.constraints.push(Constraint { edge, anchor, anchor_edge, offset });
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraint declared on `edge`, if any.
    pub fn constraint(&self, edge: Edge) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.edge == edge)
    }
}
