//! Relative constraint declarations and the engine that resolves them.
//!
//! The field never computes geometry itself. It declares anchors per element
//! (insets from the container, a center offset, fixed sizes, an edge pinned to
//! a sibling) and the engine turns them into frames for a given bounds.

use std::collections::HashMap;

/// Sub-elements of a field, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Container,
    TrailingStack,
    IconButton,
    Separator,
    ClearButton,
    TitleLabel,
    TextEntry,
}

impl Element {
    pub const ALL: [Element; 7] = [
        Element::Container,
        Element::TrailingStack,
        Element::IconButton,
        Element::Separator,
        Element::ClearButton,
        Element::TitleLabel,
        Element::TextEntry,
    ];
}

/// One relative constraint. Insets and offsets are measured against the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Top(f32),
    Bottom(f32),
    Left(f32),
    Right(f32),
    /// Right edge pinned to the left edge of another element
    RightToLeftOf(Element),
    /// Vertical center offset from the container's center
    CenterY(f32),
    Width(f32),
    Height(f32),
    /// Same height as the container
    FillHeight,
}

/// Axis-aligned rectangle in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Frames produced by one resolve pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLayout {
    frames: HashMap<Element, Frame>,
}

impl ResolvedLayout {
    #[must_use]
    pub fn frame(&self, element: Element) -> Option<Frame> {
        self.frames.get(&element).copied()
    }
}

/// Host layout collaborator
pub trait LayoutEngine {
    /// Drops every anchor previously declared for `element` and installs `anchors`
    fn remake_constraints(&mut self, element: Element, anchors: &[Anchor]);

    /// Lays `children` out left to right inside `stack`; the stack is as wide as
    /// the sum of their declared widths. Elements left out are hidden.
    fn arrange(&mut self, stack: Element, children: &[Element]);

    fn resolve(&self, bounds: Frame) -> ResolvedLayout;
}

/// In-memory constraint store with a single-pass resolver
#[derive(Debug, Clone, Default)]
pub struct ConstraintLayout {
    constraints: HashMap<Element, Vec<Anchor>>,
    arranged: HashMap<Element, Vec<Element>>,
}

impl ConstraintLayout {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn anchors(&self, element: Element) -> &[Anchor] {
        self.constraints.get(&element).map_or(&[], Vec::as_slice)
    }

    fn declared_width(&self, element: Element) -> f32 {
        self.anchors(element)
            .iter()
            .find_map(|anchor| match anchor {
                Anchor::Width(width) => Some(*width),
                _ => None,
            })
            .unwrap_or(0.0)
    }
}

impl LayoutEngine for ConstraintLayout {
    fn remake_constraints(&mut self, element: Element, anchors: &[Anchor]) {
        self.constraints.insert(element, anchors.to_vec());
    }

    fn arrange(&mut self, stack: Element, children: &[Element]) {
        self.arranged.insert(stack, children.to_vec());
    }

    fn resolve(&self, bounds: Frame) -> ResolvedLayout {
        let mut frames = HashMap::new();

        let container = self
            .anchors(Element::Container)
            .iter()
            .fold(bounds, |frame, anchor| match anchor {
                Anchor::Height(height) => Frame {
                    height: *height,
                    ..frame
                },
                Anchor::Width(width) => Frame {
                    width: *width,
                    ..frame
                },
                _ => frame,
            });
        frames.insert(Element::Container, container);

        for element in Element::ALL {
            if frames.contains_key(&element) {
                continue;
            }
            let children = self.arranged.get(&element);
            if !self.constraints.contains_key(&element) && children.is_none() {
                continue;
            }

            let mut anchors = self.anchors(element).to_vec();
            if let Some(children) = children {
                let width = children
                    .iter()
                    .map(|child| self.declared_width(*child))
                    .sum();
                anchors.retain(|anchor| !matches!(anchor, Anchor::Width(_)));
                anchors.push(Anchor::Width(width));
            }

            let frame = resolve_frame(&anchors, container, &frames);
            frames.insert(element, frame);

            if let Some(children) = children {
                let mut cursor = frame.x;
                for child in children {
                    let width = self.declared_width(*child);
                    frames.insert(*child, Frame::new(cursor, frame.y, width, frame.height));
                    cursor += width;
                }
            }
        }

        ResolvedLayout { frames }
    }
}

fn resolve_frame(anchors: &[Anchor], container: Frame, frames: &HashMap<Element, Frame>) -> Frame {
    let mut left = None;
    let mut right = None;
    let mut width = None;
    let mut top = None;
    let mut bottom = None;
    let mut height = None;
    let mut center_y = None;

    for anchor in anchors {
        match *anchor {
            Anchor::Top(inset) => top = Some(container.y + inset),
            Anchor::Bottom(inset) => bottom = Some(container.max_y() - inset),
            Anchor::Left(inset) => left = Some(container.x + inset),
            Anchor::Right(inset) => right = Some(container.max_x() - inset),
            Anchor::RightToLeftOf(other) => {
                right = Some(frames.get(&other).map_or(container.max_x(), |frame| frame.x));
            }
            Anchor::CenterY(offset) => center_y = Some(container.mid_y() + offset),
            Anchor::Width(value) => width = Some(value),
            Anchor::Height(value) => height = Some(value),
            Anchor::FillHeight => height = Some(container.height),
        }
    }

    let (x, resolved_width) = match (left, right, width) {
        (Some(left), Some(right), _) => (left, right - left),
        (Some(left), None, Some(width)) => (left, width),
        (None, Some(right), Some(width)) => (right - width, width),
        (Some(left), None, None) => (left, container.max_x() - left),
        (None, Some(right), None) => (container.x, right - container.x),
        (None, None, Some(width)) => (container.x, width),
        (None, None, None) => (container.x, container.width),
    };

    let (y, resolved_height) = if let (Some(top), Some(bottom)) = (top, bottom) {
        (top, bottom - top)
    } else if let Some(center) = center_y {
        let height = height.unwrap_or(0.0);
        (center - height / 2.0, height)
    } else {
        match (top, bottom, height) {
            (Some(top), None, Some(height)) => (top, height),
            (None, Some(bottom), Some(height)) => (bottom - height, height),
            (Some(top), None, None) => (top, container.max_y() - top),
            (None, Some(bottom), None) => (container.y, bottom - container.y),
            (None, None, Some(height)) => (container.y, height),
            (None, None, None) => (container.y, container.height),
            (Some(top), Some(bottom), _) => (top, bottom - top),
        }
    };

    Frame::new(x, y, resolved_width.max(0.0), resolved_height.max(0.0))
}
