use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use zoomer::{
    BoxLayoutStyle, Events, Listener, Point, Rect, RenderTarget, Surface, TransformStyle,
    Transition, Viewport,
};

/// Identifies an element registered on a [`HeadlessSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u32);

/// An in-memory surface that records every style write.
///
/// Useful for simulations, server-side layout, and tests. The scroll position is clamped to the
/// scrollable range defined by `content` and the viewport.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    viewport: Viewport,
    content: Viewport,
    scroll: Point,
    renderable: bool,
    supports_transforms: bool,
    elements: BTreeMap<ElementId, Rect>,

    transform_origin: Option<String>,
    transform: String,
    box_layout: BoxLayoutStyle,
    zoomed_marker: bool,
    transition: Option<String>,
    listeners: Vec<Listener>,
    scroll_writes: usize,
}

impl HeadlessSurface {
    /// A surface whose scrollable content is exactly `content` and which supports transforms.
    pub fn new(viewport: Viewport, content: Viewport) -> Self {
        Self {
            viewport,
            content,
            scroll: Point::ZERO,
            renderable: true,
            supports_transforms: true,
            elements: BTreeMap::new(),
            transform_origin: None,
            transform: String::new(),
            box_layout: BoxLayoutStyle::Reset,
            zoomed_marker: false,
            transition: None,
            listeners: Vec::new(),
            scroll_writes: 0,
        }
    }

    pub fn with_transforms(mut self, supports_transforms: bool) -> Self {
        self.supports_transforms = supports_transforms;
        self
    }

    pub fn with_renderable(mut self, renderable: bool) -> Self {
        self.renderable = renderable;
        self
    }

    pub fn with_element(mut self, id: ElementId, rect: Rect) -> Self {
        self.elements.insert(id, rect);
        self
    }

    pub fn set_element(&mut self, id: ElementId, rect: Rect) {
        self.elements.insert(id, rect);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll = self.clamp_scroll(self.scroll);
    }

    /// The largest reachable scroll position.
    pub fn max_scroll(&self) -> Point {
        Point::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }

    pub fn transform_origin(&self) -> Option<&str> {
        self.transform_origin.as_deref()
    }

    /// The current `transform` value; empty when cleared.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    pub fn box_layout(&self) -> BoxLayoutStyle {
        self.box_layout
    }

    pub fn is_marked_zoomed(&self) -> bool {
        self.zoomed_marker
    }

    /// The installed CSS `transition` value, if any.
    pub fn transition(&self) -> Option<&str> {
        self.transition.as_deref()
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes
    }

    fn clamp_scroll(&self, offset: Point) -> Point {
        let max = self.max_scroll();
        Point::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }
}

impl Surface for HeadlessSurface {
    type Element = ElementId;

    fn is_renderable(&self) -> bool {
        self.renderable
    }

    fn supports_transforms(&self) -> bool {
        self.supports_transforms
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn scroll_to(&mut self, offset: Point) {
        self.scroll = self.clamp_scroll(offset);
        self.scroll_writes += 1;
    }

    /// Unknown elements report an empty rectangle at the origin.
    fn bounding_rect(&self, element: &ElementId) -> Rect {
        let rect = self.elements.get(element).copied().unwrap_or_default();
        // Registered rects are in content coordinates; report them relative to the viewport.
        Rect::new(
            rect.x - self.scroll.x,
            rect.y - self.scroll.y,
            rect.width,
            rect.height,
        )
    }

    fn apply_transform(&mut self, _target: &RenderTarget<ElementId>, style: &TransformStyle) {
        if let Some(origin) = style.css_origin() {
            self.transform_origin = Some(origin);
        }
        self.transform = style.css_transform();
    }

    fn apply_box_layout(&mut self, _target: &RenderTarget<ElementId>, style: &BoxLayoutStyle) {
        self.box_layout = *style;
    }

    fn set_zoomed_marker(&mut self, zoomed: bool) {
        self.zoomed_marker = zoomed;
    }

    fn install_transition(&mut self, _target: &RenderTarget<ElementId>, transition: &Transition) {
        self.transition = Some(transition.css());
    }
}

impl Events for HeadlessSurface {
    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn unsubscribe(&mut self, listener: Listener) {
        if let Some(i) = self.listeners.iter().position(|l| *l == listener) {
            self.listeners.remove(i);
        }
    }
}
