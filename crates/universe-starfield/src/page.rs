//! Host page model.
//!
//! The page plays the role of the document the starfield lives in: it owns
//! the viewport, the root attributes (the theme signal among them), the body
//! that drawing surfaces are mounted into, and the frame scheduler. Changes
//! are queued as [`PageEvent`]s and dispatched by the host between frames.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use universe_core::{Size, THEME_ATTRIBUTE, Theme};

use crate::frame::FrameScheduler;
use crate::surface::Surface;

/// Identity of one mounted element. Unique for the page's lifetime, unlike
/// element ids which may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

/// Loading state of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
}

/// Notification queued by the page for its subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page became interactive.
    Ready,
    /// The viewport changed size.
    Resized(Size),
    /// An observed root attribute changed value.
    AttributeChanged { name: String, value: Option<String> },
}

#[derive(Debug)]
struct Element<S> {
    node: NodeId,
    id: String,
    surface: S,
}

/// A host page holding drawing surfaces of type `S`.
#[derive(Debug)]
pub struct Page<S> {
    viewport: Size,
    ready_state: ReadyState,
    attributes: BTreeMap<String, String>,
    observed: BTreeSet<String>,
    /// `None` until the page is interactive.
    body: Option<Vec<Element<S>>>,
    events: VecDeque<PageEvent>,
    frames: FrameScheduler,
    next_node: u64,
}

impl<S: Surface> Page<S> {
    /// An interactive page with an empty body.
    pub fn new(viewport: Size) -> Self {
        Self {
            ready_state: ReadyState::Interactive,
            body: Some(Vec::new()),
            ..Self::loading(viewport)
        }
    }

    /// A page that is still loading and has no body yet.
    pub fn loading(viewport: Size) -> Self {
        Self {
            viewport,
            ready_state: ReadyState::Loading,
            attributes: BTreeMap::new(),
            observed: BTreeSet::new(),
            body: None,
            events: VecDeque::new(),
            frames: FrameScheduler::new(),
            next_node: 0,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn is_interactive(&self) -> bool {
        self.ready_state == ReadyState::Interactive
    }

    /// Finish loading: create the body and queue [`PageEvent::Ready`].
    pub fn mark_interactive(&mut self) {
        if self.is_interactive() {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        self.body.get_or_insert_with(Vec::new);
        self.events.push_back(PageEvent::Ready);
    }

    /// Change the viewport and queue [`PageEvent::Resized`].
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.events.push_back(PageEvent::Resized(viewport));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set a root attribute. Observers are notified only when the value
    /// actually changes.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let previous = self.attributes.insert(name.to_string(), value.to_string());
        if previous.as_deref() != Some(value) {
            self.notify_attribute(name, Some(value.to_string()));
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        if self.attributes.remove(name).is_some() {
            self.notify_attribute(name, None);
        }
    }

    /// Subscribe to value changes of a root attribute.
    pub fn observe_attribute(&mut self, name: &str) {
        self.observed.insert(name.to_string());
    }

    fn notify_attribute(&mut self, name: &str, value: Option<String>) {
        if self.observed.contains(name) {
            self.events.push_back(PageEvent::AttributeChanged {
                name: name.to_string(),
                value,
            });
        }
    }

    /// Theme currently signalled by the root attribute.
    pub fn theme(&self) -> Theme {
        Theme::from_attribute(self.attribute(THEME_ATTRIBUTE))
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        self.events.drain(..).collect()
    }

    pub fn frames(&self) -> &FrameScheduler {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameScheduler {
        &mut self.frames
    }

    /// Append a new surface to the body. Returns `None` when the body is not
    /// available yet.
    pub fn mount(&mut self, id: &str) -> Option<NodeId> {
        let body = self.body.as_mut()?;
        self.next_node += 1;
        let node = NodeId(self.next_node);
        body.push(Element {
            node,
            id: id.to_string(),
            surface: S::default(),
        });
        Some(node)
    }

    /// Remove every element carrying `id`. Returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let Some(body) = self.body.as_mut() else {
            return 0;
        };
        let before = body.len();
        body.retain(|el| el.id != id);
        before - body.len()
    }

    /// Number of mounted elements carrying `id`.
    pub fn count_by_id(&self, id: &str) -> usize {
        self.body
            .iter()
            .flatten()
            .filter(|el| el.id == id)
            .count()
    }

    /// First mounted surface carrying `id`.
    pub fn surface_by_id(&self, id: &str) -> Option<&S> {
        self.body
            .iter()
            .flatten()
            .find(|el| el.id == id)
            .map(|el| &el.surface)
    }

    pub fn surface(&self, node: NodeId) -> Option<&S> {
        self.body
            .iter()
            .flatten()
            .find(|el| el.node == node)
            .map(|el| &el.surface)
    }

    pub fn surface_mut(&mut self, node: NodeId) -> Option<&mut S> {
        self.body
            .iter_mut()
            .flatten()
            .find(|el| el.node == node)
            .map(|el| &mut el.surface)
    }
}
