//! In-memory [`Host`] for tests: a small element tree with a virtual clock.
//!
//! Selectors support what the page uses: `tag`, `.class`, `tag.class`,
//! compound classes and comma-separated lists. Timers are kept in a table
//! and fired in due order by [`Harness::advance`].

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::host::{Host, ObserverId, Rect, TimerId, VisibilityOptions};
use crate::listener::{EventInput, Listener, Propagation, Route};
use crate::page::Page;

/// Frame duration used for animation frame requests.
pub const FRAME_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: HashMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
}

#[derive(Clone, Copy, Debug)]
struct FakeTimer {
    due: f64,
    period: Option<f64>,
}

#[derive(Debug)]
pub struct FakeHost {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    pub scroll_y: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub loading: bool,
    pub now: f64,
    pub smooth_scrolls: usize,
    next_id: u64,
    timers: BTreeMap<TimerId, FakeTimer>,
    observers: HashMap<ObserverId, Vec<NodeId>>,
    pub observer_options: Vec<VisibilityOptions>,
    pub cancelled: HashSet<TimerId>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    /// An empty `<html><head/><body/></html>` document at scroll 0 in a 1280x800 viewport.
    pub fn new() -> Self {
        let mut host = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            scroll_y: 0.0,
            inner_width: 1280.0,
            inner_height: 800.0,
            loading: false,
            now: 0.0,
            smooth_scrolls: 0,
            next_id: 1,
            timers: BTreeMap::new(),
            observers: HashMap::new(),
            observer_options: Vec::new(),
            cancelled: HashSet::new(),
        };
        host.root = host.alloc("html", "");
        host.head = host.alloc("head", "");
        host.body = host.alloc("body", "");
        host.attach(host.root, host.head);
        host.attach(host.root, host.body);
        host
    }

    fn alloc(&mut self, tag: &str, classes: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_owned(),
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            ..Node::default()
        });
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    // --- Building documents ---

    pub fn body_id(&self) -> NodeId {
        self.body
    }

    pub fn head_id(&self) -> NodeId {
        self.head
    }

    /// Append a new element with space-separated `classes` under `parent`.
    pub fn add(&mut self, parent: NodeId, tag: &str, classes: &str) -> NodeId {
        let id = self.alloc(tag, classes);
        self.attach(parent, id);
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0].attributes.insert(name.to_owned(), value.to_owned());
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.nodes[node.0].rect = rect;
    }

    // --- Inspecting documents ---

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].styles.get(property).map(String::as_str)
    }

    pub fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether `node` is reachable from the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observers.values().any(|nodes| nodes.contains(&node))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn next_timer(&mut self, due: f64, period: Option<f64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, FakeTimer { due, period });
        id
    }

    /// Earliest timer due at or before `until`, rescheduling intervals.
    fn pop_due(&mut self, until: f64) -> Option<(TimerId, f64)> {
        let (id, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= until)
            .min_by(|(a_id, a), (b_id, b)| a.due.total_cmp(&b.due).then(a_id.cmp(b_id)))
            .map(|(id, t)| (*id, *t))?;
        match timer.period {
            Some(period) => {
                self.timers.insert(id, FakeTimer { due: timer.due + period, period: Some(period) });
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some((id, timer.due))
    }

    // --- Selectors ---

    fn descendants(&self, from: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.nodes[from.0].children {
            out.push(*child);
            self.descendants(*child, out);
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|simple| self.matches_simple(node, simple))
    }

    fn matches_simple(&self, node: NodeId, simple: &str) -> bool {
        if simple.is_empty() {
            return false;
        }
        let node = &self.nodes[node.0];
        let mut parts = simple.split('.');
        let tag = parts.next().unwrap_or_default();
        if !tag.is_empty() && tag != node.tag {
            return false;
        }
        parts.all(|class| node.classes.iter().any(|c| c == class))
    }

    fn select(&self, from: NodeId, selector: &str) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(from, &mut all);
        all.into_iter().filter(|n| self.matches(*n, selector)).collect()
    }
}

impl Host for FakeHost {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(self.root, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root, selector)
    }

    fn query_within(&self, parent: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*parent, selector)
    }

    fn closest(&self, element: &NodeId, selector: &str) -> Option<NodeId> {
        let mut current = Some(*element);
        while let Some(id) = current {
            if self.matches(id, selector) {
                return Some(id);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }

    fn body(&self) -> Result<NodeId, PageError> {
        Ok(self.body)
    }

    fn head(&self) -> Result<NodeId, PageError> {
        Ok(self.head)
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<(), PageError> {
        let classes = &mut self.nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) -> Result<(), PageError> {
        self.nodes[element.0].classes.retain(|c| c != class);
        Ok(())
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) -> Result<(), PageError> {
        let styles = &mut self.nodes[element.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes[element.0].attributes.get(name).cloned()
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        text.clone_into(&mut self.nodes[element.0].text);
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, PageError> {
        if tag.is_empty() {
            return Err(PageError::Host("empty tag name".to_owned()));
        }
        Ok(self.alloc(tag, ""))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), PageError> {
        self.attach(*parent, *child);
        Ok(())
    }

    fn remove(&mut self, element: &NodeId) {
        self.detach(*element);
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        self.nodes[element.0].rect
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn inner_width(&self) -> f64 {
        self.inner_width
    }

    fn inner_height(&self) -> f64 {
        self.inner_height
    }

    fn scroll_to_top_smooth(&mut self) {
        self.smooth_scrolls += 1;
        self.scroll_y = 0.0;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn now_ms(&self) -> f64 {
        self.now
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.next_timer(self.now + f64::from(delay_ms), None)
    }

    fn set_interval(&mut self, period_ms: u32) -> TimerId {
        let period = f64::from(period_ms);
        self.next_timer(self.now + period, Some(period))
    }

    fn request_animation_frame(&mut self) -> Result<TimerId, PageError> {
        Ok(self.next_timer(self.now + FRAME_MS, None))
    }

    fn cancel(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            self.cancelled.insert(id);
        }
    }

    fn observe_visibility(&mut self, elements: &[NodeId], options: &VisibilityOptions) -> Result<ObserverId, PageError> {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, elements.to_vec());
        self.observer_options.push(options.clone());
        Ok(id)
    }

    fn disconnect(&mut self, id: ObserverId) {
        self.observers.remove(&id);
    }
}

/// A page bound to a fake host, plus the listeners it asked for.
pub struct Harness {
    pub host: FakeHost,
    pub page: Page<FakeHost>,
    pub listeners: Vec<Listener<NodeId>>,
}

impl Harness {
    /// Initialize a page over `host` with a fixed seed.
    pub fn start(host: FakeHost) -> Result<Self, PageError> {
        let config = PageConfig { seed: Some(42), ..PageConfig::default() };
        Self::start_with(host, config)
    }

    pub fn start_with(mut host: FakeHost, config: PageConfig) -> Result<Self, PageError> {
        let (page, listeners) = Page::initialize(&mut host, config)?;
        Ok(Self { host, page, listeners })
    }

    /// Listeners for `route`, optionally restricted to one element.
    pub fn listeners_for(&self, route: Route, element: Option<NodeId>) -> Vec<Listener<NodeId>> {
        self.listeners
            .iter()
            .filter(|l| l.route == route && element.map_or(true, |e| l.element() == Some(&e)))
            .cloned()
            .collect()
    }

    /// Fire every listener for `route` (on `element`, if given) with `input`.
    pub fn fire(&mut self, route: Route, element: Option<NodeId>, input: &EventInput) -> Result<Vec<Propagation>, PageError> {
        let mut outcomes = Vec::new();
        for listener in self.listeners_for(route, element) {
            outcomes.push(self.page.dispatch(&mut self.host, &listener, input)?);
        }
        Ok(outcomes)
    }

    /// Move the virtual clock forward, firing due timers in order.
    pub fn advance(&mut self, ms: f64) -> Result<(), PageError> {
        let until = self.host.now + ms;
        while let Some((id, due)) = self.host.pop_due(until) {
            self.host.now = due;
            self.page.on_timer(&mut self.host, id)?;
        }
        self.host.now = until;
        Ok(())
    }
}
