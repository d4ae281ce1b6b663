// Window stack management.
// Creates, loads, unloads and destroys windows as screens are pushed and popped.

use log::{debug, info};

use crate::config::Config;

use super::provider::{ListProvider, MenuIndex, Row, provider_for};
use super::router::route;
use super::screen::Screen;

/// Unique identity of a created window. Never reused within a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

/// Settings handed to every menu layer on load.
#[derive(Debug, Clone)]
pub struct LayerSettings {
    /// Header label for the main menu.
    pub location_label: String,
    /// Whether section headers are drawn (rectangular displays only).
    pub show_headers: bool,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for LayerSettings {
    fn from(config: &Config) -> Self {
        Self {
            location_label: config.location_label.clone(),
            show_headers: config.display_shape.shows_headers(),
        }
    }
}

/// A list widget bound to a window: the provider plus the selection cursor.
pub struct MenuLayer {
    provider: Box<dyn ListProvider>,
    selected: MenuIndex,
    show_headers: bool,
}

impl MenuLayer {
    pub fn new(provider: Box<dyn ListProvider>, show_headers: bool) -> Self {
        let mut layer = Self {
            provider,
            selected: MenuIndex::default(),
            show_headers,
        };
        if let Some(section) = layer.first_section_with_rows(0) {
            layer.selected = MenuIndex::new(section, 0);
        }
        layer
    }

    pub fn section_count(&self) -> usize {
        self.provider.section_count()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.provider.row_count(section)
    }

    pub fn row(&self, index: MenuIndex) -> Option<Row> {
        self.provider.row(index)
    }

    /// Section header, if headers are enabled for this display.
    pub fn header(&self, section: usize) -> Option<String> {
        if self.show_headers {
            self.provider.header(section)
        } else {
            None
        }
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> MenuIndex {
        self.selected
    }

    /// Get the selected row, if the list has any rows.
    pub fn selected_row(&self) -> Option<Row> {
        self.provider.row(self.selected)
    }

    /// Select the next row, crossing into the next non-empty section. Stays at the end.
    pub fn select_next(&mut self) {
        let MenuIndex { section, row } = self.selected;
        if row + 1 < self.row_count(section) {
            self.selected.row = row + 1;
        } else if let Some(next) = self.first_section_with_rows(section + 1) {
            self.selected = MenuIndex::new(next, 0);
        }
    }

    /// Select the previous row, crossing into the previous non-empty section. Stays at the start.
    pub fn select_prev(&mut self) {
        let MenuIndex { section, row } = self.selected;
        if row > 0 {
            self.selected.row = row - 1;
            return;
        }
        let prev = (0..section).rev().find(|s| self.row_count(*s) > 0);
        if let Some(prev) = prev {
            self.selected = MenuIndex::new(prev, self.row_count(prev) - 1);
        }
    }

    fn first_section_with_rows(&self, from: usize) -> Option<usize> {
        (from..self.section_count()).find(|s| self.row_count(*s) > 0)
    }
}

/// A screen on the window stack. Its menu layer exists only while loaded.
pub struct Window {
    id: WindowId,
    screen: Screen,
    layer: Option<MenuLayer>,
}

impl Window {
    fn new(id: WindowId, screen: Screen) -> Self {
        Self {
            id,
            screen,
            layer: None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The menu layer, `None` once the window has been unloaded.
    pub fn layer(&self) -> Option<&MenuLayer> {
        self.layer.as_ref()
    }

    pub fn layer_mut(&mut self) -> Option<&mut MenuLayer> {
        self.layer.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.layer.is_some()
    }

    fn load(&mut self, settings: &LayerSettings) {
        let provider = provider_for(&self.screen, &settings.location_label);
        self.layer = Some(MenuLayer::new(provider, settings.show_headers));
        debug!("window {:?} loaded ({:?})", self.id, self.screen);
    }

    fn unload(&mut self) {
        // Guarded: a window that never loaded has nothing to destroy
        if self.layer.take().is_some() {
            debug!("window {:?} unloaded ({:?})", self.id, self.screen);
        }
    }
}

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
    /// The screen this node represents.
    pub screen: Screen,
}

/// LIFO stack of windows. Top is the visible one. Depth is not capped.
pub struct WindowStack {
    /// Stack of windows (bottom = root, top = current)
    windows: Vec<Window>,
    next_id: u64,
    settings: LayerSettings,
}

impl WindowStack {
    pub fn new(settings: LayerSettings) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 0,
            settings,
        }
    }

    /// Create a window for the screen, load it, and push it on top.
    pub fn push(&mut self, screen: Screen) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let mut window = Window::new(id, screen);
        window.load(&self.settings);
        self.windows.push(window);
        debug!("pushed {:?}, depth {}", screen, self.windows.len());
        id
    }

    /// Pop the top window and unload it. Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<Window> {
        let mut window = self.windows.pop()?;
        window.unload();
        debug!("popped {:?}, depth {}", window.screen, self.windows.len());
        Some(window)
    }

    /// Get the top (visible) window.
    pub fn current(&self) -> Option<&Window> {
        self.windows.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Window> {
        self.windows.last_mut()
    }

    /// Route the top window's selected row and push the target, if any.
    pub fn select(&mut self) -> Option<WindowId> {
        let window = self.current()?;
        let layer = window.layer()?;
        let index = layer.selected();
        // Only rows the provider actually reports are routable
        if layer.row(index).is_none() {
            return None;
        }

        match route(window.screen(), index) {
            Some(next) => {
                debug!("select {:?} on {:?} -> {:?}", index, window.screen(), next);
                Some(self.push(next))
            }
            None => {
                debug!("select {:?} on {:?} is a no-op", index, window.screen());
                None
            }
        }
    }

    /// Unload and destroy every window, top first.
    pub fn clear(&mut self) {
        let count = self.windows.len();
        while self.pop().is_some() {}
        if count > 0 {
            info!("destroyed {} window(s)", count);
        }
    }

    /// Check if we can go back without leaving the root window.
    pub fn can_go_back(&self) -> bool {
        self.windows.len() > 1
    }

    /// Get the depth of the window stack.
    pub fn depth(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.windows
            .iter()
            .map(|w| BreadcrumbNode {
                label: w.screen.breadcrumb_label(),
                screen: w.screen,
            })
            .collect()
    }
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new(LayerSettings::default())
    }
}

impl Drop for WindowStack {
    fn drop(&mut self) {
        self.clear();
    }
}
