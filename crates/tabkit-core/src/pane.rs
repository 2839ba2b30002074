//! Pane descriptors.
//!
//! A [`Pane`] is one tab: a menu label and a function that produces the
//! pane's content when it is the active one. Panes are identified by their
//! position in the sequence handed to the component; cloning a pane shares the
//! same descriptor, so [`Pane::ptr_eq`] can tell whether a notification refers
//! to a particular pane the caller built.
//!
//! # Example
//!
//! ```
//! use tabkit_core::{Pane, PaneContent};
//!
//! let pane = Pane::new("Tab 1", || PaneContent::new("Tab 1 Content"));
//! assert_eq!(pane.label_text(), "Tab 1");
//! assert_eq!(pane.render().map(|c| c.plain_text()), Some("Tab 1 Content".to_string()));
//! ```

use ratatui::text::Text;
use std::fmt;
use std::rc::Rc;

/// Content-producing function of a pane.
pub type RenderFn = Box<dyn Fn() -> PaneContent>;

/// Menu label of a pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItemLabel {
    /// Text shown in the menu
    pub content: String,
    /// Optional icon shown before the text
    pub icon: Option<String>,
    /// Optional stable key for callers that track panes by name
    pub key: Option<String>,
}

impl MenuItemLabel {
    /// Creates a label with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        MenuItemLabel {
            content: content.into(),
            icon: None,
            key: None,
        }
    }

    /// Sets the icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Text as displayed in the menu, icon first.
    #[must_use]
    pub fn display(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => format!("{} {}", icon, self.content),
            _ => self.content.clone(),
        }
    }
}

impl From<&str> for MenuItemLabel {
    fn from(content: &str) -> Self {
        MenuItemLabel::new(content)
    }
}

impl From<String> for MenuItemLabel {
    fn from(content: String) -> Self {
        MenuItemLabel::new(content)
    }
}

/// Renderable output of a pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaneContent {
    /// Body text
    pub text: Text<'static>,
    /// Optional title drawn on the pane border
    pub title: Option<String>,
    /// Shows a loading placeholder instead of the body
    pub loading: bool,
}

impl PaneContent {
    /// Creates content from anything convertible to ratatui text.
    pub fn new(text: impl Into<Text<'static>>) -> Self {
        PaneContent {
            text: text.into(),
            title: None,
            loading: false,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the loading flag.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Body text with styling stripped, one line per row.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.text
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct PaneSpec {
    menu_item: Option<MenuItemLabel>,
    render: Option<RenderFn>,
    content: Option<PaneContent>,
}

/// One tab: a menu label plus a content-producing function.
///
/// Neither part is validated. A pane without a label shows an empty menu
/// item; a pane without a render function shows no content when active.
#[derive(Clone)]
pub struct Pane(Rc<PaneSpec>);

impl Pane {
    /// Creates a pane with a label and a render function.
    pub fn new<F>(menu_item: impl Into<MenuItemLabel>, render: F) -> Self
    where
        F: Fn() -> PaneContent + 'static,
    {
        Pane::builder().menu_item(menu_item).render(render).build()
    }

    /// Starts building a pane with optional parts.
    #[must_use]
    pub fn builder() -> PaneBuilder {
        PaneBuilder::default()
    }

    /// The menu label, if any.
    #[must_use]
    pub fn menu_item(&self) -> Option<&MenuItemLabel> {
        self.0.menu_item.as_ref()
    }

    /// Label text for display, empty when the pane has no label.
    #[must_use]
    pub fn label_text(&self) -> String {
        self.menu_item()
            .map(MenuItemLabel::display)
            .unwrap_or_default()
    }

    /// Invokes the render function, if any.
    #[must_use]
    pub fn render(&self) -> Option<PaneContent> {
        self.0.render.as_ref().map(|render| render())
    }

    /// Whether the pane has a render function.
    #[must_use]
    pub fn has_render(&self) -> bool {
        self.0.render.is_some()
    }

    /// Pre-built content used when every pane is rendered at once.
    #[must_use]
    pub fn content(&self) -> Option<&PaneContent> {
        self.0.content.as_ref()
    }

    /// True when both handles refer to the same descriptor.
    #[must_use]
    pub fn ptr_eq(a: &Pane, b: &Pane) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("menu_item", &self.0.menu_item)
            .field("render", &self.0.render.as_ref().map(|_| "Fn"))
            .field("content", &self.0.content)
            .finish()
    }
}

/// Builder for [`Pane`].
#[derive(Default)]
pub struct PaneBuilder {
    menu_item: Option<MenuItemLabel>,
    render: Option<RenderFn>,
    content: Option<PaneContent>,
}

impl PaneBuilder {
    /// Sets the menu label.
    #[must_use]
    pub fn menu_item(mut self, menu_item: impl Into<MenuItemLabel>) -> Self {
        self.menu_item = Some(menu_item.into());
        self
    }

    /// Sets the render function.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn() -> PaneContent + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Sets pre-built content.
    #[must_use]
    pub fn content(mut self, content: PaneContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Finishes the pane.
    #[must_use]
    pub fn build(self) -> Pane {
        Pane(Rc::new(PaneSpec {
            menu_item: self.menu_item,
            render: self.render,
            content: self.content,
        }))
    }
}

/// Where the component's panes came from.
///
/// Panes may be passed as a `panes` list or, in the legacy form, as children.
/// Both normalize to the same ordered slice before anything else runs.
#[derive(Debug, Clone, Default)]
pub enum PaneSource {
    /// No panes were supplied
    #[default]
    Empty,
    /// Supplied through the `panes` list
    Panes(Vec<Pane>),
    /// Supplied as children
    Children(Vec<Pane>),
}

impl PaneSource {
    /// Canonical ordered pane sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[Pane] {
        match self {
            PaneSource::Empty => &[],
            PaneSource::Panes(panes) | PaneSource::Children(panes) => panes,
        }
    }

    /// Number of panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when there are no panes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Pane at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pane> {
        self.as_slice().get(index)
    }
}
