//! Pane widget
//!
//! Draws the output of a pane's render function inside a bordered block.
//! When attached, the top border is left to the menu's rule line so the two
//! read as one piece.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use tabkit_core::{PaneContent, Theme};

const LOADING: &str = "Loading…";

/// Widget that renders a single pane's content
pub struct TabPaneWidget<'a> {
    content: &'a PaneContent,
    attached: bool,
    theme: &'a Theme,
}

impl<'a> TabPaneWidget<'a> {
    /// Creates a new pane widget
    pub fn new(content: &'a PaneContent, theme: &'a Theme) -> Self {
        TabPaneWidget {
            content,
            attached: false,
            theme,
        }
    }

    /// Joins the pane to a menu above it
    #[must_use]
    pub fn attached(mut self, attached: bool) -> Self {
        self.attached = attached;
        self
    }

    fn block(&self) -> Block<'a> {
        let borders = if self.attached {
            Borders::LEFT | Borders::RIGHT | Borders::BOTTOM
        } else {
            Borders::ALL
        };
        let block = Block::default()
            .borders(borders)
            .border_style(self.theme.border());

        match &self.content.title {
            // The top border carries the title; attached panes have none
            Some(title) if !self.attached => block.title(format!(" {} ", title)),
            _ => block,
        }
    }
}

impl Widget for TabPaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = self.block();
        let paragraph = if self.content.loading {
            Paragraph::new(LOADING)
                .style(self.theme.body().fg(self.theme.colors.muted))
                .alignment(Alignment::Center)
        } else {
            Paragraph::new(self.content.text.clone())
                .style(self.theme.body())
                .wrap(Wrap { trim: false })
        };

        paragraph.block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_content() {
        let content = PaneContent::new("Tab 2 Content");
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        TabPaneWidget::new(&content, &theme).render(area, &mut buf);

        assert!(buffer_text(&buf, area).contains("Tab 2 Content"));
    }

    #[test]
    fn test_detached_has_top_border_with_title() {
        let content = PaneContent::new("body").title("Details");
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        TabPaneWidget::new(&content, &theme).render(area, &mut buf);

        let top = buffer_text(&buf, Rect::new(0, 0, 30, 1));
        assert!(top.contains("Details"));
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }

    #[test]
    fn test_attached_has_no_top_border() {
        let content = PaneContent::new("body").title("Details");
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        TabPaneWidget::new(&content, &theme)
            .attached(true)
            .render(area, &mut buf);

        assert!(!buffer_text(&buf, Rect::new(0, 0, 30, 1)).contains("Details"));
        assert_eq!(buf[(0, 0)].symbol(), "│");
        assert!(buffer_text(&buf, area).contains("body"));
    }

    #[test]
    fn test_loading_placeholder() {
        let content = PaneContent::new("hidden").loading(true);
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        TabPaneWidget::new(&content, &theme).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Loading"));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let content = PaneContent::new("body");
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));

        TabPaneWidget::new(&content, &theme).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
