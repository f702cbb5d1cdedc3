use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable piece of the site shell.
///
/// Components receive data via props (struct fields), may hold
/// presentation state of their own, and render into the `Rect` the parent
/// hands them. Pages, the nav bar and the footer are all components.
///
/// `render` takes `&mut self` so a component can cache measurements or
/// move its own scroll offset during the render pass, the same way
/// ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The high-level event this component emits to its parent.
    type Event;

    /// Handle a low-level `TuiEvent`, optionally producing a high-level one.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
