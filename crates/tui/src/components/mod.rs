//! UI building blocks shared across rendering and state modules.

/// Card grid and empty-state notice.
pub mod grid;
/// Heading, badge, stats, and footer text.
pub mod header;
/// Search prompt rendering.
pub mod prompt;

pub use grid::{GridContext, columns_for_width, first_visible_row, render_grid};
pub use header::{render_footer, render_header};
pub use prompt::{InputContext, render_input};
