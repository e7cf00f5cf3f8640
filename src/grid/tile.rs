use crossterm::style::{Color, Stylize};

use std::fmt;

use super::Grid;

/// The state of one tile in an animation frame.
///
/// The search engine only ever emits `Searching`, `Frontier`, `Path` and
/// `Blank`; `Start`, `Goal` and `Wall` exist for the renderer, which overlays
/// them on top of each frame.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFrame {
    /// The tile the search set out from.
    Start,
    /// The tile the search is trying to reach.
    Goal,
    /// A tile that has been dequeued and expanded ("considered").
    Searching,
    /// A tile that has been discovered but not yet expanded ("visited").
    Frontier,
    /// A tile on the reconstructed route, present only in the final frame of
    /// a successful search.
    Path,
    /// An impassable tile.
    Wall,
    #[default]
    Blank,
}

/// One immutable snapshot of the whole grid during a search.
pub type GridFrame = Grid<TileFrame>;

impl TileFrame {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for TileFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            TileFrame::Start => "🟩".with(Color::Green),
            TileFrame::Goal => "🟥".with(Color::Red),
            TileFrame::Searching => "* ".with(Color::Blue),
            TileFrame::Frontier => "o ".with(Color::Cyan),
            TileFrame::Path => "🟨".with(Color::Yellow),
            TileFrame::Wall => "⬜".with(Color::White),
            TileFrame::Blank => "  ".with(Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                TileFrame::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
