//! Dashboard pages as data.
//!
//! Each [`Page`] variant has exactly one handler that turns a [`LoadedDataset`] into a
//! serialisable [`PageView`]. Handlers only read the dataset; views borrow the full tables and
//! own the small derived series they show.

pub mod batting;
pub mod bowling;
pub mod charts;
pub mod fielding;
pub mod player;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::normalize::LoadedDataset;

pub use batting::BattingView;
pub use bowling::BowlingView;
pub use fielding::FieldingWkView;
pub use player::{PlayerAnalysisView, PlayerSelection};
pub use summary::SummaryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Summary,
    Batting,
    Bowling,
    FieldingWk,
    PlayerAnalysis,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Summary,
        Page::Batting,
        Page::Bowling,
        Page::FieldingWk,
        Page::PlayerAnalysis,
    ];

    /// Short identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Summary => "summary",
            Page::Batting => "batting",
            Page::Bowling => "bowling",
            Page::FieldingWk => "fielding-wk",
            Page::PlayerAnalysis => "players",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Summary => "Tournament Summary",
            Page::Batting => "Batting Analysis",
            Page::Bowling => "Bowling Analysis",
            Page::FieldingWk => "Fielding & Wicket-Keeping Analysis",
            Page::PlayerAnalysis => "Player Analysis",
        }
    }

    /// Build this page's view. `selection` is only consulted by [`Page::PlayerAnalysis`].
    pub fn render<'a>(self, data: &'a LoadedDataset, selection: &PlayerSelection) -> PageView<'a> {
        match self {
            Page::Summary => PageView::Summary(summary::summary(data)),
            Page::Batting => PageView::Batting(batting::batting(data)),
            Page::Bowling => PageView::Bowling(bowling::bowling(data)),
            Page::FieldingWk => PageView::FieldingWk(fielding::fielding_wk(data)),
            Page::PlayerAnalysis => PageView::PlayerAnalysis(player::player_analysis(data, selection)),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
                format!("unknown page '{s}' (expected one of {})", known.join(", "))
            })
    }
}

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView<'a> {
    Summary(SummaryView),
    Batting(BattingView<'a>),
    Bowling(BowlingView<'a>),
    FieldingWk(FieldingWkView<'a>),
    PlayerAnalysis(PlayerAnalysisView),
}
