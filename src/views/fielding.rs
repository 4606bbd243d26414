//! Fielding and wicket-keeping: catch and dismissal shares, plus the keepers' catch/stumping split.

use serde::Serialize;

use crate::normalize::LoadedDataset;
use crate::processing::top_n;
use crate::records::{FieldingRecord, WicketKeepingRecord};

use super::charts::{DonutChart, StackedBarChart};

pub const TOP_FIELDERS: usize = 10;
pub const TOP_KEEPERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DismissalKind {
    #[serde(rename = "Ct")]
    Catch,
    #[serde(rename = "St")]
    Stumping,
}

/// One keeper's count for one dismissal kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DismissalEntry {
    pub player: String,
    pub kind: DismissalKind,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldingWkView<'a> {
    pub top_fielders: DonutChart,
    pub top_keepers: DonutChart,
    pub dismissal_breakdown: StackedBarChart<DismissalEntry>,
    pub keepers: &'a [WicketKeepingRecord],
    pub fielders: &'a [FieldingRecord],
}

/// Reshape wide catch/stumping columns into long form: every catch row, then every stumping row,
/// each in keeper order.
pub fn melt_dismissals(keepers: &[&WicketKeepingRecord]) -> Vec<DismissalEntry> {
    let column = |kind: DismissalKind| {
        keepers.iter().map(move |k| DismissalEntry {
            player: k.player.clone(),
            kind,
            count: match kind {
                DismissalKind::Catch => k.catches,
                DismissalKind::Stumping => k.stumpings,
            },
        })
    };
    column(DismissalKind::Catch)
        .chain(column(DismissalKind::Stumping))
        .collect()
}

pub fn fielding_wk(data: &LoadedDataset) -> FieldingWkView<'_> {
    let fielders = top_n(data.fielding(), TOP_FIELDERS, |r| f64::from(r.catches));
    let keepers = top_n(data.wicket_keeping(), TOP_KEEPERS, |r| f64::from(r.dismissals));

    FieldingWkView {
        top_fielders: DonutChart::new(
            "Top 10 Fielders by Catches",
            fielders.iter().map(|r| (r.player.clone(), f64::from(r.catches))),
        ),
        top_keepers: DonutChart::new(
            "Top 10 Wicket-Keepers by Dismissals",
            keepers.iter().map(|r| (r.player.clone(), f64::from(r.dismissals))),
        ),
        dismissal_breakdown: StackedBarChart {
            title: "Dismissal Breakdown (Catches vs. Stumpings)",
            categories: keepers.iter().map(|r| r.player.clone()).collect(),
            entries: melt_dismissals(&keepers),
        },
        keepers: data.wicket_keeping(),
        fielders: data.fielding(),
    }
}

#[cfg(test)]
mod tests {
    use super::{DismissalKind, melt_dismissals};
    use crate::records::WicketKeepingRecord;

    fn keeper(player: &str, catches: u32, stumpings: u32) -> WicketKeepingRecord {
        WicketKeepingRecord {
            player: player.to_string(),
            team: String::new(),
            dismissals: catches + stumpings,
            catches,
            stumpings,
        }
    }

    #[test]
    fn melt_lists_all_catches_before_stumpings() {
        let pant = keeper("Rishabh Pant", 13, 1);
        let de_kock = keeper("Quinton de Kock", 11, 0);
        let long = melt_dismissals(&[&pant, &de_kock]);

        let shape: Vec<(&str, DismissalKind, u32)> =
            long.iter().map(|e| (e.player.as_str(), e.kind, e.count)).collect();
        assert_eq!(
            shape,
            vec![
                ("Rishabh Pant", DismissalKind::Catch, 13),
                ("Quinton de Kock", DismissalKind::Catch, 11),
                ("Rishabh Pant", DismissalKind::Stumping, 1),
                ("Quinton de Kock", DismissalKind::Stumping, 0),
            ]
        );
    }
}
