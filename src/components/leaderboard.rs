//! Leaderboard section listing top point earners.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::util::format::format_points;

/// One ranked leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player: String,
    pub points: i64,
}

/// Seed standings shown until live scores are wired to the backend.
pub fn seed_entries() -> Vec<LeaderboardEntry> {
    let seed = [
        ("Neo_Matrix", 2_450),
        ("Cyber_Tr1x", 2_280),
        ("Data_Stream", 2_150),
        ("Byte_Runner", 1_980),
        ("Code_Hunter", 1_840),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (player, points))| LeaderboardEntry {
            rank: u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1),
            player: player.to_owned(),
            points,
        })
        .collect()
}

/// Row class, with a highlight modifier for the podium.
fn row_class(rank: u32) -> String {
    if (1..=3).contains(&rank) {
        format!("leaderboard__row leaderboard__row--top-{rank}")
    } else {
        "leaderboard__row".to_owned()
    }
}

/// Ranked standings for the landing page.
#[component]
pub fn LeaderboardSection() -> impl IntoView {
    let entries = seed_entries();

    view! {
        <section class="leaderboard" id="leaderboard">
            <h2>"Leaderboard"</h2>
            <div class="leaderboard__list" id="leaderboardList">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class=row_class(entry.rank)>
                                <span class="leaderboard__rank">{entry.rank}</span>
                                <span class="leaderboard__player">{entry.player.clone()}</span>
                                <span class="leaderboard__points">{format_points(entry.points)}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
