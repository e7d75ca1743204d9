use serde::Serialize;

use crate::domain::PlayerStanding;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub id: String,
    pub name: String,
    pub games: f64,
    pub winrate: f64,
}

/// Project each player to a `(games, winrate)` point for plotting. Zero-game
/// players are included unless the caller asks otherwise.
pub fn make_winrate_scatter(
    players: &[PlayerStanding],
    include_zero_games: bool,
) -> Vec<ScatterPoint> {
    players
        .iter()
        .filter(|p| include_zero_games || p.games > 0.0)
        .map(|p| ScatterPoint {
            id: p.id.clone(),
            name: p.name.clone(),
            games: p.games,
            winrate: p.winrate,
        })
        .collect()
}
