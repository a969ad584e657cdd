//! UI state persistence — JSON save/load across restarts.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use immolab_core::domain::Market;

use crate::app::App;

/// Serializable subset of the dashboard state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub market: Market,
    pub selected_cantons: Vec<String>,
    pub min_rooms: f64,
    pub max_rooms: f64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            market: Market::Rent,
            selected_cantons: Vec::new(),
            min_rooms: 0.0,
            max_rooms: f64::MAX,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        market: app.market,
        selected_cantons: app.filters.selected.iter().cloned().collect(),
        min_rooms: app.filters.min_rooms,
        max_rooms: app.filters.max_rooms,
    }
}

/// Apply persisted state on top of a freshly loaded [`App`].
///
/// Cantons that no longer exist in the data are dropped; an empty persisted
/// selection keeps the load-time default (everything selected).
pub fn apply(app: &mut App, state: PersistedState) {
    app.set_market(state.market);
    if !state.selected_cantons.is_empty() {
        let wanted: BTreeSet<String> = state.selected_cantons.into_iter().collect();
        app.filters.selected = app
            .filters
            .all_cantons
            .iter()
            .filter(|c| wanted.contains(*c))
            .cloned()
            .collect();
    }
    app.filters.min_rooms = state.min_rooms.clamp(0.0, app.filters.rooms_limit);
    app.filters.max_rooms = state
        .max_rooms
        .clamp(app.filters.min_rooms, app.filters.rooms_limit);
    app.recompute();
}
