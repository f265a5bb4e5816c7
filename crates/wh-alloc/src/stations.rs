//! Charging-station choice.

use wh_core::{Cell, StationId};

/// Pick a charging station for an agent at `from`.
///
/// Prefers the nearest (Manhattan) station not in `occupied`; if every
/// station is occupied, falls back to the nearest one regardless.  Ties go to
/// the lower `StationId`.  Returns `None` only if `stations` is empty.
///
/// Occupancy is a soft preference, not a capacity limit: two agents choosing
/// in the same tick can be sent to the same free station.
pub fn select_station(stations: &[Cell], occupied: &[StationId], from: Cell) -> Option<StationId> {
    let nearest = |free_only: bool| {
        stations
            .iter()
            .enumerate()
            .map(|(i, &cell)| (StationId(i as u16), cell))
            .filter(|(id, _)| !free_only || !occupied.contains(id))
            .min_by_key(|(_, cell)| from.manhattan(*cell))
            .map(|(id, _)| id)
    };
    nearest(true).or_else(|| nearest(false))
}
