//! CSV export of a standings table.

use crate::models::StandingRow;

/// Column names, in `StandingRow` field order.
const HEADER: [&str; 14] = [
    "position",
    "team_id",
    "team_name",
    "played",
    "won",
    "drawn",
    "lost",
    "goals_for",
    "goals_against",
    "goal_difference",
    "points",
    "matches_remaining",
    "points_per_game",
    "projected_points",
];

/// Render standings as CSV with a header row, one line per team in rank order.
/// An empty table still yields the header.
pub fn standings_to_csv(rows: &[StandingRow]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
