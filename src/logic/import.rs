//! Bulk player registration from CSV.

use crate::models::{Tournament, TournamentError};

/// Register players from headerless CSV data, one row per player with the
/// name in the first column. Returns how many players were added.
///
/// The whole input is parsed and validated before anyone is registered, so a
/// bad row means nothing is added.
pub fn import_players_csv(
    tournament: &mut Tournament,
    data: &str,
) -> Result<usize, TournamentError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut names = Vec::new();
    for row in reader.records() {
        let record = row.map_err(|e| TournamentError::InvalidImport(e.to_string()))?;
        let name = record
            .get(0)
            .ok_or_else(|| TournamentError::InvalidImport("missing name column".to_string()))?;
        if name.trim().is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        names.push(name.to_string());
    }

    let added = names.len();
    for name in names {
        tournament.register_player(name)?;
    }
    Ok(added)
}
