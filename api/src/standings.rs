use crate::client::{ApiError, ApiResult};
use crate::espn::{EspnGroup, EspnStandingsEntry, StandingsResponse};
use crate::{Conference, Standings, TeamRow};
use log::warn;

/// Split a standings payload into per-conference rows.
///
/// Both conferences must be present; a missing one fails the whole call.
/// Rows are sorted descending by the upstream `rank` stat. Callers that want
/// "#1 first" reverse the list for display.
pub fn normalize_standings(raw: StandingsResponse) -> ApiResult<Standings> {
    let groups = raw.children.unwrap_or_default();
    let east = find_conference(&groups, Conference::East)?;
    let west = find_conference(&groups, Conference::West)?;

    Ok(Standings {
        east: parse_conference(east)?,
        west: parse_conference(west)?,
    })
}

fn find_conference(groups: &[EspnGroup], conference: Conference) -> ApiResult<&EspnGroup> {
    let name = conference.upstream_name();
    groups
        .iter()
        .find(|g| g.name.as_deref() == Some(name))
        .ok_or_else(|| ApiError::ConferenceNotFound(name.to_owned()))
}

fn parse_conference(group: &EspnGroup) -> ApiResult<Vec<TeamRow>> {
    let name = group.name.as_deref().unwrap_or_default();
    let standings = group
        .standings
        .as_ref()
        .ok_or_else(|| ApiError::MalformedRecord(format!("{name} has no standings")))?;

    let mut ranked: Vec<(f64, TeamRow)> = standings
        .entries
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| {
            let row = map_entry(entry);
            if row.is_none() {
                warn!("skipping {name} standings entry without a team name");
            }
            row
        })
        .collect();

    // Stable: equal ranks keep upstream order.
    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    Ok(ranked.into_iter().map(|(_, row)| row).collect())
}

fn map_entry(entry: &EspnStandingsEntry) -> Option<(f64, TeamRow)> {
    let name = entry
        .team
        .as_ref()
        .and_then(|t| t.display_name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())?;

    let rank = entry.stat("rank").filter(|v| v.is_finite()).unwrap_or(0.0);
    let row = TeamRow {
        name: name.to_owned(),
        wins: stat_count(entry, "wins"),
        losses: stat_count(entry, "losses"),
    };
    Some((rank, row))
}

fn stat_count(entry: &EspnStandingsEntry, name: &str) -> u32 {
    entry
        .stat(name)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u32)
        .unwrap_or(0)
}
