use crate::client::{ApiError, ApiResult};
use crate::espn::{EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::{Game, Team};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use log::warn;

/// Timezone for the precomputed `Game::time` fallback.
pub const DEFAULT_DISPLAY_TZ: Tz = chrono_tz::America::New_York;

/// Map a scoreboard payload into games, preserving upstream order.
/// Events that can't be normalized are logged and skipped.
pub fn normalize_scoreboard(raw: ScoreboardResponse) -> Vec<Game> {
    raw.events
        .unwrap_or_default()
        .iter()
        .filter_map(|event| match normalize_event(event) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!("skipping scoreboard event: {e}");
                None
            }
        })
        .collect()
}

/// Map a single ESPN event into a `Game`.
///
/// Identity fields are strict: a non-numeric id, a missing home/away side, or a
/// team without a name is an error. Season records are lenient and fall back to
/// 0-0 when absent or unparseable.
pub fn normalize_event(event: &EspnEvent) -> ApiResult<Game> {
    let raw_id = event.id.as_deref().unwrap_or_default();
    let id = raw_id
        .trim()
        .parse::<u64>()
        .map_err(|_| ApiError::MalformedRecord(format!("event id {raw_id:?} is not numeric")))?;

    let competitors = event
        .competitions
        .as_deref()
        .and_then(|c| c.first())
        .and_then(|c| c.competitors.as_deref())
        .unwrap_or_default();

    let home = find_side(competitors, "home").ok_or_else(|| ApiError::MissingCompetitor {
        event: raw_id.to_owned(),
        side: "home",
    })?;
    let away = find_side(competitors, "away").ok_or_else(|| ApiError::MissingCompetitor {
        event: raw_id.to_owned(),
        side: "away",
    })?;

    let date = event.date.clone().unwrap_or_default();
    let time = display_time(&date, DEFAULT_DISPLAY_TZ).unwrap_or_else(|| "TBD".to_owned());

    Ok(Game {
        id,
        home: map_competitor(home, raw_id)?,
        away: map_competitor(away, raw_id)?,
        date,
        time,
        hype: None,
    })
}

fn find_side<'a>(competitors: &'a [EspnCompetitor], side: &str) -> Option<&'a EspnCompetitor> {
    competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some(side))
}

fn map_competitor(c: &EspnCompetitor, event_id: &str) -> ApiResult<Team> {
    let name = c
        .team
        .as_ref()
        .and_then(|t| t.display_name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            ApiError::MalformedRecord(format!("event {event_id}: competitor has no team name"))
        })?;

    let (wins, losses) = parse_record_summary(season_record(c));

    Ok(Team::new(name, wins, losses))
}

/// The overall season record: the `"total"` entry, else the first one listed.
fn season_record(c: &EspnCompetitor) -> Option<&str> {
    let records = c.records.as_deref().unwrap_or_default();
    records
        .iter()
        .find(|r| r.record_type.as_deref() == Some("total"))
        .or_else(|| records.first())
        .and_then(|r| r.summary.as_deref())
}

/// Parse a "W-L" record summary. Anything else is 0-0.
pub fn parse_record_summary(summary: Option<&str>) -> (u32, u32) {
    summary
        .and_then(|s| {
            let (wins, losses) = s.split_once('-')?;
            Some((wins.trim().parse().ok()?, losses.trim().parse().ok()?))
        })
        .unwrap_or((0, 0))
}

/// ESPN mostly sends minute-precision timestamps ("2025-01-15T00:30Z"), which
/// are not valid RFC 3339. Accept both.
pub fn parse_upstream_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}

/// "7:30 PM EST"
pub fn format_local_time(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%-I:%M %p %Z").to_string()
}

/// Format an upstream timestamp for a viewer's timezone.
pub fn display_time(date: &str, tz: Tz) -> Option<String> {
    parse_upstream_timestamp(date).map(|at| format_local_time(at, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn competitor(side: &str, name: &str, summary: Option<&str>) -> serde_json::Value {
        match summary {
            Some(s) => json!({
                "homeAway": side,
                "team": {"displayName": name},
                "records": [{"type": "total", "summary": s}]
            }),
            None => json!({"homeAway": side, "team": {"displayName": name}}),
        }
    }

    fn event(id: &str, competitors: Vec<serde_json::Value>) -> EspnEvent {
        serde_json::from_value(json!({
            "id": id,
            "date": "2025-01-15T00:30Z",
            "competitions": [{"competitors": competitors}]
        }))
        .unwrap()
    }

    #[test]
    fn maps_home_and_away_by_discriminator_not_position() {
        let e = event(
            "401",
            vec![
                competitor("away", "Miami Heat", Some("20-19")),
                competitor("home", "Boston Celtics", Some("30-10")),
            ],
        );
        let game = normalize_event(&e).unwrap();
        assert_eq!(game.id, 401);
        assert_eq!(game.home, Team::new("Boston Celtics", 30, 10));
        assert_eq!(game.away, Team::new("Miami Heat", 20, 19));
        assert_eq!(game.date, "2025-01-15T00:30Z");
        assert_eq!(game.time, "7:30 PM EST");
        assert_eq!(game.hype, None);
    }

    #[test]
    fn dash_only_summary_is_zero_zero() {
        let e = event(
            "7",
            vec![
                competitor("home", "Boston Celtics", Some("-")),
                competitor("away", "Miami Heat", Some("3-1")),
            ],
        );
        let game = normalize_event(&e).unwrap();
        assert_eq!((game.home.wins, game.home.losses), (0, 0));
        assert_eq!((game.away.wins, game.away.losses), (3, 1));
    }

    #[test]
    fn record_summary_degrades_to_zero() {
        assert_eq!(parse_record_summary(Some("50-20")), (50, 20));
        assert_eq!(parse_record_summary(Some(" 4 - 2 ")), (4, 2));
        assert_eq!(parse_record_summary(Some("-")), (0, 0));
        assert_eq!(parse_record_summary(Some("x-3")), (0, 0));
        assert_eq!(parse_record_summary(Some("12")), (0, 0));
        assert_eq!(parse_record_summary(Some("-5-2")), (0, 0));
        assert_eq!(parse_record_summary(None), (0, 0));
    }

    #[test]
    fn total_record_wins_over_split_records() {
        let home = json!({
            "homeAway": "home",
            "team": {"displayName": "Boston Celtics"},
            "records": [
                {"type": "home", "summary": "18-2"},
                {"type": "total", "summary": "30-10"},
                {"type": "road", "summary": "12-8"}
            ]
        });
        let away = json!({
            "homeAway": "away",
            "team": {"displayName": "Miami Heat"},
            "records": [{"summary": "20-19"}]
        });
        let game = normalize_event(&event("11", vec![home, away])).unwrap();
        assert_eq!(game.home.record(), "30-10");
        assert_eq!(game.away.record(), "20-19");
    }

    #[test]
    fn missing_records_are_zero_zero() {
        let e = event(
            "8",
            vec![
                competitor("home", "Boston Celtics", None),
                competitor("away", "Miami Heat", None),
            ],
        );
        let game = normalize_event(&e).unwrap();
        assert_eq!(game.home.record(), "0-0");
        assert_eq!(game.away.record(), "0-0");
    }

    #[test]
    fn non_numeric_id_is_malformed() {
        let e = event(
            "abc",
            vec![
                competitor("home", "Boston Celtics", Some("1-0")),
                competitor("away", "Miami Heat", Some("0-1")),
            ],
        );
        assert!(matches!(normalize_event(&e), Err(ApiError::MalformedRecord(_))));
    }

    #[test]
    fn missing_away_side_is_reported() {
        let e = event("9", vec![competitor("home", "Boston Celtics", Some("1-0"))]);
        match normalize_event(&e) {
            Err(ApiError::MissingCompetitor { event, side }) => {
                assert_eq!(event, "9");
                assert_eq!(side, "away");
            }
            other => panic!("expected MissingCompetitor, got {other:?}"),
        }
    }

    #[test]
    fn scoreboard_skips_bad_events_and_keeps_order() {
        let raw: ScoreboardResponse = serde_json::from_value(json!({
            "events": [
                {"id": "2", "date": "2025-01-15T00:00Z", "competitions": [{"competitors": [
                    {"homeAway": "home", "team": {"displayName": "A"}},
                    {"homeAway": "away", "team": {"displayName": "B"}}
                ]}]},
                {"id": "not-a-number", "competitions": []},
                {"id": "3", "competitions": [{"competitors": [
                    {"homeAway": "home", "team": {"displayName": "C"}}
                ]}]},
                {"id": "1", "date": "2025-01-15T03:00Z", "competitions": [{"competitors": [
                    {"homeAway": "home", "team": {"displayName": "D"}},
                    {"homeAway": "away", "team": {"displayName": "E"}}
                ]}]}
            ]
        }))
        .unwrap();
        let ids: Vec<u64> = normalize_scoreboard(raw).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn empty_scoreboard_has_no_games() {
        assert!(normalize_scoreboard(ScoreboardResponse::default()).is_empty());
    }

    #[test]
    fn missing_date_displays_tbd() {
        let mut e = event(
            "5",
            vec![
                competitor("home", "Boston Celtics", Some("1-0")),
                competitor("away", "Miami Heat", Some("0-1")),
            ],
        );
        e.date = None;
        let game = normalize_event(&e).unwrap();
        assert_eq!(game.date, "");
        assert_eq!(game.time, "TBD");
    }

    #[test]
    fn display_time_follows_viewer_timezone_and_dst() {
        assert_eq!(
            display_time("2025-01-15T00:30Z", chrono_tz::America::Los_Angeles).as_deref(),
            Some("4:30 PM PST")
        );
        assert_eq!(
            display_time("2025-04-01T23:00:00Z", DEFAULT_DISPLAY_TZ).as_deref(),
            Some("7:00 PM EDT")
        );
        assert_eq!(display_time("tonight", DEFAULT_DISPLAY_TZ), None);
    }
}
