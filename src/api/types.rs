//! Wire shapes of the sports service and their conversion into core types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::sports::{MatchKind, MatchStatus, MatchSummary, sort_most_recent_first};

// ============================================================================
// Requests
// ============================================================================

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct PasswordRequest<'a> {
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

// ============================================================================
// Responses
// ============================================================================

/// Body of login/register responses and of error responses in general.
#[derive(Deserialize, Debug, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    #[serde(default, alias = "response")]
    pub reply: Option<String>,
}

/// `{ "data": ... }` wrapper used by the sports endpoints.
#[derive(Deserialize, Debug)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Ids arrive as numbers or strings depending on the feed.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// Cricket: data → [matchType] → seriesMatches → seriesAdWrapper.matches
// ============================================================================

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketMatchType {
    #[serde(default)]
    pub series_matches: Vec<CricketSeries>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketSeries {
    #[serde(default)]
    pub series_ad_wrapper: Option<CricketSeriesWrapper>,
}

#[derive(Deserialize, Debug)]
pub struct CricketSeriesWrapper {
    #[serde(default)]
    pub matches: Vec<CricketMatch>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketMatch {
    pub match_info: CricketMatchInfo,
    #[serde(default)]
    pub match_score: Option<CricketMatchScore>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketMatchInfo {
    #[serde(default)]
    pub match_id: Value,
    #[serde(default)]
    pub team1: Option<CricketTeam>,
    #[serde(default)]
    pub team2: Option<CricketTeam>,
    #[serde(default)]
    pub state_title: Option<String>,
    /// Milliseconds since the epoch, usually as a string.
    #[serde(default)]
    pub start_date: Value,
    #[serde(default)]
    pub match_format: Option<String>,
    #[serde(default)]
    pub match_desc: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketTeam {
    #[serde(default)]
    pub team_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CricketMatchScore {
    #[serde(default)]
    pub team1_score: Option<CricketTeamScore>,
    #[serde(default)]
    pub team2_score: Option<CricketTeamScore>,
}

#[derive(Deserialize, Debug)]
pub struct CricketTeamScore {
    #[serde(default)]
    pub inngs1: Option<CricketInnings>,
    #[serde(default)]
    pub inngs2: Option<CricketInnings>,
}

#[derive(Deserialize, Debug)]
pub struct CricketInnings {
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
}

/// `runs/wickets` summed over both innings; `0/0` when there is no score yet.
fn cricket_total(score: Option<&CricketTeamScore>) -> String {
    let Some(score) = score else {
        return "0/0".to_string();
    };
    let (runs, wickets) = [&score.inngs1, &score.inngs2]
        .into_iter()
        .flatten()
        .fold((0, 0), |(r, w), inn| (r + inn.runs, w + inn.wickets));
    format!("{runs}/{wickets}")
}

fn cricket_status(state_title: Option<&str>) -> MatchStatus {
    match state_title.map(str::to_lowercase).as_deref() {
        Some("live") => MatchStatus::Live,
        Some("complete" | "completed") => MatchStatus::Completed,
        _ => MatchStatus::Upcoming,
    }
}

fn team_name(team: &Option<CricketTeam>) -> String {
    team.as_ref()
        .and_then(|t| t.team_name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "TBD".to_string())
}

impl CricketMatch {
    pub fn into_summary(self) -> MatchSummary {
        let info = self.match_info;
        let score = self.match_score.as_ref();
        let status_label = info
            .state_title
            .clone()
            .unwrap_or_else(|| "Upcoming".to_string());
        MatchSummary {
            id: value_to_string(&info.match_id),
            kind: MatchKind::Cricket,
            home: team_name(&info.team1),
            away: team_name(&info.team2),
            home_score: cricket_total(score.and_then(|s| s.team1_score.as_ref())),
            away_score: cricket_total(score.and_then(|s| s.team2_score.as_ref())),
            status: cricket_status(info.state_title.as_deref()),
            status_label,
            starts_at: value_to_i64(&info.start_date).and_then(DateTime::<Utc>::from_timestamp_millis),
            competition: info.match_format.unwrap_or_else(|| "TBD".to_string()),
            detail: info.match_desc.unwrap_or_else(|| "Match".to_string()),
        }
    }
}

/// Flattens every series of every match type, most recent first.
pub fn cricket_summaries(types: Vec<CricketMatchType>) -> Vec<MatchSummary> {
    let mut matches: Vec<MatchSummary> = types
        .into_iter()
        .flat_map(|t| t.series_matches)
        .filter_map(|s| s.series_ad_wrapper)
        .flat_map(|w| w.matches)
        .map(CricketMatch::into_summary)
        .collect();
    sort_most_recent_first(&mut matches);
    matches
}

// ============================================================================
// Football: data → [event]
// ============================================================================

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FootballEvent {
    #[serde(default)]
    pub id: Value,
    pub home_team: FootballTeam,
    pub away_team: FootballTeam,
    #[serde(default)]
    pub home_score: FootballScore,
    #[serde(default)]
    pub away_score: FootballScore,
    #[serde(default)]
    pub status: FootballStatus,
    /// Seconds since the epoch.
    #[serde(default)]
    pub start_timestamp: Option<i64>,
    #[serde(default)]
    pub tournament: Option<FootballTournament>,
}

#[derive(Deserialize, Debug)]
pub struct FootballTeam {
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct FootballScore {
    #[serde(default)]
    pub current: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct FootballStatus {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct FootballTournament {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<FootballCategory>,
}

#[derive(Deserialize, Debug)]
pub struct FootballCategory {
    #[serde(default)]
    pub name: String,
}

/// Codes the feed uses for a match in play.
const FOOTBALL_LIVE_CODES: [i64; 4] = [6, 7, 31, 20];
const FOOTBALL_FINISHED_CODE: i64 = 100;

fn football_status_label(status: &FootballStatus) -> String {
    match status.code {
        Some(6) => "1st Half".to_string(),
        Some(7) => "2nd Half".to_string(),
        Some(31) => "Halftime".to_string(),
        Some(20) => "Started".to_string(),
        _ => status
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "Upcoming".to_string()),
    }
}

fn football_status(status: &FootballStatus) -> MatchStatus {
    match status.code {
        Some(code) if FOOTBALL_LIVE_CODES.contains(&code) => MatchStatus::Live,
        Some(FOOTBALL_FINISHED_CODE) => MatchStatus::Completed,
        _ => MatchStatus::Upcoming,
    }
}

fn football_score(score: &FootballScore) -> String {
    score
        .current
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl FootballEvent {
    pub fn into_summary(self) -> MatchSummary {
        let (competition, detail) = match self.tournament {
            Some(t) => (t.name, t.category.map(|c| c.name).unwrap_or_default()),
            None => (String::new(), String::new()),
        };
        MatchSummary {
            id: value_to_string(&self.id),
            kind: MatchKind::Football,
            home: self.home_team.name,
            away: self.away_team.name,
            home_score: football_score(&self.home_score),
            away_score: football_score(&self.away_score),
            status: football_status(&self.status),
            status_label: football_status_label(&self.status),
            starts_at: self
                .start_timestamp
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
            competition,
            detail,
        }
    }
}

pub fn football_summaries(events: Vec<FootballEvent>) -> Vec<MatchSummary> {
    let mut matches: Vec<MatchSummary> = events.into_iter().map(FootballEvent::into_summary).collect();
    sort_most_recent_first(&mut matches);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Contract test: request bodies serialize to the field names the server reads.
    #[test]
    fn test_request_serialization() {
        let login = serde_json::to_value(LoginRequest {
            email: "a@b.c",
            password: "pw",
        })
        .unwrap();
        assert_eq!(login, serde_json::json!({"email": "a@b.c", "password": "pw"}));

        let chat = serde_json::to_value(ChatRequest { message: "hi" }).unwrap();
        assert_eq!(chat, serde_json::json!({"message": "hi"}));
    }

    #[test]
    fn test_chat_response_alias() {
        let r: ChatResponse = serde_json::from_str(r#"{"reply":"Go team"}"#).unwrap();
        assert_eq!(r.reply.as_deref(), Some("Go team"));
        let r: ChatResponse = serde_json::from_str(r#"{"response":"Go team"}"#).unwrap();
        assert_eq!(r.reply.as_deref(), Some("Go team"));
        let r: ChatResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(r.reply.is_none());
    }

    fn cricket_payload() -> Value {
        serde_json::json!([
            {
                "matchType": "International",
                "seriesMatches": [
                    {
                        "seriesAdWrapper": {
                            "seriesName": "Test Series",
                            "matches": [
                                {
                                    "matchInfo": {
                                        "matchId": 101,
                                        "team1": {"teamName": "India"},
                                        "team2": {"teamName": "Australia"},
                                        "stateTitle": "Complete",
                                        "startDate": "1717200000000",
                                        "matchFormat": "TEST",
                                        "matchDesc": "1st Test"
                                    },
                                    "matchScore": {
                                        "team1Score": {
                                            "inngs1": {"runs": 250, "wickets": 10},
                                            "inngs2": {"runs": 120, "wickets": 3}
                                        },
                                        "team2Score": {
                                            "inngs1": {"runs": 300}
                                        }
                                    }
                                }
                            ]
                        }
                    },
                    {"adDetail": {"name": "ad"}}
                ]
            },
            {
                "seriesMatches": [
                    {
                        "seriesAdWrapper": {
                            "matches": [
                                {
                                    "matchInfo": {
                                        "matchId": "202",
                                        "team1": {},
                                        "stateTitle": "Live",
                                        "startDate": "1719792000000"
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        ])
    }

    #[test]
    fn test_cricket_flatten_normalize_and_sort() {
        let types: Vec<CricketMatchType> = serde_json::from_value(cricket_payload()).unwrap();
        let matches = cricket_summaries(types);
        assert_eq!(matches.len(), 2);

        let live = &matches[0];
        assert_eq!(live.id, "202");
        assert_eq!(live.home, "TBD");
        assert_eq!(live.away, "TBD");
        assert_eq!(live.home_score, "0/0");
        assert_eq!(live.status, MatchStatus::Live);
        assert_eq!(live.competition, "TBD");
        assert_eq!(live.detail, "Match");

        let done = &matches[1];
        assert_eq!(done.id, "101");
        assert_eq!(done.home_score, "370/13");
        assert_eq!(done.away_score, "300/0");
        assert_eq!(done.status, MatchStatus::Completed);
        assert_eq!(done.status_label, "Complete");
        assert_eq!(done.starts_at, Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_cricket_missing_state_is_upcoming() {
        let m: CricketMatch = serde_json::from_value(serde_json::json!({
            "matchInfo": {"matchId": 1}
        }))
        .unwrap();
        let s = m.into_summary();
        assert_eq!(s.status, MatchStatus::Upcoming);
        assert_eq!(s.status_label, "Upcoming");
        assert_eq!(s.starts_at, None);
    }

    fn football_event(code: Option<i64>, description: Option<&str>, start: i64) -> Value {
        serde_json::json!({
            "id": 9001,
            "homeTeam": {"name": "Arsenal"},
            "awayTeam": {"name": "Chelsea"},
            "homeScore": {"current": 2},
            "awayScore": {},
            "status": {"code": code, "description": description},
            "startTimestamp": start,
            "tournament": {"name": "Premier League", "category": {"name": "England"}}
        })
    }

    #[test]
    fn test_football_status_mapping() {
        let cases = [
            (Some(6), None, "1st Half", MatchStatus::Live),
            (Some(7), None, "2nd Half", MatchStatus::Live),
            (Some(31), None, "Halftime", MatchStatus::Live),
            (Some(20), None, "Started", MatchStatus::Live),
            (Some(100), Some("Ended"), "Ended", MatchStatus::Completed),
            (Some(0), Some("Not started"), "Not started", MatchStatus::Upcoming),
            (None, None, "Upcoming", MatchStatus::Upcoming),
        ];
        for (code, description, label, status) in cases {
            let event: FootballEvent =
                serde_json::from_value(football_event(code, description, 1_717_200_000)).unwrap();
            let s = event.into_summary();
            assert_eq!(s.status_label, label, "code {code:?}");
            assert_eq!(s.status, status, "code {code:?}");
        }
    }

    #[test]
    fn test_football_fields() {
        let event: FootballEvent =
            serde_json::from_value(football_event(Some(6), None, 1_717_200_000)).unwrap();
        let s = event.into_summary();
        assert_eq!(s.id, "9001");
        assert_eq!(s.home, "Arsenal");
        assert_eq!(s.home_score, "2");
        assert_eq!(s.away_score, "-");
        assert_eq!(s.competition, "Premier League");
        assert_eq!(s.detail, "England");
        assert_eq!(s.date_label(), "Jun 01, 2024");
    }

    #[test]
    fn test_football_sorted_most_recent_first() {
        let events: Vec<FootballEvent> = serde_json::from_value(serde_json::json!([
            football_event(None, None, 1_000),
            football_event(None, None, 3_000),
            football_event(None, None, 2_000),
        ]))
        .unwrap();
        let starts: Vec<i64> = football_summaries(events)
            .iter()
            .filter_map(|m| m.starts_at.map(|t| t.timestamp()))
            .collect();
        assert_eq!(starts, vec![3_000, 2_000, 1_000]);
    }
}
