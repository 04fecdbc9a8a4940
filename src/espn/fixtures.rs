//! Realistic ESPN payloads shared by the client and assembly tests.
//!
//! Three teams, a two-round snake draft and two completed matchup periods.
//!
//! | pick | team | player               | pos | period 1 | period 2 | total |
//! |------|------|----------------------|-----|----------|----------|-------|
//! | 1    | 1    | 101 Connor McDavid   | C   | 12.0     | 10.0     | 22.0  |
//! | 2    | 2    | 102 Igor Shesterkin  | G   | 15.0     | 20.0     | 35.0  |
//! | 3    | 3    | 103 Cale Makar       | D   | 9.0      | 7.0      | 16.0  |
//! | 4    | 3    | 104 Nikita Kucherov  | RW  | 11.0     | 3.0      | 14.0  |
//! | 5    | 2    | 105 Juuse Saros      | G   | -        | 6.0      | 6.0   |
//! | 6    | 1    | 106 Kirill Kaprizov  | LW  | 8.0      | 4.5      | 12.5  |

use serde_json::{json, Value};

use crate::{
    cli::types::{LeagueId, Season},
    config::EspnConfig,
    espn::types::LeagueResponse,
};

/// `mTeam` + `mRoster` + `mDraftDetail` + `mStatus`.
pub fn league_json() -> Value {
    json!({
        "id": 12345,
        "seasonId": 2026,
        "status": { "currentMatchupPeriod": 2, "isActive": true },
        "members": [
            { "id": "{OWNER-1}", "displayName": "jsmith", "firstName": "Jo", "lastName": "Smith" },
            { "id": "{OWNER-2}", "displayName": "puckhead" }
        ],
        "teams": [
            {
                "id": 1,
                "name": "Top Shelf",
                "owners": ["{OWNER-1}"],
                "playoffSeed": 2,
                "record": { "overall": { "wins": 8, "losses": 5, "ties": 1 } },
                "roster": { "entries": [
                    { "playerId": 101, "playerPoolEntry": { "player": { "id": 101, "fullName": "Connor McDavid", "defaultPositionId": 1 } } },
                    { "playerId": 106, "playerPoolEntry": { "player": { "id": 106, "fullName": "Kirill Kaprizov", "defaultPositionId": 2 } } }
                ] }
            },
            {
                "id": 2,
                "name": "Five Hole",
                "owners": ["{OWNER-2}"],
                "playoffSeed": 1,
                "record": { "overall": { "wins": 10, "losses": 3, "ties": 1 } },
                "roster": { "entries": [
                    { "playerId": 102, "playerPoolEntry": { "player": { "id": 102, "fullName": "Igor Shesterkin", "defaultPositionId": 5 } } },
                    { "playerId": 105 }
                ] }
            },
            {
                "id": 3,
                "location": "Bar",
                "nickname": "Down",
                "owners": [],
                "playoffSeed": 3,
                "record": { "overall": { "wins": 4, "losses": 9, "ties": 1 } },
                "roster": { "entries": [
                    { "playerId": 103, "playerPoolEntry": { "player": { "id": 103, "fullName": "Cale Makar", "defaultPositionId": 4 } } },
                    { "playerId": 104 }
                ] }
            }
        ],
        "draftDetail": {
            "drafted": true,
            "picks": [
                { "playerId": 101, "roundId": 1, "roundPickNumber": 1, "teamId": 1, "overallPickNumber": 1 },
                { "playerId": 102, "roundId": 1, "roundPickNumber": 2, "teamId": 2, "overallPickNumber": 2 },
                { "playerId": 103, "roundId": 1, "roundPickNumber": 3, "teamId": 3, "overallPickNumber": 3 },
                { "playerId": 104, "roundId": 2, "roundPickNumber": 1, "teamId": 3, "overallPickNumber": 4 },
                { "playerId": 105, "roundId": 2, "roundPickNumber": 2, "teamId": 2, "overallPickNumber": 5 },
                { "playerId": 106, "roundId": 2, "roundPickNumber": 3, "teamId": 1, "overallPickNumber": 6 }
            ]
        }
    })
}

fn lineup_entry(id: u64, points: Option<f64>) -> Value {
    match points {
        Some(pts) => json!({ "playerId": id, "playerPoolEntry": { "appliedStatTotal": pts } }),
        None => json!({ "playerId": id, "playerPoolEntry": {} }),
    }
}

/// `mMatchupScore` + `mScoreboard` filtered to one matchup period.
pub fn box_scores_json(period: u16) -> Value {
    match period {
        1 => json!({
            "schedule": [
                {
                    "matchupPeriodId": 1,
                    "home": { "teamId": 1, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(101, Some(12.0)), lineup_entry(106, Some(8.0))
                    ] } },
                    "away": { "teamId": 2, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(102, Some(15.0)), lineup_entry(105, None)
                    ] } }
                },
                {
                    "matchupPeriodId": 1,
                    "home": { "teamId": 3, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(103, Some(9.0)),
                        { "playerId": 104, "playerPoolEntry": { "appliedStatTotal": 11.0,
                            "player": { "id": 104, "fullName": "Nikita Kucherov", "defaultPositionId": 3 } } }
                    ] } }
                }
            ]
        }),
        2 => json!({
            "schedule": [
                {
                    "matchupPeriodId": 2,
                    "home": { "teamId": 1, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(101, Some(10.0)), lineup_entry(106, Some(4.5))
                    ] } },
                    "away": { "teamId": 3, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(103, Some(7.0)), lineup_entry(104, Some(3.0))
                    ] } }
                },
                {
                    "matchupPeriodId": 2,
                    "home": { "teamId": 2, "rosterForMatchupPeriod": { "entries": [
                        lineup_entry(102, Some(20.0)), lineup_entry(105, Some(6.0))
                    ] } }
                }
            ]
        }),
        _ => json!({ "schedule": [] }),
    }
}

/// `/players?view=players_wl`
pub fn player_pool_json() -> Value {
    json!([
        { "id": 104, "fullName": "Nikita Kucherov", "defaultPositionId": 3 },
        { "id": 105, "fullName": "Juuse Saros", "defaultPositionId": 5 },
        { "id": 999, "fullName": "Undrafted Grinder", "defaultPositionId": 1 }
    ])
}

pub fn league() -> LeagueResponse {
    serde_json::from_value(league_json()).unwrap()
}

pub fn box_scores(period: u16) -> LeagueResponse {
    serde_json::from_value(box_scores_json(period)).unwrap()
}

/// Public league 12345, season 2026, no cookies.
pub fn config() -> EspnConfig {
    EspnConfig {
        league_id: LeagueId::new(12345),
        season: Season::new(2026),
        swid: None,
        espn_s2: None,
        roster: None,
    }
}
