//! League and credential configuration.
//!
//! Every setting is resolved with the same precedence: command-line flag,
//! then environment variable, then the optional TOML config file, then the
//! built-in default.
//!
//! ```toml
//! [league]
//! id = 123456
//! year = 2026
//!
//! [credentials]
//! swid = "{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}"
//! espn_s2 = "AEB..."
//!
//! [roster]
//! num_teams = 12
//! forward = 9
//! defense = 4
//! goalie = 2
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season},
    draft::vor::RosterSpots,
    error::EspnError,
    Result, CONFIG_PATH_ENV_VAR, ESPN_S2_ENV_VAR, LEAGUE_ID_ENV_VAR, SEASON_ENV_VAR,
    SWID_ENV_VAR,
};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "espn-fhl.toml";

/// Everything needed to talk to one ESPN league.
#[derive(Debug, Clone, PartialEq)]
pub struct EspnConfig {
    pub league_id: LeagueId,
    pub season: Season,
    /// `SWID` cookie; only needed for private leagues.
    pub swid: Option<String>,
    /// `espn_s2` cookie; only needed for private leagues.
    pub espn_s2: Option<String>,
    /// Lineup shape from the `[roster]` table, if the file has one.
    pub roster: Option<RosterSpots>,
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub league_id: Option<LeagueId>,
    pub season: Option<Season>,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    league: LeagueSection,
    #[serde(default)]
    credentials: CredentialsSection,
    roster: Option<RosterSpots>,
}

#[derive(Debug, Default, Deserialize)]
struct LeagueSection {
    id: Option<u32>,
    year: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct CredentialsSection {
    swid: Option<String>,
    espn_s2: Option<String>,
}

impl EspnConfig {
    /// Resolve configuration from flags, the process environment and the config file.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the process environment.
    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let file = match config_file_path(overrides.config_path, &lookup) {
            Some((path, explicit)) => read_config_file(&path, explicit)?,
            None => ConfigFile::default(),
        };

        let league_id = match overrides.league_id {
            Some(id) => id,
            None => match lookup(LEAGUE_ID_ENV_VAR) {
                Some(raw) => raw.parse()?,
                None => file.league.id.map(LeagueId::new).ok_or_else(|| {
                    EspnError::MissingLeagueId {
                        env_var: LEAGUE_ID_ENV_VAR.to_string(),
                    }
                })?,
            },
        };

        let season = match overrides.season {
            Some(season) => season,
            None => match lookup(SEASON_ENV_VAR) {
                Some(raw) => raw.parse()?,
                None => file.league.year.map(Season::new).unwrap_or_default(),
            },
        };

        let swid = lookup(SWID_ENV_VAR).or(file.credentials.swid);
        let espn_s2 = lookup(ESPN_S2_ENV_VAR).or(file.credentials.espn_s2);

        Ok(Self {
            league_id,
            season,
            swid,
            espn_s2,
            roster: file.roster,
        })
    }

    /// Both cookies are present, so the league can be read even if private.
    pub fn has_credentials(&self) -> bool {
        self.swid.is_some() && self.espn_s2.is_some()
    }
}

/// Which config file to read, and whether the user asked for it by name.
fn config_file_path<F>(flag: Option<PathBuf>, lookup: &F) -> Option<(PathBuf, bool)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = flag {
        return Some((path, true));
    }
    if let Some(path) = lookup(CONFIG_PATH_ENV_VAR) {
        return Some((PathBuf::from(path), true));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some((default, false))
}

fn read_config_file(path: &Path, explicit: bool) -> Result<ConfigFile> {
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        }
        Err(e) => {
            return Err(EspnError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    debug!(path = %path.display(), "reading config file");
    toml::from_str(&contents).map_err(|e| EspnError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
