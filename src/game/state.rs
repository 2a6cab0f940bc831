//! Game session: the single owner of all game state
//!
//! A session holds the territory map, the assigned mission, the random
//! number generator and the logger. Every operation borrows the session
//! explicitly; there is no process-wide state.

use crate::core::{Mission, MissionStatus};
use crate::game::battle::{self, BattleReport};
use crate::game::{GameLogger, OutputFormat, VerbosityLevel};
use crate::map::TerritoryMap;
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Settings for one game, usually built from the command line
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of territories on the map (at least 1)
    pub territories: usize,
    /// Seed for the session RNG
    pub seed: u64,
    /// Force a catalog mission instead of drawing one
    pub mission: Option<Mission>,
    /// Stop after this many rounds (None = play until quit or victory)
    pub max_rounds: Option<u32>,
    pub verbosity: VerbosityLevel,
    pub output_format: OutputFormat,
}

impl GameConfig {
    pub fn new(territories: usize, seed: u64) -> Self {
        GameConfig {
            territories,
            seed,
            mission: None,
            max_rounds: None,
            verbosity: VerbosityLevel::default(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Seed derived from the wall clock, used when no seed is given
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(seed_from_duration)
        .unwrap_or_default()
}

/// Fold whole seconds and the sub-second nanos into one seed
fn seed_from_duration(elapsed: Duration) -> u64 {
    elapsed.as_secs().rotate_left(32) ^ u64::from(elapsed.subsec_nanos())
}

/// Complete state of one game
#[derive(Debug)]
pub struct GameSession {
    /// The board
    pub map: TerritoryMap,

    /// Victory condition, fixed for the whole session
    mission: Mission,

    /// Seeded once at startup and never reseeded
    pub rng: ChaCha12Rng,

    /// Seed the RNG was created from (for reproducing a game)
    seed: u64,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameSession {
    /// Set up a new game: build the map, then draw the mission
    pub fn new(territories: usize, seed: u64) -> Result<Self> {
        Self::from_config(&GameConfig::new(territories, seed))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut rng = ChaCha12Rng::seed_from_u64(config.seed);
        let map = TerritoryMap::generate(config.territories, &mut rng)?;
        let mission = match config.mission {
            Some(mission) => mission,
            None => Mission::assign(&mut rng),
        };

        let mut logger = GameLogger::with_verbosity(config.verbosity);
        logger.set_output_format(config.output_format);

        Ok(GameSession {
            map,
            mission,
            rng,
            seed: config.seed,
            logger,
        })
    }

    /// Start a game from a predetermined map and mission
    pub fn with_map(map: TerritoryMap, mission: Mission, seed: u64) -> Self {
        GameSession {
            map,
            mission,
            rng: ChaCha12Rng::seed_from_u64(seed),
            seed,
            logger: GameLogger::new(),
        }
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Attack between two validated map indices, rolling dice from the session RNG
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<BattleReport> {
        let (attacker, defender) = self.map.pair_mut(attacker, defender)?;
        battle::attack(attacker, defender, &mut self.rng)
    }

    /// Attack using raw indices as typed by the player
    ///
    /// Out-of-range or identical indices are rejected before anything is
    /// rolled or mutated.
    pub fn attack_raw(&mut self, attacker: i64, defender: i64) -> Result<BattleReport> {
        let attacker = self.map.resolve_index(attacker)?;
        let defender = self.map.resolve_index(defender)?;
        self.attack(attacker, defender)
    }

    pub fn mission_status(&self) -> MissionStatus {
        self.mission.evaluate(&self.map.faction_counts())
    }

    /// Whether the assigned mission has been accomplished
    pub fn check_mission(&self) -> bool {
        self.mission_status().is_complete()
    }
}
