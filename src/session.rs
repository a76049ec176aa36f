use std::fmt;

use crate::entity::{Coin, Player, collect_coins};
use crate::error::GameError;
use crate::input::InputState;
use crate::level::LevelDef;
use crate::physics::{PhysicsParams, step_player};
use crate::render::{COIN_COLOR, PLATFORM_COLOR, PLAYER_COLOR, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Completed(Completion),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Running => "running",
            Phase::Completed(Completion::Level) => "level complete",
            Phase::Completed(Completion::Game) => "game complete",
        };
        f.write_str(name)
    }
}

/// How a finished level ends: another level follows, or the run wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Level,
    Game,
}

impl Completion {
    pub fn message(self) -> &'static str {
        match self {
            Completion::Level => "Level Complete!",
            Completion::Game => "You Win!",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Completion::Level => "Next Level",
            Completion::Game => "Restart",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing ran; the session isn't in a level.
    Idle,
    Continue,
    Completed(Completion),
}

/// Level progression plus the live entities of the active level.
///
/// The host calls [`Session::frame`] once per display tick while the outcome
/// is [`TickOutcome::Continue`], and [`Session::start`] / [`Session::continue_game`]
/// from its buttons.
pub struct Session {
    levels: &'static [LevelDef],
    params: PhysicsParams,
    level_index: usize,
    phase: Phase,
    player: Player,
    coins: Vec<Coin>,
}

impl Session {
    pub fn new(
        levels: &'static [LevelDef],
        params: PhysicsParams,
        start_level: usize,
    ) -> Result<Self, GameError> {
        if levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        if start_level >= levels.len() {
            return Err(GameError::LevelOutOfRange {
                index: start_level,
                count: levels.len(),
            });
        }

        Ok(Self {
            levels,
            params,
            level_index: start_level,
            phase: Phase::NotStarted,
            player: params.spawn_player(),
            coins: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn collected_count(&self) -> usize {
        self.coins.iter().filter(|coin| coin.collected).count()
    }

    fn level(&self) -> &'static LevelDef {
        let levels = self.levels;
        &levels[self.level_index]
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::InvalidTransition {
                phase: self.phase,
                action: "start",
            });
        }
        self.load_level(self.level_index);
        Ok(())
    }

    /// Moves on from a completed level, wrapping to the first level after the last.
    pub fn continue_game(&mut self) -> Result<(), GameError> {
        let Phase::Completed(completion) = self.phase else {
            return Err(GameError::InvalidTransition {
                phase: self.phase,
                action: "continue",
            });
        };

        let next = match completion {
            Completion::Level => self.level_index + 1,
            Completion::Game => {
                log::info!("all {} levels cleared, wrapping to level 0", self.levels.len());
                0
            }
        };
        self.load_level(next);
        Ok(())
    }

    fn load_level(&mut self, index: usize) {
        self.level_index = index;
        self.player = self.params.spawn_player();
        self.coins = self.level().spawn_coins();
        self.phase = Phase::Running;
        log::info!("level {} started ({} coins)", index, self.coins.len());
    }

    /// One simulation step: movement, collisions, pickups, completion check.
    pub fn tick(&mut self, input: &InputState) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        let level = self.level();
        step_player(&mut self.player, input, level.platforms, &self.params);

        let picked = collect_coins(&self.player.rect, &mut self.coins);
        if picked > 0 {
            log::debug!(
                "picked up {} coin(s), {}/{} collected",
                picked,
                self.collected_count(),
                self.coins.len()
            );
        }

        if !self.coins.iter().all(|coin| coin.collected) {
            return TickOutcome::Continue;
        }

        let completion = if self.level_index + 1 < self.levels.len() {
            Completion::Level
        } else {
            Completion::Game
        };
        self.phase = Phase::Completed(completion);
        log::info!("level {} complete", self.level_index);
        TickOutcome::Completed(completion)
    }

    /// Clears `surface`, ticks, and draws the resulting frame.
    pub fn frame(&mut self, input: &InputState, surface: &mut impl Surface) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        surface.clear();
        let outcome = self.tick(input);
        self.draw(surface);
        outcome
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(&self.player.rect, PLAYER_COLOR);
        for coin in self.coins.iter().filter(|coin| !coin.collected) {
            surface.fill_rect(&coin.rect, COIN_COLOR);
        }
        for platform in self.level().platforms {
            surface.fill_rect(platform, PLATFORM_COLOR);
        }
    }
}
