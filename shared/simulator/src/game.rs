use crate::audio;
use crate::level::Level;
use crate::ship::{player_ship, ShipData};

/// Screen state machine wrapped around the simulation. The menu and editor
/// screens themselves are UI; only the transitions live here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Running,
    Paused,
    Editor,
    GameOver,
    Victory,
}

pub struct Game {
    pub mode: GameMode,
    pub level: Level,
    pub player: ShipData,
}

impl Game {
    pub fn new(level: Level) -> Game {
        Game {
            mode: GameMode::Menu,
            level,
            player: player_ship(),
        }
    }

    pub fn start(&mut self) {
        self.player = player_ship();
        self.mode = GameMode::Running;
        self.level.loop_sound(audio::SOUND_MUSIC);
    }

    pub fn pause(&mut self) {
        if self.mode == GameMode::Running {
            self.mode = GameMode::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.mode == GameMode::Paused {
            self.mode = GameMode::Running;
        }
    }

    pub fn open_editor(&mut self) {
        if self.mode == GameMode::Menu {
            self.mode = GameMode::Editor;
        }
    }

    pub fn back_to_menu(&mut self) {
        self.level.stop_sound(audio::SOUND_MUSIC);
        self.mode = GameMode::Menu;
    }

    /// One driver tick. Only the Running screen advances the simulation.
    pub fn tick(&mut self) {
        if self.mode != GameMode::Running {
            return;
        }
        self.level.update(&mut self.player);

        let out_of_lives =
            self.player.destroyed && self.player.lives() <= 0 && self.player.explosion.is_done();
        if out_of_lives {
            log::info!("game over");
            self.level.stop_sound(audio::SOUND_MUSIC);
            self.mode = GameMode::GameOver;
        } else if self.level.is_completed() {
            log::info!("level {:?} completed", self.level.name);
            self.level.stop_sound(audio::SOUND_MUSIC);
            self.mode = GameMode::Victory;
        }
    }
}
