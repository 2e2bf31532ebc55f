use nalgebra::point;
use skyraid_simulator::game::{Game, GameMode};
use skyraid_simulator::level::Level;
use skyraid_simulator::path::Path;
use skyraid_simulator::ship;
use test_log::test;

#[test]
fn test_mode_transitions() {
    let mut game = Game::new(Level::new("test", 1));
    assert_eq!(game.mode, GameMode::Menu);

    game.open_editor();
    assert_eq!(game.mode, GameMode::Editor);
    game.back_to_menu();
    assert_eq!(game.mode, GameMode::Menu);

    game.start();
    assert_eq!(game.mode, GameMode::Running);
    game.pause();
    assert_eq!(game.mode, GameMode::Paused);
    // Paused games do not advance.
    let tick = game.level.tick();
    game.tick();
    assert_eq!(game.level.tick(), tick);
    game.resume();
    assert_eq!(game.mode, GameMode::Running);
    game.tick();
    assert_eq!(game.level.tick(), tick + 1);
}

#[test]
fn test_victory_on_cleared_level() {
    let mut game = Game::new(Level::new("test", 1));
    game.start();
    for _ in 0..200 {
        game.tick();
        if game.mode == GameMode::Victory {
            break;
        }
    }
    assert_eq!(game.mode, GameMode::Victory);
    // Victory freezes the simulation.
    let tick = game.level.tick();
    game.tick();
    assert_eq!(game.level.tick(), tick);
}

#[test]
fn test_game_over_after_last_life() {
    let mut game = Game::new(Level::new("test", 1));
    // An enemy parked on the spawn point destroys the player on every
    // respawn until the lives run out.
    game.level
        .add_ship(ship::drone(Path::new(vec![point![20.0, 200.0]], true), 0));
    game.start();
    for _ in 0..1000 {
        game.tick();
        if game.mode == GameMode::GameOver {
            break;
        }
    }
    assert_eq!(game.mode, GameMode::GameOver);
    assert_eq!(game.player.lives(), 0);
}

#[test]
fn test_start_resets_player() {
    let mut game = Game::new(Level::new("test", 1));
    game.start();
    game.player.apply_damage(60, 0);
    assert_eq!(game.player.health, 40);
    game.back_to_menu();
    game.start();
    assert_eq!(game.player.health, game.player.max_health);
    assert_eq!(game.player.lives(), ship::PLAYER_LIVES);
}
