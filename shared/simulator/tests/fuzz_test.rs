use rand::Rng;
use rayon::prelude::*;
use skyraid_simulator::level::{Level, VIEW_HEIGHT, VIEW_WIDTH};
use skyraid_simulator::persist::PersistedLevel;
use skyraid_simulator::rng::new_rng;
use skyraid_simulator::ship::{self, PLAYER_LIVES};
use test_log::test;

fn battlefield() -> PersistedLevel {
    let mut def = PersistedLevel::empty("fuzz");
    let commands = [
        "spawn drone at (400, 100) offset 0",
        "path 0 add (400, 300)",
        "path 0 cyclic true",
        "spawn raider at (500, 240) offset 30",
        "path 1 add (300, 240)",
        "path 1 cyclic true",
        "spawn bomber at (600, 400) offset 60",
        "path 2 cyclic true",
        "powerup heal 50 at (550, 100)",
        "powerup weapon spread_gun at (550, 300)",
        "scroll 1",
    ];
    for command in commands {
        skyraid_simulator::editor::apply_command(&mut def, command).unwrap();
    }
    def
}

fn run_session(seed: u32, ticks: u32) -> (Level, ship::ShipData) {
    let def = battlefield();
    let mut level = Level::from_persisted(&def, seed);
    let mut player = ship::player_ship();
    let mut input = new_rng(seed.wrapping_add(0x5eed));
    for _ in 0..ticks {
        match input.gen_range(0..8) {
            0 => player.go_left(),
            1 => player.go_right(),
            2 => player.go_up(),
            3 => player.go_down(),
            4 => player.reset_dx(),
            5 => player.reset_dy(),
            _ => level.fire_player(&mut player),
        }
        level.update(&mut player);

        assert!(player.health <= player.max_health);
        assert!(player.lives() >= 0 && player.lives() <= PLAYER_LIVES);
        if !player.destroyed {
            assert!(player.sprite.position.x >= 0.0);
            assert!(player.sprite.position.x <= VIEW_WIDTH);
            assert!(player.sprite.position.y >= 0.0);
            assert!(player.sprite.position.y <= VIEW_HEIGHT);
        }
        for &handle in level.ships.iter() {
            let enemy = level.ship(handle);
            assert!(enemy.health <= enemy.max_health);
        }
    }
    (level, player)
}

#[test]
fn test_random_sessions_hold_invariants() {
    (0..20u32).into_par_iter().for_each(|seed| {
        run_session(seed, 500);
    });
}

#[test]
fn test_sessions_are_deterministic() {
    (0..8u32).into_par_iter().for_each(|seed| {
        let (level_a, player_a) = run_session(seed, 300);
        let (level_b, player_b) = run_session(seed, 300);
        assert_eq!(level_a.tick(), level_b.tick());
        assert_eq!(level_a.offset(), level_b.offset());
        assert_eq!(level_a.ships.len(), level_b.ships.len());
        assert_eq!(level_a.player_shots.len(), level_b.player_shots.len());
        assert_eq!(level_a.enemy_shots.len(), level_b.enemy_shots.len());
        assert_eq!(player_a.sprite.position, player_b.sprite.position);
        assert_eq!(player_a.health, player_b.health);
        assert_eq!(player_a.lives(), player_b.lives());
    });
}
