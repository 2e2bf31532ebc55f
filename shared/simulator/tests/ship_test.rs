use nalgebra::point;
use skyraid_simulator::path::Path;
use skyraid_simulator::ship::{self, PLAYER_LIVES, PLAYER_SPAWN};
use skyraid_simulator::weapon::WeaponKind;
use test_log::test;

#[test]
fn test_damage_below_threshold_keeps_ship_alive() {
    let mut player = ship::player_ship();
    assert!(!player.apply_damage(40, 100));
    assert_eq!(player.health, 60);
    assert!(!player.destroyed);
    assert_eq!(player.lives(), PLAYER_LIVES);
}

#[test]
fn test_lethal_damage_burns_one_life() {
    let mut player = ship::player_ship();
    assert!(player.apply_damage(150, 1000));
    assert!(player.destroyed);
    assert_eq!(player.lives(), PLAYER_LIVES - 1);
    assert!(!player.sprite.visible);

    // Further damage on a destroyed ship is ignored.
    assert!(!player.apply_damage(1000, 1100));
    assert_eq!(player.lives(), PLAYER_LIVES - 1);

    // Destroy is idempotent; no second life is burned.
    player.destroy(1200);
    assert_eq!(player.lives(), PLAYER_LIVES - 1);
}

#[test]
fn test_player_respawns_after_delay() {
    let mut player = ship::player_ship();
    player.go_down();
    player.apply_damage(100, 1000);

    // Before the destruction animation finishes and the spawn delay
    // elapses, the ship stays down.
    player.explosion.update(1034);
    assert!(!player.try_respawn(1034));
    assert!(player.destroyed);

    let mut respawned_at = None;
    for now in (1000..6000).step_by(34) {
        player.explosion.update(now);
        if player.try_respawn(now) {
            respawned_at = Some(now);
            break;
        }
    }
    // Spawn delay is 2000ms from the moment of destruction.
    let now = respawned_at.expect("player never respawned");
    assert!(now >= 3000);
    assert!(!player.destroyed);
    assert_eq!(player.health, player.max_health);
    assert_eq!(player.sprite.position, PLAYER_SPAWN);
    assert_eq!(player.lives(), PLAYER_LIVES - 1);
    // Held movement keys do not carry across the respawn.
    if let ship::ShipControl::Player(control) = &player.control {
        assert_eq!(control.velocity.y, 0.0);
    } else {
        panic!("player lost its control state");
    }
}

#[test]
fn test_no_respawn_with_zero_lives() {
    let mut player = ship::player_ship();
    let mut now = 0;
    for _ in 0..PLAYER_LIVES {
        player.apply_damage(1000, now);
        for t in (now..now + 5000).step_by(34) {
            player.explosion.update(t);
            player.try_respawn(t);
        }
        now += 5000;
    }
    assert!(player.destroyed);
    assert_eq!(player.lives(), 0);
    assert!(!player.try_respawn(now + 100_000));
}

#[test]
fn test_enemies_never_respawn() {
    let path = Path::new(vec![point![100.0, 200.0]], true);
    let mut enemy = ship::drone(path, 0);
    enemy.apply_damage(100, 0);
    assert!(enemy.destroyed);
    for now in (0..10_000).step_by(34) {
        enemy.explosion.update(now);
        assert!(!enemy.try_respawn(now));
    }
    assert!(enemy.destroyed);
}

#[test]
fn test_heal_is_capped_at_max_health() {
    let mut player = ship::player_ship();
    player.health = 40;
    player.heal(100);
    assert_eq!(player.health, player.max_health);
}

#[test]
fn test_grant_weapon_mounts_alongside_existing() {
    let mut player = ship::player_ship();
    assert_eq!(player.weapons.len(), 1);
    player.grant_weapon(WeaponKind::SpreadGun);
    assert_eq!(player.weapons.len(), 2);
    assert!(player.weapons.iter().any(|w| w.kind == WeaponKind::SpreadGun));
    assert!(player.weapons[1].player_owned);
}

#[test]
fn test_enemy_factories() {
    let path = Path::new(vec![point![300.0, 100.0]], true);
    let drone = ship::enemy_by_class(ship::ShipClass::Drone, path.clone(), 5).unwrap();
    assert_eq!(drone.health, 100);
    assert_eq!(drone.offset_gate(), 5);
    assert_eq!(drone.sprite.position, point![300.0, 100.0]);

    let bomber = ship::enemy_by_class(ship::ShipClass::Bomber, path.clone(), 0).unwrap();
    assert_eq!(bomber.health, 500);
    assert_eq!(bomber.weapons[0].kind, WeaponKind::Missile);

    assert!(ship::enemy_by_class(ship::ShipClass::Player, path, 0).is_none());
}
