use crate::animation::AnimatedSprite;
use crate::arena::Index;
use crate::graphics::Canvas;
use crate::gunner::Gunner;
use crate::index_set::HasIndex;
use crate::navigator::Navigator;
use crate::path::Path;
use crate::rng::SeededRng;
use crate::sprite::Sprite;
use crate::timer::Timer;
use crate::weapon::{PendingShot, Weapon, WeaponKind};
use nalgebra::{point, vector, Point2, Vector2};
use serde::{Deserialize, Serialize};

pub const PLAYER_LIVES: i32 = 3;
pub const PLAYER_SPEED: f64 = 4.0;
pub const PLAYER_SPAWN: Point2<f64> = point![20.0, 200.0];
/// Delay between the player's destruction and the respawn becoming
/// eligible, provided lives remain.
pub const SPAWN_DELAY_MS: u64 = 2000;
const EXPLOSION_RUNTIME_MS: u64 = 1000;
const EXPLOSION_FRAMES: usize = 6;

pub const SHIP_WIDTH: i32 = 20;
pub const SHIP_HEIGHT: i32 = 20;

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct ShipHandle(pub Index);

impl HasIndex for ShipHandle {
    fn index(self) -> Index {
        self.0
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum ShipClass {
    Player,
    Drone,
    Raider,
    Bomber,
}

impl ShipClass {
    pub fn name(&self) -> &'static str {
        match self {
            ShipClass::Player => "player",
            ShipClass::Drone => "drone",
            ShipClass::Raider => "raider",
            ShipClass::Bomber => "bomber",
        }
    }
}

impl std::str::FromStr for ShipClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(ShipClass::Player),
            "drone" => Ok(ShipClass::Drone),
            "raider" => Ok(ShipClass::Raider),
            "bomber" => Ok(ShipClass::Bomber),
            _ => anyhow::bail!("unknown ship class {:?}", s),
        }
    }
}

/// Kind-specific ship state. The player is steered by input commands and
/// can respawn; enemies follow a path and fire on a gunner's schedule.
#[derive(Clone, Debug)]
pub enum ShipControl {
    Player(PlayerControl),
    Enemy(EnemyControl),
}

#[derive(Clone, Debug)]
pub struct PlayerControl {
    pub lives: i32,
    pub spawn_point: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub respawn: Timer,
}

#[derive(Clone, Debug)]
pub struct EnemyControl {
    pub path: Path,
    pub speed: f64,
    pub destination: Option<Point2<f64>>,
    pub gunner: Option<Gunner>,
    /// Level offset at which this enemy becomes eligible to act.
    pub offset: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathProgress {
    Moving,
    Exhausted,
}

impl EnemyControl {
    /// Move one navigator step along the path. Exhausted means the ship
    /// has consumed a non-cyclic path and leaves the simulation.
    pub fn advance(&mut self, sprite: &mut Sprite) -> PathProgress {
        let destination = match self.destination {
            Some(destination) => destination,
            None => match self.path.next() {
                Some(waypoint) => {
                    self.destination = Some(waypoint);
                    waypoint
                }
                None => return PathProgress::Exhausted,
            },
        };
        let navigator = Navigator::new(destination, self.speed);
        sprite.position = navigator.next_position(sprite.position);
        if sprite.position == destination {
            self.destination = None;
        }
        PathProgress::Moving
    }
}

#[derive(Clone, Debug)]
pub struct ShipData {
    pub class: ShipClass,
    pub sprite: Sprite,
    pub health: i32,
    pub max_health: i32,
    pub destroyed: bool,
    pub weapons: Vec<Weapon>,
    pub explosion: AnimatedSprite,
    pub control: ShipControl,
}

impl ShipData {
    pub fn is_player(&self) -> bool {
        matches!(self.control, ShipControl::Player(_))
    }

    /// Offset gate for enemies; the player is always eligible.
    pub fn offset_gate(&self) -> i32 {
        match &self.control {
            ShipControl::Enemy(enemy) => enemy.offset,
            ShipControl::Player(_) => 0,
        }
    }

    pub fn lives(&self) -> i32 {
        match &self.control {
            ShipControl::Player(player) => player.lives,
            ShipControl::Enemy(_) => 0,
        }
    }

    /// Apply damage and run the destruction transition when health drops
    /// to zero or below. Returns true if the ship was destroyed by this
    /// call. Already-destroyed ships ignore further damage.
    pub fn apply_damage(&mut self, amount: i32, now_ms: u64) -> bool {
        if self.destroyed {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.destroy(now_ms);
            return true;
        }
        false
    }

    /// Destruction entry: hide and deactivate the ship, start the
    /// destruction animation in place, and for the player burn a life and
    /// start the respawn timer. Idempotent while already destroyed.
    pub fn destroy(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        let position = self.sprite.position;
        self.sprite.hide();
        self.explosion.reset_at(position, now_ms);
        if let ShipControl::Player(player) = &mut self.control {
            player.lives -= 1;
            player.respawn.reset(now_ms);
            log::info!("player destroyed, {} lives remaining", player.lives);
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn grant_weapon(&mut self, kind: WeaponKind) {
        let player_owned = self.is_player();
        let mount = default_mount(self.sprite.width, self.sprite.height);
        self.weapons.push(Weapon::new(kind, mount, player_owned));
    }

    /// Fire every mounted weapon that is off cooldown.
    pub fn fire_all(&mut self, now_ms: u64, out: &mut Vec<PendingShot>) {
        let position = self.sprite.position;
        for weapon in self.weapons.iter_mut() {
            weapon.fire(now_ms, position, out);
        }
    }

    /// Path-follow one step. Returns Moving for the player, which is not
    /// path-driven.
    pub fn advance_enemy(&mut self) -> PathProgress {
        match &mut self.control {
            ShipControl::Enemy(enemy) => enemy.advance(&mut self.sprite),
            ShipControl::Player(_) => PathProgress::Moving,
        }
    }

    pub fn gunner_update(&mut self, now_ms: u64, rng: &mut SeededRng) -> bool {
        match &mut self.control {
            ShipControl::Enemy(enemy) => match &mut enemy.gunner {
                Some(gunner) => gunner.update(now_ms, rng),
                None => false,
            },
            ShipControl::Player(_) => false,
        }
    }

    /// Player-only: leave the destroyed state once the destruction
    /// animation has finished, the spawn delay has elapsed and lives
    /// remain. Returns true on the tick the ship comes back.
    pub fn try_respawn(&mut self, now_ms: u64) -> bool {
        let spawn_point = match &self.control {
            ShipControl::Player(player)
                if self.destroyed
                    && self.explosion.is_done()
                    && player.lives > 0
                    && player.respawn.elapsed(now_ms, SPAWN_DELAY_MS) =>
            {
                player.spawn_point
            }
            _ => return false,
        };
        self.sprite.position = spawn_point;
        self.sprite.show();
        self.destroyed = false;
        self.health = self.max_health;
        if let ShipControl::Player(player) = &mut self.control {
            player.velocity = vector![0.0, 0.0];
        }
        log::info!("player respawned");
        true
    }

    // Directional input commands from the key-binding layer.

    pub fn go_left(&mut self) {
        self.set_dx(-PLAYER_SPEED);
    }

    pub fn go_right(&mut self) {
        self.set_dx(PLAYER_SPEED);
    }

    pub fn go_up(&mut self) {
        self.set_dy(-PLAYER_SPEED);
    }

    pub fn go_down(&mut self) {
        self.set_dy(PLAYER_SPEED);
    }

    pub fn reset_dx(&mut self) {
        self.set_dx(0.0);
    }

    pub fn reset_dy(&mut self) {
        self.set_dy(0.0);
    }

    fn set_dx(&mut self, dx: f64) {
        if let ShipControl::Player(player) = &mut self.control {
            player.velocity.x = dx;
        }
    }

    fn set_dy(&mut self, dy: f64) {
        if let ShipControl::Player(player) = &mut self.control {
            player.velocity.y = dy;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.sprite.draw(canvas);
        self.explosion.draw(canvas);
    }
}

fn default_mount(width: i32, height: i32) -> Vector2<f64> {
    vector![width as f64, height as f64 / 2.0]
}

fn explosion_at(position: Point2<f64>) -> AnimatedSprite {
    let frames = (0..EXPLOSION_FRAMES).map(|i| format!("explosion{i}")).collect();
    AnimatedSprite::new(
        position,
        SHIP_WIDTH,
        SHIP_HEIGHT,
        frames,
        EXPLOSION_RUNTIME_MS,
        false,
    )
}

pub fn player_ship() -> ShipData {
    let sprite = Sprite::new(PLAYER_SPAWN, SHIP_WIDTH, SHIP_HEIGHT, "player");
    let mount = default_mount(SHIP_WIDTH, SHIP_HEIGHT);
    ShipData {
        class: ShipClass::Player,
        sprite,
        health: 100,
        max_health: 100,
        destroyed: false,
        weapons: vec![Weapon::new(WeaponKind::Laser, mount, true)],
        explosion: explosion_at(PLAYER_SPAWN),
        control: ShipControl::Player(PlayerControl {
            lives: PLAYER_LIVES,
            spawn_point: PLAYER_SPAWN,
            velocity: vector![0.0, 0.0],
            respawn: Timer::default(),
        }),
    }
}

fn enemy(
    class: ShipClass,
    health: i32,
    weapon: WeaponKind,
    fire_interval_ms: (u64, u64),
    speed: f64,
    path: Path,
    offset: i32,
) -> ShipData {
    let position = path.waypoints().first().copied().unwrap_or(point![0.0, 0.0]);
    let sprite = Sprite::new(position, SHIP_WIDTH, SHIP_HEIGHT, class.name());
    // Enemy weapons fire from the left edge, toward the player.
    let mount = vector![0.0, SHIP_HEIGHT as f64 / 2.0];
    ShipData {
        class,
        sprite,
        health,
        max_health: health,
        destroyed: false,
        weapons: vec![Weapon::new(weapon, mount, false)],
        explosion: explosion_at(position),
        control: ShipControl::Enemy(EnemyControl {
            path,
            speed,
            destination: None,
            gunner: Some(Gunner::new(fire_interval_ms.0, fire_interval_ms.1)),
            offset,
        }),
    }
}

pub fn drone(path: Path, offset: i32) -> ShipData {
    enemy(ShipClass::Drone, 100, WeaponKind::Laser, (800, 2400), 3.0, path, offset)
}

pub fn raider(path: Path, offset: i32) -> ShipData {
    enemy(
        ShipClass::Raider,
        200,
        WeaponKind::DoubleLaser,
        (600, 2000),
        4.0,
        path,
        offset,
    )
}

pub fn bomber(path: Path, offset: i32) -> ShipData {
    enemy(
        ShipClass::Bomber,
        500,
        WeaponKind::Missile,
        (1500, 4000),
        2.0,
        path,
        offset,
    )
}

pub fn enemy_by_class(class: ShipClass, path: Path, offset: i32) -> Option<ShipData> {
    match class {
        ShipClass::Drone => Some(drone(path, offset)),
        ShipClass::Raider => Some(raider(path, offset)),
        ShipClass::Bomber => Some(bomber(path, offset)),
        ShipClass::Player => {
            log::warn!("cannot create the player ship through the enemy factory");
            None
        }
    }
}
