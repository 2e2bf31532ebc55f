use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::point;
use skyraid_simulator::level::Level;
use skyraid_simulator::path::Path;
use skyraid_simulator::ship::{drone, player_ship, raider};

fn populated_level() -> Level {
    let mut level = Level::new("bench", 0);
    for i in 0..50 {
        let y = 40.0 + (i % 10) as f64 * 40.0;
        let path = Path::new(
            vec![point![600.0, y], point![200.0, y], point![600.0, y]],
            true,
        );
        if i % 2 == 0 {
            level.add_ship(drone(path, 0));
        } else {
            level.add_ship(raider(path, 0));
        }
    }
    level
}

fn ticks(c: &mut Criterion) {
    c.bench_function("100 ticks", |b| {
        b.iter(|| {
            let mut level = populated_level();
            let mut player = player_ship();
            for _ in 0..100 {
                level.fire_player(&mut player);
                level.update(&mut player);
            }
        })
    });
}

criterion_group!(benches, ticks);
criterion_main!(benches);
