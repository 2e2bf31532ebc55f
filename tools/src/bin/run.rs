use skyraid_simulator::game::{Game, GameMode};
use skyraid_simulator::level::Level;
use skyraid_simulator::persist;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("skyraid=info"))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        panic!("Expected arguments: LEVEL_FILE [SEED] [MAX_TICKS]");
    }
    let level_file = std::path::PathBuf::from(&args[1]);
    let seed: u32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0);
    let max_ticks: u32 = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(20_000);

    let def = persist::load(&level_file)?;
    log::info!(
        "running level {:?} with {} enemies, seed {}",
        def.name,
        def.enemies.len(),
        seed
    );

    let mut game = Game::new(Level::from_persisted(&def, seed));
    game.start();
    while game.mode == GameMode::Running && game.level.tick() < max_ticks {
        game.tick();
    }

    log::info!(
        "finished after {} ticks ({} ms simulated): {:?}",
        game.level.tick(),
        game.level.time_ms(),
        game.mode
    );
    log::debug!(
        "last update pass took {:.3}ms",
        game.level.timing().update * 1e3
    );
    Ok(())
}
