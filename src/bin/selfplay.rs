use std::error::Error;
use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules::config::GameConfig;
use chess_rules::game::Game;
use chess_rules::strategy::RandomStrategy;

const MAX_HALF_MOVES: usize = 600;

/// Random vs random. Usage: `selfplay [config.json]`.
/// Human seats are played by the random strategy too.
fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json(&fs::read_to_string(path)?)?,
        None => GameConfig::new(),
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::from_config(&config, &mut rng);
    let mut cpu = RandomStrategy::with_rng(rng);

    while !game.state().is_over() && game.log().len() < MAX_HALF_MOVES {
        game.play_strategy(&mut cpu)?;
    }
    if !game.state().is_over() {
        game.terminate(None);
    }

    let result = game.result().map_or("*".to_string(), |r| r.to_string());
    eprintln!("Game over after {} half-moves: {:?} {result}", game.log().len(), game.state());
    println!("{}", game.log().half_moves().join(" "));
    println!("{}", game.record().to_json()?);
    Ok(())
}
