//! Fixed-step tick mechanics: accumulator gating, boundary ordering, flap
//! impulse semantics, and tile recycling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use varnamala::core::{
    advance, flap, load_word_list, start_round, FailureKind, GameConfig, Phase, RoundResult,
    WordGame,
};
use varnamala::words::WordEntry;

fn playing_game() -> WordGame {
    let mut game = WordGame::new(GameConfig::default());
    let words = vec![WordEntry {
        script: "गाजर".to_string(),
        transliteration: "gajar".to_string(),
    }];
    load_word_list(&mut game, "vegetables", words).unwrap();
    start_round(&mut game, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    flap(&mut game);
    game
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(5)
}

#[test]
fn test_accumulator_holds_sub_interval_deltas() {
    let mut game = playing_game();
    let interval = game.config.tick_interval_ms;

    advance(&mut game, interval * 0.4, &mut rng());
    advance(&mut game, interval * 0.4, &mut rng());
    assert_eq!(game.tick_count, 0);

    advance(&mut game, interval * 0.4, &mut rng());
    assert_eq!(game.tick_count, 1);
    // Remainder carries forward instead of being discarded.
    assert!((game.accumulated_ms - interval * 0.2).abs() < 1e-9);
}

#[test]
fn test_large_delta_runs_catch_up_ticks() {
    let mut game = playing_game();
    let interval = game.config.tick_interval_ms;
    advance(&mut game, interval * 5.5, &mut rng());
    assert_eq!(game.tick_count, 5);
}

#[test]
fn test_flap_overwrites_downward_velocity() {
    let mut game = playing_game();
    game.player.velocity = 12.0;
    flap(&mut game);
    assert!((game.player.velocity - game.config.lift).abs() < f64::EPSILON);
}

#[test]
fn test_ticks_stop_the_moment_the_round_ends() {
    let mut game = playing_game();
    // Already out of bounds: the first step ends the round before physics.
    game.player.y = game.config.board_height + 1.0;
    let interval = game.config.tick_interval_ms;
    advance(&mut game, interval * 100.0, &mut rng());
    assert_eq!(
        game.phase,
        Phase::Ended(RoundResult::Failure(FailureKind::OutOfBounds))
    );
    assert_eq!(game.tick_count, 0);

    // A late driver callback after the end is a no-op.
    let positions: Vec<f64> = game.tiles.iter().map(|t| t.x).collect();
    advance(&mut game, interval * 100.0, &mut rng());
    assert_eq!(game.tick_count, 0);
    let after: Vec<f64> = game.tiles.iter().map(|t| t.x).collect();
    assert_eq!(positions, after);
}

#[test]
fn test_boundary_failure_checked_before_movement() {
    let mut game = playing_game();
    game.player.y = -0.1;
    game.player.velocity = 50.0; // would re-enter the board if physics ran
    let interval = game.config.tick_interval_ms;
    advance(&mut game, interval, &mut rng());
    assert_eq!(
        game.phase,
        Phase::Ended(RoundResult::Failure(FailureKind::OutOfBounds))
    );
    assert!((game.player.y - (-0.1)).abs() < f64::EPSILON);
}

#[test]
fn test_tiles_recycle_to_right_edge_within_spawn_band() {
    let mut game = playing_game();
    let config = game.config.clone();
    let count = game.tiles.len();

    // Long enough for every tile to cross the board at least once. The word
    // is four letters, so no collision can complete it before the first
    // wrong-letter hit; keep the player parked out of tile reach instead.
    let mut rng = rng();
    for _ in 0..5_000 {
        game.player.y = config.board_height * 0.9;
        game.player.velocity = 0.0;
        advance(&mut game, config.tick_interval_ms, &mut rng);
        assert_eq!(game.tiles.len(), count);
        for tile in &game.tiles {
            assert!(tile.x <= config.tile_start_x(count - 1));
            assert!(tile.x + config.letter_width >= -config.scroll_speed);
        }
        if game.phase != Phase::Playing {
            break;
        }
    }
    assert_eq!(game.phase, Phase::Playing);

    let top = config.spawn_band_min * config.board_height;
    let bottom = config.spawn_band_max * config.board_height - config.letter_height;
    for tile in &game.tiles {
        assert!(tile.y >= top && tile.y < bottom);
    }
}

#[test]
fn test_recycled_tile_lands_exactly_on_right_edge() {
    let mut game = playing_game();
    let config = game.config.clone();
    game.player.y = config.board_height * 0.9; // clear of the spawn band
    game.tiles[0].x = -config.letter_width - 0.5;
    advance(&mut game, config.tick_interval_ms, &mut rng());
    assert!((game.tiles[0].x - config.board_width).abs() < f64::EPSILON);
}
