//! Tick, input, and round-lifecycle logic for the word game.
//!
//! Free functions over [`WordGame`], threaded with a caller-supplied [`Rng`]
//! so tests can run deterministically. The driving loop calls
//! [`advance`] with wall-clock deltas; everything else is an input or
//! lifecycle entry point.

use super::types::{FailureKind, LetterTile, Phase, RoundResult, TickEvent, WordGame, TILE_PALETTE};
use crate::words::{self, NoWordsAvailable, WordEntry};
use rand::Rng;

/// Install the word list fetched from the external word source. An empty
/// list is an error and leaves the session in `Idle` with nothing to play.
pub fn load_word_list(
    game: &mut WordGame,
    category: &str,
    list: Vec<WordEntry>,
) -> Result<(), NoWordsAvailable> {
    if list.is_empty() {
        return Err(NoWordsAvailable);
    }
    game.category = category.to_string();
    game.words = list;
    Ok(())
}

/// Select a fresh random word from the loaded list and lay out its tiles.
/// Lands in `Idle`: the first flap starts the round.
pub fn start_round<R: Rng>(game: &mut WordGame, rng: &mut R) -> Result<(), NoWordsAvailable> {
    if game.words.is_empty() {
        return Err(NoWordsAvailable);
    }
    let target = words::choose_word(&game.words, rng).clone();
    game.target_letters = words::letters(&target.script);
    game.target = Some(target);
    game.collected.clear();
    place_letters(game, rng);
    game.player.y = game.config.board_height / 2.0;
    game.player.velocity = 0.0;
    game.accumulated_ms = 0.0;
    game.tick_count = 0;
    game.phase = Phase::Idle;
    Ok(())
}

/// Reset out of `Ended`. Always re-randomizes the word from the same
/// category rather than replaying the one that failed.
pub fn reset_round<R: Rng>(game: &mut WordGame, rng: &mut R) -> Result<(), NoWordsAvailable> {
    start_round(game, rng)
}

/// One tile per letter, spaced off the right edge, each with a random y in
/// the spawn band and a random palette color.
fn place_letters<R: Rng>(game: &mut WordGame, rng: &mut R) {
    let mut tiles = Vec::with_capacity(game.target_letters.len());
    for (i, &ch) in game.target_letters.iter().enumerate() {
        tiles.push(LetterTile {
            ch,
            x: game.config.tile_start_x(i),
            y: game.config.spawn_y(rng),
            color: rng.gen_range(0..TILE_PALETTE.len()),
            consumed: false,
        });
    }
    game.tiles = tiles;
}

/// Flap input: an absolute upward impulse (`velocity = lift`, never
/// additive). From `Idle` with a target loaded this starts the round and
/// applies the first impulse. Ignored once the round has ended.
pub fn flap(game: &mut WordGame) {
    match game.phase {
        Phase::Idle => {
            if game.target.is_some() {
                game.phase = Phase::Playing;
                game.player.velocity = game.config.lift;
            }
        }
        Phase::Playing => {
            game.player.velocity = game.config.lift;
        }
        Phase::Ended(_) => {}
    }
}

/// Advance by `delta_ms` of wall-clock time, stepping physics once per full
/// tick interval and carrying the remainder forward so cadence never drifts.
///
/// The phase is re-checked before every step, so the moment a step leaves
/// `Playing` no further stepping happens — a driver that fires once more
/// after the round ends cannot mutate state.
pub fn advance<R: Rng>(game: &mut WordGame, delta_ms: f64, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if game.phase != Phase::Playing {
        return events;
    }
    game.accumulated_ms += delta_ms;
    while game.phase == Phase::Playing && game.accumulated_ms >= game.config.tick_interval_ms {
        game.accumulated_ms -= game.config.tick_interval_ms;
        step(game, rng, &mut events);
    }
    events
}

/// One fixed physics step. Order matters: the boundary check runs before any
/// physics or tile mutation for the tick.
fn step<R: Rng>(game: &mut WordGame, rng: &mut R, events: &mut Vec<TickEvent>) {
    if out_of_bounds(game) {
        game.phase = Phase::Ended(RoundResult::Failure(FailureKind::OutOfBounds));
        return;
    }

    game.player.velocity += game.config.gravity;
    game.player.y += game.player.velocity;

    if out_of_bounds(game) {
        game.phase = Phase::Ended(RoundResult::Failure(FailureKind::OutOfBounds));
        return;
    }

    game.tick_count += 1;
    scroll_tiles(game, rng);
    resolve_collision(game, events);
}

fn out_of_bounds(game: &WordGame) -> bool {
    game.player.y < 0.0 || game.player.y > game.config.player_floor()
}

/// Scroll every tile left; a tile whose right edge passed the left boundary
/// recycles to exactly the right edge with a fresh random y. Tiles never
/// despawn, so the active set stays at the uncollected-letter count.
fn scroll_tiles<R: Rng>(game: &mut WordGame, rng: &mut R) {
    for tile in &mut game.tiles {
        tile.x -= game.config.scroll_speed;
        if tile.x + game.config.letter_width < 0.0 {
            tile.x = game.config.board_width;
            tile.y = game.config.spawn_y(rng);
        }
    }
}

/// Resolve at most one tile collision per tick, scanning in array order
/// (array order is the tie-break when several tiles overlap at once).
/// A matched tile is marked consumed and compacted out after the scan rather
/// than spliced mid-iteration.
fn resolve_collision(game: &mut WordGame, events: &mut Vec<TickEvent>) {
    let player = game.player_rect();
    let hit = game
        .tiles
        .iter()
        .position(|t| player.overlaps(&t.rect(&game.config)));

    if let Some(index) = hit {
        let tile_ch = game.tiles[index].ch;
        let expected = game.target_letters.get(game.collected.len()).copied();

        if expected == Some(tile_ch) {
            game.tiles[index].consumed = true;
            game.collected.push(tile_ch);
            events.push(TickEvent::LetterCollected { ch: tile_ch });

            if game.collected.len() == game.target_letters.len() {
                game.phase = Phase::Ended(RoundResult::Success);
                if let Some(target) = &game.target {
                    events.push(TickEvent::WordCompleted {
                        script: target.script.clone(),
                    });
                }
            }
        } else {
            game.phase = Phase::Ended(RoundResult::Failure(FailureKind::WrongLetter));
        }

        game.tiles.retain(|t| !t.consumed);
    }
}
