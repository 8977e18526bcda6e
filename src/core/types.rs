//! Data structures for the letter-catching word game.
//!
//! The player guides a sprite through a scrolling field of Devanagari letter
//! tiles and must collect them in the order they appear in the target word.

use crate::words::WordEntry;
use rand::Rng;

/// Fixed display palette for letter tiles. Indices are stored on the tiles
/// so the renderer can map them to whatever color type it uses.
pub const TILE_PALETTE: [(u8, u8, u8); 8] = [
    (0xFF, 0x6B, 0x6B),
    (0x4E, 0xCD, 0xC4),
    (0x45, 0xB7, 0xD1),
    (0x96, 0xCE, 0xB4),
    (0xFF, 0xEE, 0xAD),
    (0xD4, 0xA5, 0xA5),
    (0x9B, 0x59, 0xB6),
    (0x34, 0x98, 0xDB),
];

/// Why a round ended in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The player left the vertical play area.
    OutOfBounds,
    /// The player touched a tile that is not the next expected letter.
    WrongLetter,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Success,
    Failure(FailureKind),
}

/// The round's current state. `Ended` is terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap. Physics and collision are inert.
    Idle,
    /// The driving loop is advancing physics and collision every tick.
    Playing,
    Ended(RoundResult),
}

/// Board geometry and physics tuning. All values the original hard-coded
/// live here so a caller can override any of them; `Default` carries the
/// canonical tuning.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub board_width: f64,
    pub board_height: f64,
    pub player_width: f64,
    pub player_height: f64,
    /// The player's fixed horizontal position.
    pub player_x: f64,
    /// Velocity change per tick (positive = downward).
    pub gravity: f64,
    /// Flap impulse. Sets velocity directly (not additive); negative = upward.
    pub lift: f64,
    /// Horizontal tile speed per tick.
    pub scroll_speed: f64,
    pub letter_width: f64,
    pub letter_height: f64,
    /// Horizontal gap between consecutive tiles at placement.
    pub letter_spacing: f64,
    /// Vertical band tiles spawn into, as fractions of board height.
    pub spawn_band_min: f64,
    pub spawn_band_max: f64,
    /// Fixed physics step in milliseconds.
    pub tick_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 360.0,
            board_height: 640.0,
            player_width: 34.0,
            player_height: 24.0,
            player_x: 360.0 / 8.0,
            gravity: 0.4,
            lift: -7.0,
            scroll_speed: 2.0,
            letter_width: 40.0,
            letter_height: 40.0,
            letter_spacing: 150.0,
            spawn_band_min: 0.3,
            spawn_band_max: 0.7,
            tick_interval_ms: crate::constants::FRAME_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Initial x for the tile at `index`, spaced off the right edge.
    pub fn tile_start_x(&self, index: usize) -> f64 {
        self.board_width + index as f64 * (self.letter_width + self.letter_spacing)
    }

    /// Random tile y within the spawn band. The tile's full height stays
    /// inside the band.
    pub fn spawn_y<R: Rng>(&self, rng: &mut R) -> f64 {
        let top = self.spawn_band_min * self.board_height;
        let bottom = self.spawn_band_max * self.board_height - self.letter_height;
        if bottom > top {
            rng.gen_range(top..bottom)
        } else {
            top
        }
    }

    /// Lowest in-bounds player y. Above `0.0` and below this is alive.
    pub fn player_floor(&self) -> f64 {
        self.board_height - self.player_height
    }
}

/// Axis-aligned rectangle in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    /// Strict AABB overlap. Touching edges do not count, matching the
    /// original's comparison.
    pub fn overlaps(&self, other: &RectF) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// One scrolling letter collider. Tiles never despawn; they recycle to the
/// right edge, so the set size stays fixed at the count of uncollected
/// letters.
#[derive(Debug, Clone)]
pub struct LetterTile {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    /// Index into [`TILE_PALETTE`].
    pub color: usize,
    /// Marked during the collision scan; compacted out afterwards.
    pub consumed: bool,
}

impl LetterTile {
    pub fn rect(&self, config: &GameConfig) -> RectF {
        RectF {
            x: self.x,
            y: self.y,
            w: config.letter_width,
            h: config.letter_height,
        }
    }
}

/// The player sprite. x is fixed by config.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub y: f64,
    pub velocity: f64,
}

/// Pronunciation side effects raised by a tick. The core never performs
/// audio I/O itself; the caller maps these to playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// A correct letter was collected.
    LetterCollected { ch: char },
    /// The whole word was collected; the round ended in success.
    WordCompleted { script: String },
}

/// A read-only view of one tile for rendering.
#[derive(Debug, Clone)]
pub struct TileView {
    pub rect: RectF,
    pub ch: char,
    pub color: usize,
}

/// Read-only render snapshot. Rendering is entirely the caller's business;
/// nothing here aliases live game state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub board_width: f64,
    pub board_height: f64,
    pub player: RectF,
    pub tiles: Vec<TileView>,
    pub collected: String,
    pub script_word: String,
    pub transliteration: String,
    pub category: String,
}

/// One game session. Owns all mutable round state; single-threaded.
#[derive(Debug, Clone)]
pub struct WordGame {
    pub config: GameConfig,
    pub phase: Phase,
    /// Category the word list was loaded for.
    pub category: String,
    /// Word list supplied by the external word source.
    pub words: Vec<WordEntry>,
    /// Immutable once selected for the round.
    pub target: Option<WordEntry>,
    /// The target's script word split into letters.
    pub target_letters: Vec<char>,
    /// Matched prefix of the target collected so far.
    pub collected: Vec<char>,
    pub tiles: Vec<LetterTile>,
    pub player: Player,
    /// Sub-tick time carried between `advance` calls to avoid drift.
    pub accumulated_ms: f64,
    /// Physics ticks elapsed this round.
    pub tick_count: u64,
}

impl WordGame {
    /// Create a session with no word list loaded yet.
    pub fn new(config: GameConfig) -> Self {
        let player = Player {
            y: config.board_height / 2.0,
            velocity: 0.0,
        };
        Self {
            config,
            phase: Phase::Idle,
            category: String::new(),
            words: Vec::new(),
            target: None,
            target_letters: Vec::new(),
            collected: Vec::new(),
            tiles: Vec::new(),
            player,
            accumulated_ms: 0.0,
            tick_count: 0,
        }
    }

    pub fn player_rect(&self) -> RectF {
        RectF {
            x: self.config.player_x,
            y: self.player.y,
            w: self.config.player_width,
            h: self.config.player_height,
        }
    }

    pub fn collected_string(&self) -> String {
        self.collected.iter().collect()
    }

    /// Produce the render snapshot for the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            board_width: self.config.board_width,
            board_height: self.config.board_height,
            player: self.player_rect(),
            tiles: self
                .tiles
                .iter()
                .map(|t| TileView {
                    rect: t.rect(&self.config),
                    ch: t.ch,
                    color: t.color,
                })
                .collect(),
            collected: self.collected_string(),
            script_word: self
                .target
                .as_ref()
                .map(|w| w.script.clone())
                .unwrap_or_default(),
            transliteration: self
                .target
                .as_ref()
                .map(|w| w.transliteration.clone())
                .unwrap_or_default(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_config_values() {
        let config = GameConfig::default();
        assert!((config.board_width - 360.0).abs() < f64::EPSILON);
        assert!((config.board_height - 640.0).abs() < f64::EPSILON);
        assert!((config.gravity - 0.4).abs() < f64::EPSILON);
        assert!((config.lift - (-7.0)).abs() < f64::EPSILON);
        assert!((config.scroll_speed - 2.0).abs() < f64::EPSILON);
        assert!((config.player_x - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_game_starts_idle_and_centered() {
        let game = WordGame::new(GameConfig::default());
        assert_eq!(game.phase, Phase::Idle);
        assert!(game.target.is_none());
        assert!(game.tiles.is_empty());
        assert!(game.collected.is_empty());
        assert!((game.player.y - 320.0).abs() < f64::EPSILON);
        assert!((game.player.velocity).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_tile_start_x_spacing() {
        let config = GameConfig::default();
        assert!((config.tile_start_x(0) - 360.0).abs() < f64::EPSILON);
        assert!((config.tile_start_x(1) - 550.0).abs() < f64::EPSILON);
        assert!((config.tile_start_x(2) - 740.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_y_stays_in_band() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let top = config.spawn_band_min * config.board_height;
        let bottom = config.spawn_band_max * config.board_height - config.letter_height;
        for _ in 0..200 {
            let y = config.spawn_y(&mut rng);
            assert!(y >= top && y < bottom);
        }
    }

    #[test]
    fn test_spawn_y_degenerate_band() {
        let config = GameConfig {
            spawn_band_min: 0.5,
            spawn_band_max: 0.5,
            ..GameConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let y = config.spawn_y(&mut rng);
        assert!((y - 0.5 * config.board_height).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_overlap() {
        let a = RectF {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        let b = RectF {
            x: 5.0,
            y: 5.0,
            w: 10.0,
            h: 10.0,
        };
        let c = RectF {
            x: 10.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching edges do not overlap
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = WordGame::new(GameConfig::default());
        game.category = "fruits".to_string();
        game.target = Some(WordEntry {
            script: "सेब".to_string(),
            transliteration: "seb".to_string(),
        });
        game.target_letters = vec!['स', 'े', 'ब'];
        game.collected = vec!['स'];
        game.tiles.push(LetterTile {
            ch: 'े',
            x: 100.0,
            y: 200.0,
            color: 3,
            consumed: false,
        });

        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.collected, "स");
        assert_eq!(snap.script_word, "सेब");
        assert_eq!(snap.transliteration, "seb");
        assert_eq!(snap.category, "fruits");
        assert_eq!(snap.tiles.len(), 1);
        assert_eq!(snap.tiles[0].ch, 'े');
        assert_eq!(snap.tiles[0].color, 3);
        assert!((snap.player.x - game.config.player_x).abs() < f64::EPSILON);
    }
}
