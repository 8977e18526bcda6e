//! Game loop & collision engine: physics, tile scrolling, collision, and the
//! round state machine. Pure logic over [`types::WordGame`]; no I/O, no
//! scheduling assumptions beyond "someone calls [`logic::advance`]".

pub mod logic;
pub mod types;

pub use logic::{advance, flap, load_word_list, reset_round, start_round};
pub use types::{
    FailureKind, GameConfig, LetterTile, Phase, Player, RectF, RoundResult, Snapshot, TickEvent,
    TileView, WordGame, TILE_PALETTE,
};
