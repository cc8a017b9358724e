use crate::*;
pub use random::*;

mod random;

/// Strategy for dealing the starting board of a game.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
