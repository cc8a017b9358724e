use rand::prelude::*;

use crate::*;

/// One in-progress game: the live board plus the flags derived from it.
///
/// Intents come in from the hosting UI (`tap_cell`, `toggle_flag_mode`,
/// `restart`), the board is replaced wholesale on every accepted one, and
/// the caller reads the new snapshot plus the `game_over` / `game_won` /
/// `flag_mode` flags back out to render.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    game_over: bool,
    game_won: bool,
    flag_mode: bool,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a session on a freshly generated board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(rng.random()).generate(config)?;
        Ok(Self {
            config,
            board,
            game_over: false,
            game_won: false,
            flag_mode: false,
            rng,
        })
    }

    /// Starts a session on a predetermined board layout.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.mine_count());
        Self {
            config,
            board,
            game_over: false,
            game_won: false,
            flag_mode: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Current board snapshot, every cell included. See [`Board`] on the
    /// trust boundary around unrevealed mines.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn flag_mode(&self) -> bool {
        self.flag_mode
    }

    /// How many mines are not flagged yet; negative when overflagged.
    pub fn mines_left(&self) -> isize {
        self.config.mines as isize - self.board.flagged_count() as isize
    }

    const fn ended(&self) -> bool {
        self.game_over || self.game_won
    }

    /// Applies a tap at `pos` under the current input mode.
    ///
    /// Taps are dropped once the game has ended, on revealed cells, and on
    /// flagged cells outside flag mode. In flag mode the tap toggles the
    /// cell's flag; otherwise it reveals, either ending the game on a mine
    /// or propagating through blank regions.
    pub fn tap_cell(&mut self, pos: Pos) -> Result<TapOutcome> {
        use TapOutcome::*;

        let pos = self.board.validate_pos(pos)?;

        if self.ended() {
            return Ok(NoChange);
        }
        let cell = self.board[pos];
        if cell.revealed || (cell.flagged && !self.flag_mode) {
            return Ok(NoChange);
        }

        if self.flag_mode {
            let mut next = self.board.clone();
            next[pos].flagged = !cell.flagged;
            self.board = next;
            self.refresh_won();
            return Ok(if self.game_won { Won } else { Flagged });
        }

        if cell.mine {
            self.board = self.board.reveal_all();
            self.game_over = true;
            log::debug!("mine hit at {:?}", pos);
            return Ok(HitMine);
        }

        self.board = reveal(&self.board, pos)?;
        self.refresh_won();
        Ok(if self.game_won { Won } else { Revealed })
    }

    /// Switches what the next tap means: flagging or revealing. Pure input
    /// mode, the board is untouched.
    pub fn toggle_flag_mode(&mut self) -> bool {
        self.flag_mode = !self.flag_mode;
        self.flag_mode
    }

    /// Throws the current game away and deals a fresh board. The old board
    /// stays the state of record if `config` is rejected.
    pub fn restart(&mut self, config: GameConfig) -> Result<()> {
        self.board = RandomBoardGenerator::new(self.rng.random()).generate(config)?;
        self.config = config;
        self.game_over = false;
        self.game_won = false;
        log::debug!("restarted with {:?}", config);
        Ok(())
    }

    fn refresh_won(&mut self) {
        self.game_won = is_won(&self.board, self.config.mines);
        if self.game_won {
            log::debug!("all {} mines flagged, game won", self.config.mines);
        }
    }
}
