//! Game orchestration between one human and the AI players.

use crate::config::GameConfig;
use crate::input::LineSource;
use crate::players::{HumanPlayer, Player, RandomAi};
use crate::presenter::{GameEvent, Presenter};
use crate::report::EndReport;
use anyhow::{Context, Result};
use multi_tictactoe_core::{Board, GameState, Outcome, PlayerRoster, TurnOrder};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runs one game from the order question to the final report.
pub struct GameEngine<P: Presenter> {
    state: GameState,
    players: Vec<Box<dyn Player>>,
    presenter: P,
    turn_delay: Duration,
}

impl<P: Presenter> GameEngine<P> {
    /// Builds the board and roster from `config`, asks the human whether
    /// to go first, and seats the players.
    ///
    /// Invalid sizes or player counts fail before anything is shown. With a
    /// single player the human always goes first and is not asked.
    #[instrument(skip_all, fields(cols = config.cols(), rows = config.rows(), players = config.players()))]
    pub async fn setup<L>(config: &GameConfig, mut input: L, mut presenter: P) -> Result<Self>
    where
        L: LineSource + 'static,
    {
        let board = Board::new(*config.cols(), *config.rows())?;
        let num_players = *config.players();
        PlayerRoster::new(num_players, 0)?;

        presenter.present(&GameEvent::Welcome {
            players: num_players,
            cols: board.cols(),
            rows: board.rows(),
        })?;

        let order = if num_players == 1 {
            TurnOrder::First
        } else {
            determine_turn_order(&mut input, &mut presenter).await?
        };
        presenter.present(&GameEvent::OrderChosen(order))?;

        let roster = PlayerRoster::new(num_players, order.human_index())?;
        let mut master_rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };

        let human_index = *roster.human_index();
        let mut players: Vec<Box<dyn Player>> = (0..num_players)
            .filter(|seat| *seat != human_index)
            .map(|seat| {
                let name = format!("AI {}", roster.symbol_for(seat));
                let rng = StdRng::from_rng(&mut master_rng);
                Box::new(RandomAi::with_rng(name, rng)) as Box<dyn Player>
            })
            .collect();
        players.insert(human_index, Box::new(HumanPlayer::new("You", input)));

        info!(?order, human = %roster.human_symbol(), "Players seated");
        let state = GameState::new(board, roster);
        Ok(Self::with_players(state, players, presenter, config.turn_delay()))
    }

    /// Assembles an engine from parts. `players[i]` moves for seat `i`.
    pub fn with_players(
        state: GameState,
        players: Vec<Box<dyn Player>>,
        presenter: P,
        turn_delay: Duration,
    ) -> Self {
        Self {
            state,
            players,
            presenter,
            turn_delay,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the engine, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Plays one move for the current mover.
    #[instrument(skip(self), fields(turn = self.state.moves_count() + 1))]
    pub async fn play_turn(&mut self) -> Result<Outcome> {
        let seat = self.state.current_mover();
        let symbol = self.state.current_symbol();
        self.presenter.present(&GameEvent::TurnStarted {
            turn: self.state.moves_count() + 1,
            symbol,
        })?;

        let player = self
            .players
            .get_mut(seat)
            .with_context(|| format!("No player seated at {}", seat))?;
        debug!(player = player.name(), %symbol, "Waiting for move");
        let coord = player
            .choose_cell(self.state.board(), symbol, &mut self.presenter)
            .await?;

        let outcome = self.state.apply_move(coord)?;
        self.presenter.present(&GameEvent::MoveMade {
            symbol,
            coord,
            board: self.state.board().clone(),
        })?;
        Ok(outcome)
    }

    /// Runs the game loop until someone wins or the board is full.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<EndReport> {
        info!("Starting game");

        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            let outcome = self.play_turn().await?;
            if !self.turn_delay.is_zero() {
                tokio::time::sleep(self.turn_delay).await;
            }
            if outcome.is_terminal() {
                break outcome;
            }
        };

        let report = EndReport::new(outcome, self.state.roster().human_symbol());
        info!(%outcome, result = ?report.result(), "Game over");
        self.presenter.present(&GameEvent::GameOver(report))?;
        Ok(report)
    }
}

/// Asks the human whether to go first and reads the answer.
#[instrument(skip_all)]
pub async fn determine_turn_order(
    input: &mut dyn LineSource,
    presenter: &mut dyn Presenter,
) -> Result<TurnOrder> {
    presenter.present(&GameEvent::OrderPrompt)?;
    let choice = input
        .read_line()
        .await?
        .context("Input closed before the move order was chosen")?;
    Ok(TurnOrder::from_choice(&choice))
}
