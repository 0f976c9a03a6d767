//! Tests for the game engine: setup, turn loop and reporting.

use anyhow::Result;
use multi_tictactoe::{
    Board, ConsolePresenter, Coord, GameConfig, GameEngine, GameEvent, GameState, HumanResult,
    Outcome, Player, PlayerRoster, Presenter, RecordingPresenter, ScriptedLines, Symbol,
    TurnOrder, determine_turn_order,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Player that plays a fixed list of cells.
struct FixedMoves {
    moves: VecDeque<Coord>,
}

impl FixedMoves {
    fn boxed(moves: &[(usize, usize)]) -> Box<dyn Player> {
        Box::new(Self {
            moves: moves.iter().map(|&(c, r)| Coord::new(c, r)).collect(),
        })
    }
}

#[async_trait::async_trait]
impl Player for FixedMoves {
    async fn choose_cell(
        &mut self,
        _board: &Board,
        _symbol: Symbol,
        _presenter: &mut dyn Presenter,
    ) -> Result<Coord> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Out of moves"))
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}

fn quick(config: GameConfig) -> GameConfig {
    config.with_turn_delay_ms(0).with_seed(Some(2024))
}

fn engine_with(
    cols: usize,
    rows: usize,
    human: usize,
    players: Vec<Box<dyn Player>>,
) -> GameEngine<RecordingPresenter> {
    let roster = PlayerRoster::new(players.len(), human).unwrap();
    let state = GameState::new(Board::new(cols, rows).unwrap(), roster);
    GameEngine::with_players(state, players, RecordingPresenter::new(), Duration::ZERO)
}

#[tokio::test]
async fn test_human_first_seats_human_at_zero() {
    let config = quick(GameConfig::default());
    let engine = GameEngine::setup(&config, ScriptedLines::new(["1"]), RecordingPresenter::new())
        .await
        .unwrap();

    assert_eq!(*engine.state().roster().human_index(), 0);
    assert!(engine.state().is_human_turn());
    assert_eq!(
        engine.presenter().events(),
        &[
            GameEvent::Welcome {
                players: 2,
                cols: 3,
                rows: 3
            },
            GameEvent::OrderPrompt,
            GameEvent::OrderChosen(TurnOrder::First),
        ]
    );
}

#[tokio::test]
async fn test_quoted_one_goes_first() {
    let config = quick(GameConfig::default());
    let engine =
        GameEngine::setup(&config, ScriptedLines::new(["\"1\""]), RecordingPresenter::new())
            .await
            .unwrap();
    assert_eq!(*engine.state().roster().human_index(), 0);
}

#[tokio::test]
async fn test_padded_one_goes_second() {
    let config = quick(GameConfig::default());
    let engine = GameEngine::setup(&config, ScriptedLines::new([" 1"]), RecordingPresenter::new())
        .await
        .unwrap();
    assert_eq!(*engine.state().roster().human_index(), 1);
}

#[tokio::test]
async fn test_other_answer_goes_second() {
    let config = quick(GameConfig::new(3, 3, 4));
    let engine = GameEngine::setup(&config, ScriptedLines::new(["2"]), RecordingPresenter::new())
        .await
        .unwrap();

    assert_eq!(*engine.state().roster().human_index(), 1);
    assert!(!engine.state().is_human_turn());
    assert_eq!(engine.state().roster().human_symbol(), Symbol::O);
}

#[tokio::test]
async fn test_single_player_not_asked() {
    let config = quick(GameConfig::new(2, 2, 1));
    let mut engine = GameEngine::setup(
        &config,
        ScriptedLines::new(["1", "2"]),
        RecordingPresenter::new(),
    )
    .await
    .unwrap();
    assert!(
        !engine
            .presenter()
            .events()
            .contains(&GameEvent::OrderPrompt)
    );

    // "1" and "2" fill column 0.
    let report = engine.run().await.unwrap();
    assert_eq!(*report.outcome(), Outcome::Winner(Symbol::X));
    assert_eq!(report.result(), HumanResult::Won);
    assert_eq!(engine.state().moves_count(), 2);
}

#[tokio::test]
async fn test_too_many_players_rejected() {
    let config = quick(GameConfig::new(3, 3, 7));
    let err = GameEngine::setup(&config, ScriptedLines::new(["1"]), RecordingPresenter::new())
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("7 is greater than maximum of 6 players"));
}

#[tokio::test]
async fn test_bad_dimensions_fail() {
    let config = quick(GameConfig::new(0, 3, 2));
    let result =
        GameEngine::setup(&config, ScriptedLines::new(["1"]), RecordingPresenter::new()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_closed_input_during_setup() {
    let mut input = ScriptedLines::new(Vec::<String>::new());
    let mut presenter = RecordingPresenter::new();
    let err = determine_turn_order(&mut input, &mut presenter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[tokio::test]
async fn test_scripted_game_lost() {
    // X (seat 0) wastes moves, O takes column 2.
    let x = FixedMoves::boxed(&[(0, 0), (1, 0), (0, 2)]);
    let o = FixedMoves::boxed(&[(2, 0), (2, 1), (2, 2)]);
    let mut engine = engine_with(3, 3, 0, vec![x, o]);

    let report = engine.run().await.unwrap();
    assert_eq!(*report.outcome(), Outcome::Winner(Symbol::O));
    assert_eq!(report.result(), HumanResult::Lost);
    assert_eq!(engine.state().moves_count(), 6);

    let events = engine.presenter().events();
    assert_eq!(events.last(), Some(&GameEvent::GameOver(report)));
    let turns = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TurnStarted { .. }))
        .count();
    assert_eq!(turns, 6);
}

#[tokio::test]
async fn test_scripted_game_draw() {
    // Final columns: X O X / X O O / O X X.
    let x = FixedMoves::boxed(&[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]);
    let o = FixedMoves::boxed(&[(0, 1), (1, 1), (1, 2), (2, 0)]);
    let mut engine = engine_with(3, 3, 0, vec![x, o]);

    let report = engine.run().await.unwrap();
    assert_eq!(*report.outcome(), Outcome::Draw);
    assert_eq!(report.result(), HumanResult::NoWinner);
    assert!(engine.state().board().is_full());
}

#[tokio::test]
async fn test_three_players_rotate() {
    let x = FixedMoves::boxed(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
    let o = FixedMoves::boxed(&[(0, 1), (1, 2), (2, 1)]);
    let a = FixedMoves::boxed(&[(0, 2), (1, 1), (2, 2)]);
    let mut engine = engine_with(4, 3, 2, vec![x, o, a]);

    let report = engine.run().await.unwrap();
    assert_eq!(*report.outcome(), Outcome::Winner(Symbol::X));
    assert_eq!(report.result(), HumanResult::Lost);
    assert_eq!(engine.state().moves_count(), 10);

    let movers: Vec<Symbol> = engine
        .presenter()
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade { symbol, .. } => Some(*symbol),
            _ => None,
        })
        .collect();
    assert_eq!(
        &movers[..4],
        &[Symbol::X, Symbol::O, Symbol::A, Symbol::X]
    );
}

#[tokio::test]
async fn test_seeded_game_against_ai_finishes() {
    let config = quick(GameConfig::default());
    let labels: Vec<String> = std::iter::once("1".to_string())
        .chain((1..=9).map(|label| label.to_string()))
        .collect();
    let mut engine = GameEngine::setup(&config, ScriptedLines::new(labels), RecordingPresenter::new())
        .await
        .unwrap();

    let report = engine.run().await.unwrap();
    let state = engine.state();
    assert!(state.is_over());
    assert_eq!(state.outcome(), Some(*report.outcome()));
    assert!(state.moves_count() >= 5);
    assert_eq!(
        state.moves_count(),
        state.board().cell_count() - state.board().open_cells().count()
    );
}

#[tokio::test]
async fn test_console_transcript() {
    let config = quick(GameConfig::new(1, 1, 1));
    let presenter = ConsolePresenter::new(Vec::new());
    let mut engine = GameEngine::setup(&config, ScriptedLines::new(["1"]), presenter)
        .await
        .unwrap();
    engine.run().await.unwrap();

    let text = String::from_utf8(engine.into_presenter().into_inner()).unwrap();
    assert!(text.starts_with(
        "Welcome to Tic Tac Toe! We are playing with 1 players on a 1 x 1 board.\n"
    ));
    assert!(text.contains("You will go first!"));
    assert!(text.contains("Turn #1. X goes next!"));
    assert!(text.contains("Input the cell number you want to mark with your X: "));
    assert!(text.ends_with("!!! GAME OVER !!!\nX is the winner!\n\nYOU WON!!\n"));
}
