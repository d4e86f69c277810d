use pawn_core::{Board, Color, Move, Pawn, Position};
use pawn_game::{Game, Status, TurnError};

fn square(name: &str) -> Position {
    name.parse().unwrap()
}

fn board_with(pawns: &[(&str, Color)]) -> Board {
    let mut board = Board::empty();
    for (name, color) in pawns {
        board.spawn(Pawn::new(*color, square(name)));
    }
    board
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play(mv).unwrap_or_else(|err| panic!("{mv} rejected: {err}"));
    }
}

#[test]
fn opening_double_advance() {
    let mut game = Game::new("Alice", "Bob");
    assert_eq!(game.play("e2e4").unwrap(), Status::InProgress);

    assert!(game.board().pawn_at(square("e2")).is_none());
    let (_, pawn) = game.board().pawn_at(square("e4")).unwrap();
    assert_eq!(pawn.color(), Color::White);
    assert_eq!(game.board().pawns().count(), 16);
    // No black pawn stands beside e4, so Black gets no offer.
    assert!(game.en_passant_offers().is_empty());
    assert_eq!(game.current_player().color(), Color::Black);
}

#[test]
fn en_passant_offer_opens_beside_the_advance() {
    let mut game = Game::new("Alice", "Bob");
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    let offers = game.en_passant_offers();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0], Move::push(square("e5"), square("d6")));
}

#[test]
fn en_passant_capture_removes_the_advanced_pawn() {
    let mut game = Game::new("Alice", "Bob");
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);

    assert!(game.board().pawn_at(square("d5")).is_none());
    assert!(game.board().pawn_at(square("e5")).is_none());
    let (_, capturer) = game.board().pawn_at(square("d6")).unwrap();
    assert_eq!(capturer.color(), Color::White);
    assert_eq!(game.board().pawns_of(Color::Black).count(), 7);
}

#[test]
fn adjacency_is_judged_when_the_advance_lands() {
    let mut game = Game::new("Alice", "Bob");
    play_all(&mut game, &["e2e4", "d7d5"]);
    // e4 sits diagonally behind d5, not beside it, so no offer opens.
    assert!(game.en_passant_offers().is_empty());
    play_all(&mut game, &["e4e5"]);
    assert!(game.en_passant_offers().is_empty());
}

#[test]
fn en_passant_offers_expire_after_one_move() {
    let mut game = Game::new("Alice", "Bob");
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(game.en_passant_offers().len(), 1);

    // White declines the capture; the window closes for good.
    play_all(&mut game, &["b2b3", "a6a5"]);
    assert!(game.en_passant_offers().is_empty());
    assert!(matches!(
        game.play("e5d6").unwrap_err(),
        TurnError::Illegal(_)
    ));
}

#[test]
fn no_offer_against_the_movers_own_color() {
    // The pawn beside the advance belongs to the advancing side, so no
    // capture may be offered on it.
    let board = board_with(&[
        ("a2", Color::White),
        ("d7", Color::Black),
        ("e5", Color::Black),
    ]);
    let mut game = Game::with_board(board, "Alice", "Bob");
    play_all(&mut game, &["a2a3", "d7d5"]);
    assert!(game.en_passant_offers().is_empty());
}

#[test]
fn reaching_the_back_rank_wins() {
    let board = board_with(&[
        ("e7", Color::White),
        ("a2", Color::White),
        ("h7", Color::Black),
    ]);
    let mut game = Game::with_board(board, "Alice", "Bob");
    assert_eq!(game.play("e7e8").unwrap(), Status::Won(Color::White));
    assert_eq!(game.status(), Status::Won(Color::White));
}

#[test]
fn capturing_into_the_back_rank_wins_immediately() {
    // Material remains on both sides; promotion still ends the game.
    let board = board_with(&[
        ("e7", Color::White),
        ("a2", Color::White),
        ("f8", Color::Black),
        ("h7", Color::Black),
    ]);
    let mut game = Game::with_board(board, "Alice", "Bob");
    assert_eq!(game.play("e7f8").unwrap(), Status::Won(Color::White));
}

#[test]
fn capturing_the_last_pawn_wins() {
    let board = board_with(&[("e4", Color::White), ("d5", Color::Black)]);
    let mut game = Game::with_board(board, "Alice", "Bob");
    assert_eq!(game.play("e4d5").unwrap(), Status::Won(Color::White));
    assert_eq!(game.board().pawns_of(Color::Black).count(), 0);
}

#[test]
fn blocked_opponent_is_stalemate() {
    let board = board_with(&[("e4", Color::White), ("e6", Color::Black)]);
    let mut game = Game::with_board(board, "Alice", "Bob");
    assert_eq!(game.play("e4e5").unwrap(), Status::Stalemate);
    assert_eq!(game.play("e6e5").unwrap_err(), TurnError::GameOver);
}

#[test]
fn an_open_en_passant_offer_averts_stalemate() {
    // Black's only pawn is blocked head-on, so after White's double
    // advance the en-passant offer is Black's one legal move.
    let board = board_with(&[
        ("d2", Color::White),
        ("e3", Color::White),
        ("e4", Color::Black),
    ]);
    let mut game = Game::with_board(board, "Alice", "Bob");

    assert_eq!(game.play("d2d4").unwrap(), Status::InProgress);
    assert_eq!(game.en_passant_offers().len(), 1);
    assert_eq!(game.play("e4d3").unwrap(), Status::InProgress);
    let (_, capturer) = game.board().pawn_at(square("d3")).unwrap();
    assert_eq!(capturer.color(), Color::Black);
    assert!(game.board().pawn_at(square("d4")).is_none());
}

#[test]
fn errors_never_mutate_the_board() {
    let mut game = Game::new("Alice", "Bob");
    let before = game.board().to_string();
    for bad in ["", "e2", "e2e5", "d7d5", "e9e4", "x1y2"] {
        assert!(game.play(bad).is_err());
    }
    assert_eq!(game.board().to_string(), before);
    assert_eq!(game.current_player().name(), "Alice");
}
