#![cfg(feature = "serde")]

use chess_rules::board::Square;
use chess_rules::game::GameState;

#[test]
fn game_state_json_round_trip() {
    let game = GameState::new()
        .move_piece(Square(6, 4), Square(4, 4))
        .move_piece(Square(1, 3), Square(3, 3))
        .move_piece(Square(4, 4), Square(3, 3))
        .select(Square(0, 3));

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}

#[test]
fn colors_and_kinds_are_lowercase() {
    let json = serde_json::to_value(GameState::new()).expect("serialize");
    assert_eq!(json["to_move"], "white");
    assert_eq!(json["board"]["squares"][0][0]["kind"], "rook");
    assert_eq!(json["board"]["squares"][0][0]["color"], "black");
    assert!(json["board"]["squares"][4][4].is_null());
}
