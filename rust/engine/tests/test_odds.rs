use holdem_engine::betting::{apply_action, post_blinds};
use holdem_engine::cards::{parse_cards, HoleCards};
use holdem_engine::game::{GameState, Street};
use holdem_engine::odds::{
    analyze_draws, cards_to_come, count_outs, estimate_equity, pot_odds, OddsSummary,
};
use holdem_engine::player::{Player, PlayerAction};

fn hole(s: &str) -> HoleCards {
    let c = parse_cards(s).unwrap();
    HoleCards::new(c[0], c[1])
}

#[test]
fn flush_draw_is_nine_outs() {
    let board = parse_cards("Kh 7h 2c").unwrap();
    let draws = analyze_draws(&hole("Ah 9h"), &board);
    assert!(draws.flush_draw);
    assert_eq!(draws.flush_outs, 9);
    // ace is over the king
    assert_eq!(draws.overcard_outs, 3);
    assert_eq!(count_outs(&hole("Ah 9h"), &board), 12);
}

#[test]
fn open_ended_and_gutshot_straight_draws() {
    let oesd = analyze_draws(&hole("9c 8d"), &parse_cards("7h 6s 2c").unwrap());
    assert!(oesd.open_ended);
    assert_eq!(oesd.straight_outs, 8);
    assert!(oesd.has_any_draw());

    let gutshot = analyze_draws(&hole("9c 8d"), &parse_cards("6h 5s Kc").unwrap());
    assert!(gutshot.gutshot);
    assert!(!gutshot.open_ended);
    assert_eq!(gutshot.straight_outs, 4);
}

#[test]
fn overcards_capped_at_six_and_zero_preflop() {
    let draws = analyze_draws(&hole("Ac Kd"), &parse_cards("9h 5s 2c").unwrap());
    assert!(draws.overcards);
    assert_eq!(draws.overcard_outs, 6);
    assert!(!draws.has_any_draw());

    let pre = analyze_draws(&hole("Ac Kd"), &[]);
    assert_eq!(pre.overcard_outs, 0);
    assert!(!pre.overcards);
    assert_eq!(pre.describe(), "no draw");
}

#[test]
fn outs_add_up_across_draws() {
    // flush draw + open-ender + two overcards
    let h = hole("Jh Th");
    let board = parse_cards("9h 8c 2h").unwrap();
    assert_eq!(count_outs(&h, &board), 9 + 8 + 6);
}

#[test]
fn four_two_rule() {
    assert_eq!(cards_to_come(Street::Preflop), 5);
    assert_eq!(cards_to_come(Street::Flop), 2);
    assert_eq!(cards_to_come(Street::Turn), 1);
    assert_eq!(cards_to_come(Street::River), 0);
    assert_eq!(cards_to_come(Street::Showdown), 0);

    assert!((estimate_equity(9, 2) - 0.36).abs() < 1e-9);
    assert!((estimate_equity(9, 1) - 0.18).abs() < 1e-9);
    assert_eq!(estimate_equity(9, 0), 0.0);
    assert_eq!(estimate_equity(30, 2), 1.0);
}

#[test]
fn pot_odds_is_call_over_final_pot() {
    assert_eq!(pot_odds(0, 100), 0.0);
    assert!((pot_odds(50, 100) - 1.0 / 3.0).abs() < 1e-9);
    assert!((pot_odds(100, 100) - 0.5).abs() < 1e-9);
}

#[test]
fn summary_for_a_player_facing_a_bet() {
    let players = vec![Player::new(0, "hero", 1000), Player::new(1, "villain", 1000)];
    let mut state = GameState::new(players, 0, 5, 10).unwrap();
    let h = parse_cards("Ah 9h").unwrap();
    state.deal_hole_cards(0, h[0], h[1]);
    let v = parse_cards("Kc Qd").unwrap();
    state.deal_hole_cards(1, v[0], v[1]);
    post_blinds(&mut state);
    apply_action(&mut state, 0, PlayerAction::Call);
    state.next_player();
    apply_action(&mut state, 1, PlayerAction::Check);
    state.next_player();
    state.advance();
    state.deal_board(&parse_cards("Kh 7h 2c").unwrap());
    // villain bets 20 into 20
    apply_action(&mut state, 1, PlayerAction::Bet(20));

    let odds = OddsSummary::for_player(&state, 0).unwrap();
    assert_eq!(odds.outs, 12);
    assert!((odds.equity - 0.48).abs() < 1e-9);
    assert_eq!(odds.to_call, 20);
    assert!((odds.pot_odds - 20.0 / 60.0).abs() < 1e-9);
    assert!(odds.should_call());
    let text = odds.to_string();
    assert!(text.contains("flush draw"));
    assert!(text.contains("Calling is profitable"));
}
