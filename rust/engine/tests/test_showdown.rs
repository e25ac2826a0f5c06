use holdem_engine::betting::{apply_action, post_blinds};
use holdem_engine::cards::parse_cards;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::hand::Category;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::showdown::{determine_winners, settle, split_pot};

fn seated(stacks: &[u32], holes: &[&str]) -> GameState {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(i, format!("p{i}"), s))
        .collect();
    let mut state = GameState::new(players, 0, 5, 10).unwrap();
    for (i, h) in holes.iter().enumerate() {
        let c = parse_cards(h).unwrap();
        state.deal_hole_cards(i, c[0], c[1]);
    }
    post_blinds(&mut state);
    state
}

fn act(state: &mut GameState, action: PlayerAction) {
    let idx = state.to_act();
    apply_action(state, idx, action);
    state.next_player();
}

#[test]
fn three_way_all_in_split_gives_odd_chip_to_first_winner() {
    let mut state = seated(&[40, 30, 30], &["2c 3c", "2d 3d", "2h 3s"]);
    act(&mut state, PlayerAction::AllIn);
    act(&mut state, PlayerAction::AllIn);
    act(&mut state, PlayerAction::AllIn);
    assert_eq!(state.pot(), 100);

    state.deal_board(&parse_cards("Ts Jd Qc Kh As").unwrap());
    let result = settle(&mut state).unwrap();

    assert_eq!(result.winners, vec![0, 1, 2]);
    assert_eq!(result.payouts, vec![(0, 34), (1, 33), (2, 33)]);
    assert!(result.split);
    assert_eq!(result.pot, 100);
    assert_eq!(
        result.winning_hand.as_ref().map(|h| h.category),
        Some(Category::Straight)
    );
    let stacks: Vec<u32> = state.players().iter().map(|p| p.stack()).collect();
    assert_eq!(stacks, vec![34, 33, 33]);
    assert_eq!(state.pot(), 0);
}

#[test]
fn lone_survivor_wins_uncontested_without_evaluation() {
    // heads-up: seat 0 is button and small blind with aces
    let mut state = seated(&[1000, 1000], &["Ah Ad", "7c 2s"]);
    act(&mut state, PlayerAction::Raise(30));
    act(&mut state, PlayerAction::Fold);
    // no board at all, so an evaluation would fail
    let result = settle(&mut state).unwrap();
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.payouts, vec![(0, 40)]);
    assert!(result.is_uncontested());
    assert!(!result.split);
    assert_eq!(state.player(0).stack(), 1010);
    assert_eq!(state.player(1).stack(), 990);
}

#[test]
fn best_hand_takes_whole_pot() {
    let mut state = seated(&[1000, 1000], &["Ah Ad", "7c 2s"]);
    act(&mut state, PlayerAction::Call);
    act(&mut state, PlayerAction::Check);
    state.deal_board(&parse_cards("Kd 9c 4h 3s Jc").unwrap());
    let result = settle(&mut state).unwrap();
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.payouts, vec![(0, 20)]);
    assert_eq!(
        result.winning_hand.map(|h| h.category),
        Some(Category::OnePair)
    );
}

#[test]
fn folded_players_are_ignored() {
    let mut state = seated(&[1000, 1000, 1000], &["Ah Ad", "Kc Ks", "7c 2s"]);
    act(&mut state, PlayerAction::Fold);
    act(&mut state, PlayerAction::Call);
    act(&mut state, PlayerAction::Check);
    state.deal_board(&parse_cards("Kd 9c 4h 3s Jc").unwrap());
    let (winners, best) = determine_winners(state.players(), state.board()).unwrap();
    assert_eq!(winners, vec![1]);
    assert_eq!(best.category, Category::ThreeOfAKind);
}

#[test]
fn kicker_decides_between_equal_pairs() {
    let mut state = seated(&[1000, 1000], &["Ah Qd", "As Jc"]);
    act(&mut state, PlayerAction::Call);
    act(&mut state, PlayerAction::Check);
    state.deal_board(&parse_cards("Ac 8d 6h 4s 2c").unwrap());
    let result = settle(&mut state).unwrap();
    assert_eq!(result.winners, vec![0]);
    assert!(!result.split);
}

#[test]
fn contender_without_cards_is_an_error() {
    let players = vec![Player::new(0, "a", 100), Player::new(1, "b", 100)];
    let state = GameState::new(players, 0, 5, 10).unwrap();
    let board = parse_cards("Ac 8d 6h 4s 2c").unwrap();
    assert_eq!(
        determine_winners(state.players(), &board).err(),
        Some(GameError::MissingHoleCards { seat: 0 })
    );
}

#[test]
fn split_pot_examples() {
    assert_eq!(split_pot(100, 3), vec![34, 33, 33]);
    assert_eq!(split_pot(100, 2), vec![50, 50]);
    assert_eq!(split_pot(5, 7), vec![1, 1, 1, 1, 1, 0, 0]);
}
