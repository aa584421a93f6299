//! End-to-end classification of realistic synthetic hands


use hand_gesture::{
    analysis::HandAnalyzer,
    config::Config,
    gesture::{is_fist, is_peace, is_thumbs_up},
    interaction::{facing_each_other, hands_close},
    orientation::{estimate_orientation, Orientation},
    projection::estimate_hand_depth,
};
use test_helpers::{fist, open_palm, peace_sign, thumbs_up};

fn analyzer() -> HandAnalyzer {
    HandAnalyzer::new(&Config::default(), 1280.0, 720.0).unwrap()
}

#[test]
fn test_open_palm() {
    let hand = open_palm();
    assert!(!is_fist(&hand));
    assert!(!is_peace(&hand));
    assert!(!is_thumbs_up(&hand));
    assert_eq!(estimate_orientation(&hand), Orientation::Up);
}

#[test]
fn test_peace_sign() {
    let hand = peace_sign();
    assert!(is_peace(&hand));
    assert!(!is_fist(&hand));
}

#[test]
fn test_thumbs_up_is_also_a_fist() {
    // Predicates are independent: a thumbs up curls the other four fingers
    let hand = thumbs_up();
    assert!(is_thumbs_up(&hand));
    assert!(is_fist(&hand));
    assert_eq!(estimate_orientation(&hand), Orientation::Up);
}

#[test]
fn test_fist_orientations() {
    assert_eq!(estimate_orientation(&fist(0.4, 0.5, 0.1)), Orientation::Right);
    assert_eq!(estimate_orientation(&fist(0.6, 0.5, -0.1)), Orientation::Left);
    assert!(!is_thumbs_up(&fist(0.4, 0.5, 0.1)));
}

#[test]
fn test_fist_pose_in_world() {
    let result = analyzer().analyze_hand(&fist(0.3, 0.4, 0.1));
    let pose = result.pose.expect("fist should carry a pose");

    // Left of and above frame center
    assert!(pose.position.x < 0.0);
    assert!(pose.position.y > 0.0);
    assert!((pose.position.z - estimate_hand_depth(&fist(0.3, 0.4, 0.1))).abs() < 1e-12);

    // Knuckles point along +x with no depth: a quarter turn of yaw
    assert!((pose.rotation.yaw - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    assert!(pose.rotation.pitch.abs() < 1e-9);
}

#[test]
fn test_peace_sign_has_no_pose() {
    assert!(analyzer().analyze_hand(&peace_sign()).pose.is_none());
}

#[test]
fn test_fist_bump_celebration() {
    let left_hand = fist(0.42, 0.5, 0.1);
    let right_hand = fist(0.58, 0.5, -0.1);
    assert!(hands_close(&left_hand, &right_hand));
    assert!(facing_each_other(
        estimate_orientation(&left_hand),
        estimate_orientation(&right_hand)
    ));

    let frame = analyzer().analyze_frame(&[left_hand, right_hand]);
    assert!(frame.interaction.unwrap().celebration);

    // Detector order carries no identity; swapping keeps the result
    let swapped = analyzer().analyze_frame(&[right_hand, left_hand]);
    assert!(swapped.interaction.unwrap().celebration);
}

#[test]
fn test_open_hands_do_not_celebrate() {
    let frame = analyzer().analyze_frame(&[open_palm(), peace_sign()]);
    let interaction = frame.interaction.unwrap();
    assert!(interaction.hands_close);
    assert!(!interaction.facing_each_other);
    assert!(!interaction.celebration);
}

#[test]
fn test_extra_hands_ignored_for_interaction() {
    let frame = analyzer().analyze_frame(&[fist(0.42, 0.5, 0.1), fist(0.58, 0.5, -0.1), open_palm()]);
    assert_eq!(frame.hands.len(), 3);
    assert!(frame.interaction.unwrap().celebration);
}
