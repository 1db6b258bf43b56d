#![no_main]

use libfuzzer_sys::fuzz_target;
use poker_hand_checker::PokerHandsChecker;
use poker_hand_checker::core::Hand;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub left: Hand,
    pub right: Hand,
}

fuzz_target!(|input: Input| {
    let checker = PokerHandsChecker::new();
    let ab = checker.compare_hands(&input.left, &input.right);
    let ba = checker.compare_hands(&input.right, &input.left);

    let both_valid = input.left.is_valid() && input.right.is_valid();
    assert_eq!(both_valid, ab.is_ok());
    assert_eq!(both_valid, ba.is_ok());

    if let (Ok(ab), Ok(ba)) = (ab, ba) {
        assert_eq!(ab.as_i8(), -ba.as_i8());
    }
});
