#![no_main]

use libfuzzer_sys::fuzz_target;
use poker_hand_checker::core::{Hand, Rankable};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            // Classifying never fails, ranking only fails for invalid hands.
            let category = h.category();
            match h.rank() {
                Ok(rank) => {
                    assert!(h.is_valid());
                    assert_eq!(category, rank.category());
                }
                Err(_) => assert!(!h.is_valid()),
            }
        }
    }
});
