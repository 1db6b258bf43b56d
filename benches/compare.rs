use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_hand_checker::PokerHandsChecker;
use poker_hand_checker::core::Hand;
use std::hint::black_box;

fn compare_same_category(c: &mut Criterion) {
    let checker = PokerHandsChecker::new();
    let pairs = [
        ("high card", "AsKdQcTs2s", "AhKcQdTd3c"),
        ("two pair", "KdKc9h9dAs", "KhKs9c9sQd"),
        ("full house", "7c7d7hKsKd", "7s7d7h3c3s"),
        ("straight flush", "5c6c7c8c9c", "4d5d6d7d8d"),
    ];

    let mut group = c.benchmark_group("Compare hands");
    for (name, left, right) in pairs {
        let left = Hand::new_from_str(left).unwrap();
        let right = Hand::new_from_str(right).unwrap();
        let id = BenchmarkId::from_parameter(name);
        let hands = (left, right);
        group.bench_with_input(id, &hands, |b, (l, r)| {
            b.iter(|| checker.compare_hands(black_box(l), black_box(r)))
        });
    }
    group.finish();
}

criterion_group!(benches, compare_same_category);
criterion_main!(benches);
