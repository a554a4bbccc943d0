//! Snapshot build cost for a busy position.

use ccg_position::cards::{CardCatalog, CardDefinition};
use ccg_position::core::{GameState, PlayerToken};
use ccg_position::snapshot::SnapshotBuilder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn busy_position() -> (CardCatalog, GameState) {
    let mut catalog = CardCatalog::new();
    for i in 0..200 {
        let card = if i % 2 == 0 {
            CardDefinition::with_types(["CREATURE"]).with_stats(i, i)
        } else {
            CardDefinition::with_types(["INSTANT"]).with_text("Deal damage.")
        };
        catalog.insert(format!("Card {i}"), card);
    }

    let mut state = GameState::new();
    for i in 0..40 {
        let player = if i % 2 == 0 { PlayerToken::P1 } else { PlayerToken::P2 };
        state.add_permanent(player, &format!("Card {}", i * 2));
    }
    for i in 0..20 {
        let target = format!("stack:spell_{i}");
        state.cast_spell(&format!("Card {}", i * 2 + 1), None, &target);
    }
    (catalog, state)
}

fn bench_build(c: &mut Criterion) {
    let (catalog, state) = busy_position();
    let builder = SnapshotBuilder::new(&catalog);

    c.bench_function("snapshot_build", |b| {
        b.iter(|| builder.build(black_box(&state)))
    });
    c.bench_function("snapshot_build_json", |b| {
        b.iter(|| builder.build(black_box(&state)).and_then(|doc| doc.to_json()))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
