use criterion::{black_box, criterion_group, criterion_main, Criterion};

use subst_score::score::presets;
use subst_score::{Score, SequenceType};

fn make_protein(len: usize) -> Vec<u8> {
    let residues = b"ARNDCQEGHILKMFPSTWYV";
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(residues[(x >> 16) as usize % residues.len()]);
    }
    seq
}

fn bench_default_construction(c: &mut Criterion) {
    c.bench_function("new_amino_acid_24x24", |b| {
        b.iter(|| {
            black_box(Score::new(black_box(2), black_box(-1), 11, 1, SequenceType::AminoAcid));
        })
    });
}

fn bench_blosum62_override(c: &mut Criterion) {
    let table = presets::blosum62_table();
    c.bench_function("set_table_blosum62", |b| {
        b.iter(|| {
            let score = Score::new(1, -1, 11, 1, SequenceType::AminoAcid);
            black_box(score.with_table(black_box(table.clone())).is_ok());
        })
    });
}

fn bench_pair_lookup(c: &mut Criterion) {
    let score = Score::blosum62();
    let a = make_protein(100);
    let b_seq = make_protein(100);

    c.bench_function("score_pair_100x100", |b| {
        b.iter(|| {
            let mut total = 0i32;
            for &x in &a {
                for &y in &b_seq {
                    total += score.score_pair(x, y).unwrap_or(0);
                }
            }
            black_box(total);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let score = Score::blosum62();
    c.bench_function("render_blosum62", |b| {
        b.iter(|| {
            black_box(black_box(&score).render());
        })
    });
}

criterion_group!(benches, bench_default_construction, bench_blosum62_override, bench_pair_lookup, bench_render);
criterion_main!(benches);
