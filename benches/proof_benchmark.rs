#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use merkle_exclusion_tree::{ExclusionProof, InclusionProof, MerkleTree, leaf_hash};

fn sorted_leaves(count: u32) -> Vec<[u8; 32]> {
    let mut leaves: Vec<[u8; 32]> = (0..count).map(|i| leaf_hash(&i.to_be_bytes())).collect();
    leaves.sort_unstable();
    leaves
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        let inputs = [1_000u32, 10_000, 100_000];
        for input in inputs.iter() {
            let leaves = sorted_leaves(*input);
            group.bench_with_input(BenchmarkId::new("leaves", input), &leaves, |b, leaves| {
                b.iter(|| MerkleTree::build(leaves.clone()).expect("build"));
            });
        }
    }

    c.bench_function("inclusion prove", |b| {
        let tree = MerkleTree::build(sorted_leaves(100_000)).expect("build");
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 7919) % tree.leaf_count();
            InclusionProof::generate(&tree, index).expect("generate")
        });
    });

    c.bench_function("inclusion verify", |b| {
        let tree = MerkleTree::build(sorted_leaves(100_000)).expect("build");
        let root = tree.root_hash();
        let proofs: Vec<_> = (0..1_000)
            .map(|i| InclusionProof::generate(&tree, i * 97).expect("generate"))
            .collect();
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % proofs.len();
            assert!(proofs[i].verify(&root));
        });
    });

    c.bench_function("exclusion prove + verify", |b| {
        let tree = MerkleTree::build(sorted_leaves(100_000)).expect("build");
        let root = tree.root_hash();
        let mut target = [0u8; 32];
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            target[..8].copy_from_slice(&i.to_be_bytes());
            match ExclusionProof::generate(&tree, &target) {
                Ok(proof) => assert!(proof.verify(&root, &target)),
                Err(_) => {} // target happened to be a committed leaf
            }
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
