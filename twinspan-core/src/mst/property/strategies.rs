//! Strategy builders for MST property-based tests.
//!
//! Larger fixtures are generated from a seeded [`SmallRng`] so rstest cases
//! can pin a profile and seed; tiny graphs for the exhaustive oracle come
//! straight from proptest combinators so they shrink well.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::edge::{Edge, Weight};

use super::oracle::EXHAUSTIVE_EDGE_LIMIT;
use super::types::{MstFixture, WeightProfile};

/// Minimum vertex count for generated fixtures.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for generated fixtures.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense fixtures.
const DENSE_MAX_VERTICES: usize = 24;
/// Largest graph handed to the exhaustive oracle.
const TINY_MAX_VERTICES: usize = 6;

/// Generates fixtures across every [`WeightProfile`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(profile, &mut rng)
    })
}

/// Generates `(vertex_count, edges)` with at most six vertices.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..=TINY_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edges = if vertex_count == 1 {
            Just(Vec::new()).boxed()
        } else {
            let edge = (0..vertex_count, 1..vertex_count, -5_i64..=20).prop_map(
                move |(source, offset, weight)| {
                    Edge::new(source, (source + offset) % vertex_count, weight)
                },
            );
            proptest::collection::vec(edge, 0..=EXHAUSTIVE_EDGE_LIMIT).boxed()
        };
        (Just(vertex_count), edges)
    })
}

/// Generates a fixture for a specific profile.
pub(super) fn generate_fixture(profile: WeightProfile, rng: &mut SmallRng) -> MstFixture {
    match profile {
        WeightProfile::Unique => {
            generate_probabilistic(rng, MAX_VERTICES, (0.2, 0.6), profile, |r| {
                r.gen_range(-1_000_000..1_000_000)
            })
        }
        WeightProfile::ManyIdentical => generate_identical(rng),
        WeightProfile::Negative => {
            generate_probabilistic(rng, MAX_VERTICES, (0.3, 0.7), profile, |r| {
                r.gen_range(-100..=5)
            })
        }
        WeightProfile::Sparse => generate_sparse(rng),
        WeightProfile::Dense => {
            generate_probabilistic(rng, DENSE_MAX_VERTICES, (0.7, 0.95), profile, |r| {
                r.gen_range(1..=500)
            })
        }
        WeightProfile::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair with a probability sampled from `edge_prob_range`.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    profile: WeightProfile,
    mut next_weight: impl FnMut(&mut SmallRng) -> Weight,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let weight = next_weight(rng);
                edges.push(oriented(source, target, weight, rng));
            }
        }
    }
    MstFixture {
        vertex_count,
        edges,
        profile,
    }
}

fn generate_identical(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightProfile::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    push_connected_component(&mut edges, 0, vertex_count, rng);
    MstFixture {
        vertex_count,
        edges,
        profile: WeightProfile::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(2..=12);
        push_connected_component(&mut edges, offset, size, rng);
        offset += size;
    }
    MstFixture {
        vertex_count: offset,
        edges,
        profile: WeightProfile::Disconnected,
    }
}

/// Pushes a random spanning path over `offset..offset + size` plus up to
/// `size` extra internal edges.
fn push_connected_component(
    edges: &mut Vec<Edge>,
    offset: usize,
    size: usize,
    rng: &mut SmallRng,
) {
    let mut order: Vec<usize> = (offset..offset + size).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        let weight = rng.gen_range(0..100);
        edges.push(Edge::new(pair[0], pair[1], weight));
    }

    let extra = rng.gen_range(size / 2..=size);
    for _ in 0..extra {
        let source = offset + rng.gen_range(0..size);
        let target = offset + rng.gen_range(0..size);
        if source != target {
            let weight = rng.gen_range(0..100);
            edges.push(Edge::new(source, target, weight));
        }
    }
}

/// Randomly flips the stored orientation so engines never rely on it.
fn oriented(source: usize, target: usize, weight: Weight, rng: &mut SmallRng) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(source, target, weight)
    } else {
        Edge::new(target, source, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
