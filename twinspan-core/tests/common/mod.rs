use twinspan_core::{Twinspan, TwinspanBuilder};

/// Builds a session over `vertex_count` vertices holding `edges`.
#[must_use]
pub fn session(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Twinspan {
    let mut twinspan = TwinspanBuilder::new()
        .with_vertex_count(vertex_count)
        .build()
        .expect("vertex count must be positive");
    for &(u, v, w) in edges {
        twinspan.add_edge(u, v, w).expect("fixture edges must be valid");
    }
    twinspan
}

/// Chain `0-1-2-3` plus a heavy shortcut `0-3`.
pub const EXAMPLE_A: &[(usize, usize, i64)] = &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)];
