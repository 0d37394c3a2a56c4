use std::collections::BTreeMap;

use maxflow::{
    compute_max_flow, DefaultSolver, EdmondsKarp, FlowSolver, GraphSpec, InputEdge, MaxFlowResult,
};

// xorshift64, enough to get varied but reproducible graphs
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Random graph on `n` nodes with integral capacities in 1..=20, mirroring the demo generator:
/// every ordered pair gets an edge with probability `density_pct`%, and node 0 always has an
/// outgoing edge while node `n - 1` always has an incoming one.
fn random_graph(rng: &mut Rng, n: usize, density_pct: u64, forward_only: bool) -> GraphSpec<f64> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u == v || (forward_only && u > v) {
                continue;
            }
            if rng.below(100) < density_pct {
                edges.push(InputEdge::new(u, v, (1 + rng.below(20)) as f64));
            }
        }
    }
    if !edges.iter().any(|e| e.u == 0) {
        edges.push(InputEdge::new(0, n - 1, 5.0));
    }
    if !edges.iter().any(|e| e.v == n - 1) {
        edges.push(InputEdge::new(0, n - 1, 5.0));
    }
    GraphSpec::new(n, edges, 0, n - 1).unwrap()
}

fn graphs(forward_only: bool) -> impl Iterator<Item = GraphSpec<f64>> {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    (0..60).map(move |i| {
        let n = 8 + i % 9;
        let density = [15, 30, 50][i % 3];
        random_graph(&mut rng, n, density, forward_only)
    })
}

fn pair_flows(result: &MaxFlowResult<f64>) -> BTreeMap<(usize, usize), f64> {
    result
        .flow_assignments()
        .iter()
        .map(|a| (a.endpoints(), a.flow()))
        .collect()
}

#[test]
fn solver_check_holds_on_random_graphs() {
    let mut solver = DefaultSolver::new(EdmondsKarp::default());
    for g in graphs(false).chain(graphs(true)) {
        let result = solver.run(&g).unwrap();
        assert_eq!(solver.check(&g, &result), Ok(()));
    }
}

#[test]
fn flow_is_conserved_at_inner_nodes() {
    for g in graphs(true) {
        let result = compute_max_flow(&g);
        let mut balance = vec![0.0; g.n()];
        for (&(u, v), &flow) in &pair_flows(&result) {
            balance[u] -= flow;
            balance[v] += flow;
        }

        for node in 1..g.n() - 1 {
            assert_eq!(balance[node], 0.0, "node {node}");
        }
        assert_eq!(balance[g.n() - 1], result.max_flow());
    }
}

#[test]
fn flows_stay_within_capacity() {
    for g in graphs(true) {
        let result = compute_max_flow(&g);
        let capacities = g.edges().iter().fold(BTreeMap::new(), |mut acc, e| {
            *acc.entry(e.endpoints()).or_insert(0.0) += e.capacity;
            acc
        });

        for (pair, flow) in pair_flows(&result) {
            assert!(flow >= 0.0);
            assert!(flow <= capacities[&pair] + 1e-12);
        }
    }
}

#[test]
fn max_flow_matches_cut_capacity() {
    for g in graphs(false).chain(graphs(true)) {
        let result = compute_max_flow(&g);
        assert_eq!(result.min_cut().capacity(&g), result.max_flow());
    }
}

#[test]
fn logs_add_up_and_respect_the_augmentation_bound() {
    for g in graphs(false) {
        let result = compute_max_flow(&g);
        let logs = result.logs();

        assert!(logs.len() <= g.n() * g.edges().len());
        assert!(logs.windows(2).all(|w| w[0].flow_so_far() < w[1].flow_so_far()));

        let pushed: f64 = logs.iter().map(|step| step.bottleneck()).sum();
        assert_eq!(pushed, result.max_flow());
        assert_eq!(
            logs.last().map_or(0.0, |step| step.flow_so_far()),
            result.max_flow()
        );
    }
}

#[test]
fn augmenting_paths_never_get_shorter() {
    for g in graphs(false) {
        let result = compute_max_flow(&g);
        let lengths: Vec<_> = result
            .logs()
            .iter()
            .map(|step| step.augmenting_path().len())
            .collect();

        assert!(lengths.windows(2).all(|w| w[0] <= w[1]), "{lengths:?}");
    }
}

#[test]
fn identical_input_gives_identical_output() {
    for g in graphs(false) {
        let first = compute_max_flow(&g);
        let second = compute_max_flow(&g.clone());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
