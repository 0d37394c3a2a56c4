use maxflow::{compute_max_flow, Error, GraphSpec, RawGraphSpec};
use serde_json::{json, Value};

#[test]
fn graph_spec_deserializes_from_request_shape() {
    let g: GraphSpec<f64> = serde_json::from_value(json!({
        "n": 3,
        "edges": [
            {"u": 0, "v": 1, "capacity": 2.0},
            {"u": 1, "v": 2, "capacity": 1.5}
        ],
        "source": 0,
        "sink": 2
    }))
    .unwrap();

    assert_eq!(g.n(), 3);
    assert_eq!(g.edges()[1].capacity, 1.5);
    assert_eq!((g.source(), g.sink()), (0, 2));
}

#[test]
fn invalid_graph_spec_is_rejected_while_deserializing() {
    let out_of_range = serde_json::from_value::<GraphSpec<f64>>(json!({
        "n": 2,
        "edges": [{"u": 0, "v": 2, "capacity": 1.0}],
        "source": 0,
        "sink": 1
    }));
    let message = out_of_range.unwrap_err().to_string();
    assert!(message.contains("edge #0"), "{message}");

    let negative = serde_json::from_value::<GraphSpec<f64>>(json!({
        "n": 2,
        "edges": [{"u": 0, "v": 1, "capacity": -1.0}],
        "source": 0,
        "sink": 1
    }));
    assert!(negative.is_err());
}

#[test]
fn raw_graph_spec_round_trips_through_validation() {
    let raw = RawGraphSpec::<f64> {
        n: 2,
        edges: vec![],
        source: 0,
        sink: 3,
    };

    assert_eq!(
        GraphSpec::try_from(raw),
        Err(Error::SinkOutOfRange { sink: 3, n: 2 })
    );
}

#[test]
fn result_serializes_to_response_shape() {
    let g: GraphSpec<f64> = serde_json::from_value(json!({
        "n": 3,
        "edges": [
            {"u": 0, "v": 1, "capacity": 2.0},
            {"u": 1, "v": 2, "capacity": 1.0}
        ],
        "source": 0,
        "sink": 2
    }))
    .unwrap();
    let value = serde_json::to_value(compute_max_flow(&g)).unwrap();

    let expected: Value = json!({
        "max_flow": 1.0,
        "logs": [
            {"augmenting_path": [[0, 1], [1, 2]], "bottleneck": 1.0, "flow_so_far": 1.0}
        ],
        "flow_assignments": [
            {"u": 0, "v": 1, "flow": 1.0},
            {"u": 1, "v": 2, "flow": 1.0}
        ],
        "min_cut": {"S": [0, 1], "T": [2], "edges_S_to_T": [[1, 2]]}
    });
    assert_eq!(value, expected);
}
