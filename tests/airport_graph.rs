use std::fmt::{self, Display, Formatter};

use labelgraph::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Airport {
    code: &'static str,
    name: &'static str,
}

impl Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

fn airports() -> Vec<Vertex<Airport>> {
    [
        ("JFK", "John F. Kennedy International Airport"),
        ("LHR", "London Heathrow Airport"),
        ("CDG", "Charles de Gaulle Airport"),
        ("DTW", "Detroit Metropolitan Wayne County Airport"),
    ]
    .into_iter()
    .map(|(code, name)| Vertex::new(Airport { code, name }))
    .collect()
}

/// JFK -> LHR(1), LHR -> CDG(3) DTW(4), CDG -> DTW(5).
fn airport_graph() -> (Graph<Airport>, Vec<Vertex<Airport>>) {
    let airports = airports();
    let graph = Graph::with_edges(
        airports.clone(),
        [
            (&airports[0], &airports[1], 1),
            (&airports[1], &airports[2], 3),
            (&airports[1], &airports[3], 4),
            (&airports[2], &airports[3], 5),
        ],
    );
    (graph, airports)
}

fn num_neighbors(graph: &Graph<Airport>, airport: &Vertex<Airport>) -> Option<usize> {
    graph
        .vertex(airport.value())
        .map(|vertex| vertex.neighbors().len())
}

#[test]
fn test_vertices() {
    let (graph, airports) = airport_graph();
    for airport in &airports {
        assert!(
            graph.vertex(airport.value()).is_some(),
            "expected to find {}",
            airport.value()
        );
    }
}

#[test]
fn test_edges() {
    let (graph, airports) = airport_graph();
    assert_eq!(num_neighbors(&graph, &airports[0]), Some(1));
    assert_eq!(num_neighbors(&graph, &airports[1]), Some(2));
    assert_eq!(num_neighbors(&graph, &airports[2]), Some(1));
    assert_eq!(num_neighbors(&graph, &airports[3]), Some(0));
    assert_eq!(graph.num_edges(), 4);
}

#[test]
fn test_render() {
    let (graph, _) = airport_graph();
    assert_eq!(graph.render(), "JFK -> LHR(1)\nLHR -> CDG(3) DTW(4)\nCDG -> DTW(5)\nDTW");
}

#[test]
fn test_add_vertex() {
    let (mut graph, _) = airport_graph();
    let sfo = Airport {
        code: "SFO",
        name: "San Francisco International Airport",
    };
    graph.insert_vertex(sfo.clone());
    assert!(graph.vertex(&sfo).is_some());
    assert_eq!(graph.num_vertices(), 5);
}

#[test]
fn test_remove_vertex() {
    let (mut graph, airports) = airport_graph();
    let cdg = &airports[2];
    assert_eq!(graph.remove_vertex(cdg), 1);
    assert!(graph.vertex(cdg.value()).is_none());

    let lhr = graph.vertex(airports[1].value()).unwrap();
    assert!(!lhr.has_neighbor(cdg.value()));
    assert!(lhr.has_neighbor(airports[3].value()));
    let jfk = graph.vertex(airports[0].value()).unwrap();
    assert!(jfk.has_neighbor(airports[1].value()));
}

#[test]
fn test_add_edge() {
    let (mut graph, airports) = airport_graph();
    let mut jfk = graph.vertex(airports[0].value()).unwrap().clone();
    let dtw = graph.vertex(airports[3].value()).unwrap().clone();
    graph.connect(&mut jfk, &dtw, 2);
    assert!(jfk.has_neighbor(dtw.value()));
    assert!(graph.vertex(jfk.value()).unwrap().has_neighbor(dtw.value()));
}

#[test]
fn test_remove_edge() {
    let (mut graph, airports) = airport_graph();
    let lhr = graph.vertex(airports[1].value()).unwrap().clone();
    let cdg = graph.vertex(airports[2].value()).unwrap().clone();
    assert_eq!(graph.remove_edge(&lhr, &cdg), 1);

    let lhr = graph.vertex(lhr.value()).unwrap();
    assert!(!lhr.has_neighbor(cdg.value()));
    assert_eq!(lhr.neighbors().len(), 1);
}

#[test]
fn test_airports_differing_only_by_name_are_distinct() {
    let (graph, _) = airport_graph();
    let renamed = Airport {
        code: "JFK",
        name: "Idlewild",
    };
    assert!(graph.vertex(&renamed).is_none());
}
