//! Builds a small flight network and prints it.
//!
//! Usage:
//!   cargo run --example airports
//!   cargo run --example airports -- --remove CDG
//!   cargo run --example airports -- --drop-route LHR:DTW --add-route JFK:DTW:2 --verbose

use std::{
    fmt::{self, Display, Formatter},
    process,
};

use clap::Parser;
use labelgraph::{prelude::*, tracing_support::init_tracing};

/// Build the sample airport graph, apply edits, and print the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airport code to remove, along with every route into it (repeatable)
    #[arg(long, value_name = "CODE")]
    remove: Vec<String>,

    /// Route to drop, as FROM:TO (repeatable)
    #[arg(long, value_name = "FROM:TO")]
    drop_route: Vec<String>,

    /// Route to add, as FROM:TO:WEIGHT (repeatable)
    #[arg(long, value_name = "FROM:TO:WEIGHT")]
    add_route: Vec<String>,

    /// Also list the full name of each airport left in the graph
    #[arg(long)]
    names: bool,

    /// Log graph operations as they run
    #[arg(short, long)]
    verbose: bool,
}

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

const AIRPORTS: [Airport; 4] = [
    Airport {
        code: "JFK",
        name: "John F. Kennedy International Airport",
    },
    Airport {
        code: "LHR",
        name: "London Heathrow Airport",
    },
    Airport {
        code: "CDG",
        name: "Charles de Gaulle Airport",
    },
    Airport {
        code: "DTW",
        name: "Detroit Metropolitan Wayne County Airport",
    },
];

fn main() {
    let args = Args::parse();
    if args.verbose {
        init_tracing();
    }

    let vertices: Vec<_> = AIRPORTS.into_iter().map(Vertex::new).collect();
    let mut graph = Graph::with_edges(
        vertices.clone(),
        [
            (&vertices[0], &vertices[1], 1),
            (&vertices[1], &vertices[2], 3),
            (&vertices[1], &vertices[3], 4),
            (&vertices[2], &vertices[3], 5),
        ],
    );

    for code in &args.remove {
        let airport = airport_or_exit(code);
        if graph.remove_vertex(&Vertex::new(airport)) == 0 {
            eprintln!("{code} is not in the graph");
        }
    }

    for route in &args.drop_route {
        let (from, to) = match route.split_once(':') {
            Some(pair) => pair,
            None => exit_with(&format!("Invalid route {route:?}, expected FROM:TO")),
        };
        let from = Vertex::new(airport_or_exit(from));
        let to = Vertex::new(airport_or_exit(to));
        if let Err(err) = graph.try_remove_edge(&from, &to) {
            eprintln!("Cannot drop {route}: {err}");
        }
    }

    for route in &args.add_route {
        let (mut from, to, weight) = parse_new_route(route);
        if let Err(err) = graph.try_connect(&mut from, &to, weight) {
            eprintln!("Cannot add {route}: {err}");
        }
    }

    println!("{graph}");
    if args.names {
        println!();
        for vertex in graph.vertices() {
            let airport = vertex.value();
            println!("{}  {}", airport.code, airport.name);
        }
    }
}

fn parse_new_route(route: &str) -> (Vertex<Airport>, Vertex<Airport>, Weight) {
    let parts: Vec<_> = route.split(':').collect();
    let [from, to, weight] = parts.as_slice() else {
        exit_with(&format!("Invalid route {route:?}, expected FROM:TO:WEIGHT"));
    };
    let weight = match weight.parse::<Weight>() {
        Ok(weight) => weight,
        Err(err) => exit_with(&format!("Invalid weight {weight:?}: {err}")),
    };
    (
        Vertex::new(airport_or_exit(from)),
        Vertex::new(airport_or_exit(to)),
        weight,
    )
}

fn airport_or_exit(code: &str) -> Airport {
    match AIRPORTS.iter().find(|airport| airport.code.eq_ignore_ascii_case(code)) {
        Some(airport) => airport.clone(),
        None => exit_with(&format!("Unknown airport code {code:?}")),
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}
