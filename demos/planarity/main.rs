//! I use it with `RUST_LOG=debug cargo run --example planarity -- assets/k33.in`

use planar_embedding::{PlanarityOptions, Planarity, Result, get_counterexample, input::from_file, planarity_test};
use petgraph::visit::EdgeRef;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/graph.in".to_string());
    let graph = from_file(&path)?;

    let options = PlanarityOptions {
        restrict_to_input: true,
        ..Default::default()
    };
    match planarity_test(&graph, &options)? {
        Planarity::Planar(embedding) => {
            println!("planar, {} faces", embedding.faces().len());
            for (v, rotation) in embedding.rotation_system() {
                let rotation: Vec<String> = rotation.iter().map(|w| w.to_string()).collect();
                println!("{v}: {}", rotation.join(" "));
            }
        }
        Planarity::NonPlanar => {
            println!("not planar");
            if let Some(counterexample) = get_counterexample(&graph)? {
                println!("Kuratowski subgraph:");
                for e in counterexample.edge_references() {
                    println!("{},{}", e.source().index(), e.target().index());
                }
            }
        }
    }

    Ok(())
}
