//! I use it with `cargo run --example palm_tree | dot -Tsvg > palm.svg`

use planar_embedding::{PlanarityContext, Result, input::from_file};

fn main() -> Result<()> {
    let graph = from_file("assets/graph.in")?;

    let mut context = PlanarityContext::new(&graph)?;
    context.preprocess()?;
    context.test()?;

    if let Some(dot) = context.to_dot() {
        print!("{dot}");
    }
    Ok(())
}
