mod cli;

use neardb::{Vector, VectorStore};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        let mut store = VectorStore::new();
        cli::run_repl(&mut store);
    } else if args[1] == "demo" {
        run_demo();
    } else {
        eprintln!("Usage: neardb [demo]");
        std::process::exit(1);
    }
}

/// Example usage: build a store, insert three sample vectors and print the
/// nearest one to a sample query point.
fn run_demo() {
    let mut store = VectorStore::new();
    store.insert(Vector::new("vec_1", vec![1.0, 2.0, 3.0]));
    store.insert(Vector::new("vec_2", vec![4.0, 5.0, 6.0]));
    store.insert(Vector::new("vec_3", vec![7.0, 8.0, 9.0]));

    let query = [2.0, 3.0, 4.0];
    let nearest = match store.find_nearest(&query) {
        Ok(nearest) => nearest,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    println!("Nearest vector: {}, Distance: {:.6}", nearest.id, nearest.distance);
}
