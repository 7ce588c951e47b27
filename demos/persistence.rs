//! Save a trained distribution to JSON and load it back.

use fuzzy_dist::{Config, Distribution, TrapezoidalPartition};

fn main() {
    let config = Config::builder()
        .feature_terms(3)
        .dependent_terms(3)
        .threshold(0.2)
        .build()
        .expect("valid config");

    let data: Vec<Vec<f64>> = (0..30)
        .map(|i| {
            let x = (i % 10) as f64;
            vec![x, 3.0 * x + 2.0]
        })
        .collect();

    let dist: Distribution = Distribution::train(&data, &config).expect("valid data");
    let path = std::env::temp_dir().join("fuzzy-dist-demo.json");

    dist.save(&path).expect("write model");
    println!("Saved {} classes to {}", dist.n_classes(), path.display());

    let loaded = Distribution::<TrapezoidalPartition>::load(&path).expect("read model");
    for x in [1.0, 4.5, 8.0] {
        println!(
            "  x = {x}: original {:?}, loaded {:?}",
            dist.estimate(&[x], 0.2),
            loaded.estimate(&[x], 0.2)
        );
    }
}
