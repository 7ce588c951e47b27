//! Price estimation from two features on a synthetic housing dataset.

use fuzzy_dist::{Config, Distribution};

fn main() {
    let config = Config::builder()
        .feature_terms(5)
        .dependent_terms(7)
        .threshold(0.05)
        .build()
        .expect("valid config");

    let data = generate_data();

    println!("Training on synthetic housing data...");
    println!("  {} rows, 2 features (area, age), 1 dependent (price)", data.len());

    let (dist, summary) =
        Distribution::<fuzzy_dist::TrapezoidalPartition>::train_with_summary(&data, &config)
            .expect("training data is valid");

    println!(
        "\nClasses: {} seeded, {} merged, {} kept ({:.1} rows per seeded class)",
        summary.seeded,
        summary.merged,
        summary.classes,
        summary.rows_per_class()
    );

    println!("\nSample estimates:");
    for (area, age) in [(45.0, 30.0), (80.0, 10.0), (120.0, 2.0), (400.0, 1.0)] {
        match dist.estimate(&[area, age], 0.2) {
            Ok(price) => println!("  area {area:>5}, age {age:>4} -> price {price:.1}"),
            Err(err) => println!("  area {area:>5}, age {age:>4} -> {err}")
        }
    }

    if let Ok(class) = dist.classify(&[80.0, 10.0], 0.2) {
        let p = dist.probability_in_range(class, 150.0, 250.0);
        println!("\nLegacy range score for price in [150, 250): {p:.3}");
    }

    if let Ok(Some(mae)) = dist.mae(&data, 0.2) {
        println!("\nTraining MAE: {mae:.2}");
    }
}

fn generate_data() -> Vec<Vec<f64>> {
    let mut data = Vec::new();

    for i in 0..200 {
        let area = 30.0 + (i % 20) as f64 * 5.0;
        let age = (i / 20) as f64 * 4.0;
        let price = area * 2.0 - age * 1.5 + ((i * 7) % 11) as f64 - 5.0;
        data.push(vec![area, age, price]);
    }

    data
}
