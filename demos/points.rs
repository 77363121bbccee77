//! Basic k-medoids clustering example
//!
//! Clusters a small set of 2-D points into two groups with Euclidean distance
//! and prints the resulting labels and medoids.

use kmedoid::{Dissimilarity, Euclidean, KMedoids};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = vec![
        vec![5.0, 2.0],
        vec![6.0, 3.0],
        vec![5.0, 2.0],
        vec![8.0, 2.0],
        vec![6.0, 2.0],
        vec![7.0, 4.0],
        vec![25.0, 30.0],
        vec![26.0, 33.0],
        vec![24.0, 28.0],
        vec![30.0, 29.0],
        vec![32.0, 32.0],
        vec![5.0, 20.0],
        vec![20.0, 5.0],
    ];

    let result = KMedoids::new(2)
        .verbose(true)
        .fit(&points, |a, b| Euclidean.distance(a, b))?;

    println!("\nCluster assignments:");
    for (point, label) in points.iter().zip(result.labels.iter()) {
        println!("  {point:>14?} -> cluster {label}");
    }

    println!("\nMedoids:");
    for (position, &index) in result.medoid_indices.iter().enumerate() {
        println!("  cluster {position}: item {index} {:?}", points[index]);
    }

    println!("\nTotal cost: {:.3}", result.cost);
    println!("Converged: {} ({} iterations)", result.converged, result.n_iter);

    Ok(())
}
