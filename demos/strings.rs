//! Clustering opaque items
//!
//! PAM never looks inside the items it clusters, so anything with a pairwise
//! distance works. This example groups words by a positional mismatch count.

use kmedoid::KMedoids;

fn mismatch(a: &&str, b: &&str) -> f64 {
    let positional = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    (positional + a.len().abs_diff(b.len())) as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = vec![
        "carrot", "carrom", "carbon", "parrot", "xylose", "xylyls", "xyloid",
    ];

    let result = KMedoids::new(2).fit(&words, mismatch)?;

    for (word, label) in words.iter().zip(result.labels.iter()) {
        println!("{word:>8} -> cluster {label}");
    }

    Ok(())
}
