use canonical::{digest_hex, sanitize, DigestAlgorithm};

fn main() {
    let content = "It was the best of times, it was the worst of times;\nit was the age of wisdom...";

    let clean = sanitize(content);
    println!("sanitized: {clean}");
    println!();
    for algorithm in DigestAlgorithm::ALL {
        println!("{algorithm}: {}", digest_hex(algorithm, content.as_bytes()));
    }
}
