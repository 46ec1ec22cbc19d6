//! Commit sixteen transactions and check an inclusion proof
use merkle_node::MerkleTree;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let transactions: Vec<String> = (1..=16).map(|i| i.to_string()).collect();

    let tree = MerkleTree::build(&transactions).expect("non-empty transaction list");
    println!("Merkle root: {}", tree.root_hash());
    println!("Depth: {}", tree.depth());

    let proof = tree.generate_proof(6).expect("leaf 6 exists");
    println!("Proof for \"7\": {} steps", proof.depth());

    if proof.verify("7", tree.root_hash()) {
        println!("✓ Transaction \"7\" is included");
    } else {
        println!("✗ Proof verification failed");
    }
}
