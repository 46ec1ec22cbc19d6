//! 默克爾承諾集成測試

use merkle_node::crypto::merkle::{hash_pair, MerkleTree};
use merkle_node::{build_merkle_root, Commitment, MerkleError, MerkleProof};
use sha2::Digest;
use sha256_engine::{sha256_hex, HashFunction, Sha256};

/// 以 sha2 crate 為參考的哈希函數
struct ReferenceSha256;

impl HashFunction for ReferenceSha256 {
    fn hash(&self, message: &[u8]) -> [u8; 32] {
        sha2::Sha256::digest(message).into()
    }

    fn name(&self) -> &str {
        "SHA-256 (sha2)"
    }
}

fn h(data: &str) -> String {
    sha256_hex(data.as_bytes())
}

#[test]
fn test_single_item_root_is_leaf_hash() {
    let tree = MerkleTree::build(["x"]).unwrap();
    assert_eq!(tree.root_hash(), h("x"));
}

#[test]
fn test_two_item_root() {
    let tree = MerkleTree::build(["x", "y"]).unwrap();
    let expected = h(&h(&(h("x") + &h("y"))));

    assert_eq!(tree.root_hash(), expected);
}

#[test]
fn test_root_is_deterministic() {
    let items = vec!["tx1", "tx2", "tx3", "tx4", "tx5"];

    let first = build_merkle_root(&items).unwrap();
    let second = build_merkle_root(&items).unwrap();

    assert_eq!(first, second);
    assert_eq!(MerkleTree::build(&items).unwrap(), MerkleTree::build(&items).unwrap());
}

#[test]
fn test_root_is_order_sensitive() {
    let ab = build_merkle_root(["a", "b"]).unwrap();
    let ba = build_merkle_root(["b", "a"]).unwrap();
    assert_ne!(ab, ba);

    let abc = build_merkle_root(["a", "b", "c"]).unwrap();
    let acb = build_merkle_root(["a", "c", "b"]).unwrap();
    assert_ne!(abc, acb);
}

#[test]
fn test_three_items_promote_last_leaf() {
    let tree = MerkleTree::build(["a", "b", "c"]).unwrap();

    let left = h(&h(&(h("a") + &h("b"))));
    // c 的哈希直接晉升，不與自身配對
    let expected = h(&h(&(left.clone() + &h("c"))));
    let duplicated = h(&h(&(left + &h(&h(&(h("c") + &h("c")))))));

    assert_eq!(tree.root_hash(), expected);
    assert_ne!(tree.root_hash(), duplicated);
}

#[test]
fn test_empty_input_is_error() {
    let result = build_merkle_root(Vec::<String>::new());
    assert!(matches!(result, Err(MerkleError::EmptyInput)));
}

#[test]
fn test_sixteen_transactions() {
    let items: Vec<String> = (1..=16).map(|i| i.to_string()).collect();
    let tree = MerkleTree::build(&items).unwrap();

    assert_eq!(tree.leaf_count(), 16);
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.layers().iter().map(Vec::len).collect::<Vec<_>>(), vec![16, 8, 4, 2, 1]);
}

#[test]
fn test_engine_matches_reference_hasher() {
    for n in 1..=33usize {
        let items: Vec<String> = (0..n).map(|i| format!("item number {}", i)).collect();

        let ours = MerkleTree::build(&items).unwrap();
        let reference = MerkleTree::build_with(&ReferenceSha256, &items).unwrap();

        assert_eq!(ours.root_hash(), reference.root_hash(), "n = {}", n);
    }
}

#[test]
fn test_hash_pair_uses_hex_strings_not_raw_bytes() {
    let hasher = Sha256::new();
    let left = h("left");
    let right = h("right");

    let raw_left = hex::decode(&left).unwrap();
    let raw_right = hex::decode(&right).unwrap();
    let raw_concat: Vec<u8> = raw_left.into_iter().chain(raw_right).collect();
    let raw_variant = sha256_hex(sha256_hex(&raw_concat).as_bytes());

    assert_ne!(hash_pair(&hasher, &left, &right), raw_variant);
}

#[test]
fn test_proofs_round_trip_through_commitment() {
    let items = vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"];
    let tree = MerkleTree::build(&items).unwrap();
    let commitment = Commitment::from_tree(&tree, true).unwrap();

    let json = commitment.to_json().unwrap();
    let restored: Commitment = serde_json::from_str(&json).unwrap();

    for (i, item) in items.iter().enumerate() {
        let proof = &restored.proofs[i];
        assert!(proof.verify(item, &restored.root_hash));

        let from_bytes = MerkleProof::from_bytes(&proof.to_bytes()).unwrap();
        assert_eq!(&from_bytes, proof);
    }
}

#[test]
fn test_concurrent_builds() {
    let lists: Vec<Vec<String>> = (1..=8)
        .map(|n| (0..n * 3).map(|i| format!("{}-{}", n, i)).collect())
        .collect();
    let expected: Vec<String> = lists.iter().map(|l| build_merkle_root(l).unwrap()).collect();

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = lists
            .iter()
            .map(|list| scope.spawn(move || build_merkle_root(list).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
