use std::collections::BTreeMap;

use huffman_tree::{
    build_tree, decode, encode, nub, Code, FrequencyTable, HuffmanNode, HuffmanTree,
};
use proptest::prelude::*;

fn check_sums(node: &HuffmanNode) -> bool {
    match node {
        HuffmanNode::Leaf { count, .. } => *count > 0,
        HuffmanNode::Internal { count, left, right } => {
            *count == left.count() + right.count() && check_sums(left) && check_sums(right)
        }
    }
}

proptest! {
    #[test]
    fn test_leaf_counts_match_frequencies(text in "[a-j]{0,120}") {
        let tree = build_tree(&text).unwrap();
        let alphabet = nub(&text).unwrap();
        let table = FrequencyTable::tabulate(&text, &alphabet).unwrap();

        let expected: BTreeMap<char, usize> = table.iter().collect();
        let actual: BTreeMap<char, usize> = tree
            .root()
            .map(HuffmanNode::leaves)
            .unwrap_or_default()
            .into_iter()
            .collect();

        prop_assert_eq!(actual.len(), tree.symbol_count());
        prop_assert_eq!(expected, actual);
        prop_assert_eq!(tree.total_count(), text.chars().count());
        if let Some(root) = tree.root() {
            prop_assert!(check_sums(root));
        }
    }

    #[test]
    fn test_codes_are_prefix_free(text in "[a-z0-9 ]{1,120}") {
        let tree = build_tree(&text).unwrap();
        let table = tree.code_table().unwrap();
        let codes: Vec<&Code> = table.iter().map(|(_, c)| c).collect();

        prop_assert_eq!(codes.len(), nub(&text).unwrap().chars().count());
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip(text in "\\PC{0,200}") {
        let tree = build_tree(&text).unwrap();
        let code = encode(&tree, &text).unwrap();
        prop_assert_eq!(decode(&tree, &code).unwrap(), text);
    }

    #[test]
    fn test_encoded_length_is_weighted_path_length(text in "[a-f]{2,120}") {
        let tree = build_tree(&text).unwrap();
        prop_assume!(tree.symbol_count() > 1);

        let code = encode(&tree, &text).unwrap();
        let root = tree.root().unwrap();
        prop_assert_eq!(code.len(), root.internal_count_sum());
    }

    #[test]
    fn test_nub_idempotent(text in "\\PC{0,100}") {
        let once = nub(&text).unwrap();
        prop_assert_eq!(nub(&once).unwrap(), once.clone());
    }

    #[test]
    fn test_textual_code_roundtrip(text in "[xyz]{1,50}") {
        let tree = build_tree(&text).unwrap();
        let code = encode(&tree, &text).unwrap();
        let reparsed: Code = code.to_string().parse().unwrap();
        prop_assert_eq!(&reparsed, &code);
        prop_assert_eq!(decode(&tree, &reparsed).unwrap(), text);
    }
}

#[test]
fn test_aabbbcccc_codes() {
    let tree = build_tree("aabbbcccc").unwrap();
    let table = tree.code_table().unwrap();
    assert_eq!(table.get('c').map(ToString::to_string).as_deref(), Some("L"));
    assert_eq!(table.get('a').map(ToString::to_string).as_deref(), Some("RL"));
    assert_eq!(table.get('b').map(ToString::to_string).as_deref(), Some("RR"));
}

#[test]
fn test_single_symbol_roundtrip() {
    let tree = build_tree("aaaa").unwrap();
    let code = encode(&tree, "aaaa").unwrap();
    assert_eq!(code.len(), 4);
    assert_eq!(decode(&tree, &code).unwrap(), "aaaa");
}

#[test]
fn test_empty_input() {
    let tree = build_tree("").unwrap();
    assert_eq!(tree, HuffmanTree::default());
    assert!(encode(&tree, "").unwrap().is_empty());
}
