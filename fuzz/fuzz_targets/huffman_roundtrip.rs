#![no_main]
use huffman_tree::{build_tree, decode, encode, Code, Direction, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (text, raw_code) = data;

    let tree = match build_tree(&text) {
        Ok(tree) => tree,
        Err(Error::InputTooLong { .. }) => return,
        Err(e) => panic!("unexpected build error: {e}"),
    };

    let code = encode(&tree, &text).unwrap();
    assert_eq!(decode(&tree, &code).unwrap(), text);

    // Arbitrary codes may be rejected, but never panic.
    let arbitrary: Code = raw_code
        .chars()
        .map(|c| {
            if (c as u32) & 1 == 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        })
        .collect();
    let _ = decode(&tree, &arbitrary);
});
