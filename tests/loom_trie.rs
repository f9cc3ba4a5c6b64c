//! Model-checked lock discipline. Run with:
//! `RUSTFLAGS="--cfg loom" cargo test --test loom_trie --release`
#![cfg(loom)]

use loom::sync::Arc;
use loom::thread;
use tallytrie::Trie;

#[test]
fn loom_reader_sees_whole_insert_or_nothing() {
    loom::model(|| {
        let trie = Arc::new(Trie::new());

        let writer = {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                trie.add("ab");
            })
        };

        let (found, count) = trie.has_count("ab");
        if found {
            assert_eq!(count, 1);
            assert!(trie.has_prefix("a"));
        }
        let members = trie.members();
        assert!(members.is_empty() || members[0].count == 1);

        writer.join().unwrap();
        assert_eq!(trie.has_count("ab"), (true, 1));
    });
}

#[test]
fn loom_concurrent_add_and_delete() {
    loom::model(|| {
        let trie = Arc::new(Trie::new());
        trie.add("x");

        let adder = {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                trie.add("xy");
            })
        };
        let deleter = {
            let trie = Arc::clone(&trie);
            thread::spawn(move || trie.delete("x"))
        };

        adder.join().unwrap();
        assert!(deleter.join().unwrap());

        assert!(!trie.has("x"));
        assert!(trie.has("xy"));
        assert!(trie.has_prefix("x"));
        assert_eq!(trie.node_count(), 3);
    });
}
