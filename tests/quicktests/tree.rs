use std::collections::HashMap;

use playlist::{Playlist, Song};
use quickcheck_macros::quickcheck;

use crate::Op;

fn compose_key(title: &str, artist: &str) -> String {
    format!("{title}{artist}")
}

fn key_of(song: &Song) -> String {
    compose_key(&song.title, &song.artist)
}

/// Applies a set of operations to a playlist and to a multiset of keys.
/// Along the way, every `bool` outcome the playlist reports must match
/// what the model predicts.
fn do_ops(ops: &[Op], playlist: &mut Playlist, model: &mut HashMap<String, usize>) {
    for op in ops {
        match op {
            Op::Insert(title, artist) => {
                let accepted = playlist.insert(title, artist);
                assert_eq!(accepted, !title.is_empty() && !artist.is_empty());
                if accepted {
                    *model.entry(compose_key(title, artist)).or_insert(0) += 1;
                }
            }
            Op::Remove(title, artist) => {
                let removed = playlist.remove(title, artist);
                let key = compose_key(title, artist);
                match model.get_mut(&key) {
                    Some(copies) => {
                        assert!(removed);
                        *copies -= 1;
                        if *copies == 0 {
                            model.remove(&key);
                        }
                    }
                    None => assert!(!removed),
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();

    do_ops(&ops, &mut playlist, &mut model);

    let expected_len: usize = model.values().sum();
    playlist.len() == expected_len && model.keys().all(|key| key_contained(&playlist, key))
}

#[quickcheck]
fn contains_every_inserted_song(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut inserted = Vec::new();

    for op in &ops {
        if let Op::Insert(title, artist) = op {
            if playlist.insert(title, artist) {
                inserted.push((title.clone(), artist.clone()));
            }
        }
    }

    inserted
        .iter()
        .all(|(title, artist)| playlist.contains(title, artist))
}

#[quickcheck]
fn contains_matches_the_model(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();

    do_ops(&ops, &mut playlist, &mut model);

    // Probe the whole pool grid, hits and misses alike. Equality is
    // by composed key, so e.g. inserting ("ab", "c") makes the probe
    // ("a", "bc") a hit.
    crate::TITLES.iter().all(|title| {
        crate::ARTISTS.iter().all(|artist| {
            playlist.contains(title, artist)
                == model.contains_key(&compose_key(title, artist))
        })
    })
}

#[quickcheck]
fn inorder_is_sorted_and_matches_the_model(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();

    do_ops(&ops, &mut playlist, &mut model);

    let keys: Vec<_> = playlist.inorder().iter().map(key_of).collect();
    let sorted = keys.windows(2).all(|pair| pair[0] <= pair[1]);

    let mut traversed = HashMap::new();
    for key in keys {
        *traversed.entry(key).or_insert(0) += 1;
    }

    sorted && traversed == model
}

#[quickcheck]
fn traversals_agree_on_contents(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();

    do_ops(&ops, &mut playlist, &mut model);

    let mut pre: Vec<_> = playlist.preorder().iter().map(key_of).collect();
    let mut post: Vec<_> = playlist.postorder().iter().map(key_of).collect();
    let inorder: Vec<_> = playlist.inorder().iter().map(key_of).collect();

    pre.sort();
    post.sort();
    let mut sorted_inorder = inorder.clone();
    sorted_inorder.sort();

    // The BST invariant makes in-order already sorted.
    pre == sorted_inorder && post == sorted_inorder && inorder == sorted_inorder
}

#[quickcheck]
fn height_is_bounded_by_len(ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();

    do_ops(&ops, &mut playlist, &mut model);

    let height = playlist.height();
    let len = playlist.len();
    height <= len && (height == 0) == playlist.is_empty()
}

#[quickcheck]
fn clone_is_independent(ops: Vec<Op>, more_ops: Vec<Op>) -> bool {
    let mut playlist = Playlist::new();
    let mut model = HashMap::new();
    do_ops(&ops, &mut playlist, &mut model);

    let snapshot: Vec<_> = playlist.inorder();
    let copy = playlist.clone();

    // Keep mutating the original; the copy must hold the snapshot.
    do_ops(&more_ops, &mut playlist, &mut model.clone());
    playlist.clear();

    copy.inorder() == snapshot
}

fn key_contained(playlist: &Playlist, key: &str) -> bool {
    // Keys come from title/artist pools, so splitting them back apart
    // isn't possible in general. Membership by key is checked through
    // the traversal snapshot instead.
    playlist.inorder().iter().any(|song| key_of(song) == key)
}
