use euler_bst::unbalanced::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        // Duplicates are kept as separate nodes, so each delete removes one copy.
        let expected = still_present
            .iter()
            .position(|x| x == delete)
            .map(|pos| still_present.swap_remove(pos));
        if tree.delete(delete) != expected {
            return false;
        }
    }

    still_present.sort_unstable();
    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();
    inorder == still_present
}

#[quickcheck]
fn traversals_are_idempotent(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.preorder() == tree.preorder() && tree.postorder() == tree.postorder()
}

#[quickcheck]
fn preorder_rebuilds_the_same_tree(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let rebuilt: Tree<i8> = tree.preorder().into_iter().copied().collect();

    rebuilt.preorder() == tree.preorder() && rebuilt.postorder() == tree.postorder()
}
