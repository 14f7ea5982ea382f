//! A plain, unbalanced BST that stores keys only. Each node exclusively owns
//! its children and the tree exclusively owns the root, so releasing the tree
//! releases every node.
//!
//! Equal keys are not rejected: they are routed to the right subtree and kept
//! as separate nodes. The shape depends entirely on insertion order.
//!
//! # Examples
//!
//! ```
//! use euler_bst::unbalanced::Tree;
//!
//! let mut tree: Tree<i64> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.preorder(), vec![&5, &3, &1, &4, &8, &7, &9]);
//! assert_eq!(tree.postorder(), vec![&1, &4, &3, &7, &9, &8, &5]);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.root(), Some(&7));
//! assert_eq!(tree.find(&5), None);
//! ```

use std::fmt;
use std::mem;

use log::debug;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced Binary Search Tree. Keys smaller than a node go left, all
/// others (including equal ones) go right.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Detach children before each node goes so dropping a list-shaped tree
        // doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("preorder", &self.preorder())
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The key stored at the root.
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of levels. An empty tree has height 0 and a lone root height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Smallest key (the leftmost node).
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key (the rightmost node).
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Keys in (node, left, right) order.
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        keys
    }

    /// Keys in (left, right, node) order.
    pub fn postorder(&self) -> Vec<&K> {
        // (node, right, left) is the exact reverse of postorder.
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        keys.reverse();
        keys
    }

    /// Keys in (left, node, right) order, i.e. sorted.
    pub fn inorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    keys.push(&node.key);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        keys
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts `key`. Equal keys are accepted and go to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.preorder(), vec![&2, &1, &2]);
    /// ```
    pub fn insert(&mut self, key: K) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;
        debug!("inserted key ({} keys)", self.len);
    }

    /// Finds the stored key equal to `key`, the highest one if there are
    /// duplicates. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<i64> = vec![1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = if *key < node.key {
                node.left.as_deref()
            } else if *key > node.key {
                node.right.as_deref()
            } else {
                return Some(&node.key);
            };
        }
        None
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Deletes the highest node holding `key` and returns its key. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A leaf is detached, a node with one child is replaced by that child, and
    /// a node with two children takes the key of its in-order successor (the
    /// leftmost node of its right subtree), which is then unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use euler_bst::unbalanced::Tree;
    ///
    /// let mut tree: Tree<i64> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.root(), Some(&8));
    /// assert_eq!(tree.delete(&5), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let mut link = &mut self.root;
        while link.as_ref().map_or(false, |node| node.key != *key) {
            let node = link.as_mut()?;
            link = if *key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let node = link.as_mut()?;
        let deleted = if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_leftmost(&mut node.right)?;
            debug!("deleting node with two children");
            mem::replace(&mut node.key, successor)
        } else {
            let mut deleted = link.take()?;
            *link = deleted.left.take().or_else(|| deleted.right.take());
            deleted.key
        };
        self.len -= 1;
        Some(deleted)
    }

    /// Unlinks the leftmost node under `link`, splicing its right child into
    /// its place, and returns its key.
    fn take_leftmost(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost.key)
    }
}
