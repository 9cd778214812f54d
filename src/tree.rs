//! A plain (unbalanced) binary search tree over `i64`.
//!
//! Keys are unique and kept in search order; no rebalancing is performed, so
//! the tree offers no height bound beyond the insertion order it was fed.

use core::fmt;

/// An unbalanced binary search tree of unique `i64` keys.
///
/// # Examples
///
/// ```rust
/// use runlist::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.insert(50);
/// tree.insert(30);
/// tree.insert(70);
///
/// assert!(tree.contains(30));
/// assert_eq!(tree.min(), Some(30));
/// assert_eq!(tree.height(), 2);
/// ```
pub struct SearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
}

struct TreeNode {
    key: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

/// An in-order iterator over the keys of a [`SearchTree`].
pub struct TreeIter<'a> {
    // nodes whose key (and right subtree) are still pending, deepest first
    stack: Vec<&'a TreeNode>,
}

impl TreeNode {
    fn new(key: i64) -> Box<TreeNode> {
        Box::new(TreeNode { key, left: None, right: None })
    }
}

impl SearchTree {
    /// Creates an empty `SearchTree`.
    pub fn new() -> SearchTree {
        SearchTree { root: None, len: 0 }
    }

    /// Adds a key to the tree. Returns `true` if the key was not already
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// assert_eq!(tree.insert(3), true);
    /// assert_eq!(tree.insert(3), false);
    /// ```
    pub fn insert(&mut self, key: i64) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            if key < node.key {
                link = &mut node.left;
            } else if key > node.key {
                link = &mut node.right;
            } else {
                return false;
            }
        }
        *link = Some(TreeNode::new(key));
        self.len += 1;
        true
    }

    /// Returns `true` if the tree contains `key`.
    pub fn contains(&self, key: i64) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if key < node.key {
                cur = node.left.as_deref();
            } else if key > node.key {
                cur = node.right.as_deref();
            } else {
                return true;
            }
        }
        false
    }

    /// Removes a key from the tree. Returns `true` if the key was present.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// smallest key of its right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::SearchTree;
    ///
    /// let mut tree: SearchTree = [50, 30, 70].iter().copied().collect();
    /// assert_eq!(tree.remove(50), true);
    /// assert_eq!(tree.remove(50), false);
    /// assert!(tree.contains(30) && tree.contains(70));
    /// ```
    pub fn remove(&mut self, key: i64) -> bool {
        let mut link = &mut self.root;
        while link.as_ref().map_or(false, |node| key != node.key) {
            let node = link.as_mut().expect("checked by the loop condition");
            link = if key < node.key { &mut node.left } else { &mut node.right };
        }
        if link.is_none() {
            return false;
        }
        remove_at(link);
        self.len -= 1;
        true
    }

    /// The height of the tree in levels: an empty tree has height 0, a
    /// single node height 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// // keys arrived in order, so every node chains to the right
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        fn depth(link: Option<&TreeNode>) -> usize {
            match link {
                None => 0,
                Some(node) => {
                    1 + depth(node.left.as_deref()).max(depth(node.right.as_deref()))
                }
            }
        }
        depth(self.root.as_deref())
    }

    /// Returns the smallest key in the tree, if any.
    pub fn min(&self) -> Option<i64> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(cur.key)
    }

    /// Returns the largest key in the tree, if any.
    pub fn max(&self) -> Option<i64> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(cur.key)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        drop_iterative(self.root.take());
        self.len = 0;
    }

    /// In-order iterator over the keys, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::SearchTree;
    ///
    /// let tree: SearchTree = [50, 30, 70, 20].iter().copied().collect();
    /// let keys: Vec<i64> = tree.iter().collect();
    /// assert_eq!(keys, vec![20, 30, 50, 70]);
    /// ```
    pub fn iter(&self) -> TreeIter<'_> {
        let mut iter = TreeIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// Unlinks the node at `link`, which must hold one, reattaching its children.
fn remove_at(link: &mut Option<Box<TreeNode>>) {
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            *link = None;
        }
        (Some(child), None) | (None, Some(child)) => {
            *link = Some(child);
        }
        (left, Some(right)) => {
            node.left = left;
            node.right = Some(right);
            // two children: adopt the in-order successor's key, then remove
            // that successor from the right subtree (it has no left child)
            let mut successor = &mut node.right;
            while successor.as_ref().map_or(false, |s| s.left.is_some()) {
                successor = &mut successor.as_mut().expect("checked by the loop condition").left;
            }
            if let Some(s) = successor.as_deref_mut() {
                node.key = s.key;
            }
            remove_at(successor);
        }
    }
}

fn drop_iterative(root: Option<Box<TreeNode>>) {
    let mut pending = Vec::new();
    pending.extend(root);
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl Drop for SearchTree {
    fn drop(&mut self) {
        drop_iterative(self.root.take());
    }
}

impl Default for SearchTree {
    fn default() -> SearchTree {
        SearchTree::new()
    }
}

impl FromIterator<i64> for SearchTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iterator: I) -> SearchTree {
        let mut tree = SearchTree::new();
        tree.extend(iterator);
        tree
    }
}

impl Extend<i64> for SearchTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iterator: I) {
        for key in iterator {
            self.insert(key);
        }
    }
}

impl fmt::Debug for SearchTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SearchTree<{:?}>", self.iter().collect::<Vec<i64>>())
    }
}

impl<'a> TreeIter<'a> {
    fn push_left_spine(&mut self, mut link: Option<&'a TreeNode>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl Iterator for TreeIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.key)
    }
}
