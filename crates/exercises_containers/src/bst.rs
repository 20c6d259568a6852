//! Persistent binary search tree.

use std::{cmp::Ordering, fmt, iter::FusedIterator, rc::Rc};

/// An immutable binary search tree.
///
/// Inserting returns a new tree and leaves the original untouched. The new
/// tree shares every subtree not on the insertion path with the original, so
/// an insertion only allocates one node per level it descends.
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Rc<Node<T>>>,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: BinarySearchTree<T>,
    right: BinarySearchTree<T>,
    len: usize,
}

/// In-order iterator over the values of a [`BinarySearchTree`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    pending: Vec<&'a Node<T>>,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            pending: Vec::new(),
        };
        iter.descend_left(self);
        iter
    }

    fn with_root(value: T, left: Self, right: Self) -> Self {
        let len = 1 + left.len() + right.len();
        Self {
            root: Some(Rc::new(Node {
                value,
                left,
                right,
                len,
            })),
        }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Whether the tree contains the given value.
    pub fn contains(&self, value: &T) -> bool {
        let mut tree = self;
        while let Some(node) = &tree.root {
            tree = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// Returns a tree containing the values of this tree as well as the given
    /// value. If the value is already present, the returned tree is identical
    /// to this one.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        self.with_inserted(value).unwrap_or_else(|| self.clone())
    }

    /// Returns [`None`] if the value is already present.
    fn with_inserted(&self, value: T) -> Option<Self> {
        let Some(node) = &self.root else {
            return Some(Self::with_root(value, Self::new(), Self::new()));
        };
        match value.cmp(&node.value) {
            Ordering::Less => Some(Self::with_root(
                node.value.clone(),
                node.left.with_inserted(value)?,
                node.right.clone(),
            )),
            Ordering::Greater => Some(Self::with_root(
                node.value.clone(),
                node.left.clone(),
                node.right.with_inserted(value)?,
            )),
            Ordering::Equal => None,
        }
    }
}

impl<T> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the tree as nested parentheses, e.g. `((B)G(R))`. Empty subtrees
/// are left out, except that a completely empty tree is written as `()`.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => f.write_str("()"),
            Some(node) => {
                f.write_str("(")?;
                if !node.left.is_empty() {
                    write!(f, "{}", node.left)?;
                }
                write!(f, "{}", node.value)?;
                if !node.right.is_empty() {
                    write!(f, "{}", node.right)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut tree: &'a BinarySearchTree<T>) {
        while let Some(node) = tree.root.as_deref() {
            self.pending.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(&node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
