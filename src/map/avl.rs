use std::borrow::Borrow;
use std::cmp::Ordering;

/// The single extra level of imbalance tolerated before a rotation.
const ALLOWED_IMBALANCE: i32 = 1;

type Link<K, V> = Option<Box<AvlNode<K, V>>>;

struct AvlNode<K, V> {
    key: K,
    value: V,
    height: i32,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> AvlNode<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        }
    }
}

/// An ordered map backed by an AVL tree.
///
/// Every node stores its height; after an insertion the tree is rebalanced
/// with single or double rotations wherever the height difference between
/// siblings exceeds [`ALLOWED_IMBALANCE`], keeping lookups *O*(log *n*).
///
/// Inserting an existing key replaces its value in place and returns the
/// previous value.
///
/// # Examples
///
/// ```
/// use sentinel_list::AvlMap;
///
/// let mut map = AvlMap::new();
/// assert_eq!(map.put("b", 2), None);
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.put("b", 20), Some(2));
///
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.get("b"), Some(&20));
/// assert_eq!(map.len(), 2);
/// ```
pub struct AvlMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> AvlMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of key/value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a key/value pair. If the key is already present its value
    /// is replaced and the previous value returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let old = insert(&mut self.root, key, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Returns a reference to the value for `key`, or `None` if the key is
    /// absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(n.key.borrow()) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
                Ordering::Equal => return Some(&n.value),
            }
        }
        None
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            match key.cmp(n.key.borrow()) {
                Ordering::Less => node = n.left.as_deref_mut(),
                Ordering::Greater => node = n.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut n.value),
            }
        }
        None
    }

    /// Returns `true` if the map holds a pair for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

fn height<K, V>(link: &Link<K, V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

fn update_height<K, V>(node: &mut AvlNode<K, V>) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

fn insert<K: Ord, V>(slot: &mut Link<K, V>, key: K, value: V) -> Option<V> {
    let old = match slot {
        None => {
            *slot = Some(Box::new(AvlNode::new(key, value)));
            return None;
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Greater => insert(&mut node.right, key, value),
            Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
        },
    };
    balance(slot);
    old
}

fn balance<K, V>(slot: &mut Link<K, V>) {
    let node = match slot.as_deref_mut() {
        Some(node) => node,
        None => return,
    };
    if height(&node.left) - height(&node.right) > ALLOWED_IMBALANCE {
        let left = node.left.as_deref().expect("imbalance implies a left child");
        if height(&left.left) >= height(&left.right) {
            rotate_with_left(node);
        } else {
            double_with_left(node);
        }
    } else if height(&node.right) - height(&node.left) > ALLOWED_IMBALANCE {
        let right = node
            .right
            .as_deref()
            .expect("imbalance implies a right child");
        if height(&right.right) >= height(&right.left) {
            rotate_with_right(node);
        } else {
            double_with_right(node);
        }
    }
    update_height(node);
}

/// Single rotation for a left-left imbalance: the left child becomes the
/// root of this subtree.
fn rotate_with_left<K, V>(node: &mut AvlNode<K, V>) {
    let mut left = node.left.take().expect("rotation requires a left child");
    node.left = left.right.take();
    update_height(node);
    std::mem::swap(node, &mut *left);
    // `node` is now the old left child and `left` holds the old root
    node.right = Some(left);
    update_height(node);
}

/// Single rotation for a right-right imbalance, mirror of
/// [`rotate_with_left`].
fn rotate_with_right<K, V>(node: &mut AvlNode<K, V>) {
    let mut right = node.right.take().expect("rotation requires a right child");
    node.right = right.left.take();
    update_height(node);
    std::mem::swap(node, &mut *right);
    node.left = Some(right);
    update_height(node);
}

/// Double rotation for a left-right imbalance.
fn double_with_left<K, V>(node: &mut AvlNode<K, V>) {
    rotate_with_right(
        node.left
            .as_deref_mut()
            .expect("double rotation requires a left child"),
    );
    rotate_with_left(node);
}

/// Double rotation for a right-left imbalance.
fn double_with_right<K, V>(node: &mut AvlNode<K, V>) {
    rotate_with_left(
        node.right
            .as_deref_mut()
            .expect("double rotation requires a right child"),
    );
    rotate_with_right(node);
}
