//! Ternary search tree.
//!
//! # Layout
//!
//! Each node holds one character and three owned child slots:
//!
//! ```text
//!            [c]
//!          /  |  \
//!     lo(<c) eq  hi(>c)
//!            |
//!       next character of the key
//! ```
//!
//! A key is stored along a chain of `eq` links, one node per character; the
//! value sits on the node of the key's final character.  Nodes are created
//! lazily on insert and never removed or rebalanced.

use std::cmp::Ordering;

struct Node<V> {
    ch: char,
    value: Option<V>,
    lo: Option<Box<Node<V>>>,
    eq: Option<Box<Node<V>>>,
    hi: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    fn new(ch: char) -> Self {
        Self { ch, value: None, lo: None, eq: None, hi: None }
    }
}

/// Character-keyed ternary search tree with one value per key.
pub struct TernarySearchTree<V> {
    root: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> TernarySearchTree<V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys holding a value.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bind `value` to `key`, returning the value it replaces.
    ///
    /// The last insertion for a key wins.  The empty key cannot be stored and
    /// is ignored.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return None;
        }

        let mut i = 0;
        let mut slot = &mut self.root;
        loop {
            let c = chars[i];
            let node = slot.get_or_insert_with(|| Box::new(Node::new(c)));
            match c.cmp(&node.ch) {
                Ordering::Less => slot = &mut node.lo,
                Ordering::Greater => slot = &mut node.hi,
                Ordering::Equal if i + 1 == chars.len() => {
                    let previous = node.value.replace(value);
                    if previous.is_none() {
                        self.len += 1;
                    }
                    return previous;
                }
                Ordering::Equal => {
                    i += 1;
                    slot = &mut node.eq;
                }
            }
        }
    }

    /// Value bound to exactly `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key)?.value.as_ref()
    }

    /// Every value whose key starts with `prefix`, including an exact match.
    ///
    /// Results come out in depth-first pre-order (`lo` before `eq` before
    /// `hi`); callers should treat them as unordered.  An empty prefix
    /// matches nothing.
    pub fn values_with_prefix(&self, prefix: &str) -> Vec<&V> {
        let Some(node) = self.find(prefix) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        if let Some(v) = &node.value {
            out.push(v);
        }

        let mut stack: Vec<&Node<V>> = Vec::new();
        stack.extend(node.eq.as_deref());
        while let Some(cur) = stack.pop() {
            if let Some(v) = &cur.value {
                out.push(v);
            }
            stack.extend(cur.hi.as_deref());
            stack.extend(cur.eq.as_deref());
            stack.extend(cur.lo.as_deref());
        }
        out
    }

    /// Node holding the last character of `key`, if the whole key is on a
    /// path in the tree.
    fn find(&self, key: &str) -> Option<&Node<V>> {
        let mut chars = key.chars().peekable();
        chars.peek()?;

        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            let c = *chars.peek()?;
            match c.cmp(&node.ch) {
                Ordering::Less => cur = node.lo.as_deref(),
                Ordering::Greater => cur = node.hi.as_deref(),
                Ordering::Equal => {
                    chars.next();
                    if chars.peek().is_none() {
                        return Some(node);
                    }
                    cur = node.eq.as_deref();
                }
            }
        }
        None
    }
}

impl<V> Default for TernarySearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
