//! Unit tests for atlas-search.

#[cfg(test)]
mod tst {
    use crate::TernarySearchTree;

    fn sorted(mut v: Vec<&i32>) -> Vec<i32> {
        v.sort();
        v.into_iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let t: TernarySearchTree<i32> = TernarySearchTree::new();
        assert!(t.is_empty());
        assert_eq!(t.get("car"), None);
        assert!(t.values_with_prefix("ca").is_empty());
    }

    #[test]
    fn insert_and_get() {
        let mut t = TernarySearchTree::new();
        assert_eq!(t.insert("car", 1), None);
        assert_eq!(t.insert("cart", 2), None);
        assert_eq!(t.insert("care", 3), None);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("car"), Some(&1));
        assert_eq!(t.get("cart"), Some(&2));
        assert_eq!(t.get("care"), Some(&3));
        // Interior nodes on a key path carry no value of their own.
        assert_eq!(t.get("ca"), None);
        assert_eq!(t.get("carts"), None);
    }

    #[test]
    fn last_insert_wins() {
        let mut t = TernarySearchTree::new();
        t.insert("oak", 1);
        assert_eq!(t.insert("oak", 9), Some(1));
        assert_eq!(t.get("oak"), Some(&9));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn empty_key_ignored() {
        let mut t = TernarySearchTree::new();
        assert_eq!(t.insert("", 1), None);
        assert!(t.is_empty());
        assert_eq!(t.get(""), None);
    }

    #[test]
    fn prefix_includes_exact_key() {
        let mut t = TernarySearchTree::new();
        t.insert("car", 1);
        t.insert("cart", 2);
        t.insert("care", 3);
        t.insert("cab", 4);
        t.insert("dog", 5);
        assert_eq!(sorted(t.values_with_prefix("car")), [1, 2, 3]);
        assert_eq!(sorted(t.values_with_prefix("ca")), [1, 2, 3, 4]);
        assert_eq!(sorted(t.values_with_prefix("cart")), [2]);
    }

    #[test]
    fn prefix_reaches_siblings_of_later_characters() {
        // Keys diverging at the third character hang off lo/hi links below
        // the prefix's eq child; all of them must be collected.
        let mut t = TernarySearchTree::new();
        for (i, k) in ["mango", "maple", "mast", "mab", "mz", "m"].iter().enumerate() {
            t.insert(k, i as i32);
        }
        assert_eq!(sorted(t.values_with_prefix("ma")), [0, 1, 2, 3]);
        assert_eq!(sorted(t.values_with_prefix("m")), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn unmatched_prefix_is_empty() {
        let mut t = TernarySearchTree::new();
        t.insert("car", 1);
        assert!(t.values_with_prefix("cat").is_empty());
        assert!(t.values_with_prefix("cars").is_empty());
        assert!(t.values_with_prefix("x").is_empty());
        assert!(t.values_with_prefix("").is_empty());
    }
}

#[cfg(test)]
mod index {
    use crate::{normalize, PrefixIndex};

    fn sorted<'a>(mut v: Vec<&&'a str>) -> Vec<&'a str> {
        v.sort();
        v.into_iter().copied().collect()
    }

    #[test]
    fn normalize_strips_and_folds() {
        assert_eq!(normalize("Bancroft Way"), "bancroftway");
        assert_eq!(normalize("St. Mary's 2nd"), "stmarysnd");
        assert_eq!(normalize("Café"), "caf");
        assert_eq!(normalize("1234 !!"), "");
    }

    #[test]
    fn car_cart_care() {
        let mut idx = PrefixIndex::new();
        idx.insert("car", "car");
        idx.insert("cart", "cart");
        idx.insert("care", "care");
        assert_eq!(sorted(idx.values_with_prefix("car")), ["car", "care", "cart"]);
        assert!(idx.values_with_prefix("z").is_empty());
    }

    #[test]
    fn single_character_queries_always_empty() {
        let mut idx = PrefixIndex::new();
        idx.insert("a", "a");
        idx.insert("ab", "ab");
        idx.insert("abc", "abc");
        assert!(idx.values_with_prefix("a").is_empty());
        assert!(idx.values_with_prefix("A").is_empty());
        // Only one letter survives normalization.
        assert!(idx.values_with_prefix("a1!").is_empty());
        assert!(idx.values_with_prefix("").is_empty());
        assert_eq!(idx.values_with_prefix("ab").len(), 2);
    }

    #[test]
    fn queries_are_normalized() {
        let mut idx = PrefixIndex::new();
        idx.insert("Top Dog", "top dog");
        idx.insert("Tolman Hall", "tolman");
        assert_eq!(sorted(idx.values_with_prefix("TOP-D")), ["top dog"]);
        assert_eq!(sorted(idx.values_with_prefix("to")), ["tolman", "top dog"]);
        assert_eq!(idx.get("top dog"), Some(&"top dog"));
        assert_eq!(idx.get("TopDog"), Some(&"top dog"));
    }

    #[test]
    fn names_without_letters_not_indexed() {
        let mut idx = PrefixIndex::new();
        assert_eq!(idx.insert("42", "x"), None);
        assert!(idx.is_empty());
    }

    #[test]
    fn colliding_names_keep_last() {
        let mut idx = PrefixIndex::new();
        idx.insert("Peet's Coffee", "first");
        assert_eq!(idx.insert("peets coffee", "second"), Some("first"));
        assert_eq!(idx.len(), 1);
        assert_eq!(sorted(idx.values_with_prefix("peets")), ["second"]);
    }
}
