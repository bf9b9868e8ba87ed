use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given value, or
    /// `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([3, 1, 4, 1]);
    ///
    /// assert_eq!(list.index_of(&1), Some(1));
    /// assert_eq!(list.index_of(&9), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Reverses the order of the list in place, in *O*(*n*) time, by
    /// swapping the two sentinels and then the link pair of every node.
    ///
    /// No node is attached or detached, so reversal does not count as a
    /// structural modification: the modification counter is untouched and
    /// a live [`CursorMut`] keeps iterating from its node toward the new
    /// tail.
    ///
    /// [`CursorMut`]: crate::CursorMut
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.head, &mut self.tail);
        let tail = self.tail_node();
        let mut node = self.head_node();
        loop {
            // SAFETY: the walk starts at the head sentinel and each node's
            // old `prev` (its `next` after the swap) leads to the tail
            // sentinel, where the loop stops.
            unsafe {
                let p = node.as_ptr();
                std::mem::swap(&mut (*p).next, &mut (*p).prev);
                if node == tail {
                    break;
                }
                node = (*p).next;
            }
        }
    }

    /// Removes every element that duplicates an earlier one, keeping first
    /// occurrences in their original order.
    ///
    /// # Complexity
    ///
    /// Quadratic in the number of elements, with a positional walk per
    /// probe. Fine for the small lists this is meant for.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 1, 2, 1]);
    /// list.remove_duplicates();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1]);
    /// ```
    pub fn remove_duplicates(&mut self)
    where
        T: PartialEq<T>,
    {
        let mut i = 0;
        while i < self.len {
            let anchor = self.locate(i);
            let mut j = 0;
            while j < self.len {
                let candidate = self.locate(j);
                if candidate == anchor {
                    // node identity, not element equality: never detach the
                    // anchor itself, and skip one extra slot
                    j += 1;
                } else {
                    // SAFETY: both lookups are in-bounds, so the nodes are
                    // real nodes of this list; `candidate` is detached at
                    // most once.
                    unsafe {
                        if candidate.as_ref().element == anchor.as_ref().element {
                            self.detach_node(candidate);
                        }
                    }
                }
                j += 1;
            }
            i += 1;
        }
    }

    /// Interleaves the elements of `other` into this list: `other[i]` is
    /// inserted at position `2 * i + 1`, and any elements of `other`
    /// beyond the original length of `self` are appended at the back.
    ///
    /// `other` is read, not consumed, so the elements are cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["a", "b", "c"]);
    /// let other = List::from_iter(["x", "y", "z", "w"]);
    ///
    /// list.interleave(&other);
    /// assert_eq!(Vec::from_iter(list), vec!["a", "x", "b", "y", "c", "z", "w"]);
    /// ```
    pub fn interleave(&mut self, other: &List<T>)
    where
        T: Clone,
    {
        let old_len = self.len;
        let stop = old_len.min(other.len);
        let mut current = other.front_node();
        for i in 0..stop {
            // SAFETY: `current` has advanced fewer than `other.len` steps
            // from the front, so it is a real node of `other`. The insert
            // position `2 * i + 1` never exceeds the current length.
            unsafe {
                let element = current.as_ref().element.clone();
                let next = self.locate(2 * i + 1);
                self.insert_before(next, element);
                current = current.as_ref().next;
            }
        }
        for _ in stop..other.len {
            // SAFETY: as above; exactly `other.len` nodes are visited in
            // total across both loops.
            unsafe {
                let element = current.as_ref().element.clone();
                self.push_back(element);
                current = current.as_ref().next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_eq_and_ord() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn list_clone() {
        let a = List::from_iter(0..5);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(to_vec(&b), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn list_hash_matches_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_contains_and_index_of() {
        let list = List::from_iter([3, 1, 4, 1, 5]);
        assert!(list.contains(&4));
        assert!(!list.contains(&9));
        assert_eq!(list.index_of(&3), Some(0));
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.index_of(&5), Some(4));
        assert_eq!(list.index_of(&9), None);
        assert_eq!(List::<i32>::new().index_of(&1), None);

        // seven prepends leave the last value prepended in front
        let mut list = List::from_iter(0..5);
        for i in 20..27 {
            list.insert(0, i).unwrap();
        }
        assert_eq!(list.index_of(&26), Some(0));
        assert_eq!(list.index_of(&20), Some(6));
    }

    #[test]
    fn list_reverse() {
        let mut list = List::<i32>::new();
        list.reverse();
        assert!(list.is_empty());

        let mut list = List::from_iter([1]);
        list.reverse();
        assert_eq!(to_vec(&list), vec![1]);

        let mut list = List::from_iter(0..5);
        list.reverse();
        assert_eq!(to_vec(&list), vec![4, 3, 2, 1, 0]);

        // reversing twice restores the original order, and the list is
        // still fully usable afterwards
        list.reverse();
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);
        list.push_front(-1);
        list.push_back(5);
        assert_eq!(to_vec(&list), Vec::from_iter(-1..6));
    }

    #[test]
    fn list_reverse_is_not_structural() {
        let mut list = List::from_iter([1, 2, 3]);
        let before = list.mod_count;
        list.reverse();
        assert_eq!(list.mod_count, before);
    }

    #[test]
    fn remove_duplicates_traces() {
        let mut list = List::from_iter([1, 1, 1]);
        list.remove_duplicates();
        assert_eq!(to_vec(&list), vec![1]);

        let mut list = List::from_iter([5, 5, 2]);
        list.remove_duplicates();
        assert_eq!(to_vec(&list), vec![5, 2]);

        let mut list = List::from_iter([5, 5, 5, 5]);
        list.remove_duplicates();
        assert_eq!(to_vec(&list), vec![5]);

        let mut list = List::from_iter([2, 1, 2, 1]);
        list.remove_duplicates();
        assert_eq!(to_vec(&list), vec![2, 1]);

        let mut list = List::<i32>::new();
        list.remove_duplicates();
        assert!(list.is_empty());

        let mut list = List::from_iter([1, 2, 3]);
        list.remove_duplicates();
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
    }

    #[test]
    fn interleave_balanced_and_lopsided() {
        // equal lengths
        let mut list = List::from_iter([1, 3, 5]);
        let other = List::from_iter([2, 4, 6]);
        list.interleave(&other);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5, 6]);

        // other longer: the excess is appended
        let mut list = List::from_iter(["a", "b", "c"]);
        let other = List::from_iter(["x", "y", "z", "w", "v"]);
        list.interleave(&other);
        assert_eq!(to_vec(&list), vec!["a", "x", "b", "y", "c", "z", "w", "v"]);

        // other shorter: only a prefix is interleaved
        let mut list = List::from_iter([1, 2, 3, 4]);
        let other = List::from_iter([9]);
        list.interleave(&other);
        assert_eq!(to_vec(&list), vec![1, 9, 2, 3, 4]);

        // either side empty
        let mut list = List::<i32>::new();
        let other = List::from_iter([1, 2]);
        list.interleave(&other);
        assert_eq!(to_vec(&list), vec![1, 2]);

        let mut list = List::from_iter([1, 2]);
        let other = List::new();
        list.interleave(&other);
        assert_eq!(to_vec(&list), vec![1, 2]);
    }

    #[test]
    fn tester_scenario_search_and_rework() {
        // [0..5] with 20..30 prepended one at a time
        let mut list = List::from_iter(0..5);
        for i in 20..30 {
            list.insert(0, i).unwrap();
        }
        assert_eq!(
            to_vec(&list),
            vec![29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 0, 1, 2, 3, 4]
        );
        assert_eq!(list.index_of(&26), Some(3));
        assert!(list.contains(&0));
        assert!(!list.contains(&100));

        list.reverse();
        assert_eq!(
            to_vec(&list),
            vec![4, 3, 2, 1, 0, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29]
        );

        let other = List::from_iter([50, 51, 52]);
        list.interleave(&other);
        assert_eq!(
            to_vec(&list),
            vec![4, 50, 3, 51, 2, 52, 1, 0, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29]
        );

        list.push_back(4);
        list.push_back(50);
        list.remove_duplicates();
        assert_eq!(
            to_vec(&list),
            vec![4, 50, 3, 51, 2, 52, 1, 0, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29]
        );
    }
}
