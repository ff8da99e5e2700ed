//! The hash-backed `Set` type.
//!
//! A `Set` is a mapping from elements to presence: an element is either a
//! member or it is not, and inserting a member again has no effect. Lookup
//! and insertion are amortized constant time.
//!
//! ##### Set Algebra
//!
//! `union`, `intersection`, `difference` and `symmetric_difference` never
//! modify their operands; each returns a new set. They are also available as
//! the `|`, `&`, `-` and `^` operators on set references, following
//! `std::collections::HashSet`.

use std::borrow::Borrow;
use std::collections::hash_set::{IntoIter, Iter};
use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

#[cfg(any(test, feature = "quickcheck_generators"))]
use quickcheck::{Arbitrary, Gen};

/// An unordered collection of unique elements.
///
/// Not safe for concurrent mutation without external locking.
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T> Set<T> {
    /// Create a new, empty set.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let set = Set::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Set<T> {
        Set {
            elements: HashSet::new(),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// An iterator visiting all elements in arbitrary order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Insert an element into the set.
    ///
    /// Returns false, leaving the set unchanged, if the element was already
    /// present.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert("first-element"));
    /// assert!(!set.insert("first-element"));
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Remove an element from the set.
    ///
    /// Returns false if the element was not present. Removing an absent
    /// element is not an error.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert("first-element");
    /// assert!(set.remove("first-element"));
    /// assert!(!set.contains("first-element"));
    /// assert!(!set.remove("first-element"));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(element)
    }

    /// Returns true if the set contains the value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(value)
    }

    /// Returns true if every element of this set is in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns true if every element of `other` is in this set.
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if the sets have no elements in common.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        let (smaller, larger) = by_len(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Create a set holding each distinct element of the slice once.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let set = Set::from_slice(&[1, 1, 2, 3, 3]);
    /// assert_eq!(3, set.len());
    /// ```
    pub fn from_slice(elements: &[T]) -> Set<T> {
        elements.iter().cloned().collect()
    }

    /// Returns the elements of the set in a newly allocated vector.
    ///
    /// The order of the elements is unspecified and may change between calls.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let set = Set::from_slice(&[3, 1, 2]);
    /// let mut elements = set.to_vec();
    /// elements.sort();
    /// assert_eq!(vec![1, 2, 3], elements);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }

    /// Returns a new set of the elements in either set.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let a = Set::from_slice(&[1, 2, 3]);
    /// let b = Set::from_slice(&[3, 4, 5]);
    /// assert_eq!(Set::from_slice(&[1, 2, 3, 4, 5]), a.union(&b));
    /// ```
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let (smaller, larger) = by_len(self, other);
        let mut result = larger.clone();
        result.extend(smaller.iter().cloned());
        result
    }

    /// Returns a new set of the elements in both sets.
    ///
    /// Iterates the smaller set and probes the larger, so the cost is bounded
    /// by the size of the smaller operand.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let a = Set::from_slice(&[1, 2, 3]);
    /// let b = Set::from_slice(&[2, 3, 4]);
    /// assert_eq!(Set::from_slice(&[2, 3]), a.intersection(&b));
    /// ```
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (smaller, larger) = by_len(self, other);
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set of the elements in this set but not in `other`.
    ///
    /// ### Example
    ///
    /// ```
    /// use set::Set;
    ///
    /// let a = Set::from_slice(&[1, 2, 3]);
    /// let b = Set::from_slice(&[2, 3, 4]);
    /// assert_eq!(Set::from_slice(&[1]), a.difference(&b));
    /// assert_eq!(Set::from_slice(&[4]), b.difference(&a));
    /// ```
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set of the elements in exactly one of the sets.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|element| !self.contains(*element)).cloned());
        result
    }
}

/// Orders two sets by size, smaller first.
fn by_len<'a, T>(a: &'a Set<T>, b: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Set<T> {
        Set::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Set<T> {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Set<T> {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Set<T> {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.elements.iter()
    }
}

impl<T: Hash + Eq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

#[cfg(any(test, feature = "quickcheck_generators"))]
impl<T: Arbitrary + Hash + Eq> Arbitrary for Set<T> {
    fn arbitrary(g: &mut Gen) -> Set<T> {
        let elements: Vec<T> = Arbitrary::arbitrary(g);
        elements.into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Set<T>>> {
        let elements: Vec<T> = self.to_vec();
        Box::new(elements.shrink().map(|es| es.into_iter().collect::<Set<T>>()))
    }
}
