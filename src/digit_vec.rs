//! # DigitVec
//! Little-endian storage for the magnitude of a [`BigInteger`](crate::BigInteger).
//!
//! A one word value lives inline. Anything longer sits behind a shared handle
//! that is cloned in O(1) and only duplicated when a copy is written to while
//! another owner still holds it.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Repr {
    Inline(u32),
    /// Always holds at least two words.
    Shared(Arc<Vec<u32>>),
}

#[derive(Debug, Clone)]
pub struct DigitVec {
    repr: Repr,
}

// Construction
impl DigitVec {
    /// The single zero word.
    pub fn new() -> Self {
        DigitVec::from_word(0)
    }
    pub const fn from_word(word: u32) -> Self {
        DigitVec { repr: Repr::Inline(word) }
    }
    /// Takes ownership of `words`; an empty vector becomes the zero word.
    pub fn from_vec(mut words: Vec<u32>) -> Self {
        match words.len() {
            0 => DigitVec::new(),
            1 => DigitVec::from_word(words[0]),
            _ => {
                words.shrink_to_fit();
                DigitVec { repr: Repr::Shared(Arc::new(words)) }
            }
        }
    }
}

impl Default for DigitVec {
    fn default() -> Self {
        DigitVec::new()
    }
}

impl From<Vec<u32>> for DigitVec {
    fn from(words: Vec<u32>) -> Self {
        DigitVec::from_vec(words)
    }
}

// Read access
impl DigitVec {
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline(_) => 1,
            Repr::Shared(words) => words.len(),
        }
    }
    pub fn as_slice(&self) -> &[u32] {
        match &self.repr {
            Repr::Inline(word) => std::slice::from_ref(word),
            Repr::Shared(words) => words.as_slice(),
        }
    }
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.as_slice().iter()
    }
    /// Most significant word.
    pub fn last(&self) -> u32 {
        match &self.repr {
            Repr::Inline(word) => *word,
            Repr::Shared(words) => words[words.len() - 1],
        }
    }
    pub fn is_zero(&self) -> bool {
        self.iter().all(|w| *w == 0)
    }
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline(_))
    }
    /// Whether the backing array currently has more than one owner.
    pub fn is_shared(&self) -> bool {
        match &self.repr {
            Repr::Inline(_) => false,
            Repr::Shared(words) => Arc::strong_count(words) > 1,
        }
    }
}

// Mutation
impl DigitVec {
    /// Private, writable view of the backing array.
    fn make_mut(words: &mut Arc<Vec<u32>>) -> &mut Vec<u32> {
        if Arc::strong_count(words) > 1 {
            log::trace!("digit storage shared, cloning {} words before write", words.len());
        }
        Arc::make_mut(words)
    }
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        match &mut self.repr {
            Repr::Inline(word) => std::slice::from_mut(word),
            Repr::Shared(words) => DigitVec::make_mut(words).as_mut_slice(),
        }
    }
    pub fn push(&mut self, word: u32) {
        match &mut self.repr {
            Repr::Inline(low) => {
                let low = *low;
                self.repr = Repr::Shared(Arc::new(vec![low, word]));
            }
            Repr::Shared(words) => DigitVec::make_mut(words).push(word),
        }
    }
    /// Removes the most significant word. An inline store is reset to zero
    /// instead, so the length never drops below one.
    pub fn pop(&mut self) -> u32 {
        match &mut self.repr {
            Repr::Inline(word) => std::mem::replace(word, 0),
            Repr::Shared(words) if words.len() == 2 => {
                let (low, high) = (words[0], words[1]);
                self.repr = Repr::Inline(low);
                high
            }
            Repr::Shared(words) => {
                let top = words[words.len() - 1];
                DigitVec::make_mut(words).pop();
                top
            }
        }
    }
    /// Grows with zero words or truncates from the most significant end.
    /// A `len` of zero or one keeps only the lowest word.
    pub fn resize(&mut self, len: usize) {
        if len == self.len() {
            return;
        }
        if len <= 1 {
            self.repr = Repr::Inline(self.as_slice()[0]);
            return;
        }
        match &mut self.repr {
            Repr::Inline(low) => {
                let mut words = vec![0; len];
                words[0] = *low;
                self.repr = Repr::Shared(Arc::new(words));
            }
            Repr::Shared(words) => DigitVec::make_mut(words).resize(len, 0),
        }
    }
    /// Drops most significant zero words, keeping at least one word.
    pub fn trim(&mut self) {
        let significant = self.iter().rposition(|w| *w != 0).map_or(1, |top| top + 1);
        self.resize(significant);
    }
}

impl Index<usize> for DigitVec {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for DigitVec {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for DigitVec {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Inline(a), Repr::Inline(b)) => a == b,
            (Repr::Shared(a), Repr::Shared(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.as_slice() == other.as_slice(),
        }
    }
}
impl Eq for DigitVec {}

impl Hash for DigitVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a> IntoIterator for &'a DigitVec {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn test_inline_and_shared() {
    let mut v = DigitVec::new();
    assert_eq!(v.len(), 1);
    assert_eq!(v[0], 0);
    assert!(v.is_inline());

    v.push(7);
    assert_eq!(v.as_slice(), &[0, 7]);
    assert!(!v.is_inline());
    assert_eq!(v.last(), 7);

    assert_eq!(v.pop(), 7);
    assert!(v.is_inline());
    assert_eq!(v.as_slice(), &[0]);

    // popping an inline store resets it
    let mut w = DigitVec::from_word(9);
    assert_eq!(w.pop(), 9);
    assert_eq!(w.as_slice(), &[0]);
}

#[test]
fn test_copy_on_write() {
    let a = DigitVec::from_vec(vec![1, 2, 3]);
    let mut b = a.clone();
    assert!(a.is_shared());
    assert!(b.is_shared());

    b[1] = 20;
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(b.as_slice(), &[1, 20, 3]);
    assert!(!a.is_shared());
    assert!(!b.is_shared());

    let mut c = b.clone();
    c.push(4);
    c.pop();
    c.pop();
    assert_eq!(b.as_slice(), &[1, 20, 3]);
    assert_eq!(c.as_slice(), &[1, 20]);
}

#[test]
fn test_in_place_write_when_unique() {
    let mut a = DigitVec::from_vec(vec![5, 6]);
    let before = a.as_slice().as_ptr();
    a[0] = 50;
    assert_eq!(a.as_slice().as_ptr(), before);
    assert_eq!(a.as_slice(), &[50, 6]);
}

#[test]
fn test_resize_and_trim() {
    let mut a = DigitVec::from_word(3);
    a.resize(4);
    assert_eq!(a.as_slice(), &[3, 0, 0, 0]);
    a.trim();
    assert!(a.is_inline());
    assert_eq!(a.as_slice(), &[3]);

    let mut z = DigitVec::from_vec(vec![0, 0, 0]);
    z.trim();
    assert_eq!(z, DigitVec::new());

    let mut b = DigitVec::from_vec(vec![1, 2, 0, 0]);
    let shared = b.clone();
    b.trim();
    assert_eq!(b.as_slice(), &[1, 2]);
    assert_eq!(shared.len(), 4);
}

#[test]
fn test_equality() {
    assert_eq!(DigitVec::from_vec(vec![1, 2]), DigitVec::from_vec(vec![1, 2]));
    assert_ne!(DigitVec::from_vec(vec![1, 2]), DigitVec::from_vec(vec![1, 3]));
    assert_eq!(DigitVec::from_vec(vec![]), DigitVec::from_word(0));
    assert_eq!(DigitVec::from_vec(vec![4]), DigitVec::from_word(4));
}
