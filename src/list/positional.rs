//! Doubly linked list with O(1) removal through opaque positions.
//!
//! Nodes live in a slot arena owned by the list. A [`Position`] names one
//! slot of one list instance; slot generations make a position go stale as
//! soon as its node is removed, even if the slot is later reused.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{GraphError, GraphResult};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a node inside one [`PositionalList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    list: u64,
    slot: u32,
    generation: u32,
}

impl Position {
    /// Arena slot index of this position.
    pub fn slot(&self) -> usize {
        self.slot as usize
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: Option<T>,
    prev: Option<u32>,
    next: Option<u32>,
    generation: u32,
}

/// A sequence that hands out a [`Position`] for every inserted element.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push_back` | O(1) amortized |
/// | `remove` | O(1) |
/// | `get` / `get_mut` | O(1) |
/// | `iter` | O(n) total, lazy |
#[derive(Debug)]
pub struct PositionalList<T> {
    id: u64,
    nodes: Vec<Node<T>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> PositionalList<T> {
    /// Create an empty list with a fresh instance id.
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append to the tail. The first insertion becomes both head and tail.
    pub fn push_back(&mut self, value: T) -> Position {
        let slot = match self.free.pop() {
            Some(slot) => {
                let node = &mut self.nodes[slot as usize];
                node.value = Some(value);
                node.prev = self.tail;
                node.next = None;
                slot
            }
            None => {
                let slot = self.nodes.len() as u32;
                self.nodes.push(Node {
                    value: Some(value),
                    prev: self.tail,
                    next: None,
                    generation: 0,
                });
                slot
            }
        };

        match self.tail {
            Some(tail) => self.nodes[tail as usize].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;

        Position {
            list: self.id,
            slot,
            generation: self.nodes[slot as usize].generation,
        }
    }

    /// The position the next `push_back` will return.
    pub(crate) fn next_position(&self) -> Position {
        match self.free.last() {
            Some(&slot) => self.position_of(slot),
            None => Position {
                list: self.id,
                slot: self.nodes.len() as u32,
                generation: 0,
            },
        }
    }

    /// Unlink the node at `position` and return its value.
    ///
    /// Fails with [`GraphError::ForeignPosition`] if the position was issued
    /// by another list, and [`GraphError::StalePosition`] if its node is gone.
    pub fn remove(&mut self, position: Position) -> GraphResult<T> {
        let slot = self.live_slot(position)?;
        let (prev, next) = {
            let node = &self.nodes[slot as usize];
            (node.prev, node.next)
        };

        match (prev, next) {
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            (None, Some(next)) => {
                self.nodes[next as usize].prev = None;
                self.head = Some(next);
            }
            (Some(prev), None) => {
                self.nodes[prev as usize].next = None;
                self.tail = Some(prev);
            }
            (Some(prev), Some(next)) => {
                self.nodes[prev as usize].next = Some(next);
                self.nodes[next as usize].prev = Some(prev);
            }
        }

        let node = &mut self.nodes[slot as usize];
        node.prev = None;
        node.next = None;
        node.generation = node.generation.wrapping_add(1);
        let value = node
            .value
            .take()
            .ok_or(GraphError::StalePosition)?;
        self.free.push(slot);
        self.len -= 1;
        Ok(value)
    }

    /// True if `position` names a live node of this list.
    pub fn contains(&self, position: Position) -> bool {
        self.live_slot(position).is_ok()
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        let slot = self.live_slot(position).ok()?;
        self.nodes[slot as usize].value.as_ref()
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let slot = self.live_slot(position).ok()?;
        self.nodes[slot as usize].value.as_mut()
    }

    /// Value at the head.
    pub fn first(&self) -> Option<&T> {
        self.head
            .and_then(|slot| self.nodes[slot as usize].value.as_ref())
    }

    /// Value at the tail.
    pub fn last(&self) -> Option<&T> {
        self.tail
            .and_then(|slot| self.nodes[slot as usize].value.as_ref())
    }

    /// Lazy head-to-tail iterator over values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Lazy head-to-tail iterator over `(position, value)` pairs.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            cursor: self.head,
        }
    }

    fn position_of(&self, slot: u32) -> Position {
        Position {
            list: self.id,
            slot,
            generation: self.nodes[slot as usize].generation,
        }
    }

    fn live_slot(&self, position: Position) -> GraphResult<u32> {
        if position.list != self.id {
            return Err(GraphError::ForeignPosition);
        }
        match self.nodes.get(position.slot as usize) {
            Some(node) if node.generation == position.generation && node.value.is_some() => {
                Ok(position.slot)
            }
            _ => Err(GraphError::StalePosition),
        }
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Value iterator of a [`PositionalList`]. A clone continues from the same
/// cursor; call `iter()` again to start over from the head.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<u32>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    /// Walk this iterator's remaining elements, then all of `other`'s,
    /// without merging the underlying lists.
    pub fn concat(self, other: Iter<'a, T>) -> Concat<'a, T> {
        Concat {
            first: Some(self),
            second: other,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.list.nodes[slot as usize];
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Two list iterators chained lazily, see [`Iter::concat`].
#[derive(Debug)]
pub struct Concat<'a, T> {
    first: Option<Iter<'a, T>>,
    second: Iter<'a, T>,
}

impl<T> Clone for Concat<'_, T> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<'a, T> Iterator for Concat<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            match first.next() {
                Some(value) => return Some(value),
                None => self.first = None,
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let head = self.first.as_ref().map_or(0, |it| it.remaining);
        let n = head + self.second.remaining;
        (n, Some(n))
    }
}

/// Iterator over `(Position, &T)` pairs of a [`PositionalList`].
#[derive(Debug)]
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<u32>,
}

impl<'a, T> Iterator for Positions<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.list.nodes[slot as usize];
        self.cursor = node.next;
        let value = node.value.as_ref()?;
        Some((self.list.position_of(slot), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &PositionalList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_back_order() {
        let mut list = PositionalList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_head_tail_interior() {
        let mut list = PositionalList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);
        let d = list.push_back(4);

        assert_eq!(list.remove(b).unwrap(), 2);
        assert_eq!(collect(&list), vec![1, 3, 4]);
        assert_eq!(list.remove(a).unwrap(), 1);
        assert_eq!(collect(&list), vec![3, 4]);
        assert_eq!(list.remove(d).unwrap(), 4);
        assert_eq!(collect(&list), vec![3]);
        assert_eq!(list.first(), Some(&3));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.remove(c).unwrap(), 3);
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
    }

    #[test]
    fn test_stale_position_rejected() {
        let mut list = PositionalList::new();
        let a = list.push_back(10);
        list.remove(a).unwrap();
        assert!(matches!(list.remove(a), Err(GraphError::StalePosition)));

        // The slot is reused, the old handle must stay dead.
        let b = list.push_back(20);
        assert_eq!(a.slot(), b.slot());
        assert!(list.get(a).is_none());
        assert_eq!(list.get(b), Some(&20));
    }

    #[test]
    fn test_foreign_position_rejected() {
        let mut left = PositionalList::new();
        let mut right = PositionalList::new();
        let pos = left.push_back(1);
        right.push_back(1);
        assert!(matches!(right.remove(pos), Err(GraphError::ForeignPosition)));
        assert_eq!(right.len(), 1);
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn test_concat_is_lazy_and_ordered() {
        let mut out = PositionalList::new();
        let mut inc = PositionalList::new();
        out.push_back(1);
        out.push_back(2);
        inc.push_back(3);

        let chained = out.iter().concat(inc.iter());
        assert_eq!(chained.size_hint(), (3, Some(3)));
        assert_eq!(chained.copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let empty: PositionalList<u32> = PositionalList::new();
        let only_second: Vec<u32> = empty.iter().concat(inc.iter()).copied().collect();
        assert_eq!(only_second, vec![3]);
    }

    #[test]
    fn test_positions_match_get() {
        let mut list = PositionalList::new();
        list.push_back("a");
        let mid = list.push_back("b");
        list.push_back("c");
        list.remove(mid).unwrap();
        for (pos, value) in list.positions() {
            assert_eq!(list.get(pos), Some(value));
        }
        assert_eq!(list.positions().count(), 2);
    }
}
