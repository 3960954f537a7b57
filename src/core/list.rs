use crate::domain::ports::Named;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    payload: T,
    next: Link<T>,
}

/// Ordered singly linked sequence addressed by payload name.
///
/// Ownership of the chain is strictly linear: the list owns the head node and
/// each node exclusively owns its successor. Every name-based operation acts
/// on the first match of a head-to-tail scan, so duplicate names are legal
/// and resolve to the earliest occurrence. A missed lookup is a routine
/// outcome reported through the return value, never an error.
///
/// The list provides no internal synchronization; share it across threads
/// only behind external locking.
#[derive(Debug)]
pub struct OrderedList<T> {
    head: Link<T>,
    len: usize,
}

/// The list as used by the demo program: records keyed by name.
pub type OrderedRecordList = OrderedList<crate::domain::model::Record>;

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts at the front. O(1).
    pub fn prepend(&mut self, payload: T) {
        self.head = Some(Box::new(Node {
            payload,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Inserts at the back, walking to the current tail. O(n).
    pub fn append(&mut self, payload: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node {
            payload,
            next: None,
        }));
        self.len += 1;
    }

    /// Lazy, restartable traversal in list order. Does not mutate the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Named> OrderedList<T> {
    /// Splices `payload` immediately after the first node named `target`.
    /// Returns whether a match was found; on a miss the list is unchanged.
    pub fn insert_after(&mut self, target: &str, payload: T) -> bool {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            if node.payload.name() == target {
                node.next = Some(Box::new(Node {
                    payload,
                    next: node.next.take(),
                }));
                self.len += 1;
                return true;
            }
            cursor = &mut node.next;
        }
        false
    }

    /// Splices `payload` immediately before the first node named `target`.
    /// A head match degenerates to `prepend`; a miss or an empty list leaves
    /// the list unchanged and returns `false`.
    pub fn insert_before(&mut self, target: &str, payload: T) -> bool {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            if node.payload.name() == target {
                // Splice without touching the predecessor link: push the
                // matched payload one position down and take its place.
                let displaced = std::mem::replace(&mut node.payload, payload);
                let rest = node.next.take();
                node.next = Some(Box::new(Node {
                    payload: displaced,
                    next: rest,
                }));
                self.len += 1;
                return true;
            }
            cursor = &mut node.next;
        }
        false
    }

    /// Unlinks and returns the first node named `name`. A miss or an empty
    /// list is a no-op returning `None`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<T> {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return None,
                Some(node) if node.payload.name() == name => {
                    let node = cursor.take()?;
                    *cursor = node.next;
                    self.len -= 1;
                    return Some(node.payload);
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Dropping the head link naively would recurse once per node; unlink
// iteratively so deep lists cannot overflow the stack.
impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.payload
        })
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.append(payload);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = OrderedList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for payload in self {
            writeln!(f, "{}", payload)?;
        }
        Ok(())
    }
}
