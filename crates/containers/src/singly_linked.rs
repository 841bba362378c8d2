struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked list of owned boxed nodes. Appends at the tail, removes
/// by value; both walk the chain, matching the textbook structure.
#[derive(Default)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, data: T) {
        self.head = Some(Box::new(Node {
            data,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Unlinks the first node whose value equals `key`. Returns whether a
    /// node was removed.
    pub fn remove(&mut self, key: &T) -> bool {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor.take() {
            if node.data == *key {
                *cursor = node.next;
                self.len -= 1;
                return true;
            }
            *cursor = Some(node);
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        false
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the derived recursive drop can overflow the
        // stack on long chains.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}
