mod array;
mod queue;
mod singly_linked;
mod stack;

pub use array::DynArray;
pub use queue::Queue;
pub use singly_linked::SinglyLinkedList;
pub use stack::Stack;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dyn_array_insert_remove_access() {
        let mut arr = DynArray::new();
        arr.insert(10);
        arr.insert(20);
        arr.insert(30);
        assert_eq!(arr.len(), 3);

        assert_eq!(arr.remove(1), Some(20));
        assert_eq!(arr.as_slice(), &[10, 30]);
        assert_eq!(arr.get(0), Some(&10));
        assert_eq!(arr.get(1), Some(&30));
        assert_eq!(arr.get(2), None);
        assert_eq!(arr.remove(5), None);
        assert!(!arr.is_empty());
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None::<i32>);

        stack.push(5);
        stack.push(10);
        assert_eq!(stack.peek(), Some(&10));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None::<i32>);

        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn linked_list_push_remove_traverse() {
        let mut list = SinglyLinkedList::new();
        assert!(list.is_empty());

        list.push_back(10);
        list.push_back(20);
        list.push_back(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);

        assert!(list.remove(&20));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
        assert!(!list.remove(&99));
        assert_eq!(list.len(), 2);

        list.push_front(5);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 30]);
    }

    #[test]
    fn linked_list_removes_head_and_first_duplicate_only() {
        let mut list = SinglyLinkedList::new();
        list.push_back(7);
        list.push_back(3);
        list.push_back(7);

        assert!(list.remove(&7));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 7]);
        assert!(list.remove(&7));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert!(!list.remove(&7));
    }

    #[test]
    fn linked_list_long_chain_drops_without_overflow() {
        let mut list = SinglyLinkedList::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
