/// Growable array with index-based access and removal. Thin wrapper over
/// `Vec`; removal shifts the tail left, keeping indices dense.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DynArray<T> {
    data: Vec<T>,
}

impl<T> DynArray<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the element at `index`, or `None` if the
    /// index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
