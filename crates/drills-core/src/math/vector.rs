use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array1<U>
    where
        F: FnMut(&T) -> U,
    {
        Array1::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    /// Split into consecutive rows of at most `width` elements.
    pub fn chunks(&self, width: usize) -> std::slice::Chunks<'_, T> {
        self.data.chunks(width)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T: PartialOrd> Array1<T> {
    /// Index of the first minimum, or `None` for an empty array.
    ///
    /// Ties keep the earliest index because the scan only moves on a strict `<`.
    pub fn argmin(&self) -> Option<usize> {
        let mut iter = self.data.iter().enumerate();
        let (mut best_idx, mut best) = iter.next()?;
        for (idx, value) in iter {
            if value < best {
                best_idx = idx;
                best = value;
            }
        }
        Some(best_idx)
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
