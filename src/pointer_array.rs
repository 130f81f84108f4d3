use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Index out of range: index {index}, size {size}")]
    OutOfRange { index: usize, size: usize },
}

// =============================================================================
// Milestone 1: Append-only array of shared handles
// =============================================================================

/// Ordered, append-only collection of `Rc<T>` handles.
///
/// The array never copies the pointee; it holds one strong count per stored
/// handle. `T` may be unsized, e.g. `PointerArray<dyn Describe>`.
#[derive(Debug)]
pub struct PointerArray<T: ?Sized> {
    data: Vec<Rc<T>>,
}

impl<T: ?Sized> PointerArray<T> {
    pub fn new() -> Self {
        PointerArray { data: Vec::new() }
    }

    /// Appends `item` at the end. Pass `Rc::clone(&x)` to keep a handle.
    pub fn add(&mut self, item: Rc<T>) {
        self.data.push(item);
        debug!(size = self.data.len(), "pointer array: appended element");
    }

    /// Mutable access to the stored handle, so callers may replace it.
    pub fn at(&mut self, index: usize) -> Result<&mut Rc<T>, ArrayError> {
        let size = self.data.len();
        self.data.get_mut(index).ok_or_else(|| out_of_range(index, size))
    }

    pub fn get(&self, index: usize) -> Result<&Rc<T>, ArrayError> {
        self.data
            .get(index)
            .ok_or_else(|| out_of_range(index, self.data.len()))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<T>> {
        self.data.iter()
    }
}

fn out_of_range(index: usize, size: usize) -> ArrayError {
    warn!(index, size, "pointer array: index out of range");
    ArrayError::OutOfRange { index, size }
}

// =============================================================================
// Milestone 2: Standard trait integration
// =============================================================================

impl<T: ?Sized> Default for PointerArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> FromIterator<Rc<T>> for PointerArray<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        PointerArray {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Extend<Rc<T>> for PointerArray<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a PointerArray<T> {
    type Item = &'a Rc<T>;
    type IntoIter = std::slice::Iter<'a, Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::Describe;
    use crate::errors::{ConversionError, ErrorKind, ProgramError};
    use proptest::prelude::*;

    #[test]
    fn test_new_array_is_empty() {
        let array: PointerArray<String> = PointerArray::new();
        assert_eq!(array.size(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn test_add_then_at() {
        let mut array = PointerArray::new();
        let value = Rc::new(42);
        array.add(Rc::clone(&value));

        assert_eq!(array.size(), 1);
        let stored = array.at(0).unwrap();
        assert!(Rc::ptr_eq(stored, &value));
        assert_eq!(**stored, 42);
    }

    #[test]
    fn test_strings_hello_world() {
        let mut array = PointerArray::new();
        array.add(Rc::new("Hello".to_string()));
        array.add(Rc::new("World".to_string()));
        assert_eq!(array.at(1).unwrap().as_str(), "World");
    }

    #[test]
    fn test_out_of_range_does_not_mutate() {
        let mut array = PointerArray::new();
        array.add(Rc::new(1u8));

        assert_eq!(
            array.at(1).unwrap_err(),
            ArrayError::OutOfRange { index: 1, size: 1 }
        );
        assert!(array.at(usize::MAX).is_err());
        assert!(array.get(7).is_err());
        assert_eq!(array.size(), 1);
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ArrayError::OutOfRange { index: 3, size: 2 };
        assert_eq!(err.to_string(), "Index out of range: index 3, size 2");
    }

    #[test]
    fn test_at_allows_replacing_handle() {
        let mut array = PointerArray::new();
        array.add(Rc::new("old".to_string()));
        *array.at(0).unwrap() = Rc::new("new".to_string());
        assert_eq!(array.get(0).unwrap().as_str(), "new");
    }

    #[test]
    fn test_shared_ownership_counts() {
        let value = Rc::new("shared".to_string());
        let mut array = PointerArray::new();
        array.add(Rc::clone(&value));
        assert_eq!(Rc::strong_count(&value), 2);

        drop(array);
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn test_value_outlives_original_handle() {
        let mut array = PointerArray::new();
        let weak = {
            let value = Rc::new(vec![1, 2, 3]);
            array.add(Rc::clone(&value));
            Rc::downgrade(&value)
        };
        assert!(weak.upgrade().is_some());

        drop(array);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_program_error_array() {
        let mut errors: PointerArray<ProgramError> = PointerArray::new();
        errors.add(Rc::new(ProgramError::insufficient_privileges()));
        errors.add(Rc::new(ProgramError::cannot_cast_to_interface()));

        assert_eq!(errors.at(0).unwrap().describe(), "Insufficient privileges");
        assert_eq!(errors.at(1).unwrap().kind(), ErrorKind::CannotCastToInterface);
    }

    #[test]
    fn test_dyn_describe_array() {
        let mut errors: PointerArray<dyn Describe> = PointerArray::new();
        errors.add(Rc::new(ProgramError::insufficient_privileges()));
        errors.add(Rc::new(ConversionError::cannot_convert_value()));

        let messages: Vec<_> = errors.iter().map(|e| e.describe()).collect();
        assert_eq!(messages, vec!["Insufficient privileges", "Cannot convert value"]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut array: PointerArray<i32> = (1..=3).map(Rc::new).collect();
        array.extend([Rc::new(4), Rc::new(5)]);

        let values: Vec<i32> = (&array).into_iter().map(|v| **v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    proptest! {
        #[test]
        fn test_append_then_read_round_trip(values in prop::collection::vec(any::<i64>(), 0..64)) {
            let mut array = PointerArray::new();
            for v in &values {
                array.add(Rc::new(*v));
            }

            prop_assert_eq!(array.size(), values.len());
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(**array.at(i).unwrap(), *v);
            }
            prop_assert!(array.at(values.len()).is_err());
        }
    }
}
