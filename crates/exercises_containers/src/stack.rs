//! A growable stack with a hard upper bound on its size.

use thiserror::Error;

/// Maximum number of elements any [`Stack`] can hold.
pub const MAX_CAPACITY: usize = 1024;

const INITIAL_CAPACITY: usize = 4;

/// A last-in first-out stack holding at most [`MAX_CAPACITY`] elements.
///
/// Storage starts out small and doubles whenever it runs full, but never
/// grows beyond [`MAX_CAPACITY`].
#[derive(Clone, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
    capacity: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack has reached maximum capacity of 1024 elements")]
    Full,

    #[error("Cannot pop from empty stack")]
    Empty,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Returns the number of elements currently in the stack.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the stack holds [`MAX_CAPACITY`] elements.
    pub fn is_full(&self) -> bool {
        self.len() == MAX_CAPACITY
    }

    /// Returns the number of elements the stack can hold before it must
    /// grow its storage.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// # Errors
    /// Returns [`StackError::Full`] if the stack already holds
    /// [`MAX_CAPACITY`] elements.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full);
        }
        if self.len() == self.capacity {
            self.grow();
        }
        self.elements.push(value);
        Ok(())
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.elements.pop().ok_or(StackError::Empty)
    }

    /// Returns a reference to the value on top of the stack, or [`None`] if
    /// the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    fn grow(&mut self) {
        let new_capacity = usize::min(2 * self.capacity, MAX_CAPACITY);
        self.elements
            .reserve_exact(new_capacity - self.elements.len());
        self.capacity = new_capacity;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
