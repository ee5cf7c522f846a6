use crate::{Position, PositionProvider, PositionedToken, Token};

/// An iterator over tokens with positions.
#[derive(Debug)]
pub struct WithPositions<I> {
    iter: I,
}

impl<'h, I> WithPositions<I>
where
    I: Iterator<Item = Token<'h>> + PositionProvider + Sized,
{
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'h, I> Iterator for WithPositions<I>
where
    I: Iterator<Item = Token<'h>> + PositionProvider + Sized,
{
    type Item = PositionedToken<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|t| {
            let start_position = self.iter.position(t.start());
            let end_position = self.iter.position(t.end());
            PositionedToken::new(t, start_position, end_position)
        })
    }
}

/// An extension trait for iterators over tokens.
pub trait TokenIteratorExt<'h>: Iterator<Item = Token<'h>> + PositionProvider + Sized {
    /// An iterator that yields tokens with positions.
    fn with_positions(self) -> WithPositions<Self> {
        WithPositions::new(self)
    }
}

// Implement the trait for all types that implement the required traits.
impl<'h, I: Iterator<Item = Token<'h>> + PositionProvider + Sized> TokenIteratorExt<'h> for I {}

impl<I> PositionProvider for WithPositions<I>
where
    I: PositionProvider,
{
    fn position(&self, offset: usize) -> Position {
        self.iter.position(offset)
    }
}
