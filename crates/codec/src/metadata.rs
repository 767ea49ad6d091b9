/// Image properties carried in the text preceding the array body.
///
/// Binding is positional: the first, second and third assignment the parser
/// encounters become width, height and channel count, in that order. The
/// variable names in the text are never inspected, so the encoder must emit
/// the assignments in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl ImageMetadata {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Number of pixel bytes described by these properties.
    pub fn byte_len(&self) -> usize {
        self.width * self.height * self.channels
    }
}

/// Accumulates assignments as the parser encounters them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PartialMetadata {
    width: Option<usize>,
    height: Option<usize>,
    channels: Option<usize>,
}

impl PartialMetadata {
    /// Binds `value` to the next unfilled field (width, then height, then
    /// channels). A fourth assignment is ignored.
    pub(crate) fn fill_next(&mut self, value: usize) {
        if self.width.is_none() {
            self.width = Some(value);
        } else if self.height.is_none() {
            self.height = Some(value);
        } else if self.channels.is_none() {
            self.channels = Some(value);
        }
    }

    pub(crate) fn complete(&self) -> Option<ImageMetadata> {
        Some(ImageMetadata {
            width: self.width?,
            height: self.height?,
            channels: self.channels?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_order() {
        let mut partial = PartialMetadata::default();
        partial.fill_next(640);
        partial.fill_next(480);
        partial.fill_next(3);
        assert_eq!(partial.complete(), Some(ImageMetadata::new(640, 480, 3)));
    }

    #[test]
    fn test_fourth_assignment_ignored() {
        let mut partial = PartialMetadata::default();
        partial.fill_next(640);
        partial.fill_next(480);
        partial.fill_next(3);
        partial.fill_next(99);
        assert_eq!(partial.complete(), Some(ImageMetadata::new(640, 480, 3)));
    }

    #[test]
    fn test_incomplete_is_none() {
        let mut partial = PartialMetadata::default();
        assert_eq!(partial.complete(), None);
        partial.fill_next(640);
        partial.fill_next(480);
        assert_eq!(partial.complete(), None);
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(ImageMetadata::new(640, 480, 3).byte_len(), 921_600);
    }
}
