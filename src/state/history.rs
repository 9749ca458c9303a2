use super::data::FetchedImage;

/// Every image fetched during this session, oldest first
///
/// Append-only: entries are never removed, reordered or deduplicated.
/// Two pixel-identical fetches both appear. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct History {
    images: Vec<FetchedImage>,
}

impl History {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image at the end. Returns its position.
    pub fn append(&mut self, image: FetchedImage) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// All entries in fetch order
    pub fn all(&self) -> &[FetchedImage] {
        &self.images
    }

    pub fn get(&self, index: usize) -> Option<&FetchedImage> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn image(tag: u8) -> FetchedImage {
        FetchedImage::new(vec![tag; 4], 2, 2, ImageFormat::Png)
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        assert_eq!(history.append(image(1)), 0);
        assert_eq!(history.append(image(2)), 1);
        assert_eq!(history.append(image(3)), 2);

        let tags: Vec<u8> = history.all().iter().map(|i| i.bytes()[0]).collect();
        assert_eq!(tags, vec![1, 2, 3]);
        assert_eq!(history.all().last().map(|i| i.bytes()[0]), Some(3));
        assert_eq!(history.get(1).map(|i| i.bytes()[0]), Some(2));
        assert!(history.get(3).is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        let same = image(7);
        history.append(same.clone());
        history.append(same.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[0], history.all()[1]);
    }

    #[test]
    fn test_all_is_idempotent() {
        let mut history = History::new();
        history.append(image(1));
        history.append(image(2));

        let first = history.all().to_vec();
        let second = history.all().to_vec();
        assert_eq!(first, second);
    }
}
