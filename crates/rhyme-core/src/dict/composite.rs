use std::sync::Arc;

use super::Dictionary;
use crate::phoneme::Pronunciation;

/// A dictionary that consults multiple layers in order.
///
/// The first layer with an entry wins, so put overrides before the base
/// dictionary.
pub struct CompositeDictionary {
    layers: Vec<Arc<dyn Dictionary>>,
}

impl CompositeDictionary {
    pub fn new(layers: Vec<Arc<dyn Dictionary>>) -> Self {
        Self { layers }
    }
}

impl Dictionary for CompositeDictionary {
    fn lookup(&self, word: &str) -> Option<Pronunciation> {
        self.layers.iter().find_map(|layer| layer.lookup(word))
    }

    /// Sum of layer sizes; words present in several layers are counted once
    /// per layer.
    fn len(&self) -> usize {
        self.layers.iter().map(|l| l.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::CmuDictionary;

    fn layer(text: &str) -> Arc<dyn Dictionary> {
        Arc::new(CmuDictionary::from_text(text).unwrap())
    }

    #[test]
    fn test_first_layer_wins() {
        let dict = CompositeDictionary::new(vec![
            layer("tomato  T AH0 M AA1 T OW2\n"),
            layer("tomato  T AH0 M EY1 T OW2\npotato  P AH0 T EY1 T OW2\n"),
        ]);
        assert_eq!(
            dict.lookup("tomato").unwrap().to_string(),
            "T AH0 M AA1 T OW2"
        );
        assert_eq!(
            dict.lookup("potato").unwrap().to_string(),
            "P AH0 T EY1 T OW2"
        );
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_empty_layers() {
        let dict = CompositeDictionary::new(vec![]);
        assert!(dict.lookup("cat").is_none());
        assert!(dict.is_empty());
    }
}
