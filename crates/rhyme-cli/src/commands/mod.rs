pub mod analyze_ops;
pub mod config_ops;
pub mod dict_ops;

use std::path::Path;
use std::sync::Arc;

use rhyme_core::dict::{CmuDictionary, DictError};

/// `.txt` files are CMU text; anything else is a compiled dictionary.
pub fn load_dictionary(path: &str) -> Result<Arc<CmuDictionary>, DictError> {
    let path = Path::new(path);
    let dict = if path.extension().is_some_and(|ext| ext == "txt") {
        CmuDictionary::open_text(path)?
    } else {
        CmuDictionary::open(path)?
    };
    Ok(Arc::new(dict))
}
