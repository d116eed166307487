use std::fs;
use std::path::Path;
use std::process;
use std::sync::Arc;

use rhyme_core::dict::{CmuDictionary, Dictionary};
use rhyme_core::resolver::HttpG2pClient;
use rhyme_core::settings::settings;
use rhyme_core::PhonemeResolver;

use super::load_dictionary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn compile(input_txt: &str, output_file: &str) {
    let dict = die!(
        CmuDictionary::open_text(Path::new(input_txt)),
        "Error parsing {input_txt}: {}"
    );
    eprintln!("Parsed {} words", dict.len());
    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(dict_file: &str) {
    let dict = die!(load_dictionary(dict_file), "Error loading dictionary: {}");
    println!("Words: {}", dict.len());
}

pub fn lookup(dict_file: &str, words: &[String], remote: Option<&str>) {
    let dict = die!(load_dictionary(dict_file), "Error loading dictionary: {}");
    let mut resolver = PhonemeResolver::new(dict);
    if let Some(base_url) = remote {
        let client = HttpG2pClient::with_base_url(&settings().remote, base_url);
        resolver = resolver.with_client(Arc::new(client));
    }
    for word in words {
        match resolver.resolve_or_fetch_with_source(word) {
            Some((pron, source)) => println!("{word}\t{pron}\t({})", source.as_str()),
            None => println!("{word}\tnot found"),
        }
    }
}

pub fn explain(dict_file: &str, a: &str, b: &str) {
    let dict = die!(load_dictionary(dict_file), "Error loading dictionary: {}");
    let resolver = PhonemeResolver::new(dict);
    for word in [a, b] {
        match resolver.resolve(word) {
            Some(pron) => println!("{word}: {pron}"),
            None => println!("{word}: (no pronunciation)"),
        }
    }
    println!("{}", rhyme_core::explain_words(a, b, &resolver));
}
