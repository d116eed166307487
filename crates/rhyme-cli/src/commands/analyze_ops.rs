use std::fmt::Write as _;
use std::fs;
use std::process;
use std::sync::Arc;

use rhyme_core::resolver::HttpG2pClient;
use rhyme_core::settings::settings;
use rhyme_core::{detect_rhymes, unknown_words, PhonemeResolver, RhymeGroup};

use super::load_dictionary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn analyze(dict_file: &str, input_file: &str, json: bool, remote: Option<&str>) {
    let dict = die!(load_dictionary(dict_file), "Error loading dictionary: {}");
    let text = die!(
        fs::read_to_string(input_file),
        "Error reading {input_file}: {}"
    );

    let mut resolver = PhonemeResolver::new(dict);
    if let Some(base_url) = remote {
        let client = HttpG2pClient::with_base_url(&settings().remote, base_url);
        resolver = resolver.with_client(Arc::new(client));
        let words = unknown_words(&text, &resolver);
        let report = resolver.preload(&words);
        eprintln!(
            "Preload: {} requested, {} skipped, {} fetched, {} failed",
            report.requested, report.skipped, report.fetched, report.failed
        );
    }

    let groups = detect_rhymes(&text, &resolver);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&groups),
            "Error serializing groups: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_groups(&groups));
    }
}

/// One line per group: id, colour, then `text@line:start-end` members.
pub fn format_groups(groups: &[RhymeGroup]) -> String {
    let mut out = String::new();
    for g in groups {
        let members: Vec<String> = g
            .members
            .iter()
            .map(|m| format!("{}@{}:{}-{}", m.text, m.line, m.start, m.end))
            .collect();
        let _ = writeln!(out, "{} {} {}", g.id, g.color, members.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhyme_core::GroupMember;

    #[test]
    fn test_format_groups() {
        let member = |text: &str, line, start, end, index| GroupMember {
            text: text.to_string(),
            line,
            start,
            end,
            index,
        };
        let groups = vec![RhymeGroup {
            id: "group-0".into(),
            color: "#ffe119".into(),
            members: vec![member("cat", 0, 0, 3, 0), member("hat", 1, 5, 8, 2)],
        }];
        assert_eq!(
            format_groups(&groups),
            "group-0 #ffe119 cat@0:0-3, hat@1:5-8\n"
        );
        assert_eq!(format_groups(&[]), "");
    }
}
