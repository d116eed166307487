use crate::dict::{CmuDictionary, DictError, Dictionary};
use crate::phoneme::{Phoneme, Stress};

const SAMPLE: &str = "\
;;; sample
;;; with comments
LANDSCAPE  L AE1 N D S K EY2 P
read  R IY1 D
read(2)  R EH1 D  # past tense
it's  IH1 T S

cat K AE1 T
";

fn sample_dict() -> CmuDictionary {
    CmuDictionary::from_text(SAMPLE).unwrap()
}

#[test]
fn test_parse_text() {
    let dict = sample_dict();
    assert_eq!(dict.len(), 4);
    assert_eq!(
        dict.lookup("landscape").unwrap().to_string(),
        "L AE1 N D S K EY2 P"
    );
    assert_eq!(dict.lookup("it's").unwrap().to_string(), "IH1 T S");
    assert!(dict.lookup("LANDSCAPE").is_none());
}

#[test]
fn test_first_variant_wins() {
    let dict = sample_dict();
    assert_eq!(dict.lookup("read").unwrap().to_string(), "R IY1 D");
}

#[test]
fn test_parse_error_line_numbers() {
    let err = CmuDictionary::from_text("cat K AE1 T\nhat\n").err().unwrap();
    assert!(matches!(err, DictError::Parse { line: 2, .. }));

    let err = CmuDictionary::from_text(";;; x\ncat K AE9 T\n").err().unwrap();
    assert!(matches!(err, DictError::Parse { line: 2, .. }));

    let err = CmuDictionary::from_text("cat k ae1 t").err().unwrap();
    assert!(matches!(err, DictError::Parse { line: 1, .. }));
}

#[test]
fn test_from_entries_lowercases() {
    let dict = CmuDictionary::from_entries(vec![(
        "Cat".to_string(),
        "K AE1 T".parse().unwrap(),
    )]);
    assert!(dict.lookup("cat").is_some());
    assert!(!dict.is_empty());
}

#[test]
fn test_save_and_open() {
    let dict = sample_dict();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("test.rhdx");
    dict.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let dict2 = CmuDictionary::open(&path).unwrap();
    assert_eq!(dict2.len(), dict.len());
    for (word, pron) in dict.iter() {
        assert_eq!(dict2.lookup(word).as_ref(), Some(pron));
    }
}

#[test]
fn test_bytes_deterministic() {
    let a = sample_dict().to_bytes().unwrap();
    let b = sample_dict().to_bytes().unwrap();
    assert_eq!(a, b);
    assert_eq!(&a[..4], b"RHDX");
}

/// Same field layout as a stored phoneme, without any validation.
#[derive(serde::Serialize)]
struct UncheckedPhoneme {
    base: String,
    stress: Option<Stress>,
}

fn with_header(body: Vec<u8>) -> Vec<u8> {
    let mut data = b"RHDX\x01".to_vec();
    data.extend(body);
    data
}

#[test]
fn test_empty_pronunciation_rejected_on_load() {
    let entries = vec![("cat".to_string(), Vec::<Phoneme>::new())];
    let data = with_header(bincode::serialize(&entries).unwrap());
    assert!(matches!(
        CmuDictionary::from_bytes(&data),
        Err(DictError::Deserialize(_))
    ));
}

#[test]
fn test_invalid_symbol_rejected_on_load() {
    let phonemes = vec![
        UncheckedPhoneme {
            base: "k".to_string(),
            stress: None,
        },
        UncheckedPhoneme {
            base: "AE".to_string(),
            stress: Some(Stress::Primary),
        },
    ];
    let entries = vec![("cat".to_string(), phonemes)];
    let data = with_header(bincode::serialize(&entries).unwrap());
    assert!(matches!(
        CmuDictionary::from_bytes(&data),
        Err(DictError::Deserialize(_))
    ));
}

#[test]
fn test_unchecked_layout_matches_stored_layout() {
    let phonemes = vec![
        UncheckedPhoneme {
            base: "K".to_string(),
            stress: None,
        },
        UncheckedPhoneme {
            base: "AE".to_string(),
            stress: Some(Stress::Primary),
        },
        UncheckedPhoneme {
            base: "T".to_string(),
            stress: None,
        },
    ];
    let entries = vec![("cat".to_string(), phonemes)];
    let data = with_header(bincode::serialize(&entries).unwrap());
    let dict = CmuDictionary::from_bytes(&data).unwrap();
    assert_eq!(dict.lookup("cat").unwrap().to_string(), "K AE1 T");
}

#[test]
fn test_bad_headers() {
    assert!(matches!(
        CmuDictionary::from_bytes(b"RHD"),
        Err(DictError::InvalidHeader)
    ));
    assert!(matches!(
        CmuDictionary::from_bytes(b"LXDX\x01rest"),
        Err(DictError::InvalidMagic)
    ));
    assert!(matches!(
        CmuDictionary::from_bytes(b"RHDX\x09rest"),
        Err(DictError::UnsupportedVersion(9))
    ));
    assert!(matches!(
        CmuDictionary::from_bytes(b"RHDX\x01\xff"),
        Err(DictError::Deserialize(_))
    ));
}

#[test]
fn test_open_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    let dict = CmuDictionary::open_text(&path).unwrap();
    assert_eq!(dict.len(), 4);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CmuDictionary::open(&dir.path().join("nope.rhdx")).err().unwrap();
    assert!(matches!(err, DictError::Io(_)));
}
