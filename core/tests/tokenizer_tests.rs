use jobmatch_core::tokenizer::tokenize;

#[test]
fn it_normalizes_and_lowercases() {
    let words = tokenize("Ｐｙｔｈｏｎ Developer, ANALYTICS café");
    assert!(words.contains(&"python".to_string()));
    assert!(words.contains(&"analytics".to_string()));
    assert!(words.contains(&"café".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let words = tokenize("The engineer will work with the data team and others");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"will".to_string()));
    assert!(!words.contains(&"others".to_string()));
    assert_eq!(words, vec!["engineer", "work", "data", "team"]);
}
