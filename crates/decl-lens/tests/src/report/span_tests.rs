use super::*;
use crate::fake_tree::{HEADER, MAIN, loc};

fn manager() -> SourceManager {
    SourceManager::new(MAIN, "input.cc")
}

#[test]
fn resolves_main_file_range_to_display_name_and_offsets() {
    let sm = manager();
    let resolver = SpanResolver::new(&sm);

    let span = resolver.resolve(Some(&loc(MAIN, 8)), Some(&loc(MAIN, 12)));
    assert_eq!(
        span,
        Some(SourceSpan {
            filename: "input.cc".to_string(),
            begin: 8,
            end: 12,
        })
    );
}

#[test]
fn begin_outside_main_file_is_filtered() {
    let sm = manager();
    let resolver = SpanResolver::new(&sm);

    assert_eq!(resolver.resolve(Some(&loc(HEADER, 100)), Some(&loc(HEADER, 140))), None);
    assert_eq!(resolver.resolve(Some(&loc(HEADER, 100)), Some(&loc(MAIN, 4))), None);
}

#[test]
fn missing_begin_is_filtered() {
    let sm = manager();
    let resolver = SpanResolver::new(&sm);

    assert_eq!(resolver.resolve(None, Some(&loc(MAIN, 4))), None);
    assert_eq!(resolver.resolve(None, None), None);
}

#[test]
fn end_outside_main_file_collapses_onto_begin() {
    let sm = manager();
    let resolver = SpanResolver::new(&sm);

    let span = resolver.resolve(Some(&loc(MAIN, 30)), Some(&loc(HEADER, 2))).expect("begin is in main file");
    assert_eq!((span.begin, span.end), (30, 30));

    let span = resolver.resolve(Some(&loc(MAIN, 30)), None).expect("begin is in main file");
    assert_eq!((span.begin, span.end), (30, 30));
}

#[test]
fn end_never_precedes_begin() {
    let sm = manager();
    let resolver = SpanResolver::new(&sm);

    let span = resolver.resolve(Some(&loc(MAIN, 20)), Some(&loc(MAIN, 5))).expect("span");
    assert!(span.end >= span.begin, "got {span:?}");
}

#[test]
fn source_manager_names_other_files_by_identity() {
    let sm = manager();
    assert_eq!(sm.filename(&loc(MAIN, 0)), "input.cc");
    assert_eq!(sm.filename(&loc(HEADER, 0)), HEADER);
    assert!(sm.is_in_main_file(&loc(MAIN, 0)));
    assert!(!sm.is_in_main_file(&loc(HEADER, 0)));
}

#[test]
fn line_col_requires_both_components() {
    let sm = manager();
    let mut l = loc(MAIN, 4);
    l.line = 3;
    l.col = 7;
    assert_eq!(sm.line_col(&l), Some((3, 7)));

    l.line = 0;
    assert_eq!(sm.line_col(&l), None);
}
