use super::*;
use crate::config::SourceLanguage;

#[test]
fn default_args_dump_cxx_from_stdin() {
    let args = clang_args(&FrontendSettings::default());
    assert_eq!(args, ["-x", "c++", "-fsyntax-only", "-fno-color-diagnostics", "-Xclang", "-ast-dump=json", "-"]);
}

#[test]
fn language_standard_and_extra_flags_precede_the_dump_flags() {
    let settings = FrontendSettings {
        language: SourceLanguage::C,
        std: Some("c11".to_string()),
        extra_flags: vec!["-DNDEBUG".to_string()],
        ..FrontendSettings::default()
    };

    let args = clang_args(&settings);
    assert_eq!(&args[..4], ["-x", "c", "-std=c11", "-DNDEBUG"]);
    assert_eq!(args.last().map(String::as_str), Some("-"));
}

#[test]
fn missing_executable_is_a_launch_failure() {
    let frontend = ClangFrontEnd::new(FrontendSettings {
        clang_path: "/nonexistent/decl-lens-clang".to_string(),
        ..FrontendSettings::default()
    });

    let err = frontend.parse("int x;").err().expect("executable does not exist");
    assert!(matches!(err, FrontendError::LaunchFailed { .. }), "got {err:?}");
}
