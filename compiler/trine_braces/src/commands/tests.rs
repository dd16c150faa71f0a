use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_string()).collect()
}

#[test]
fn test_from_args() {
    let config = CheckConfig::from_args(&args(&["--quiet", "input.txt"]));
    assert_eq!(
        config.ok(),
        Some(CheckConfig {
            path: "input.txt".to_string(),
            quiet: true,
        })
    );

    let stdin = CheckConfig::from_args(&args(&["-"]));
    assert_eq!(stdin.ok().map(|c| c.path), Some("-".to_string()));
}

#[test]
fn test_from_args_errors() {
    for bad in [&[][..], &["a", "b"][..], &["--loud", "a"][..]] {
        let error = CheckConfig::from_args(&args(bad));
        assert!(matches!(error, Err(CliError::Usage(_))), "{bad:?}");
    }
}

#[test]
fn test_check_source() {
    let config = CheckConfig {
        path: "doc.txt".to_string(),
        quiet: false,
    };
    let summary = check_source(&config, "x{y{}}");
    assert_eq!(
        summary.ok(),
        Some(Summary {
            chars: 2,
            blocks: 2,
            max_depth: 2,
        })
    );

    let error = check_source(&config, "x\n}");
    let Err(error) = error else {
        panic!("expected an unbalanced error");
    };
    assert_eq!(error.to_string(), "doc.txt:2:1: unmatched }");
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_read_missing_file() {
    let config = CheckConfig {
        path: "/nonexistent/trine-braces-input".to_string(),
        quiet: false,
    };
    let error = read_source(&config);
    assert!(matches!(&error, Err(CliError::Io { .. })));
    assert_eq!(error.err().map(|e| e.exit_code()), Some(2));
}

#[test]
fn test_list_tokens() {
    assert_eq!(
        list_tokens("a\n{"),
        vec!["1:1\t'a'", "1:2\t'\\n'", "2:1\t'{'"]
    );
}
