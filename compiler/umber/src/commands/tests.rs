use super::*;

#[test]
fn missing_file_is_reported_by_name() {
    let Err(err) = read_source("/definitely/not/here.php") else {
        panic!("read of a missing file succeeded");
    };
    assert_eq!(err.to_string(), "cannot find file '/definitely/not/here.php'");
}

#[test]
fn option_errors_pass_through() {
    let err = CliError::from(OptionError::UnknownOption("x".into()));
    assert_eq!(err.to_string(), "unknown lexer option `x`");
}
