use super::*;

#[test]
fn shebangs() {
    assert!(detect("#!/usr/bin/env php\necho 1;"));
    assert!(detect("#!/usr/bin/php -q\n"));
    assert!(detect("  #!/usr/local/bin/php"));
    assert!(!detect("#!/usr/bin/php7\n"));
    assert!(!detect("#!/usr/bin/env python\n"));
    assert!(!detect("#!/usr/bin/env sh\nphp foo.php"));
}

#[test]
fn open_tags() {
    assert!(detect("<?php echo 1;"));
    assert!(detect("<html>\n<?php echo 1; ?>\n</html>"));
    assert!(!detect("<html>  <?php echo 1; ?></html>"));
    assert!(!detect("<? echo 1;"));
}

#[test]
fn hack_is_not_php() {
    assert!(!detect("<?hh // strict\n"));
    assert!(!detect("<?php\n<?hh\n"));
    assert!(detect("#!/usr/bin/env php\n<?hh\n"));
    assert!(looks_like_hack("x\n<?hh"));
    assert!(!looks_like_hack("<?php"));
}

#[test]
fn plain_text_is_not_php() {
    assert!(!detect(""));
    assert!(!detect("hello world"));
}
