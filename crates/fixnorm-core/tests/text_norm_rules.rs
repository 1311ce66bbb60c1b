// crates/fixnorm-core/tests/text_norm_rules.rs

use fixnorm_core::repr::text_norm;

#[test]
fn mixed_terminators_become_lf() {
    let input = b"a\r\nb\nc\r\n";
    let out = text_norm::normalize_newlines(input);
    assert_eq!(out, b"a\nb\nc\n");
    // two CRLF pairs collapsed
    assert_eq!(input.len() - out.len(), 2);
}

#[test]
fn lone_cr_is_a_terminator() {
    assert_eq!(text_norm::normalize_newlines(b"x\ry\r"), b"x\ny\n");
    assert_eq!(text_norm::normalize_newlines(b"x\r\r\ny"), b"x\n\ny");
}

#[test]
fn no_final_newline_is_added() {
    assert_eq!(text_norm::normalize_newlines(b"int x;\r\nint y;"), b"int x;\nint y;");
    assert_eq!(text_norm::normalize_newlines(b""), b"");
}

#[test]
fn normalization_is_idempotent() {
    let once = text_norm::normalize_newlines(b"enum E {\r\n  A,\r  B\n};\r\n");
    let twice = text_norm::normalize_newlines(&once);
    assert_eq!(once, twice);
    assert!(text_norm::is_canonical(&once));
}

#[test]
fn logical_lines_survive_normalization() {
    let input = "#include <stdio.h>\r\n\r\nint main(void) {\r\n    return 0;\r\n}\r\n".as_bytes();
    let out = text_norm::normalize_newlines(input);
    assert_eq!(text_norm::logical_lines(input), text_norm::logical_lines(&out));
    assert_eq!(text_norm::logical_lines(&out).len(), 5);
}

#[test]
fn non_ascii_text_is_untouched() {
    let input = "// größe\r\nconst char* s = \"→\";\r\n".as_bytes();
    let out = text_norm::normalize_newlines(input);
    assert_eq!(out, "// größe\nconst char* s = \"→\";\n".as_bytes());
}

#[test]
fn digest_ignores_terminator_encoding() {
    let crlf = text_norm::content_digest(b"a\r\nb\r\n");
    let lf = text_norm::content_digest(b"a\nb\n");
    let cr = text_norm::content_digest(b"a\rb\r");
    assert_eq!(crlf, lf);
    assert_eq!(lf, cr);
}

#[test]
fn digest_sees_content_and_trailing_terminator() {
    let base = text_norm::content_digest(b"a\nb\n");
    assert_ne!(base, text_norm::content_digest(b"a\nc\n"));
    assert_ne!(base, text_norm::content_digest(b"a\nb"));
    assert_ne!(base, text_norm::content_digest(b"ab\n"));
    assert_eq!(text_norm::digest_hex(&base).len(), 16);
}
