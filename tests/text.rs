use proptest::prelude::*;
use tmpl_helpers::utils::text::*;

#[test]
fn test_truncate() {
    let cases = [
        ("foobarz", "fooba"),
        ("foöäüüu", "foöäü"),
        ("üpsßßßk", "üpsßß"),
        ("1234567", "12345"),
        ("!'§$%&/", "!'§$%"),
    ];

    for (input, want) in cases {
        assert_eq!(truncate(input, 5), want, "truncate {:?}", input);
    }
}

proptest! {
    #[test]
    fn test_truncate_is_code_point_prefix(input in "\\PC*", n in 0usize..40) {
        let out = truncate(&input, n);
        prop_assert_eq!(out.chars().count(), n.min(input.chars().count()));
        prop_assert!(input.starts_with(&out));
    }

    #[test]
    fn test_uppercase_first_is_idempotent(input in "\\PC{0,8}") {
        let once = uppercase_first(&input);
        prop_assert_eq!(uppercase_first(&once), once.clone());
    }

    #[test]
    fn test_case_helpers_keep_code_point_count(input in "\\PC*") {
        let len = input.chars().count();
        prop_assert_eq!(uppercase_first(&input).chars().count(), len);
        prop_assert_eq!(uppercase(&input).chars().count(), len);
        prop_assert_eq!(lowercase(&input).chars().count(), len);
    }
}

#[test]
fn test_truncate_zero_length() {
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_uppercase_first() {
    let cases = [
        ("hello", "Hello"),
        ("ßqwert", "ßqwert"),
        ("üps", "Üps"),
        ("12345", "12345"),
        ("Foobar", "Foobar"),
        ("", ""),
    ];

    for (input, want) in cases {
        assert_eq!(uppercase_first(input), want, "uppercase_first {:?}", input);
    }
}

#[test]
fn test_uppercase_first_iota_subscript() {
    assert_eq!(uppercase_first("ᾳ"), "ᾼ");
    assert_eq!(uppercase_first("ᾀμα"), "ᾈμα");
    assert_eq!(uppercase_first("ῳδή"), "ῼδή");
}

#[test]
fn test_uppercase_first_leaves_rest_alone() {
    assert_eq!(uppercase_first("hELLO wORLD"), "HELLO wORLD");
}

#[test]
fn test_uppercase_and_lowercase() {
    assert_eq!(uppercase("straße über"), "STRAßE ÜBER");
    assert_eq!(lowercase("STRAßE ÜBER"), "straße über");
    assert_eq!(uppercase(""), "");
    assert_eq!(lowercase("İ"), "i");
}

#[test]
fn test_trim_left() {
    let cases = [
        ("hello\n", "hello\n"),
        ("\nhello\n", "hello\n"),
        ("\r\nhello\n", "hello\n"),
        ("\n\r\nhello\r\n", "hello\r\n"),
        (" \t hello world ", "hello world "),
    ];

    for (input, want) in cases {
        assert_eq!(trim_left(input), want, "trim_left {:?}", input);
    }
}

#[test]
fn test_trim_right() {
    let cases = [
        ("\nhello", "\nhello"),
        ("\nhello\n", "\nhello"),
        ("\nhello\r\n", "\nhello"),
        ("\r\nhello\n\r\n", "\r\nhello"),
        (" hello world \t ", " hello world"),
    ];

    for (input, want) in cases {
        assert_eq!(trim_right(input), want, "trim_right {:?}", input);
    }
}

#[test]
fn test_trim_keeps_interior_whitespace() {
    assert_eq!(trim_left("\n a \n b"), "a \n b");
    assert_eq!(trim_right("a \n b \n"), "a \n b");
    assert_eq!(trim_left(" \r\n\t"), "");
    assert_eq!(trim_right(" \r\n\t"), "");
}
