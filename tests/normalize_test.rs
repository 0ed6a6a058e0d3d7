use codepicker::engine::normalize::strip_blank_lines;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn stripping_is_idempotent(input: String) -> bool {
    let once = strip_blank_lines(&input);
    strip_blank_lines(&once) == once
}

#[quickcheck]
fn stripped_output_has_no_blank_lines(input: String) -> bool {
    strip_blank_lines(&input)
        .split_inclusive('\n')
        .all(|line| !line.trim().is_empty())
}

#[test]
fn surviving_lines_keep_order_and_terminators() {
    let input = "fn main() {\r\n\r\n    body\n\n}\n";
    assert_eq!(strip_blank_lines(input), "fn main() {\r\n    body\n}\n");
}
