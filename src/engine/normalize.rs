/// Removes every line that is empty or whitespace-only. Surviving lines keep
/// their original terminators (`\n` or `\r\n`) and order. Idempotent.
pub fn strip_blank_lines(raw: &str) -> String {
    raw.split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}
