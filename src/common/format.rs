//! User-facing formatting utilities for the console summary.

use thousands::Separable;

/// Formats a token count for the end-of-run summary ("12,345").
pub fn format_tokens(n: usize) -> String {
    n.separate_with_commas()
}
