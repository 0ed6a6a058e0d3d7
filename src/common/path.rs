/// Joins a child name onto a forward-slash relative path.
/// The empty string denotes the input root.
pub fn join_rel(rel: &str, name: &str) -> String {
    if rel.is_empty() {
        name.to_owned()
    } else {
        format!("{rel}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::join_rel;

    #[test]
    fn root_joins_to_bare_name() {
        assert_eq!(join_rel("", "app"), "app");
        assert_eq!(join_rel("app", "spaces"), "app/spaces");
        assert_eq!(join_rel("app/spaces", "inner"), "app/spaces/inner");
    }
}
