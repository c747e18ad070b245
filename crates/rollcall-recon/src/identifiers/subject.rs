/// Split an identifier into its leading run of ASCII uppercase letters and the rest.
///
/// `"COMP248"` → `("COMP", "248")`; `"248A"` → `("", "248A")`.
pub fn split_subject(id: &str) -> (&str, &str) {
    let end = id
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(id.len());
    id.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_subject() {
        assert_eq!(split_subject("COMP248"), ("COMP", "248"));
        assert_eq!(split_subject("ENGR/201"), ("ENGR", "/201"));
        assert_eq!(split_subject("SOEN490A"), ("SOEN", "490A"));
        assert_eq!(split_subject("248"), ("", "248"));
        assert_eq!(split_subject("MATH"), ("MATH", ""));
        assert_eq!(split_subject(""), ("", ""));
    }
}
