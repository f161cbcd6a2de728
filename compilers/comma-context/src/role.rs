/// Corpus spellings that name the same comma role, and the role they map to.
const ROLE_SYNONYMS: &[(&str, &str)] = &[
    ("Entity attribute", "Attribute"),
    ("Entity substitute", "Substitute"),
];

/// Map a gold role label onto its canonical name. Unknown labels pass through.
pub fn normalize_role(role: &str) -> &str {
    ROLE_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == role)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_are_normalized() {
        assert_eq!(normalize_role("Entity attribute"), "Attribute");
        assert_eq!(normalize_role("Entity substitute"), "Substitute");
    }

    #[test]
    fn test_other_roles_pass_through() {
        assert_eq!(normalize_role("List"), "List");
        assert_eq!(normalize_role("entity attribute"), "entity attribute");
        assert_eq!(normalize_role(""), "");
    }
}
