pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Title-cases a hyphenated game key, "firered-leafgreen" -> "Firered Leafgreen".
pub fn title_case_key(key: &str) -> String {
    key.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Display name for an alternate-form slug: strip the `<base>-` prefix,
/// capitalize, then apply the handful of named overrides.
pub fn format_form_name(full_name: &str, base_name: &str) -> String {
    let stripped = full_name
        .strip_prefix(&format!("{base_name}-"))
        .unwrap_or(full_name);
    let form_name = capitalize(stripped);

    match form_name.as_str() {
        "Gmax" => "Gigantamax".to_string(),
        "Mega" => format!("Mega {}", capitalize(base_name)),
        "Mega-x" => format!("Mega {} X", capitalize(base_name)),
        "Mega-y" => format!("Mega {} Y", capitalize(base_name)),
        _ => form_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_overrides() {
        assert_eq!(format_form_name("pikachu-gmax", "pikachu"), "Gigantamax");
        assert_eq!(
            format_form_name("charizard-mega-x", "charizard"),
            "Mega Charizard X"
        );
        assert_eq!(
            format_form_name("charizard-mega-y", "charizard"),
            "Mega Charizard Y"
        );
        assert_eq!(format_form_name("gengar-mega", "gengar"), "Mega Gengar");
    }

    #[test]
    fn plain_forms_are_capitalized_verbatim() {
        assert_eq!(format_form_name("raichu-alola", "raichu"), "Alola");
        assert_eq!(format_form_name("meowth-galar", "meowth"), "Galar");
    }

    #[test]
    fn unprefixed_names_pass_through() {
        assert_eq!(format_form_name("eternatus", "pikachu"), "Eternatus");
    }

    #[test]
    fn game_keys_title_case() {
        assert_eq!(title_case_key("heartgold-soulsilver"), "Heartgold Soulsilver");
        assert_eq!(title_case_key("crystal"), "Crystal");
    }
}
