//! Name synthesis for generated entity definitions.

/// Uppercase the first character of a name, leave the rest unchanged.
///
/// Callers guarantee non-empty names; empty input comes back unchanged.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Heuristic inverse of English pluralization, used to name the item type
/// of an array of objects (the array field name is typically plural).
///
/// Rules, first match wins: `ies` → `y`, `sses` → `ss`, strip a trailing
/// `s`, else unchanged. Plain `-es` plurals outside the `sses` case only
/// lose one `s` (`boxes` → `boxe`); the synthesized names are already
/// load-bearing for consumers, so the heuristic stays as-is.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = name.strip_suffix("sses") {
        format!("{stem}ss")
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

/// Concatenate the name stack (root entity down to the current nested
/// object) into one globally-unique definition name.
pub fn make_entity_name(name_stack: &[String]) -> String {
    name_stack.concat()
}
