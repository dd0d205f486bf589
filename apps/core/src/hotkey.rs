#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<String>,
    pub key: String,
}

/// Parses a chord like "Ctrl+Alt+Space". At least one modifier is required;
/// modifiers are canonicalized to Ctrl/Alt/Shift.
pub fn parse_hotkey(input: &str) -> Result<Hotkey, String> {
    let parts: Vec<&str> = input
        .split('+')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 2 {
        return Err("hotkey needs at least one modifier and a key".to_string());
    }

    let (modifier_parts, key_part) = parts.split_at(parts.len() - 1);

    let mut modifiers: Vec<String> = Vec::new();
    for part in modifier_parts {
        let canonical = match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => "Ctrl",
            "alt" => "Alt",
            "shift" => "Shift",
            other => return Err(format!("unsupported modifier '{other}'")),
        };
        if !modifiers.iter().any(|m| m == canonical) {
            modifiers.push(canonical.to_string());
        }
    }

    Ok(Hotkey {
        modifiers,
        key: key_part[0].to_string(),
    })
}
