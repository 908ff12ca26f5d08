//! Built-in wardrobe used by `dress demo`.

/// A formal outfit: eighteen `(dependency, dependent)` pairs over twelve
/// items, resolving into seven steps.
pub const SUIT_EDGES: &[(&str, &str)] = &[
    ("t-shirt", "dress shirt"),
    ("dress shirt", "pants"),
    ("dress shirt", "suit jacket"),
    ("tie", "suit jacket"),
    ("pants", "suit jacket"),
    ("belt", "suit jacket"),
    ("suit jacket", "overcoat"),
    ("dress shirt", "tie"),
    ("suit jacket", "sun glasses"),
    ("sun glasses", "overcoat"),
    ("left sock", "pants"),
    ("pants", "belt"),
    ("suit jacket", "left shoe"),
    ("suit jacket", "right shoe"),
    ("left shoe", "overcoat"),
    ("right sock", "pants"),
    ("right shoe", "overcoat"),
    ("t-shirt", "suit jacket"),
];
