//! Topical gate for generated text.

/// Domain words; generated text must contain at least one to be kept.
const ALLOW_LIST: &[&str] = &[
    "traffic",
    "road",
    "sign",
    "rule",
    "driving",
    "driver",
    "license",
    "licence",
    "exam",
    "test",
    "speed",
    "priority",
    "roundabout",
    "parking",
    "lane",
    "vehicle",
    "car",
    "cbr",
    "theory",
    "verkeer",
    "rijbewijs",
    "examen",
    "voorrang",
    "rotonde",
];

/// Returns the output unchanged if it looks on-topic, `None` otherwise.
pub fn gate(output: &str) -> Option<&str> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    ALLOW_LIST
        .iter()
        .any(|word| lowered.contains(word))
        .then_some(trimmed)
}
