//! Keyword groups used by the rule table.
//!
//! Terms match by substring containment over the lower-cased message; a few
//! short words match only as whole words. Everything here must already be
//! lower case. Groups carry English, Dutch and Arabic wording side by side.

use regex::Regex;
use std::sync::LazyLock;

/// A named set of terms; matches when any term occurs in the text.
#[derive(Debug)]
pub struct KeywordGroup {
    pub name: &'static str,
    /// Matched anywhere, including inside longer words.
    pub terms: &'static [&'static str],
    /// Matched only as whole words ("fee" must not fire on "feel").
    pub words: &'static [&'static str],
}

impl KeywordGroup {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.first_hit(lowered).is_some()
    }

    /// The term or word that made the group match; reported by the rule scan.
    pub fn first_hit(&self, lowered: &str) -> Option<&'static str> {
        self.terms
            .iter()
            .copied()
            .find(|term| lowered.contains(term))
            .or_else(|| {
                self.words.iter().copied().find(|word| {
                    lowered
                        .split(|c: char| !c.is_alphanumeric())
                        .any(|token| token == *word)
                })
            })
    }
}

pub const COST: KeywordGroup = KeywordGroup {
    name: "cost",
    terms: &["how much", "cost", "price", "€", "euro", "pay for"],
    words: &["fee", "fees"],
};

pub const EXAM_FORMAT: KeywordGroup = KeywordGroup {
    name: "exam_format",
    terms: &[
        "cbr exam",
        "how many questions",
        "pass mark",
        "passing score",
        "exam format",
        "how long is the exam",
        "number of questions",
    ],
    words: &[],
};

pub const FOCUS: KeywordGroup = KeywordGroup {
    name: "focus",
    terms: &[
        "focus",
        "start",
        "begin",
        "where should i",
        "waar moet ik",
        "beginnen",
        "starten",
        "أبدأ",
        "ابدأ",
        "تركيز",
    ],
    words: &[],
};

pub const READINESS: KeywordGroup = KeywordGroup {
    name: "readiness",
    terms: &[
        "ready",
        "exam",
        "mock",
        "next",
        "klaar",
        "proefexamen",
        "volgende",
        "جاهز",
        "امتحان",
        "التالي",
    ],
    words: &[],
};

pub const TRAFFIC_LIGHTS: KeywordGroup = KeywordGroup {
    name: "traffic_lights",
    terms: &[
        "traffic light",
        "red light",
        "amber",
        "green light",
        "verkeerslicht",
        "stoplicht",
        "oranje licht",
        "إشارة المرور",
        "الإشارة الضوئية",
    ],
    words: &[],
};

pub const PRIORITY_RULES: KeywordGroup = KeywordGroup {
    name: "priority_rules",
    terms: &[
        "priority",
        "right of way",
        "give way",
        "yield",
        "voorrang",
        "أولوية",
        "الأولوية",
    ],
    words: &[],
};

pub const SPEED_LIMITS: KeywordGroup = KeywordGroup {
    name: "speed_limits",
    terms: &[
        "speed",
        "km/h",
        "limit",
        "snelheid",
        "maximumsnelheid",
        "السرعة",
    ],
    words: &[],
};

pub const ROUNDABOUTS: KeywordGroup = KeywordGroup {
    name: "roundabouts",
    terms: &["roundabout", "rotonde", "دوار", "الدوار"],
    words: &[],
};

pub const CBR_EXAM_FORMAT: KeywordGroup = KeywordGroup {
    name: "cbr_exam_format",
    terms: &[
        "hoeveel vragen",
        "gevaarherkenning",
        "onderdelen",
        "slagingsgrens",
        "hoe lang duurt het examen",
        "عدد الأسئلة",
        "أجزاء الامتحان",
    ],
    words: &[],
};

pub const CBR_COST: KeywordGroup = KeywordGroup {
    name: "cbr_cost",
    terms: &[
        "kost",
        "prijs",
        "tarief",
        "betalen",
        "سعر",
        "تكلفة",
        "رسوم",
        "كم يكلف",
    ],
    words: &[],
};

pub const BOOKING: KeywordGroup = KeywordGroup {
    name: "booking",
    terms: &[
        "book",
        "reserve",
        "appointment",
        "schedule",
        "reserveren",
        "mijn cbr",
        "digid",
        "inschrijven",
        "حجز",
        "موعد",
    ],
    words: &[],
};

pub const PREPARATION: KeywordGroup = KeywordGroup {
    name: "preparation",
    terms: &[
        "prepare",
        "preparation",
        "study",
        "practice",
        "tips",
        "voorbereiden",
        "oefenen",
        "studeren",
        "تحضير",
        "استعداد",
        "دراسة",
    ],
    words: &[],
};

pub const DIFFICULTY: KeywordGroup = KeywordGroup {
    name: "difficulty",
    terms: &[
        "difficult",
        "hard",
        "struggl",
        "confus",
        "stuck",
        "don't understand",
        "moeilijk",
        "lastig",
        "snap het niet",
        "begrijp het niet",
        "صعب",
        "لا أفهم",
    ],
    words: &[],
};

pub const RESULTS: KeywordGroup = KeywordGroup {
    name: "results",
    terms: &[
        "fail",
        "retake",
        "result",
        "passed",
        "gezakt",
        "herexamen",
        "uitslag",
        "رسبت",
        "نتيجة",
        "إعادة",
    ],
    words: &[],
};

pub const HELP: KeywordGroup = KeywordGroup {
    name: "help",
    terms: &[
        "help", "what", "how", "hulp", "wat", "hoe", "مساعدة", "ساعد", "كيف", "ماذا",
    ],
    words: &[],
};

pub const THANKS: KeywordGroup = KeywordGroup {
    name: "thanks",
    terms: &["thank", "bedankt", "dank je", "dank u", "merci", "شكرا"],
    words: &[],
};

/// Greetings match on word boundaries so "this" or "which" do not count as "hi".
// NOTE: expect() is acceptable here, the pattern is a literal.
pub static GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hello|hi|hey|hallo|hoi|goedemorgen|goedemiddag|goedenavond|مرحبا|أهلا|اهلا|السلام عليكم)\b")
        .expect("Invalid regex: greeting pattern")
});
