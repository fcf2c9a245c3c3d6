//! Pre-authored tutor replies.
//!
//! Each language provides one table: a total function from [`TemplateId`] to a
//! static [`Template`]. Score-tiered templates carry `{score}` and `{gap}`
//! placeholders, filled with the learner's average and `70 - average`.

mod ar;
mod en;
mod nl;

use serde::{Deserialize, Serialize};

use super::language::Language;
use crate::models::{Tone, TutorResponse};

/// Identifies one reply in every language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    ExamCost,
    ExamFormat,
    FocusBeginner,
    FocusDeveloping,
    FocusAdvanced,
    MockExamReady,
    TrafficLights,
    PriorityRules,
    SpeedLimits,
    Roundabouts,
    Booking,
    Preparation,
    Difficulty,
    Results,
    HelpBeginner,
    HelpDeveloping,
    HelpAdvanced,
    Greeting,
    Thanks,
    Overview,
}

impl TemplateId {
    pub const ALL: [TemplateId; 20] = [
        TemplateId::ExamCost,
        TemplateId::ExamFormat,
        TemplateId::FocusBeginner,
        TemplateId::FocusDeveloping,
        TemplateId::FocusAdvanced,
        TemplateId::MockExamReady,
        TemplateId::TrafficLights,
        TemplateId::PriorityRules,
        TemplateId::SpeedLimits,
        TemplateId::Roundabouts,
        TemplateId::Booking,
        TemplateId::Preparation,
        TemplateId::Difficulty,
        TemplateId::Results,
        TemplateId::HelpBeginner,
        TemplateId::HelpDeveloping,
        TemplateId::HelpAdvanced,
        TemplateId::Greeting,
        TemplateId::Thanks,
        TemplateId::Overview,
    ];
}

/// A static reply; rendered into a fresh [`TutorResponse`] per request.
#[derive(Debug)]
pub struct Template {
    pub tone: Tone,
    pub message: &'static str,
    pub action_items: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

pub type TemplateTable = fn(TemplateId) -> &'static Template;

/// Maps a language tag to its template table.
pub fn table(language: Language) -> TemplateTable {
    match language {
        Language::En => en::lookup,
        Language::Nl => nl::lookup,
        Language::Ar => ar::lookup,
    }
}

impl Template {
    /// Fills `{score}` and `{gap}` and copies the lists.
    pub fn render(&self, score: f64) -> TutorResponse {
        let score_text = format_score(score);
        let gap_text = format_score(70.0 - score);
        let fill = |s: &str| s.replace("{score}", &score_text).replace("{gap}", &gap_text);

        TutorResponse {
            message: fill(self.message),
            tone: self.tone,
            action_items: self.action_items.iter().map(|s| fill(s)).collect(),
            next_steps: self.next_steps.iter().map(|s| fill(s)).collect(),
        }
    }
}

/// Whole numbers print without decimals, anything else with one.
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
