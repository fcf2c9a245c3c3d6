//! Ordered keyword rule table.
//!
//! Rules are scanned top to bottom and the first match wins. The order is the
//! contract: exam cost beats every topic, topics beat the CBR groups, and the
//! generic help, greeting and thanks rules only fire when nothing more
//! specific did. Messages that match nothing get the capability overview.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::keywords::{self, KeywordGroup};
use super::templates::TemplateId;

/// Score at or above which a learner counts as exam-ready.
pub const READY_THRESHOLD: f64 = 70.0;
/// Score below which a learner counts as a beginner.
pub const BEGINNER_THRESHOLD: f64 = 30.0;

/// Bucket of the learner's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// Below 30.
    Beginner,
    /// 30 up to 70.
    Developing,
    /// 70 and above.
    Advanced,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score < BEGINNER_THRESHOLD {
            ScoreTier::Beginner
        } else if score < READY_THRESHOLD {
            ScoreTier::Developing
        } else {
            ScoreTier::Advanced
        }
    }
}

/// Name of a rule, reported in traces and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    ExamCost,
    ExamFormat,
    MockExamReady,
    FocusStart,
    TrafficLights,
    PriorityRules,
    SpeedLimits,
    Roundabouts,
    CbrExamFormat,
    CbrExamCost,
    Booking,
    Preparation,
    Difficulty,
    Results,
    Help,
    Greeting,
    Thanks,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What has to hold for a rule to fire.
pub enum Trigger {
    /// Any term of the group occurs in the message.
    Keywords(&'static KeywordGroup),
    /// The score is at least the threshold and a term of the group occurs.
    ScoreAndKeywords(f64, &'static KeywordGroup),
    /// The regex matches the message.
    Pattern(&'static LazyLock<Regex>),
}

/// Which template a firing rule selects.
pub enum Outcome {
    Fixed(TemplateId),
    /// Beginner, developing, advanced.
    Tiered([TemplateId; 3]),
}

pub struct Rule {
    pub id: RuleId,
    pub trigger: Trigger,
    pub outcome: Outcome,
}

impl Rule {
    /// `Some` when the rule fires, carrying the keyword that fired it.
    /// Pattern triggers report no keyword.
    fn fire(&self, lowered: &str, score: f64) -> Option<Option<&'static str>> {
        match &self.trigger {
            Trigger::Keywords(group) => group.first_hit(lowered).map(Some),
            Trigger::ScoreAndKeywords(min, group) if score >= *min => {
                group.first_hit(lowered).map(Some)
            }
            Trigger::ScoreAndKeywords(..) => None,
            Trigger::Pattern(regex) => regex.is_match(lowered).then_some(None),
        }
    }

    fn template(&self, score: f64) -> TemplateId {
        match &self.outcome {
            Outcome::Fixed(id) => *id,
            Outcome::Tiered([beginner, developing, advanced]) => match ScoreTier::from_score(score) {
                ScoreTier::Beginner => *beginner,
                ScoreTier::Developing => *developing,
                ScoreTier::Advanced => *advanced,
            },
        }
    }
}

const FOCUS_TIERS: [TemplateId; 3] = [
    TemplateId::FocusBeginner,
    TemplateId::FocusDeveloping,
    TemplateId::FocusAdvanced,
];

const HELP_TIERS: [TemplateId; 3] = [
    TemplateId::HelpBeginner,
    TemplateId::HelpDeveloping,
    TemplateId::HelpAdvanced,
];

/// The rule table, in precedence order.
///
/// Mock-exam readiness sits ahead of the focus rule: an exam-ready learner who
/// asks where to focus next is pointed at a mock exam instead of the
/// advanced focus advice.
pub static RULES: &[Rule] = &[
    Rule {
        id: RuleId::ExamCost,
        trigger: Trigger::Keywords(&keywords::COST),
        outcome: Outcome::Fixed(TemplateId::ExamCost),
    },
    Rule {
        id: RuleId::ExamFormat,
        trigger: Trigger::Keywords(&keywords::EXAM_FORMAT),
        outcome: Outcome::Fixed(TemplateId::ExamFormat),
    },
    Rule {
        id: RuleId::MockExamReady,
        trigger: Trigger::ScoreAndKeywords(READY_THRESHOLD, &keywords::READINESS),
        outcome: Outcome::Fixed(TemplateId::MockExamReady),
    },
    Rule {
        id: RuleId::FocusStart,
        trigger: Trigger::Keywords(&keywords::FOCUS),
        outcome: Outcome::Tiered(FOCUS_TIERS),
    },
    Rule {
        id: RuleId::TrafficLights,
        trigger: Trigger::Keywords(&keywords::TRAFFIC_LIGHTS),
        outcome: Outcome::Fixed(TemplateId::TrafficLights),
    },
    Rule {
        id: RuleId::PriorityRules,
        trigger: Trigger::Keywords(&keywords::PRIORITY_RULES),
        outcome: Outcome::Fixed(TemplateId::PriorityRules),
    },
    Rule {
        id: RuleId::SpeedLimits,
        trigger: Trigger::Keywords(&keywords::SPEED_LIMITS),
        outcome: Outcome::Fixed(TemplateId::SpeedLimits),
    },
    Rule {
        id: RuleId::Roundabouts,
        trigger: Trigger::Keywords(&keywords::ROUNDABOUTS),
        outcome: Outcome::Fixed(TemplateId::Roundabouts),
    },
    Rule {
        id: RuleId::CbrExamFormat,
        trigger: Trigger::Keywords(&keywords::CBR_EXAM_FORMAT),
        outcome: Outcome::Fixed(TemplateId::ExamFormat),
    },
    Rule {
        id: RuleId::CbrExamCost,
        trigger: Trigger::Keywords(&keywords::CBR_COST),
        outcome: Outcome::Fixed(TemplateId::ExamCost),
    },
    Rule {
        id: RuleId::Booking,
        trigger: Trigger::Keywords(&keywords::BOOKING),
        outcome: Outcome::Fixed(TemplateId::Booking),
    },
    Rule {
        id: RuleId::Preparation,
        trigger: Trigger::Keywords(&keywords::PREPARATION),
        outcome: Outcome::Fixed(TemplateId::Preparation),
    },
    Rule {
        id: RuleId::Difficulty,
        trigger: Trigger::Keywords(&keywords::DIFFICULTY),
        outcome: Outcome::Fixed(TemplateId::Difficulty),
    },
    Rule {
        id: RuleId::Results,
        trigger: Trigger::Keywords(&keywords::RESULTS),
        outcome: Outcome::Fixed(TemplateId::Results),
    },
    Rule {
        id: RuleId::Help,
        trigger: Trigger::Keywords(&keywords::HELP),
        outcome: Outcome::Tiered(HELP_TIERS),
    },
    Rule {
        id: RuleId::Greeting,
        trigger: Trigger::Pattern(&keywords::GREETING),
        outcome: Outcome::Fixed(TemplateId::Greeting),
    },
    Rule {
        id: RuleId::Thanks,
        trigger: Trigger::Keywords(&keywords::THANKS),
        outcome: Outcome::Fixed(TemplateId::Thanks),
    },
];

/// Outcome of a rule scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// `None` when no rule fired and the overview was chosen.
    pub rule: Option<RuleId>,
    /// Keyword that fired the rule.
    pub term: Option<&'static str>,
    pub template: TemplateId,
}

/// Scans [`RULES`] in order over an already lower-cased message.
pub fn select(lowered: &str, score: f64) -> Selection {
    RULES
        .iter()
        .find_map(|rule| {
            rule.fire(lowered, score).map(|term| Selection {
                rule: Some(rule.id),
                term,
                template: rule.template(score),
            })
        })
        .unwrap_or(Selection {
            rule: None,
            term: None,
            template: TemplateId::Overview,
        })
}
