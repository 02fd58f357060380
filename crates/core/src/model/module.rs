use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::ModuleId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

//
// ─── CONTENT VALIDATION ERRORS ─────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("module title is empty")]
    EmptyTitle,

    #[error("module has no topics")]
    NoTopics,

    #[error("topic {index} has empty text")]
    EmptyTopic { index: usize },

    #[error("initial_topic {index} is out of range for {len} topics")]
    InitialTopicOutOfRange { index: usize, len: usize },

    #[error("module has no quiz questions")]
    NoQuestions,

    #[error("invalid question {index}: {source}")]
    Question {
        index: usize,
        source: QuestionError,
    },

    #[error("a choice check needs at least 2 cards, got {len}")]
    TooFewChoiceCards { len: usize },

    #[error("choice check has no safe card")]
    NoSafeChoice,

    #[error("scenario panel has no scenarios")]
    NoScenarios,

    #[error("scenario {index} recommends topic {topic}, but there are {len} topics")]
    ScenarioTopicOutOfRange {
        index: usize,
        topic: usize,
        len: usize,
    },
}

//
// ─── DRAFT TYPES (AUTHORED DATA) ───────────────────────────────────────────────
//

/// Hero banner copy at the top of a module page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroDraft {
    pub tag: String,
    pub heading: String,
    pub lead: String,
    pub points: Vec<String>,
}

/// One selectable narrative item: a step, a phase, an address-bar
/// state, or an authentication method, depending on the module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicDraft {
    pub title: String,
    #[serde(default)]
    pub label: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub technical: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceCardDraft {
    pub label: String,
    pub domain: String,
    pub browser: String,
    pub truth: String,
    pub takeaway: String,
    pub safe: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceCheckDraft {
    pub heading: String,
    pub subtitle: String,
    pub cards: Vec<ChoiceCardDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioDraft {
    pub label: String,
    pub recommended: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioPanelDraft {
    pub heading: String,
    pub subtitle: String,
    pub scenarios: Vec<ScenarioDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizDraft {
    pub heading: String,
    pub subtitle: String,
    pub questions: Vec<QuestionDraft>,
}

/// Authored form of one content module, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleDraft {
    pub id: ModuleId,
    pub title: String,
    pub blurb: String,
    pub summary: String,
    pub hero: HeroDraft,
    pub topics_heading: String,
    pub topics_subtitle: String,
    pub topics: Vec<TopicDraft>,
    #[serde(default)]
    pub topics_note: Option<String>,
    #[serde(default)]
    pub initial_topic: usize,
    #[serde(default)]
    pub choice_check: Option<ChoiceCheckDraft>,
    #[serde(default)]
    pub scenarios: Option<ScenarioPanelDraft>,
    pub quiz: QuizDraft,
}

impl ModuleDraft {
    /// Validate an authored module into its usable form.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for structural problems: missing topics
    /// or questions, an out-of-range initial topic or scenario
    /// recommendation, or an invalid question.
    pub fn validate(self) -> Result<Module, ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        if self.topics.is_empty() {
            return Err(ContentError::NoTopics);
        }
        if let Some(index) = self
            .topics
            .iter()
            .position(|t| t.title.trim().is_empty() || t.summary.trim().is_empty())
        {
            return Err(ContentError::EmptyTopic { index });
        }
        let topic_count = self.topics.len();
        if self.initial_topic >= topic_count {
            return Err(ContentError::InitialTopicOutOfRange {
                index: self.initial_topic,
                len: topic_count,
            });
        }

        let choice_check = match self.choice_check {
            Some(draft) => Some(validate_choice_check(draft)?),
            None => None,
        };
        let scenarios = match self.scenarios {
            Some(draft) => Some(validate_scenarios(draft, topic_count)?),
            None => None,
        };

        if self.quiz.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        let mut questions = Vec::with_capacity(self.quiz.questions.len());
        for (index, draft) in self.quiz.questions.into_iter().enumerate() {
            let question = draft
                .validate()
                .map_err(|source| ContentError::Question { index, source })?;
            questions.push(question);
        }

        Ok(Module {
            id: self.id,
            title: self.title,
            blurb: self.blurb,
            summary: self.summary,
            hero: Hero {
                tag: self.hero.tag,
                heading: self.hero.heading,
                lead: self.hero.lead,
                points: self.hero.points,
            },
            topics_heading: self.topics_heading,
            topics_subtitle: self.topics_subtitle,
            topics: self
                .topics
                .into_iter()
                .map(|t| Topic {
                    title: t.title,
                    label: t.label,
                    summary: t.summary,
                    technical: t.technical,
                    note: t.note,
                })
                .collect(),
            topics_note: self.topics_note,
            initial_topic: self.initial_topic,
            choice_check,
            scenarios,
            quiz_heading: self.quiz.heading,
            quiz_subtitle: self.quiz.subtitle,
            questions,
        })
    }
}

fn validate_choice_check(draft: ChoiceCheckDraft) -> Result<ChoiceCheck, ContentError> {
    if draft.cards.len() < 2 {
        return Err(ContentError::TooFewChoiceCards {
            len: draft.cards.len(),
        });
    }
    if !draft.cards.iter().any(|card| card.safe) {
        return Err(ContentError::NoSafeChoice);
    }
    Ok(ChoiceCheck {
        heading: draft.heading,
        subtitle: draft.subtitle,
        cards: draft
            .cards
            .into_iter()
            .map(|c| ChoiceCard {
                label: c.label,
                domain: c.domain,
                browser: c.browser,
                truth: c.truth,
                takeaway: c.takeaway,
                safe: c.safe,
                feedback: c.feedback,
            })
            .collect(),
    })
}

fn validate_scenarios(
    draft: ScenarioPanelDraft,
    topic_count: usize,
) -> Result<ScenarioPanel, ContentError> {
    if draft.scenarios.is_empty() {
        return Err(ContentError::NoScenarios);
    }
    for (index, scenario) in draft.scenarios.iter().enumerate() {
        if scenario.recommended >= topic_count {
            return Err(ContentError::ScenarioTopicOutOfRange {
                index,
                topic: scenario.recommended,
                len: topic_count,
            });
        }
    }
    Ok(ScenarioPanel {
        heading: draft.heading,
        subtitle: draft.subtitle,
        scenarios: draft
            .scenarios
            .into_iter()
            .map(|s| Scenario {
                label: s.label,
                recommended: s.recommended,
                explanation: s.explanation,
            })
            .collect(),
    })
}

//
// ─── VALIDATED TYPES ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub tag: String,
    pub heading: String,
    pub lead: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub label: Option<String>,
    pub summary: String,
    pub technical: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCard {
    pub label: String,
    pub domain: String,
    pub browser: String,
    pub truth: String,
    pub takeaway: String,
    pub safe: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCheck {
    pub heading: String,
    pub subtitle: String,
    pub cards: Vec<ChoiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub recommended: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPanel {
    pub heading: String,
    pub subtitle: String,
    pub scenarios: Vec<Scenario>,
}

/// One validated content module.
///
/// Invariants: at least one topic and one question, `initial_topic`
/// in range, every scenario recommendation in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    blurb: String,
    summary: String,
    hero: Hero,
    topics_heading: String,
    topics_subtitle: String,
    topics: Vec<Topic>,
    topics_note: Option<String>,
    initial_topic: usize,
    choice_check: Option<ChoiceCheck>,
    scenarios: Option<ScenarioPanel>,
    quiz_heading: String,
    quiz_subtitle: String,
    questions: Vec<Question>,
}

impl Module {
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description shown on the intro page's module card.
    #[must_use]
    pub fn blurb(&self) -> &str {
        &self.blurb
    }

    /// Lead paragraph under the page title.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    #[must_use]
    pub fn topics_heading(&self) -> &str {
        &self.topics_heading
    }

    #[must_use]
    pub fn topics_subtitle(&self) -> &str {
        &self.topics_subtitle
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Fixed callout shown under every topic, when the module has one.
    #[must_use]
    pub fn topics_note(&self) -> Option<&str> {
        self.topics_note.as_deref()
    }

    /// Index of the topic selected when the module opens.
    #[must_use]
    pub fn initial_topic(&self) -> usize {
        self.initial_topic
    }

    /// Whether any topic carries a technical variant (enables the
    /// student-friendly/technical toggle).
    #[must_use]
    pub fn has_technical_view(&self) -> bool {
        self.topics.iter().any(|t| t.technical.is_some())
    }

    #[must_use]
    pub fn choice_check(&self) -> Option<&ChoiceCheck> {
        self.choice_check.as_ref()
    }

    #[must_use]
    pub fn scenarios(&self) -> Option<&ScenarioPanel> {
        self.scenarios.as_ref()
    }

    #[must_use]
    pub fn quiz_heading(&self) -> &str {
        &self.quiz_heading
    }

    #[must_use]
    pub fn quiz_subtitle(&self) -> &str {
        &self.quiz_subtitle
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
