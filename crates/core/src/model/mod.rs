pub mod ids;
pub mod module;
pub mod question;

pub use ids::{ModuleId, ParseModuleIdError};
pub use module::{
    ChoiceCard, ChoiceCardDraft, ChoiceCheck, ChoiceCheckDraft, ContentError, Hero, HeroDraft,
    Module, ModuleDraft, QuizDraft, Scenario, ScenarioDraft, ScenarioPanel, ScenarioPanelDraft,
    Topic, TopicDraft,
};
pub use question::{Question, QuestionDraft, QuestionError, MIN_OPTIONS};
