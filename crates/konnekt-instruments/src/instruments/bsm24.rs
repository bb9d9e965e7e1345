use crate::scoring::Question;
use crate::Instrument;

/// BSM24: 24-item Behavioral Skills & Issues Measure.
/// Six subscales in blocks of four consecutive items. No reverse keying.
pub struct Bsm24;

impl Instrument for Bsm24 {
    fn category(&self) -> &str {
        "myndkonnekt_behavioral"
    }

    fn title(&self) -> &str {
        "Behavioral Skills & Issues Measure (BSM24)"
    }

    fn description(&self) -> &str {
        "Measures workplace behavioral skills across 6 subscales using a Likert 1-5 scale."
    }

    fn time_limit_minutes(&self) -> u32 {
        25
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                likert("Self-Regulation", "I stay calm and steady when deadlines get tight."),
                likert("Self-Regulation", "When frustrated, I pause before responding and choose a measured reply."),
                likert("Self-Regulation", "I keep working effectively when unexpected problems arise."),
                likert("Self-Regulation", "I manage my workload so stress does not affect my performance."),
                likert("Collaboration & Conflict Management", "I bring others into problem-solving when teamwork is needed."),
                likert("Collaboration & Conflict Management", "I discuss disagreements openly, aiming for practical solutions."),
                likert("Collaboration & Conflict Management", "I adapt my approach to make team decisions easier to implement."),
                likert("Collaboration & Conflict Management", "I share credit and recognise teammates' contributions."),
                likert("Initiative & Proactiveness", "I volunteer to take on work that will help the team succeed."),
                likert("Initiative & Proactiveness", "I propose practical improvements to processes I use."),
                likert("Initiative & Proactiveness", "I follow through on new ideas until they're tested."),
                likert("Initiative & Proactiveness", "I take responsibility for fixing problems I observe."),
                likert("Attention to Detail & Follow-Through", "I double-check my work to catch avoidable errors."),
                likert("Attention to Detail & Follow-Through", "I finish small tasks reliably without reminders."),
                likert("Attention to Detail & Follow-Through", "I deliver work that is both complete and well-documented."),
                likert("Attention to Detail & Follow-Through", "I track progress and update stakeholders until tasks are closed."),
                likert("Workplace Conduct & Ethics", "I accept feedback constructively and act on it."),
                likert("Workplace Conduct & Ethics", "I behave respectfully even in tense situations."),
                likert("Workplace Conduct & Ethics", "I follow workplace rules even when they are inconvenient."),
                likert("Workplace Conduct & Ethics", "I own up to mistakes and correct them promptly."),
                likert("Adaptability and Learning Agility", "I adjust how I work when project goals change."),
                likert("Adaptability and Learning Agility", "I pick up new tools or methods when they improve outcomes."),
                likert("Adaptability and Learning Agility", "I learn from setbacks and change my approach next time."),
                likert("Adaptability and Learning Agility", "I willingly take on unfamiliar tasks to build new skills."),
            ]
        });
        &QUESTIONS
    }
}

fn likert(subscale: &str, text: &str) -> Question {
    Question::likert(subscale, text, false)
}
