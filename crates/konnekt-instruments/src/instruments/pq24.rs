use crate::scoring::Question;
use crate::Instrument;

/// PQ24: 24-item Personality Questionnaire.
/// Six subscales of four items each, interleaved. Five items are reverse
/// keyed and score as `6 - response`.
pub struct Pq24;

impl Instrument for Pq24 {
    fn category(&self) -> &str {
        "myndkonnekt_personality"
    }

    fn title(&self) -> &str {
        "Personality Questionnaire (PQ24)"
    }

    fn description(&self) -> &str {
        "Measures personality traits across 6 subscales using a Likert 1-5 scale."
    }

    fn time_limit_minutes(&self) -> u32 {
        25
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                likert("Leadership Drive", "I enjoy taking charge when a group needs direction."),
                likert("Team Orientation", "I prefer to work together with others to reach a decision rather than decide alone."),
                likert("Cognitive Flexibility", "I quickly adapt my approach when plans change."),
                likert("Conscientiousness", "I keep my work area and schedule well organized."),
                likert("Emotional Resilience", "I stay calm and focused when unexpected problems arise."),
                likert("Communication Style", "I explain my ideas clearly so others can follow them."),
                likert("Leadership Drive", "I look for opportunities to lead even if it means extra responsibility."),
                reversed("Team Orientation", "I sometimes put my own priorities ahead of the team’s needs."),
                likert("Cognitive Flexibility", "I enjoy trying new methods or tools to solve a problem."),
                likert("Conscientiousness", "I complete tasks on or before the agreed deadline."),
                reversed("Emotional Resilience", "I feel overwhelmed by stress and lose effectiveness."),
                likert("Communication Style", "I tailor how I communicate depending on who I’m speaking with."),
                likert("Leadership Drive", "I prefer being the person who defines goals and delegates tasks."),
                likert("Team Orientation", "I actively help colleagues who are behind, even if it delays me."),
                likert("Cognitive Flexibility", "I can hold multiple hypotheses in mind and change tack if evidence suggests."),
                likert("Conscientiousness", "I double-check my work and follow established procedures."),
                likert("Emotional Resilience", "I recover quickly after setbacks and stay optimistic."),
                likert("Communication Style", "I make my thoughts known even when the group is divided."),
                reversed("Leadership Drive", "I find it hard to let go of control and usually insist on my plan."),
                likert("Team Orientation", "I prefer to resolve conflicts privately rather than ignore them."),
                likert("Cognitive Flexibility", "I enjoy complex, ambiguous problems where rules aren’t clear."),
                reversed("Conscientiousness", "I sometimes delay or procrastinate on important tasks."),
                reversed("Emotional Resilience", "I allow negative emotions to affect my decisions under pressure."),
                likert("Communication Style", "I adapt my tone and level of detail to the listener."),
            ]
        });
        &QUESTIONS
    }
}

fn likert(subscale: &str, text: &str) -> Question {
    Question::likert(subscale, text, false)
}

fn reversed(subscale: &str, text: &str) -> Question {
    Question::likert(subscale, text, true)
}
