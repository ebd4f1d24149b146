use serde::Serialize;

/// A statically authored message in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub en: &'static str,
    pub ur: &'static str,
}

/// Ordered insight / recommendation lists. `insights[i]` pairs with
/// `recommendations[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsightBundle {
    pub insights: Vec<Message>,
    pub recommendations: Vec<Message>,
}

impl InsightBundle {
    pub fn push(&mut self, insight: Message, recommendation: Message) {
        self.insights.push(insight);
        self.recommendations.push(recommendation);
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}
