//! Insight Rules
//!
//! Ordered rule table: one rule per monitored failure condition, evaluated
//! in table order. NO evaluation logic here, only the policy data.

use super::types::Message;
use crate::logic::model::FailureLabel;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// A condition fires when its failure percentage is strictly above this
pub const INSIGHT_THRESHOLD: f64 = 50.0;

// ============================================================================
// RULE TABLE
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct InsightRule {
    pub condition: &'static str,
    pub label: FailureLabel,
    pub insight: Message,
    pub recommendation: Message,
}

/// Priority order: Power → Overstrain → Heat → Tool Wear
pub static INSIGHT_RULES: [InsightRule; 4] = [
    InsightRule {
        condition: "power",
        label: FailureLabel::Pwf,
        insight: Message {
            en: "The machine is using too much energy and might stop.",
            ur: "مشین بہت زیادہ بجلی استعمال کر رہی ہے اور رک سکتی ہے۔",
        },
        recommendation: Message {
            en: "Please lower the speed or the load immediately.",
            ur: "براہ کرم فوری طور پر رفتار یا بوجھ کم کریں۔",
        },
    },
    InsightRule {
        condition: "overstrain",
        label: FailureLabel::Osf,
        insight: Message {
            en: "The machine is under too much pressure.",
            ur: "مشین پر بہت زیادہ دباؤ ہے۔",
        },
        recommendation: Message {
            en: "Lower the torque or check the tool.",
            ur: "ٹارک کم کریں یا اوزار چیک کریں۔",
        },
    },
    InsightRule {
        condition: "heat",
        label: FailureLabel::Hdf,
        insight: Message {
            en: "The machine is getting too hot.",
            ur: "مشین بہت زیادہ گرم ہو رہی ہے۔",
        },
        recommendation: Message {
            en: "Check the cooling system or slow down the machine.",
            ur: "کولنگ سسٹم چیک کریں یا مشین کی رفتار کم کریں۔",
        },
    },
    InsightRule {
        condition: "tool_wear",
        label: FailureLabel::Twf,
        insight: Message {
            en: "The cutting tool is worn out.",
            ur: "مشین کا اوزار گھس گیا ہے۔",
        },
        recommendation: Message {
            en: "Change the tool head soon to avoid damage.",
            ur: "نقصان سے بچنے کے لیے جلد اوزار تبدیل کریں۔",
        },
    },
];

/// Emitted alone when no rule fires
pub const HEALTHY_INSIGHT: Message = Message {
    en: "Everything looks good! The machine is safe.",
    ur: "سب کچھ ٹھیک ہے! مشین محفوظ ہے۔",
};

pub const HEALTHY_RECOMMENDATION: Message = Message {
    en: "Keep working as usual.",
    ur: "معمول کے مطابق کام جاری رکھیں۔",
};
