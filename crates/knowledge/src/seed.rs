//! Built-in FAQ set for the student sublease marketplace.

use crate::types::{FaqRecord, KnowledgeBase};

/// Category labels of the built-in set, in display order (without "All").
pub const BUILTIN_CATEGORIES: [&str; 10] = [
    "Listing",
    "Documentation",
    "Payment",
    "Students",
    "Verification",
    "Support",
    "Timing",
    "Eligibility",
    "Utilities",
    "Cancellation",
];

/// The records of the built-in set.
pub fn builtin_records() -> Vec<FaqRecord> {
    vec![
        FaqRecord::new(
            "1",
            "How do I list my property for sublease?",
            "To list your property, go to the 'Post Sublease' section in your dashboard. Fill out the property details, upload photos, set your price and availability dates. Make sure to include accurate information to attract the right tenants.",
            "Listing",
            &["list", "post", "property", "sublease", "upload", "photos"],
        ),
        FaqRecord::new(
            "2",
            "What documents do I need to sublease my apartment?",
            "You'll typically need: your original lease agreement, landlord permission (if required), sublease agreement template, tenant screening documents, and proof of your right to sublease. Check with your landlord first!",
            "Documentation",
            &["documents", "lease", "agreement", "landlord", "permission", "screening"],
        ),
        FaqRecord::new(
            "3",
            "How does the payment system work?",
            "We use secure payment processing. Tenants pay through our platform, and funds are released to property owners after successful check-in. We charge a small service fee for payment processing and platform maintenance.",
            "Payment",
            &["payment", "money", "fee", "secure", "processing", "funds"],
        ),
        FaqRecord::new(
            "4",
            "Can I sublease if I'm a student?",
            "Yes! Many students sublease their apartments during summer breaks or when studying abroad. Just make sure you have permission from your landlord and that subleasing is allowed in your lease agreement.",
            "Students",
            &["student", "summer", "break", "study abroad", "university", "college"],
        ),
        FaqRecord::new(
            "5",
            "How do I verify potential tenants?",
            "We provide tenant verification tools including background checks, income verification, and references. You can also request video calls and additional documentation before finalizing any agreement.",
            "Verification",
            &["verify", "background check", "income", "references", "video call", "tenant"],
        ),
        FaqRecord::new(
            "6",
            "What if there's a problem during the sublease?",
            "Our support team is here to help resolve any issues. We also provide dispute resolution services and can connect you with legal resources if needed. Always document any problems and contact us immediately.",
            "Support",
            &["problem", "issue", "dispute", "support", "help", "legal"],
        ),
        FaqRecord::new(
            "7",
            "How far in advance should I post my sublease?",
            "We recommend posting 30-60 days in advance for best results. This gives potential tenants time to plan and increases your chances of finding the right match. For summer subleases, start posting in March/April.",
            "Timing",
            &["advance", "timing", "when", "post", "summer", "plan"],
        ),
        FaqRecord::new(
            "8",
            "Are there any restrictions on who can sublease?",
            "Sublease eligibility depends on your original lease terms and local laws. Generally, you need landlord permission and the subtenant must meet basic requirements. We help facilitate the approval process.",
            "Eligibility",
            &["restrictions", "eligibility", "requirements", "approval", "laws"],
        ),
        FaqRecord::new(
            "9",
            "How do I handle utilities and other bills?",
            "You can include utilities in your sublease price or have the subtenant pay directly. Clearly specify this in your listing and sublease agreement. Many choose to include utilities for simplicity.",
            "Utilities",
            &["utilities", "bills", "electricity", "water", "internet", "include"],
        ),
        FaqRecord::new(
            "10",
            "Can I cancel a sublease agreement?",
            "Cancellation policies depend on the terms in your sublease agreement. We recommend including reasonable cancellation terms for both parties. Emergency cancellations may be possible with proper documentation.",
            "Cancellation",
            &["cancel", "cancellation", "terminate", "emergency", "policy"],
        ),
    ]
}

impl KnowledgeBase {
    /// The built-in marketplace FAQ set.
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_records(), &BUILTIN_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let base = KnowledgeBase::builtin();
        assert_eq!(base.len(), 10);
        assert_eq!(base.categories().len(), 11);
        assert_eq!(base.categories()[0], "All");

        let ids: Vec<&str> = base.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let categories = BUILTIN_CATEGORIES.iter().map(|c| c.to_string()).collect();
        let validated = KnowledgeBase::new(builtin_records(), Some(categories)).unwrap();
        assert_eq!(validated, KnowledgeBase::builtin());
    }

    #[test]
    fn test_every_builtin_category_is_used() {
        let base = KnowledgeBase::builtin();
        for category in BUILTIN_CATEGORIES {
            assert!(
                base.records().iter().any(|r| r.category == category),
                "category {} has no record",
                category
            );
        }
    }
}
