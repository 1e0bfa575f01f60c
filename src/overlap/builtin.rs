//! Curated overlap table shipped with the crate.

use super::TopicMapping;
use crate::model::FrameworkId::{self, BsiC5, Gdpr, Nis2};

/// One direction of each pair; the reverse direction is derived with the
/// same percentage.
const PAIRS: &[(FrameworkId, &str, FrameworkId, &str, f64)] = &[
    (Nis2, "incident-handling", Gdpr, "breach-notification", 60.0),
    (Nis2, "risk-management", Gdpr, "security-of-processing", 50.0),
    (Nis2, "supply-chain-security", Gdpr, "processors", 40.0),
    (Nis2, "governance", Gdpr, "accountability", 45.0),
    (Nis2, "risk-management", BsiC5, "organisation-of-information-security", 70.0),
    (Nis2, "incident-handling", BsiC5, "security-incident-management", 85.0),
    (Nis2, "business-continuity", BsiC5, "business-continuity-management", 80.0),
    (Nis2, "supply-chain-security", BsiC5, "supplier-management", 75.0),
    (Nis2, "cryptography", BsiC5, "cryptography-and-key-management", 90.0),
    (Nis2, "access-control", BsiC5, "identity-and-access-management", 85.0),
    (Gdpr, "security-of-processing", BsiC5, "operations", 55.0),
    (Gdpr, "breach-notification", BsiC5, "security-incident-management", 65.0),
    (Gdpr, "processors", BsiC5, "supplier-management", 50.0),
];

pub(super) fn mappings() -> Vec<TopicMapping> {
    PAIRS
        .iter()
        .flat_map(|&(from, from_topic, to, to_topic, percent)| {
            [
                TopicMapping {
                    from,
                    from_topic: from_topic.to_string(),
                    to,
                    to_topic: to_topic.to_string(),
                    percent,
                },
                TopicMapping {
                    from: to,
                    from_topic: to_topic.to_string(),
                    to: from,
                    to_topic: from_topic.to_string(),
                    percent,
                },
            ]
        })
        .collect()
}
