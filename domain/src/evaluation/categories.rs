//! Role → rating-category lookup table

use crate::interview::Role;

/// Category keys the summary prompt asks the provider to rate, per role
const ROLE_CATEGORIES: [(Role, &[&str]); 6] = [
    (
        Role::Frontend,
        &[
            "javascript",
            "framework_knowledge",
            "system_design",
            "communication",
        ],
    ),
    (
        Role::Backend,
        &[
            "java_knowledge",
            "spring_framework",
            "microservices",
            "database_design",
            "system_architecture",
        ],
    ),
    (
        Role::Product,
        &[
            "product_sense",
            "prioritization",
            "metrics",
            "communication",
        ],
    ),
    (
        Role::Business,
        &[
            "business_acumen",
            "data_analysis",
            "strategy",
            "communication",
        ],
    ),
    (
        Role::Qa,
        &[
            "test_strategy",
            "automation",
            "defect_analysis",
            "communication",
        ],
    ),
    (
        Role::Hr,
        &[
            "behavioral",
            "conflict_resolution",
            "culture_fit",
            "communication",
        ],
    ),
];

/// Expected category keys for a role
pub fn categories_for(role: Role) -> &'static [&'static str] {
    ROLE_CATEGORIES
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, keys)| *keys)
        .unwrap_or(ROLE_CATEGORIES[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_categories() {
        assert_eq!(
            categories_for(Role::Backend),
            &[
                "java_knowledge",
                "spring_framework",
                "microservices",
                "database_design",
                "system_architecture"
            ]
        );
    }

    #[test]
    fn test_frontend_categories() {
        assert_eq!(
            categories_for(Role::Frontend),
            &[
                "javascript",
                "framework_knowledge",
                "system_design",
                "communication"
            ]
        );
    }

    #[test]
    fn test_every_role_has_categories() {
        for role in Role::ALL {
            assert!(!categories_for(role).is_empty(), "{} has no categories", role);
        }
    }
}
