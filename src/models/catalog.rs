use std::collections::HashMap;

/// Canned interview questions keyed by role, then difficulty.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    pools: HashMap<String, HashMap<String, Vec<String>>>,
}

impl RoleCatalog {
    pub fn from_entries<I, R, D, Q>(entries: I) -> Self
    where
        I: IntoIterator<Item = (R, D, Vec<Q>)>,
        R: Into<String>,
        D: Into<String>,
        Q: Into<String>,
    {
        let mut pools: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        for (role, difficulty, questions) in entries {
            pools
                .entry(role.into())
                .or_default()
                .entry(difficulty.into())
                .or_default()
                .extend(questions.into_iter().map(Into::into));
        }
        Self { pools }
    }

    /// Pool for an exact `(role, difficulty)` pair. Lookup is case-sensitive.
    pub fn pool(&self, role: &str, difficulty: &str) -> Option<&[String]> {
        self.pools
            .get(role)
            .and_then(|by_difficulty| by_difficulty.get(difficulty))
            .map(Vec::as_slice)
            .filter(|pool| !pool.is_empty())
    }

    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "SDE",
                "Easy",
                vec![
                    "Explain the difference between a process and a thread.",
                    "What is Polymorphism? Give a real-world example.",
                    "Explain the concept of a Hash Map and its time complexity.",
                ],
            ),
            (
                "SDE",
                "Medium",
                vec![
                    "How would you design a URL shortening service like bit.ly?",
                    "Explain the difference between TCP and UDP.",
                    "What is a Deadlock and how can you prevent it?",
                ],
            ),
            (
                "SDE",
                "Hard",
                vec![
                    "Discuss the trade-offs between eventual consistency and strong consistency in distributed systems.",
                    "How would you design a rate limiter for a high-traffic API?",
                    "Explain the internal working of a Garbage Collector in your preferred language.",
                ],
            ),
            (
                "Data Analyst",
                "Easy",
                vec![
                    "What is the difference between WHERE and HAVING clauses in SQL?",
                    "Explain the difference between inner join, left join, and right join.",
                    "What are the different types of data visualization?",
                ],
            ),
            (
                "Data Analyst",
                "Medium",
                vec![
                    "Explain how you would handle missing data in a dataset.",
                    "What is the difference between correlation and causation?",
                    "How do you detect outliers in a dataset?",
                ],
            ),
            (
                "Data Analyst",
                "Hard",
                vec![
                    "Describe a time you found a significant insight in data that contradicted the business intuition.",
                    "How would you design an A/B test for a new feature?",
                    "Explain the concept of p-value to a non-technical audience.",
                ],
            ),
            (
                "SDET",
                "Easy",
                vec![
                    "What is the difference between black-box and white-box testing?",
                    "What is a regression test?",
                    "Explain the software testing life cycle (STLC).",
                ],
            ),
            (
                "SDET",
                "Medium",
                vec![
                    "How would you design an automated test suite for an e-commerce checkout flow?",
                    "What is the Page Object Model (POM) pattern?",
                    "Explain the difference between continuous integration and continuous deployment.",
                ],
            ),
            (
                "SDET",
                "Hard",
                vec![
                    "Explain how you would test a distributed system for race conditions.",
                    "How do you handle flaky tests in your automation suite?",
                    "Design a performance testing strategy for a microservices architecture.",
                ],
            ),
        ])
    }
}
