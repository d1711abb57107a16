//! Seed collection used when no catalog has been persisted yet

use crate::entry::{CatalogEntry, EntryId};
use crate::user::{User, UserRole};

/// The default signed-in user
pub fn default_user() -> User {
    User::new(
        "u1",
        "Alex Engineer",
        "https://picsum.photos/seed/alex/200/200",
        UserRole::Engineer,
    )
}

/// The two starter entries, timestamped relative to `now`
pub fn seed_entries(now: u64) -> Vec<CatalogEntry> {
    let alex = default_user();
    let sarah = User {
        id: "u2".to_string(),
        name: "Sarah Lead".to_string(),
        ..alex.clone()
    };

    vec![
        CatalogEntry {
            id: EntryId::new("1"),
            title: "Sales Dashboard Layout".to_string(),
            description: "A responsive grid layout for sales data visualization with dark mode \
                          support."
                .to_string(),
            prompt: "Create a React dashboard with a sidebar navigation, a top bar with search, \
                     and a main content area displaying 4 charts using Recharts. The theme \
                     should be dark mode by default using Tailwind CSS. Include a \"Revenue\" \
                     line chart, \"User Growth\" bar chart, and \"Traffic Source\" pie chart."
                .to_string(),
            tags: tags(&["dashboard", "react", "recharts", "tailwind"]),
            builder_url: None,
            deployed_url: None,
            author: alex,
            created_at: now.saturating_sub(10_000_000),
            updated_at: now.saturating_sub(10_000_000),
            version: 1,
            likes: 5,
            ai_summary: Some(
                "Responsive dark-mode sales dashboard with Recharts visualization.".to_string(),
            ),
            ai_rating: Some(4),
        },
        CatalogEntry {
            id: EntryId::new("2"),
            title: "JWT Auth Middleware".to_string(),
            description: "Node.js Express middleware for handling JWT verification.".to_string(),
            prompt: "Write a robust Express.js middleware function in TypeScript to verify JSON \
                     Web Tokens. It should handle token expiration, invalid signatures, and \
                     extract the user payload to the request object. Include error handling \
                     for 401 and 403 scenarios."
                .to_string(),
            tags: tags(&["backend", "security", "express", "typescript"]),
            builder_url: None,
            deployed_url: None,
            author: sarah,
            created_at: now.saturating_sub(5_000_000),
            updated_at: now,
            version: 2,
            likes: 12,
            ai_summary: Some(
                "Express.js middleware for secure JWT verification and error handling.".to_string(),
            ),
            ai_rating: Some(7),
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}
