//! About page: short bio and skill groups.

use leptos::prelude::*;

const SKILL_GROUPS: [(&str, &[&str]); 3] = [
    ("Frontend", &["Rust / Leptos", "TypeScript", "CSS"]),
    ("Backend", &["Axum", "PostgreSQL", "Redis"]),
    ("Tooling", &["Git", "Docker", "CI/CD"]),
];

/// About page with bio copy and a static skills grid.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Me"</h1>
            <p class="about-page__bio">
                "I'm a software developer who enjoys shipping small, sharp tools. "
                "This site is both my portfolio and a playground for things I'm learning."
            </p>

            <h2>"Skills"</h2>
            <div class="about-page__skills">
                {SKILL_GROUPS
                    .into_iter()
                    .map(|(group, skills)| {
                        view! {
                            <div class="skill-group">
                                <h3>{group}</h3>
                                <ul>
                                    {skills
                                        .iter()
                                        .map(|s| view! { <li>{*s}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
