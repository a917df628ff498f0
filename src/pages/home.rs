//! Landing page: hero, course catalog teaser, and leaderboard.

use leptos::prelude::*;

use crate::components::catalog::CourseCatalog;
use crate::components::leaderboard::LeaderboardSection;

/// Public landing page. Works identically for signed-in and signed-out
/// visitors; only the header regions differ.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <h1 class="hero__title">"SkillForge"</h1>
            <p class="hero__tagline">
                "Level up real-world coding skills: courses, achievements, and a ladder to climb."
            </p>
        </section>
        <CourseCatalog/>
        <LeaderboardSection/>
    }
}
