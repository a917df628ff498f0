//! Course catalog teaser for the landing page.

use leptos::prelude::*;

/// A featured course card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Courses highlighted on the landing page.
pub fn featured_courses() -> Vec<CourseCard> {
    vec![
        CourseCard {
            title: "Python Basics",
            blurb: "Syntax, data types, and your first scripts.",
        },
        CourseCard {
            title: "Cybersecurity Foundations",
            blurb: "Threat models, hygiene, and how attacks actually work.",
        },
        CourseCard {
            title: "Web Development",
            blurb: "From markup to deployed apps.",
        },
    ]
}

/// Catalog teaser section.
#[component]
pub fn CourseCatalog() -> impl IntoView {
    let courses = featured_courses();

    view! {
        <section class="catalog" id="courses">
            <h2>"Courses"</h2>
            <div class="catalog__grid">
                {courses
                    .into_iter()
                    .map(|course| {
                        view! {
                            <div class="catalog__card">
                                <h3>{course.title}</h3>
                                <p>{course.blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
