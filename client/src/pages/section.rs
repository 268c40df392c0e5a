//! Titled section page used by the fixed routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn SectionPage(title: &'static str, #[prop(optional)] summary: Option<&'static str>) -> impl IntoView {
    view! {
        <Title text=format!("{title} · HorarioUCF") />
        <section class="section-page">
            <h2 class="section-page__title">{title}</h2>
            {summary.map(|text| view! { <p class="section-page__summary">{text}</p> })}
        </section>
    }
}
