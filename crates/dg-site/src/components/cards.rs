//! Card components for the landing page

use leptos::*;

const STAR_COUNT: u8 = 5;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center p-6 rounded-xl bg-black/50 border-2 border-green-400/30 hover:border-green-400 transition-all duration-300">
            <div class="text-5xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2 text-white">{title}</h3>
            <p class="text-gray-300">{description}</p>
        </div>
    }
}

/// Five stars, the first `rating` of them lit
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="flex gap-1" aria-label=format!("{} de {}", rating.min(STAR_COUNT), STAR_COUNT)>
            {(0..STAR_COUNT).map(|i| {
                let style = if i < rating { "text-green-400" } else { "text-gray-600" };
                view! { <span class=format!("text-lg {}", style)>"★"</span> }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    image: &'static str,
    author: &'static str,
    review: &'static str,
    #[prop(default = 5)] rating: u8,
) -> impl IntoView {
    view! {
        <div class="bg-black/50 p-6 rounded-xl border border-green-400/30 hover:border-green-400 transition-all duration-300">
            <div class="flex items-start gap-4">
                <img src=image alt=author class="w-16 h-16 rounded-full object-cover"/>
                <div>
                    <h3 class="font-semibold text-lg text-white">{author}</h3>
                    <StarRating rating=rating/>
                    <p class="mt-2 text-gray-300">"\""{review}"\""</p>
                </div>
            </div>
        </div>
    }
}
