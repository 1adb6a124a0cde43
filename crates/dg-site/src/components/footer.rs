//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black border-t border-green-400/30 text-white py-8">
            <div class="container mx-auto px-4 text-center">
                <p>"© 2025 DryGripPro. Todos los derechos reservados."</p>
            </div>
        </footer>
    }
}
