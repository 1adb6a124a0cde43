//! Main application component

use dg_core::routes::{CHECKOUT_PATH, HOME_PATH};
use leptos::*;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-black">
                <main>
                    <Routes>
                        <Route path=HOME_PATH view=HomePage/>
                        <Route path=CHECKOUT_PATH view=CheckoutPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
