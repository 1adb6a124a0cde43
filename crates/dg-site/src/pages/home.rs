//! Landing page

use dg_core::{CatalogTab, CheckoutRequest, Plan, PlanSelector};
use leptos::*;
use leptos_router::*;

use crate::components::*;

const HERO_IMAGE: &str = "https://i.pinimg.com/originals/cb/37/65/cb37659c78ec90cb1906b98d12a6a495.jpg";
const VIDEO_EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";
const PLANS_ANCHOR: &str = "planes";

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let selector = create_rw_signal(PlanSelector::new());

    let buy_now = move |_| navigate(&CheckoutRequest::default().to_path(), Default::default());
    let show_business = move |_| selector.update(|s| s.show(CatalogTab::Business));

    view! {
        <div class="min-h-screen bg-black">
            // Hero
            <section class="relative h-screen flex items-center justify-center overflow-hidden">
                <div class="absolute inset-0">
                    <img src=HERO_IMAGE alt="Padel court background" class="w-full h-full object-cover opacity-30"/>
                </div>
                <div class="container mx-auto px-4 text-center relative z-10">
                    <h1 class="text-6xl font-bold text-green-400 mb-6">"DryGripPro"</h1>
                    <p class="text-2xl text-white mb-8">
                        "El spray revolucionario que mantiene tus manos secas durante todo el partido"
                    </p>
                    <div class="flex justify-center gap-4">
                        <button
                            class="bg-green-600 text-white px-8 py-4 rounded-full font-semibold hover:bg-green-500 transition-all duration-300 flex items-center gap-2"
                            on:click=buy_now
                        >
                            "Comprar Ahora 🛒"
                        </button>
                        <a
                            href=format!("#{}", PLANS_ANCHOR)
                            class="bg-transparent text-white px-8 py-4 rounded-full font-semibold border-2 border-green-400 hover:bg-green-400/10 transition-all duration-300 flex items-center gap-2"
                            on:click=show_business
                        >
                            "Para Empresas 🏢"
                        </a>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-black">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-green-400 mb-16">
                        "Características Principales"
                    </h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="💧"
                            title="Larga Duración"
                            description="Hasta 4 horas de efecto anti-sudor garantizado"
                        />
                        <FeatureCard
                            icon="🏆"
                            title="Usado por Profesionales"
                            description="Elegido por los mejores jugadores del circuito"
                        />
                        <FeatureCard
                            icon="👥"
                            title="Para Todos los Niveles"
                            description="Perfecto tanto para principiantes como expertos"
                        />
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-black/80">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-green-400 mb-16">
                        "Lo que dicen nuestros usuarios"
                    </h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        <TestimonialCard
                            image="https://images.unsplash.com/photo-1628890923662-2cb23c2e0cfe?auto=format&fit=crop&q=80&w=200"
                            author="María García"
                            review="Increíble producto. Ya no tengo que preocuparme por el agarre durante los partidos."
                        />
                        <TestimonialCard
                            image="https://images.unsplash.com/photo-1607990281513-2c110a25bd8c?auto=format&fit=crop&q=80&w=200"
                            author="Carlos Rodríguez"
                            review="DryGripPro ha mejorado mi juego significativamente. ¡Lo recomiendo!"
                        />
                    </div>
                </div>
            </section>

            // Plans
            <section id=PLANS_ANCHOR class="py-20 bg-black">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-green-400 mb-8">"Elige tu Plan"</h2>
                    <div class="flex justify-center gap-4 mb-16">
                        <TabButton
                            label=CatalogTab::Players.label()
                            active=Signal::derive(move || selector.with(|s| s.tab() == CatalogTab::Players))
                            on_click=move |_: ()| selector.update(|s| s.show(CatalogTab::Players))
                        />
                        <TabButton
                            label=CatalogTab::Business.label()
                            active=Signal::derive(move || selector.with(|s| s.tab() == CatalogTab::Business))
                            on_click=move |_: ()| selector.update(|s| s.show(CatalogTab::Business))
                        />
                    </div>
                    <div class="max-w-2xl mx-auto mb-16 border-2 border-green-400/30 rounded-xl p-8 bg-black/50">
                        <Show
                            when=move || selector.with(|s| s.tab() == CatalogTab::Players)
                            fallback=move || view! { <BusinessPacks selector=selector/> }
                        >
                            <PlayerPacks selector=selector/>
                        </Show>
                    </div>
                </div>
            </section>

            // Video
            <section class="py-20 bg-black">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-green-400 mb-16">
                        "Mira DryGripPro en acción"
                    </h2>
                    <div class="aspect-video max-w-4xl mx-auto rounded-xl overflow-hidden shadow-2xl border-2 border-green-400/30">
                        <iframe
                            width="100%"
                            height="100%"
                            src=VIDEO_EMBED
                            title="DryGripPro en acción"
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                            class="w-full h-full"
                        ></iframe>
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Packs of one tab, each row bound to the shared selection
fn pack_list(tab: CatalogTab, selector: RwSignal<PlanSelector>) -> impl IntoView {
    tab.packs()
        .iter()
        .map(|plan| {
            view! {
                <PackOption
                    plan=plan
                    selected=Signal::derive(move || selector.with(|s| s.is_selected(plan)))
                    on_select=move |plan: &'static Plan| selector.update(|s| s.select(plan))
                />
            }
        })
        .collect_view()
}

#[component]
fn PlayerPacks(selector: RwSignal<PlanSelector>) -> impl IntoView {
    let navigate = use_navigate();
    let can_purchase = move || selector.with(|s| s.can_purchase());

    // Nothing purchasable selected, no navigation.
    let purchase = move |_| {
        if let Some(request) = selector.with_untracked(|s| s.purchase()) {
            navigate(&request.to_path(), Default::default());
        }
    };

    let button_class = move || {
        let style = if can_purchase() {
            "bg-green-500 text-white hover:bg-green-600"
        } else {
            "bg-gray-600 text-gray-300 cursor-not-allowed"
        };
        format!("w-full mt-6 px-6 py-3 rounded-full font-semibold transition-all duration-300 flex items-center justify-center gap-2 {}", style)
    };

    view! {
        <h3 class="text-2xl font-bold text-green-400 mb-4">"Para Jugadores"</h3>
        <div class="space-y-4">
            {pack_list(CatalogTab::Players, selector)}
        </div>
        <button class=button_class aria-disabled=move || (!can_purchase()).to_string() on:click=purchase>
            "Comprar Ahora ›"
        </button>
    }
}

#[component]
fn BusinessPacks(selector: RwSignal<PlanSelector>) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold text-green-400 mb-4">"Para Empresas"</h3>
        <div class="space-y-4">
            {pack_list(CatalogTab::Business, selector)}
        </div>
        <button class="w-full mt-6 bg-transparent text-white px-6 py-3 rounded-full font-semibold border-2 border-green-400 hover:bg-green-400/10 transition-all duration-300 flex items-center justify-center gap-2">
            "Contactar 🏢"
        </button>
    }
}
