//! Checkout page

use dg_core::routes::{HOME_PATH, PLAN_QUERY_KEY};
use dg_core::CheckoutSelection;
use leptos::*;
use leptos_router::*;

const PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1627384113743-6bd5a479fffd?auto=format&fit=crop&q=80&w=500";

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let query = use_query_map();
    let plan_param = create_memo(move |_| query.with(|q| q.get(PLAN_QUERY_KEY).cloned()));
    let checkout = create_rw_signal(CheckoutSelection::from_plan_param(
        plan_param.get_untracked().as_deref(),
    ));

    // History moves between checkout URLs reuse this component.
    create_effect(move |_| {
        let param = plan_param.get();
        checkout.update(|c| c.follow_plan_param(param.as_deref()));
    });

    let plan_name = move || checkout.with(|c| c.plan().name);
    let plan_price = move || checkout.with(|c| c.plan().price.to_string());
    let unit_label = move || checkout.with(|c| c.unit_label());

    let apply = move || {
        checkout.update(|c| {
            c.apply_draft();
        })
    };

    let applied_message = move || {
        checkout.with(|c| {
            c.applied().map(|code| {
                format!("¡Código de {} aplicado! {} de descuento", code.endorser, code.discount)
            })
        })
    };

    view! {
        <div class="min-h-screen bg-black py-12">
            <div class="container mx-auto px-4">
                <a href=HOME_PATH class="text-green-400 hover:text-green-300 mb-8 flex items-center gap-2">
                    "← Volver"
                </a>

                <div class="max-w-4xl mx-auto bg-black/50 rounded-xl border-2 border-green-400/30 p-8">
                    <h1 class="text-4xl font-bold text-green-400 mb-8">"Finalizar Compra"</h1>

                    <div class="grid md:grid-cols-2 gap-8">
                        // Product
                        <div class="space-y-6">
                            <img
                                src=PRODUCT_IMAGE
                                alt="DryGripPro Spray"
                                class="w-full rounded-lg border-2 border-green-400/30"
                            />
                            <div class="bg-black/30 p-4 rounded-lg border border-green-400/20">
                                <h3 class="font-semibold text-white mb-2">"Descripción del Producto"</h3>
                                <p class="text-gray-400">
                                    "Spray anti-sudor premium para un agarre perfecto durante todo tu partido. "
                                    "Efecto duradero hasta 4 horas."
                                </p>
                            </div>
                        </div>

                        // Order
                        <div class="space-y-6">
                            <div class="flex items-center justify-between p-4 bg-black/30 rounded-lg border border-green-400/20">
                                <div>
                                    <h3 class="text-xl font-semibold text-white">{plan_name}</h3>
                                    <p class="text-gray-400">"Spray Anti-sudor Premium"</p>
                                    <p class="text-sm text-green-400 mt-1">{unit_label}</p>
                                </div>
                                <p class="text-xl font-bold text-green-400">{plan_price}</p>
                            </div>

                            <div class="space-y-4">
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        placeholder="Código de referido"
                                        class="flex-1 bg-black/30 border border-green-400/20 rounded-lg px-4 py-2 text-white focus:outline-none focus:border-green-400"
                                        prop:value=move || checkout.with(|c| c.draft().to_string())
                                        on:input=move |ev| checkout.update(|c| c.set_draft(&event_target_value(&ev)))
                                        on:keydown=move |ev: ev::KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                apply();
                                            }
                                        }
                                    />
                                    <button
                                        class="bg-green-500 text-white px-4 py-2 rounded-lg font-semibold hover:bg-green-600 transition-all duration-300 flex items-center gap-2"
                                        on:click=move |_| apply()
                                    >
                                        "🏷️ Aplicar"
                                    </button>
                                </div>
                                <Show when=move || checkout.with(|c| c.applied().is_some())>
                                    <div class="text-green-400 text-sm">{applied_message}</div>
                                </Show>
                            </div>

                            <div class="border-t border-green-400/30 pt-6">
                                <div class="flex justify-between text-xl font-bold">
                                    <span class="text-white">"Total:"</span>
                                    <span class="text-green-400">{move || checkout.with(|c| c.total().to_string())}</span>
                                </div>
                            </div>

                            <button class="w-full bg-green-500 text-white px-6 py-3 rounded-full font-semibold hover:bg-green-600 transition-all duration-300">
                                "Proceder al Pago"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
