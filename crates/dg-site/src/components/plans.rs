//! Pricing section building blocks

use dg_core::Plan;
use leptos::*;

#[component]
pub fn TabButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let class = move || {
        let style = if active.get() {
            "bg-green-500 text-white shadow-[0_0_15px_rgba(34,197,94,0.5)]"
        } else {
            "bg-transparent text-white border-2 border-green-400"
        };
        format!("px-6 py-2 rounded-full font-semibold transition-all duration-300 {}", style)
    };

    view! {
        <button class=class on:click=move |_| on_click.call(())>
            {label}
        </button>
    }
}

/// One selectable row of the plan list
#[component]
pub fn PackOption(
    plan: &'static Plan,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_select: Callback<&'static Plan>,
) -> impl IntoView {
    let class = move || {
        let style = if selected.get() {
            "bg-green-400/20 border-green-400 shadow-[0_0_15px_rgba(34,197,94,0.3)]"
        } else {
            "bg-black/30 border-green-400/20 hover:border-green-400"
        };
        format!("flex items-center gap-4 p-4 rounded-lg border transition-all duration-300 cursor-pointer {}", style)
    };

    view! {
        <div class=class on:click=move |_| on_select.call(plan)>
            <div class="flex-1">
                <h4 class="font-semibold text-white">{plan.name}</h4>
                <p class="text-sm text-gray-400">{plan.blurb}</p>
            </div>
            <div class="text-right">
                <p class="font-bold text-xl text-green-400">{plan.price.to_string()}</p>
                <p class="text-xs text-gray-500">{format!("{} / unidad", plan.price_per_unit())}</p>
            </div>
        </div>
    }
}
