//! Loading Component

use leptos::*;

/// Spinner shown until the first activity list arrives
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <span>"Loading activities..."</span>
        </div>
    }
}
