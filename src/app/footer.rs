use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-background/50 py-12 px-6">
            <div class="max-w-7xl mx-auto text-center text-muted space-y-2">
                <p>"Built with Rust, Leptos, and Tailwind CSS"</p>
                <p class="text-sm mt-2">
                    {format!(
                        "© {} {} {}. All rights reserved.",
                        env!("BUILD_YEAR"),
                        PROFILE.first_name,
                        PROFILE.last_name,
                    )}
                </p>
            </div>
        </footer>
    }
}
