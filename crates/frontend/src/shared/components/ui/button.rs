use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost) and an
/// optional loading state that shows a spinner and disables the control.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Loading state: shows a spinner and keeps the button disabled while
    /// an action is in flight
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), additional_class())
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || {
                if is_loading() {
                    Some(view! { <span class="button__spinner" aria-hidden="true"></span> })
                } else {
                    None
                }
            }}
            {children()}
        </button>
    }
}
