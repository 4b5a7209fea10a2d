use leptos::prelude::*;

/// Two-pane application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |          (Center)            |
/// +-----------+------------------------------+
/// ```
///
/// The sidebar stays in place while the content area scrolls.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    {left()}
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
