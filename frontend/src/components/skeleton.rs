use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Sizing and shape classes, e.g. `h-6 w-3/4 rounded-full`.
    #[prop_or_default]
    pub class: Classes,
}

/// Pulsing placeholder block shown while data is loading.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div
            class={classes!(
                "animate-pulse",
                "rounded-md",
                "bg-[var(--surface-alt)]",
                props.class.clone()
            )}
            aria-hidden="true"
        />
    }
}
