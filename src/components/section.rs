//! Section Title Component

use leptos::*;

/// Eyebrow / title / description header used at the top of page sections.
#[component]
pub fn SectionTitle(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] desc: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            {eyebrow.map(|text| view! {
                <div class="text-xs font-semibold uppercase tracking-widest text-yellow-400">
                    {text}
                </div>
            })}
            <div class="mt-2 text-3xl font-semibold tracking-tight sm:text-4xl">{title}</div>
            {desc.map(|text| view! {
                <div class="mt-3 max-w-2xl text-neutral-300">{text}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eyebrow_and_desc_props_are_optional() {
        let props = SectionTitleProps::builder().title("Members portal").build();
        assert_eq!(props.eyebrow, None);
        assert_eq!(props.desc, None);
    }

    #[test]
    fn test_eyebrow_and_desc_props_accept_plain_strings() {
        let props = SectionTitleProps::builder()
            .title("Choose your level of access")
            .eyebrow("Pricing")
            .desc("Learn the system, or have it executed for you.")
            .build();
        assert_eq!(props.eyebrow, Some("Pricing"));
        assert_eq!(
            props.desc,
            Some("Learn the system, or have it executed for you.")
        );
    }
}
