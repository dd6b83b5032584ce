//! Contact Page
//!
//! Tier-specific mailto cards, the direct email line, and the lead-capture
//! form. The form assembles a mailto URL from its fields and hands it to
//! the browser's mail handler; delivery happens outside this system.

use leptos::*;

use crate::components::{LinkButton, SectionTitle};
use crate::config;

const INTERESTS: [&str; 4] = ["Full Course", "Hotel Hack Only", "Concierge", "Other"];

/// Contact page component
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="Apply / Contact"
                title="Enroll, apply, or ask a question"
                desc="We\u{2019}ll guide you to the right entry point."
            />

            <section class="grid gap-4 lg:grid-cols-3">
                <ContactCard
                    icon="👑"
                    title="Full Course"
                    desc="Apply or purchase. Ask about founder pricing rules."
                    cta_label="Email"
                    href=config::mailto("Full Course - The Upgrade Society")
                />
                <ContactCard
                    icon="🛡"
                    title="Hotel Hack Only"
                    desc="$599 module. Quick ROI if you travel."
                    cta_label="Email"
                    href=config::mailto("Hotel Hack Only - The Upgrade Society")
                />
                <ContactCard
                    icon="🎟"
                    title="Concierge (Application-only)"
                    desc="$25,000 done-for-you. Limited roster."
                    cta_label="Request application"
                    href=config::mailto("Concierge Application Request - The Upgrade Society")
                />
            </section>

            <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
                <div class="grid gap-6 lg:grid-cols-2">
                    <DirectLine />
                    <LeadForm />
                </div>
            </section>

            <section class="text-xs text-neutral-500">
                "By contacting us, you acknowledge communications may be used to \
                 coordinate enrollment and service logistics."
            </section>
        </div>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    cta_label: &'static str,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <div class="rounded-[28px] border border-white/10 bg-white/5 p-6">
            <div class="flex h-12 w-12 items-center justify-center rounded-2xl bg-yellow-500/10">
                <span class="text-yellow-400" aria-hidden="true">{icon}</span>
            </div>
            <div class="mt-4 text-lg font-semibold">{title}</div>
            <div class="mt-2 text-sm text-neutral-300">{desc}</div>
            <div class="mt-5">
                <LinkButton href=href>{cta_label}</LinkButton>
            </div>
        </div>
    }
}

#[component]
fn DirectLine() -> impl IntoView {
    view! {
        <div>
            <div class="text-sm font-semibold">"Direct"</div>
            <div class="mt-4 space-y-3 text-sm text-neutral-300">
                <div class="flex items-center gap-3">
                    <span class="text-yellow-400" aria-hidden="true">"✉"</span>
                    <a class="hover:underline" href=format!("mailto:{}", config::BRAND.email)>
                        {config::BRAND.email}
                    </a>
                </div>
            </div>
            <div class="mt-6 rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                <div class="text-sm font-semibold">"Quick note"</div>
                <p class="mt-2 text-sm text-neutral-300">
                    "If you\u{2019}re asking about private aviation, include your route, \
                     dates, and flexibility window."
                </p>
            </div>
        </div>
    }
}

/// Mailto URL for a lead-form submission.
fn lead_mailto_url(name: &str, email: &str, interest: &str, message: &str) -> String {
    let subject = format!("{} - {}", interest, config::BRAND.name);
    let body = format!(
        "Name: {}\nEmail: {}\nInterested in: {}\n\n{}",
        name, email, interest, message
    );
    config::mailto_with_body(&subject, &body)
}

fn open_mailto(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[component]
fn LeadForm() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (interest, set_interest) = create_signal(INTERESTS[0].to_string());
    let (message, set_message) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let url = lead_mailto_url(&name.get(), &email.get(), &interest.get(), &message.get());
        open_mailto(&url);

        set_status.set(Some("Opening your mail app\u{2026}".to_string()));
        gloo_timers::callback::Timeout::new(4000, move || {
            set_status.set(None);
        })
        .forget();
    };

    view! {
        <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-6">
            <div class="text-sm font-semibold">"Lead form"</div>
            <p class="mt-2 text-sm text-neutral-400">
                "This form opens your mail client with everything pre-filled. No server, \
                 no tracking."
            </p>
            <form class="mt-4 space-y-3" on:submit=on_submit>
                <label class="block">
                    <div class="text-xs font-semibold uppercase tracking-widest text-neutral-400">
                        "Name"
                    </div>
                    <input
                        name="name"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </label>
                <label class="block">
                    <div class="text-xs font-semibold uppercase tracking-widest text-neutral-400">
                        "Email"
                    </div>
                    <input
                        name="email"
                        type="email"
                        placeholder="you@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </label>
                <label class="block">
                    <div class="text-xs font-semibold uppercase tracking-widest text-neutral-400">
                        "I\u{2019}m interested in"
                    </div>
                    <select
                        name="type"
                        on:change=move |ev| set_interest.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    >
                        {INTERESTS.iter().map(|option| view! {
                            <option value=*option class="bg-neutral-900">{*option}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="block">
                    <div class="text-xs font-semibold uppercase tracking-widest text-neutral-400">
                        "Message"
                    </div>
                    <textarea
                        name="message"
                        placeholder="What outcome are you trying to unlock?"
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </label>
                <button
                    type="submit"
                    class="inline-flex w-full items-center justify-center gap-2 rounded-2xl
                           bg-yellow-500 px-4 py-2 text-sm font-semibold text-neutral-950
                           hover:bg-yellow-400"
                >
                    "Send"
                </button>
            </form>

            {move || status.get().map(|text| view! {
                <div class="mt-3 text-sm text-yellow-400">{text}</div>
            })}
        </div>
    }
}

const FIELD_CLASS: &str = "mt-1 w-full rounded-2xl border border-white/10 bg-white/5 px-4 py-2 \
                           text-sm text-white placeholder:text-neutral-500 focus:outline-none \
                           focus:ring-2 focus:ring-yellow-500/30";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_mailto_url_encodes_fields() {
        let url = lead_mailto_url("Jo Doe", "jo@example.com", "Full Course", "Hello there");
        assert!(url.starts_with("mailto:support@theupgradesociety.com?subject="));
        assert!(url.contains("subject=Full%20Course%20-%20THE%20UPGRADE%20SOCIETY"));
        assert!(url.contains("Name%3A%20Jo%20Doe"));
        assert!(url.contains("Email%3A%20jo%40example.com"));
        assert!(url.contains("Hello%20there"));
    }

    #[test]
    fn test_lead_mailto_url_keeps_blank_fields_harmless() {
        let url = lead_mailto_url("", "", "Other", "");
        assert!(url.contains("subject=Other%20-%20THE%20UPGRADE%20SOCIETY"));
        assert!(!url.contains(' '));
    }
}
