//! Program Page
//!
//! Curriculum overview: feature pills, module grid, and the designed-for
//! checklist card.

use leptos::*;

use crate::components::{ButtonVariant, LinkButton, SectionTitle};

/// Program page component
#[component]
pub fn Program() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="Program"
                title="The architecture of access, organized and repeatable"
                desc="This is not motivation. It is a playbook of outcomes, systems, and leverage that compound over time."
            />

            <section class="grid gap-4 lg:grid-cols-3">
                <Pill
                    icon="🛡"
                    title="Upgrade mindset"
                    desc="Outcome first. Status stacking. Flex windows. Track everything."
                />
                <Pill
                    icon="✦"
                    title="Quick wins"
                    desc="Start winning today. Loyalty ecosystems, status matches, and clean leverage."
                />
                <Pill
                    icon="🎬"
                    title="Docu style teaching"
                    desc="High production delivery designed to hold attention."
                />
            </section>

            <Curriculum />
        </div>
    }
}

#[component]
fn Pill(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-4 rounded-3xl border border-white/10 bg-white/5 p-5">
            <div class="flex h-11 w-11 shrink-0 items-center justify-center rounded-2xl bg-yellow-500/10">
                <span class="text-yellow-400" aria-hidden="true">{icon}</span>
            </div>
            <div class="min-w-0">
                <div class="text-sm font-semibold text-white">{title}</div>
                <div class="mt-1 text-sm text-neutral-400">{desc}</div>
            </div>
        </div>
    }
}

const MODULES: [(&str, &str); 6] = [
    ("Hotels", "Suite upgrades, status strategies, and rate leverage"),
    ("Flights + Points", "Business-class outcomes with smarter redemptions"),
    ("Private Aviation", "Private aviation pathways"),
    ("Elite Rentals", "Pay for economy, drive premium"),
    ("Fashion", "Luxury sourcing pathways"),
    ("Business Leverage", "Credit + funding frameworks to move faster"),
];

const DESIGNED_FOR: [&str; 4] = [
    "Entrepreneurs who value time",
    "Professionals who travel",
    "Principals building presence",
    "Anyone ready to execute",
];

#[component]
fn Curriculum() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="text-2xl font-semibold">"What is inside (high level)"</div>
                    <p class="mt-3 text-neutral-300">
                        "Hotels. Flights. Points strategy. Private aviation pathways. Elite \
                         rentals. Fashion sourcing. Business credit and funding strategy. \
                         Tax optimization frameworks. Additional releases inside the \
                         members portal."
                    </p>
                    <div class="mt-5 grid gap-2 sm:grid-cols-2">
                        {MODULES.iter().map(|(title, desc)| view! {
                            <div class="rounded-3xl border border-white/10 bg-white/5 p-4">
                                <div class="text-sm font-semibold">{*title}</div>
                                <div class="mt-1 text-sm text-neutral-400">{*desc}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                    <div class="text-sm font-semibold">"Designed for"</div>
                    <div class="mt-3 space-y-2 text-sm text-neutral-300">
                        {DESIGNED_FOR.iter().map(|item| view! {
                            <div class="flex gap-2">
                                <span class="mt-0.5 text-yellow-400" aria-hidden="true">"✓"</span>
                                <span>{*item}</span>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="mt-5 flex flex-col gap-2">
                        <LinkButton href="#/pricing">"See pricing"</LinkButton>
                        <LinkButton href="#/faq" variant=ButtonVariant::Ghost>
                            "Read FAQs"
                        </LinkButton>
                    </div>
                </div>
            </div>
        </section>
    }
}
