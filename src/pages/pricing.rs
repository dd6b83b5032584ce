//! Pricing Page
//!
//! Three tier cards. Checkout buttons resolve their destination once at
//! render time: a configured Stripe link renders verbatim, anything else
//! routes to the contact page with the enroll/apply label.

use leptos::*;

use crate::components::{ButtonVariant, LinkButton, SectionTitle};
use crate::config;
use crate::pages::Page;

/// Pricing page component
#[component]
pub fn Pricing() -> impl IntoView {
    let hotel = config::resolve_external(config::CHECKOUT.hotel_hack, Page::Contact);
    let full = config::resolve_external(config::CHECKOUT.full_course, Page::Contact);

    let hotel_label = if hotel.is_external() { "Checkout" } else { "Enroll" };
    let full_label = if full.is_external() { "Checkout" } else { "Apply / Buy" };

    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="Pricing"
                title="Choose your level of access"
                desc="Learn the system, or have it executed for you."
            />

            <section class="grid gap-4 lg:grid-cols-3">
                <PricingCard
                    title="Hotel Hack Only"
                    price="$599"
                    subtitle="Hotels only. Fast ROI."
                    bullets=&[
                        "Hotel strategy module",
                        "Rate and status frameworks",
                        "Quick wins checklist",
                        "Digital education. Delivered immediately. Final sale.",
                    ]
                    cta_label=hotel_label
                    cta_href=hotel.href()
                />

                <PricingCard
                    title="Full Course"
                    price="$5,000"
                    subtitle="Full program and members portal. Founder cohort: limited allocation. Details at checkout."
                    highlight=true
                    bullets=&[
                        "Full masterclass (all modules)",
                        "Members portal and private community",
                        "Education across hotels, flights, private aviation pathways, exotics, sourcing, and funding",
                        "Access frameworks built from real concierge execution",
                    ]
                    cta_label=full_label
                    cta_href=full.href()
                />

                <PricingCard
                    title="Concierge, Done For You"
                    price="$25,000"
                    subtitle="Application only. No refunds."
                    bullets=&[
                        "Done for you execution",
                        "Direct line to Kris and team, 24/7",
                        "Private strategy sessions",
                        "Priority scheduling",
                    ]
                    cta_label="Request application"
                    cta_href=Page::Contact.href()
                />
            </section>

            <WhyItWorks />

            <section class="text-xs text-neutral-500">
                "Full Course includes a 30 Day Action Guarantee. Concierge is application \
                 only and non refundable. Digital education is delivered immediately after \
                 purchase and is considered final."
            </section>
        </div>
    }
}

#[component]
fn PricingCard(
    title: &'static str,
    price: &'static str,
    subtitle: &'static str,
    bullets: &'static [&'static str],
    cta_label: &'static str,
    #[prop(into)] cta_href: String,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let card_class = if highlight {
        "rounded-[28px] border border-yellow-500/40 bg-yellow-500/10 p-6"
    } else {
        "rounded-[28px] border border-white/10 bg-white/5 p-6"
    };

    view! {
        <div class=card_class>
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <div class="text-sm font-semibold">{title}</div>
                    <div class="mt-1 text-xs text-neutral-400">{subtitle}</div>
                </div>
                {highlight.then(|| view! {
                    <span class="rounded-2xl bg-yellow-500 px-3 py-1 text-xs font-semibold text-neutral-950 whitespace-nowrap">
                        "Best value"
                    </span>
                })}
            </div>
            <div class="mt-5 text-3xl font-semibold tracking-tight whitespace-nowrap">{price}</div>
            <ul class="mt-4 space-y-2 text-sm text-neutral-300">
                {bullets.iter().map(|bullet| view! {
                    <li class="flex gap-2">
                        <span class="mt-1 h-1.5 w-1.5 rounded-full bg-yellow-400 shrink-0" />
                        <span>{*bullet}</span>
                    </li>
                }).collect_view()}
            </ul>
            <div class="mt-6">
                <LinkButton href=cta_href>{cta_label}</LinkButton>
            </div>
        </div>
    }
}

#[component]
fn WhyItWorks() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="text-2xl font-semibold">"Why the system works"</div>
                    <p class="mt-3 text-neutral-300">
                        "The Full Course teaches a repeatable framework for luxury outcomes \
                         across hotels, flights, points, private aviation pathways, elite \
                         rentals, luxury sourcing, and business leverage. Concierge is a \
                         separate, application only service where we execute on your behalf \
                         using our position and relationships. You simply approve."
                    </p>
                    <div class="mt-4 text-sm text-neutral-300">
                        "Clear education in the course. Clean execution in Concierge."
                    </div>
                </div>

                <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                    <div class="text-sm font-semibold">"Clear distinction"</div>
                    <div class="mt-3 space-y-2 text-sm text-neutral-300">
                        <div class="flex gap-2">
                            <span class="mt-0.5 text-yellow-400" aria-hidden="true">"✓"</span>
                            <span>"Full Course teaches you the system and how access works."</span>
                        </div>
                        <div class="flex gap-2">
                            <span class="mt-0.5 text-yellow-400" aria-hidden="true">"✓"</span>
                            <span>
                                "Concierge executes using our position and relationships. \
                                 You simply approve."
                            </span>
                        </div>
                    </div>
                    <div class="mt-5">
                        <LinkButton href="#/contact" variant=ButtonVariant::Ghost>
                            "Ask a question"
                        </LinkButton>
                    </div>
                </div>
            </div>
        </section>
    }
}
