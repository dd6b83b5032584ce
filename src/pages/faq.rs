//! FAQ Page

use leptos::*;

use crate::components::SectionTitle;

const FAQS: [(&str, &str); 6] = [
    (
        "Is the private aviation advantage real?",
        "Yes. The course explains how private aviation access works and what creates \
         truly affordable outcomes. Concierge clients benefit from our position and \
         relationships, which can remove traditional gatekeeping such as large deposits \
         and annual membership fees. Availability and pricing depend on route, operator, \
         and scheduling windows.",
    ),
    (
        "What is the difference between Full Course and Concierge?",
        "Full Course teaches you the system and how access works across hotels, flights, \
         private aviation pathways, exotics, sourcing, and funding. Concierge is \
         application only and we execute for you with direct access to Kris and team.",
    ),
    (
        "What does the Hotel Hack Only tier include?",
        "Hotels only. This tier does not include the members portal, private aviation \
         pathways, or done for you services.",
    ),
    (
        "What does application only mean for Concierge?",
        "Concierge is application only to protect response time and outcomes. If \
         accepted, you receive done for you execution and direct access to Kris and \
         the team.",
    ),
    (
        "What if I don\u{2019}t see results?",
        "Complete the 7 Day Quick Wins Challenge and implement at least 3 strategies. \
         If you do not see meaningful savings or value within 30 days, we will provide \
         1 on 1 coaching to troubleshoot and optimize your approach.",
    ),
    (
        "Is this legal and ethical?",
        "We operate within policies and laws. The course teaches frameworks and best \
         practices, not shortcuts that risk reputations.",
    ),
];

/// FAQ page component
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="FAQ"
                title="Clear answers, no noise"
                desc="Clear answers, designed to help you decide quickly and confidently."
            />

            <section class="grid gap-4 lg:grid-cols-2">
                {FAQS.iter().map(|(question, answer)| view! {
                    <FaqCard question=*question answer=*answer />
                }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn FaqCard(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-[28px] border border-white/10 bg-white/5 p-6">
            <div class="text-sm font-semibold text-white">{question}</div>
            <div class="mt-2 text-sm text-neutral-300">{answer}</div>
        </div>
    }
}
