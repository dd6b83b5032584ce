//! Testimonials Page
//!
//! Six member clips from the registry, member-win quote cards, and the
//! submit-a-testimonial prompt.

use leptos::*;

use crate::components::{ButtonVariant, LinkButton, SectionTitle, YouTubeEmbed};
use crate::config;

/// Testimonials page component
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="Testimonials"
                title="Proof, not promises"
                desc="Six member videos. Real wins, recorded by the people who got them."
            />

            <section class="grid gap-4 lg:grid-cols-3">
                {config::TESTIMONIAL_CLIPS.iter().map(|clip| view! {
                    <div class="rounded-[28px] border border-white/10 bg-white/5 p-5">
                        <div class="text-sm font-semibold text-white">{clip.name}</div>
                        <div class="mt-1 text-xs text-neutral-400">{clip.note}</div>
                        <div class="mt-4">
                            <YouTubeEmbed
                                video_id=clip.video_id
                                title=format!("Testimonial - {}", clip.name)
                            />
                        </div>
                    </div>
                }).collect_view()}
            </section>

            <MemberWins />
        </div>
    }
}

#[component]
fn MemberWins() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-2">
                <div>
                    <div class="text-2xl font-semibold">"Member wins"</div>
                    <div class="mt-3 space-y-3 text-sm text-neutral-300">
                        <WinCard
                            quote="This course paid for itself in one booking."
                            detail="Stayed in an $800/night suite for a fraction using the hotel strategy."
                        />
                        <WinCard
                            quote="Status stacking changed my travel life."
                            detail="Upgraded rental status across brands and started consistently driving premium."
                        />
                    </div>
                </div>

                <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-6">
                    <div class="text-sm font-semibold">"Want your result featured?"</div>
                    <p class="mt-2 text-sm text-neutral-400">
                        "After your first win, record a short clip and submit it. Real proof \
                         compounds trust."
                    </p>
                    <div class="mt-5 flex gap-3">
                        <LinkButton href="#/contact" variant=ButtonVariant::Ghost>
                            "Submit a testimonial"
                        </LinkButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WinCard(quote: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
            <div class="flex items-start gap-3">
                <span class="mt-0.5 text-yellow-400" aria-hidden="true">"❝"</span>
                <div>
                    <div class="font-semibold">{format!("\u{201c}{}\u{201d}", quote)}</div>
                    <div class="mt-1 text-neutral-300">{detail}</div>
                </div>
            </div>
        </div>
    }
}
