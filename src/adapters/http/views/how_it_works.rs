//! "How It Works" landing section.
//!
//! Pure markup over static data. The reveal animations are plain CSS
//! (`fade-up` for the header, `slide-in-left` for each step) triggered once
//! by the page script when an element first scrolls into view.

use maud::{Markup, html};

/// Delay added per step so the cards cascade in.
pub const STEP_STAGGER_MS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Goal,
    Cog,
    TrendingUp,
    ArrowRight,
}

impl Icon {
    /// Stroke paths on a 24x24 grid (lucide outlines).
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Goal => &[
                "M12 13V2l8 4-8 4",
                "M20.561 10.222a9 9 0 1 1-12.55-5.29",
                "M8.002 9.997a5 5 0 1 0 8.9 2.02",
            ],
            Icon::Cog => &[
                "M12 20a8 8 0 1 0 0-16 8 8 0 0 0 0 16Z",
                "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z",
                "M12 2v2",
                "M12 22v-2",
                "m17 20.66-1-1.73",
                "M11 10.27 7 3.34",
                "m20.66 17-1.73-1",
                "m3.34 7 1.73 1",
                "M14 12h8",
                "M2 12h2",
                "m20.66 7-1.73 1",
                "m3.34 17 1.73-1",
                "m17 3.34-1 1.73",
                "m11 13.73-4 6.93",
            ],
            Icon::TrendingUp => &["M16 7h6v6", "m22 7-8.5 8.5-5-5L2 17"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        }
    }

    pub fn render(self, class: &str) -> Markup {
        html! {
            svg class=(class) xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
                @for d in self.paths() {
                    path d=(d) {}
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct Step {
    pub icon: Icon,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STEPS: [Step; 3] = [
    Step {
        icon: Icon::Goal,
        number: "01",
        title: "Set Your Goals",
        description: "Tell MrMorris what you want to achieve: \"Increase demo bookings by 30% this quarter\" or \"Generate 500 qualified leads.\" It asks clarifying questions to understand constraints and priorities.",
    },
    Step {
        icon: Icon::Cog,
        number: "02",
        title: "MrMorris Strategizes & Executes",
        description: "The system creates a complete multi-channel strategy, allocates budget, defines KPIs, builds campaigns, creates content, and launches everything—all autonomously. You approve once, it handles the rest.",
    },
    Step {
        icon: Icon::TrendingUp,
        number: "03",
        title: "Continuous Optimization & Learning",
        description: "MrMorris monitors performance 24/7, adjusts bids, reallocates budget, tests new variations, and scales winners in real-time. It learns from every campaign and gets smarter over time.",
    },
];

pub fn render() -> Markup {
    html! {
        section id="how-it-works" class="how-it-works" {
            div class="container" {
                div class="hiw-header reveal reveal-up" {
                    h2 class="hiw-title" {
                        "How "
                        span class="gradient-text" { "It Works" }
                    }
                    p class="hiw-subtitle" {
                        "From goal-setting to execution to optimization—MrMorris handles it all autonomously"
                    }
                }

                div class="hiw-steps" {
                    @for (index, step) in STEPS.iter().enumerate() {
                        (render_step(index, step))
                    }
                }
            }
        }
    }
}

fn render_step(index: usize, step: &Step) -> Markup {
    let has_next = index + 1 < STEPS.len();
    let delay = format!("animation-delay: {}ms", index * STEP_STAGGER_MS);
    html! {
        div class="hiw-step reveal reveal-left" style=(delay) {
            @if has_next {
                div class="hiw-connector" {}
            }

            div class="hiw-number" {
                span { (step.number) }
            }

            div class="hiw-arrow" {
                (Icon::ArrowRight.render("icon icon-lg"))
            }

            div class="hiw-card" {
                div class="hiw-icon" {
                    (step.icon.render("icon"))
                }
                h3 { (step.title) }
                p { (step.description) }
            }
        }
    }
}
