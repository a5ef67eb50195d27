//! Landing page shell: hero, "How It Works", waitlist form.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::how_it_works;

pub fn render() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "MrMorris — Autonomous Marketing" }
                meta name="description" content="MrMorris plans, launches and optimizes your marketing campaigns autonomously. Join the waitlist.";
                style { (PreEscaped(LANDING_CSS)) }
                noscript { style { ".reveal { opacity: 1; }" } }
            }
            body {
                main {
                    (hero())
                    (how_it_works::render())
                    (waitlist_form())
                }
                script { (PreEscaped(LANDING_JS)) }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section class="hero" {
            div class="container reveal reveal-up" {
                h1 class="hero-title" {
                    "Your marketing team, "
                    span class="gradient-text" { "on autopilot" }
                }
                p class="hero-subtitle" {
                    "Set a goal. MrMorris builds the strategy, runs the campaigns and keeps optimizing."
                }
                a href="#waitlist" class="btn-primary" { "Join the waitlist" }
            }
        }
    }
}

fn waitlist_form() -> Markup {
    html! {
        section id="waitlist" class="waitlist" {
            div class="container reveal reveal-up" {
                h2 { "Get early access" }
                form id="waitlist-form" class="waitlist-form" novalidate {
                    input type="email" name="email" placeholder="you@company.com" required autocomplete="email";
                    input type="text" name="name" placeholder="Name (optional)" maxlength="100" autocomplete="name";
                    button type="submit" class="btn-primary" { "Join the waitlist" }
                }
                p id="waitlist-message" class="waitlist-message" role="status" {}
            }
        }
    }
}

const LANDING_CSS: &str = r#"
:root { --primary: #eb5160; --ink: #071013; --muted: #6b7280; --card: #ffffff; --border: #e5e7eb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; color: var(--ink); background: #fafafa; }
.container { max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; }
.gradient-text { background: linear-gradient(to right, #eb5160, #b7999c); -webkit-background-clip: text; background-clip: text; color: transparent; }
.btn-primary { display: inline-block; padding: .75rem 1.5rem; border: 0; border-radius: .5rem; background: var(--primary); color: #fff; font-weight: 600; text-decoration: none; cursor: pointer; }
.hero { padding: 8rem 0 6rem; text-align: center; }
.hero-title { font-size: clamp(2.25rem, 6vw, 4rem); margin: 0 0 1rem; }
.hero-subtitle { font-size: 1.25rem; color: var(--muted); margin: 0 auto 2rem; max-width: 40rem; }

.how-it-works { padding: 6rem 0; background: rgba(229, 231, 235, .3); }
.hiw-header { margin-bottom: 4rem; text-align: center; }
.hiw-title { font-size: clamp(1.875rem, 5vw, 3rem); font-weight: 700; margin: 0 0 1rem; }
.hiw-subtitle { max-width: 48rem; margin: 0 auto; font-size: 1.125rem; color: var(--muted); }
.hiw-steps { position: relative; max-width: 64rem; margin: 0 auto; }
.hiw-step { position: relative; display: flex; flex-direction: column; gap: 2rem; margin-bottom: 3rem; }
.hiw-connector { position: absolute; left: 3.5rem; top: 8rem; width: 2px; height: 6rem; background: linear-gradient(to bottom, var(--primary), transparent); }
.hiw-number { flex-shrink: 0; display: flex; align-items: center; justify-content: center; width: 7rem; height: 7rem; border-radius: 9999px; border: 4px solid rgba(235, 81, 96, .2); background: linear-gradient(to bottom right, #071013, #eb5160); }
.hiw-number span { font-size: 1.875rem; font-weight: 700; color: #fff; }
.hiw-arrow { display: none; flex-shrink: 0; color: var(--primary); }
.hiw-card { flex: 1; padding: 1.5rem; border: 2px solid var(--border); border-radius: .75rem; background: var(--card); box-shadow: 0 10px 15px -3px rgba(0, 0, 0, .1); }
.hiw-card h3 { margin: 0 0 .75rem; font-size: 1.5rem; }
.hiw-card p { margin: 0; color: var(--muted); }
.hiw-icon { display: flex; align-items: center; justify-content: center; width: 3rem; height: 3rem; margin-bottom: 1rem; border-radius: .5rem; background: rgba(235, 81, 96, .1); color: var(--primary); }
.icon { width: 1.5rem; height: 1.5rem; }
.icon-lg { width: 2rem; height: 2rem; }
@media (min-width: 768px) {
  .hiw-step { flex-direction: row; align-items: center; }
  .hiw-connector { left: 72px; top: 5rem; }
  .hiw-arrow { display: block; }
}

.waitlist { padding: 6rem 0; text-align: center; }
.waitlist-form { display: flex; flex-wrap: wrap; gap: .75rem; justify-content: center; }
.waitlist-form input { padding: .75rem 1rem; border: 1px solid var(--border); border-radius: .5rem; font-size: 1rem; min-width: 16rem; }
.waitlist-message { min-height: 1.5rem; color: var(--muted); }
.waitlist-message.error { color: var(--primary); }

.reveal { opacity: 0; }
.reveal.in-view { animation-duration: .5s; animation-timing-function: ease-out; animation-fill-mode: both; }
.reveal-up.in-view { animation-name: fade-up; }
.reveal-left.in-view { animation-name: slide-in-left; }
@keyframes fade-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes slide-in-left { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: none; } }
@media (prefers-reduced-motion: reduce) {
  .reveal { opacity: 1; }
  .reveal.in-view { animation: none; }
}
"#;

const LANDING_JS: &str = r#"
(function () {
  var targets = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {
    targets.forEach(function (el) { el.classList.add('in-view'); });
  } else {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          entry.target.classList.add('in-view');
          observer.unobserve(entry.target);
        }
      });
    });
    targets.forEach(function (el) { observer.observe(el); });
  }

  var form = document.getElementById('waitlist-form');
  var message = document.getElementById('waitlist-message');
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var data = new FormData(form);
    var payload = { email: data.get('email') };
    if (data.get('name')) { payload.name = data.get('name'); }
    fetch('/api/waitlist', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function (res) { return res.json().then(function (body) { return { ok: res.ok, body: body }; }); })
      .then(function (result) {
        message.classList.toggle('error', !result.ok);
        message.textContent = result.ok ? result.body.message : result.body.error;
        if (result.ok) { form.reset(); }
      })
      .catch(function () {
        message.classList.add('error');
        message.textContent = 'Failed to join waitlist. Please try again.';
      });
  });
})();
"#;
