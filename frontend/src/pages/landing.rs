use yew::prelude::*;

use crate::components::{Ambient, Parallax, Reveal, Stagger};
use crate::config;
use crate::content::{
    self, AboutCard, ContactChannel, Icon, ServiceEntry, WorkflowStep, ABOUT, CONTACTS, SERVICES,
    WORKFLOW,
};
use crate::dom;
use crate::motion::{AmbientMotionSpec, Ease, ParticlePlacement, Pose, RevealSpec, VisualState};
use crate::navigation::Section;

const HERO_GLOW: usize = 0;
const CTA_GLOW: usize = 1;

fn scroll_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| dom::scroll_to(section))
}

fn open(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| dom::open_external(url))
}

fn heading_spec(dy: f64, delay: f64) -> RevealSpec {
    RevealSpec::rise(dy)
        .with_delay(delay)
        .with_duration(config::HEADING_DURATION)
}

fn glow() -> AmbientMotionSpec {
    AmbientMotionSpec::new(
        [
            Pose::REST.glowing(10.0, 0.5),
            Pose::REST.glowing(20.0, 0.8),
            Pose::REST.glowing(10.0, 0.5),
        ],
        2.0,
    )
}

fn particle_drift(cycle: f64) -> AmbientMotionSpec {
    AmbientMotionSpec::new(
        [
            Pose::at(0.0, 0.0),
            Pose::at(100.0, -100.0).scaled(1.5),
            Pose::at(0.0, 0.0),
        ],
        cycle,
    )
    .with_ease(Ease::Linear)
}

fn ring_spin() -> AmbientMotionSpec {
    AmbientMotionSpec::new([Pose::REST, Pose::REST.rotated(360.0)], 8.0).with_ease(Ease::Linear)
}

fn breathing(from: Pose, to: Pose, cycle: f64) -> AmbientMotionSpec {
    AmbientMotionSpec::new([from, to, from], cycle)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <ParticleField />
            <Hero />
            <About />
            <Services />
            <HowItWorks />
            <Contact />
            <CallToAction />
            <Footer />
            <style>{ STYLES }</style>
        </div>
    }
}

#[function_component(ParticleField)]
fn particle_field() -> Html {
    let placements = ParticlePlacement::field(config::PARTICLE_SEED, config::PARTICLE_COUNT);

    html! {
        <div class="particle-field">
            { for placements.into_iter().enumerate().map(|(i, p)| html! {
                <Ambient
                    class="particle"
                    style={format!("left: {:.2}%; top: {:.2}%;", p.left, p.top)}
                    spec={particle_drift(p.cycle_duration)}
                    instance={i}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
    #[prop_or_default]
    intro: Option<AttrValue>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal spec={heading_spec(50.0, 0.0)} class="section-heading">
            <h2 class="gradient-text">{ props.title.clone() }</h2>
            <Reveal
                spec={RevealSpec::underline()
                    .with_delay(config::UNDERLINE_DELAY)
                    .with_duration(config::HEADING_DURATION)}
                class="heading-underline"
            />
            if let Some(intro) = props.intro.clone() {
                <p class="section-intro">{ intro }</p>
            }
        </Reveal>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <Parallax binding={config::HERO_PARALLAX} class="hero-decor">
                <div class="blob blob-top" />
                <div class="blob blob-bottom" />
            </Parallax>
            <div class="hero-content">
                <Reveal spec={RevealSpec::scale_in(0.5).with_duration(config::HEADING_DURATION).on_mount()}>
                    <Reveal spec={heading_spec(50.0, 0.2).on_mount()}>
                        <Ambient spec={glow()} instance={HERO_GLOW} class="glow-text">
                            <h1>{ content::HERO_NAME }</h1>
                        </Ambient>
                    </Reveal>
                    <Reveal spec={heading_spec(30.0, 0.4).on_mount()}>
                        <p class="hero-role">{ content::HERO_ROLE }</p>
                    </Reveal>
                    <Reveal spec={heading_spec(30.0, 0.6).on_mount()}>
                        <p class="hero-pitch">{ content::HERO_PITCH }</p>
                    </Reveal>
                </Reveal>
                <Reveal spec={heading_spec(50.0, 0.8).on_mount()} class="hero-actions">
                    <button class="btn btn-light" onclick={scroll_to(Section::Contact)}>
                        { Icon::Zap.glyph() }{ " Start Your Project" }
                    </button>
                    <button class="btn btn-outline" onclick={scroll_to(Section::About)}>
                        { "Learn More" }
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

fn about_card(card: &AboutCard) -> Html {
    html! {
        <div class="card">
            <h3 class="card-title">
                <span class="card-icon">{ card.icon.glyph() }</span>
                { card.title }
            </h3>
            <p class="card-body">{ card.body }</p>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="page-section">
            <div class="container">
                <SectionHeading title="About Me" />
                <Stagger
                    specs={vec![RevealSpec::fade_in_left(), RevealSpec::fade_in_right()]}
                    interval={config::CARD_STAGGER}
                    class="grid grid-2"
                >
                    { for ABOUT.iter().map(about_card) }
                </Stagger>
            </div>
        </section>
    }
}

fn service_card(service: &ServiceEntry) -> Html {
    html! {
        <div class="card service-card">
            <div class="icon-badge" style={service.accent.background()}>
                { service.icon.glyph() }
            </div>
            <h3>{ service.label }</h3>
            <p>{ service.description }</p>
        </div>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="page-section tinted">
            <div class="container">
                <SectionHeading title="Services I Broker" intro={content::SERVICES_INTRO} />
                <Stagger interval={config::CARD_STAGGER} class="grid grid-3">
                    { for SERVICES.iter().map(service_card) }
                </Stagger>
            </div>
        </section>
    }
}

fn step_card(index: usize, step: &WorkflowStep) -> Html {
    html! {
        <div class="step">
            <div class="step-badge" style={step.accent.background()}>
                <span class="step-number">{ step.step.to_string() }</span>
                <Ambient spec={ring_spin()} instance={index} class="step-ring" />
            </div>
            <div class="card step-card">
                <div class="step-icon">{ step.icon.glyph() }</div>
                <h3>{ step.label }</h3>
                <p>{ step.description }</p>
            </div>
        </div>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id={Section::HowItWorks.id()} class="page-section">
            <div class="container">
                <SectionHeading title="How It Works" intro={content::WORKFLOW_INTRO} />
                <Stagger interval={config::STEP_STAGGER} class="grid grid-4">
                    { for WORKFLOW.iter().enumerate().map(|(i, step)| step_card(i, step)) }
                </Stagger>
            </div>
        </section>
    }
}

fn contact_card(channel: &ContactChannel) -> Html {
    html! {
        <div class="card contact-card">
            <div class="icon-badge round" style={channel.accent.background()}>
                { channel.icon.glyph() }
            </div>
            <h3>{ channel.label }</h3>
            <p>{ channel.handle }</p>
            <button class="btn btn-primary" style={channel.accent.background()} onclick={open(channel.url)}>
                { channel.action }
            </button>
        </div>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="page-section tinted">
            <div class="container">
                <SectionHeading title="Let's Work Together" intro={content::CONTACT_INTRO} />
                <Stagger
                    interval={config::CARD_STAGGER}
                    base_delay={config::CARD_STAGGER}
                    class="grid grid-3 narrow"
                >
                    { for CONTACTS.iter().map(contact_card) }
                </Stagger>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    let dim = Pose::REST.faded(0.1);
    let bright = Pose::REST.scaled(1.5).faded(0.3);

    html! {
        <section class="cta">
            <Parallax binding={config::CTA_PARALLAX} class="cta-decor">
                <Ambient spec={breathing(dim, bright, 4.0)} instance={0} class="blob blob-left" />
                <Ambient spec={breathing(bright, dim, 3.0)} instance={1} class="blob blob-right" />
            </Parallax>
            <div class="container cta-content">
                <Reveal spec={heading_spec(50.0, 0.0)}>
                    <Ambient spec={glow()} instance={CTA_GLOW} class="glow-text">
                        <h2>{ content::CTA_HEADLINE }</h2>
                    </Ambient>
                </Reveal>
                <Reveal spec={heading_spec(30.0, 0.3).with_target(VisualState::SETTLED.with_opacity(0.9))}>
                    <p class="cta-pitch">{ content::CTA_PITCH }</p>
                </Reveal>
                <Reveal spec={heading_spec(30.0, 0.6)}>
                    <button class="btn btn-light" onclick={open(content::WHATSAPP_URL)}>
                        { Icon::Sparkles.glyph() }{ " Contact Me Now" }
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <Reveal spec={RevealSpec::fade().with_duration(config::HEADING_DURATION)}>
                <p>{ content::COPYRIGHT }</p>
            </Reveal>
        </footer>
    }
}

const STYLES: &str = r#"
    .landing-page {
        position: relative;
        overflow-x: hidden;
        min-height: 100vh;
        background: #ffffff;
        color: #1f2937;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .page-section {
        position: relative;
        padding: 5rem 0;
    }
    .page-section.tinted {
        background: linear-gradient(135deg, #f8fafc, #eef2ff);
    }
    .particle-field {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .particle {
        position: absolute;
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: rgba(99, 102, 241, 0.2);
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: linear-gradient(135deg, #2563eb, #7c3aed, #db2777);
        color: #fff;
        text-align: center;
    }
    .hero-decor, .cta-decor {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .blob {
        position: absolute;
        border-radius: 50%;
        filter: blur(48px);
        background: #fff;
    }
    .hero .blob {
        width: 18rem;
        height: 18rem;
        opacity: 0.1;
    }
    .blob-top { top: 25%; left: 25%; }
    .blob-bottom { bottom: 25%; right: 25%; background: #c084fc; }
    .cta .blob { width: 16rem; height: 16rem; }
    .blob-left { top: 0; left: 0; }
    .blob-right { bottom: 0; right: 0; }
    .hero-content {
        position: relative;
        z-index: 1;
        padding: 0 1rem;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 6vw, 4.5rem);
        font-weight: 800;
        margin: 0 0 1.5rem;
    }
    .hero-role {
        font-size: clamp(1.25rem, 3vw, 1.875rem);
        margin: 0 0 1rem;
        opacity: 0.9;
    }
    .hero-pitch {
        font-size: 1.125rem;
        max-width: 48rem;
        margin: 0 auto 2rem;
        opacity: 0.8;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .btn {
        border: none;
        border-radius: 0.5rem;
        padding: 0.85rem 2rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
    }
    .btn:hover { transform: scale(1.05); }
    .btn:active { transform: scale(0.95); }
    .btn-light {
        background: #fff;
        color: #2563eb;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
    }
    .btn-outline {
        background: transparent;
        color: #fff;
        border: 2px solid #fff;
    }
    .btn-outline:hover { background: #fff; color: #2563eb; }
    .btn-primary { color: #fff; width: 100%; }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .gradient-text {
        font-size: clamp(2rem, 4vw, 3rem);
        font-weight: 800;
        margin: 0 0 1rem;
        background: linear-gradient(to right, #2563eb, #7c3aed);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .heading-underline {
        width: 6rem;
        height: 4px;
        margin: 0 auto;
        border-radius: 2px;
        background: linear-gradient(to right, #2563eb, #7c3aed);
    }
    .section-intro {
        max-width: 42rem;
        margin: 1.5rem auto 0;
        color: #4b5563;
        font-size: 1.125rem;
    }
    .grid {
        display: grid;
        gap: 2rem;
    }
    .grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
    .grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
    .grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
    .grid.narrow { max-width: 64rem; margin: 0 auto; }
    .card {
        height: 100%;
        box-sizing: border-box;
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .card:hover {
        transform: translateY(-10px);
        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.15);
    }
    .card-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin: 0 0 1rem;
        font-size: 1.5rem;
    }
    .card-body { color: #4b5563; line-height: 1.7; margin: 0; }
    .service-card, .contact-card, .step { text-align: center; }
    .service-card h3, .contact-card h3, .step-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
    .service-card p, .contact-card p, .step-card p { color: #4b5563; margin: 0 0 1.5rem; }
    .icon-badge {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1.5rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        transition: transform 0.5s ease;
    }
    .icon-badge.round { border-radius: 50%; width: 5rem; height: 5rem; }
    .card:hover .icon-badge { transform: rotate(360deg); }
    .step-badge {
        position: relative;
        width: 5rem;
        height: 5rem;
        margin: 0 auto 1.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
    }
    .step-ring {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        border: 4px solid rgba(255, 255, 255, 0.3);
        border-top-color: rgba(255, 255, 255, 0.9);
        box-sizing: border-box;
    }
    .step-icon { font-size: 2rem; margin-bottom: 1rem; }
    .cta {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
        background: linear-gradient(to right, #2563eb, #7c3aed);
        color: #fff;
        text-align: center;
    }
    .cta-content { position: relative; z-index: 1; }
    .cta h2 { font-size: clamp(2rem, 4vw, 3rem); font-weight: 800; margin: 0 0 1.5rem; }
    .cta-pitch { font-size: 1.25rem; max-width: 42rem; margin: 0 auto 2rem; }
    .footer {
        padding: 2rem 1rem;
        background: #111827;
        color: #9ca3af;
        text-align: center;
    }
    .footer p { margin: 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_and_cta_glows_pulse_out_of_step() {
        let hero = glow().for_instance(HERO_GLOW);
        let cta = glow().for_instance(CTA_GLOW);
        assert_ne!(hero.phase_offset, cta.phase_offset);
        for t in [0.37, 1.1, 5.5] {
            assert_ne!(hero.sample(t).glow, cta.sample(t).glow, "t = {t}");
        }
    }

    #[test]
    fn sections_scroll_flush_with_the_viewport_top() {
        assert!(!STYLES.contains("scroll-margin"));
        assert!(!STYLES.contains("scroll-padding"));
    }
}
