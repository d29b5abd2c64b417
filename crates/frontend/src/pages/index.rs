use crate::domain::a002_project::ui::list::ProjectList;
use crate::domain::a003_certificate::ui::list::CertificateList;
use crate::pages::Page;
use crate::shared::components::{SkillBar, StatCounter};
use crate::shared::dom;
use crate::shared::effects::{use_transition, FadeIn, Parallax, TypewriterText};
use crate::usecases::u001_contact_form::ContactForm;
use contracts::shared::effects::SkillLevel;
use leptos::prelude::*;

const CERTIFICATE_PREVIEW: usize = 3;

static SKILL_GROUPS: [(&str, &[(&str, u8)]); 3] = [
    ("Backend", &[("PHP / Laravel", 95), ("REST API Design", 90), ("MySQL", 85)]),
    ("Mobile", &[("Flutter / Dart", 90), ("Firebase", 80), ("State Management", 85)]),
    ("Frontend", &[("JavaScript", 85), ("HTML & CSS", 90), ("Vue.js", 75)]),
];

#[component]
pub fn IndexPage() -> impl IntoView {
    let transition = use_transition();

    let scroll_to = |id: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            dom::scroll_to_section(id);
        }
    };

    view! {
        <section id="home" class="hero">
            <Parallax index=0 class="hero-shape hero-shape--one"><span></span></Parallax>
            <Parallax index=1 class="hero-shape hero-shape--two"><span></span></Parallax>
            <div class="container hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-name gradient-text">"Alex Morgan"</h1>
                <h2 class="hero-role"><TypewriterText /></h2>
                <p class="hero-description">
                    "I build web and mobile products end to end, from API design to the last pixel."
                </p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-primary" on:click=scroll_to("projects")>"View Projects"</a>
                    <a href="#contact" class="btn btn-secondary" on:click=scroll_to("contact")>"Get In Touch"</a>
                </div>
            </div>
        </section>

        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title">"About " <span class="gradient-text">"Me"</span></h2>
                <FadeIn>
                    <p class="about-text">
                        "Five years of shipping Laravel backends, Flutter apps and the APIs between them."
                    </p>
                </FadeIn>
                <div class="stats">
                    <StatCounter target=50 label="Projects Completed" suffix="+" />
                    <StatCounter target=30 label="Happy Clients" suffix="+" />
                    <StatCounter target=5 label="Years Experience" />
                    <StatCounter target=12 label="Certificates" />
                </div>
            </div>
        </section>

        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title">"My " <span class="gradient-text">"Skills"</span></h2>
                <div class="skills-grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(group, skills)| view! {
                            <FadeIn class="skill-category">
                                <h3 class="skill-category-title">{*group}</h3>
                                {skills
                                    .iter()
                                    .map(|(name, level)| view! {
                                        <SkillBar name=*name level=SkillLevel::new(*level) />
                                    })
                                    .collect_view()}
                            </FadeIn>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title">"My " <span class="gradient-text">"Projects"</span></h2>
                <ProjectList />
            </div>
        </section>

        <section id="certificates" class="section certificates">
            <div class="container">
                <h2 class="section-title">"My " <span class="gradient-text">"Certificates"</span></h2>
                <CertificateList limit=CERTIFICATE_PREVIEW />
                <div class="section-cta">
                    <a
                        href=Page::Certificates.href()
                        class="btn btn-primary"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            transition.navigate(Page::Certificates.href().to_string());
                        }
                    >
                        "View All Certificates"
                    </a>
                </div>
            </div>
        </section>

        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">"Get In " <span class="gradient-text">"Touch"</span></h2>
                <FadeIn>
                    <ContactForm />
                </FadeIn>
            </div>
        </section>
    }
}
